//! Chart Viewer Widget
//! Central panel showing the price and volume chart cards.

use crate::charts::{ChartPlotter, ChartSpec};
use egui::{RichText, ScrollArea};

const CARD_SPACING: f32 = 15.0;

/// Holds the most recently rendered chart pair.
#[derive(Default)]
pub struct ChartViewer {
    charts: Option<(ChartSpec, ChartSpec)>,
}

impl ChartViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the displayed charts.
    pub fn set_charts(&mut self, charts: (ChartSpec, ChartSpec)) {
        self.charts = Some(charts);
    }

    pub fn clear(&mut self) {
        self.charts = None;
    }

    #[cfg(test)]
    fn charts(&self) -> Option<&(ChartSpec, ChartSpec)> {
        self.charts.as_ref()
    }

    /// Draw both charts, price first.
    pub fn show(&self, ui: &mut egui::Ui, chart_height: f32) {
        let Some((price, volume)) = &self.charts else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        };

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for spec in [price, volume] {
                    Self::draw_chart_card(ui, spec, chart_height);
                    ui.add_space(CARD_SPACING);
                }
            });
    }

    fn draw_chart_card(ui: &mut egui::Ui, spec: &ChartSpec, chart_height: f32) {
        egui::Frame::none()
            .rounding(8.0)
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ChartPlotter::draw_line_chart(ui, spec, chart_height);
            });
    }
}
