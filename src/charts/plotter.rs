//! Chart Plotter Module
//! Draws a ChartSpec as an interactive line chart using egui_plot.

use crate::charts::{ChartSpec, ValueFormat};
use chrono::{Duration, NaiveDate};
use egui::{Color32, RichText};
use egui_plot::{Line, Plot, PlotPoints};

/// Draws chart descriptions with egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Line colour of a chart; unparseable hex falls back to grey.
    pub fn line_color(spec: &ChartSpec) -> Color32 {
        Color32::from_hex(spec.color).unwrap_or(Color32::GRAY)
    }

    /// Days since the Unix epoch, the plot's x coordinate.
    pub fn date_to_x(date: NaiveDate) -> f64 {
        (date - Self::epoch()).num_days() as f64
    }

    pub fn x_to_date(x: f64) -> NaiveDate {
        Self::epoch() + Duration::days(x.round() as i64)
    }

    fn epoch() -> NaiveDate {
        chrono::DateTime::<chrono::Utc>::UNIX_EPOCH.date_naive()
    }

    /// Draw title and line chart for one spec.
    pub fn draw_line_chart(ui: &mut egui::Ui, spec: &ChartSpec, height: f32) {
        ui.label(RichText::new(spec.title).size(16.0).strong());
        ui.add_space(4.0);

        let interactive = !spec.fixed_range;
        let format: ValueFormat = spec.value_format;

        Plot::new(spec.id)
            .height(height)
            .allow_zoom(interactive)
            .allow_drag(interactive)
            .allow_scroll(interactive)
            .allow_boxed_zoom(interactive)
            .allow_double_click_reset(interactive)
            .show_axes([true, true])
            .x_axis_formatter(|mark, _range| {
                Self::x_to_date(mark.value).format("%Y-%m-%d").to_string()
            })
            .y_axis_formatter(move |mark, _range| format.tick_label(mark.value))
            .label_formatter(move |_name, value| {
                format!(
                    "{}\n{}",
                    Self::x_to_date(value.x).format("%b %d, %Y"),
                    format.hover_label(value.y)
                )
            })
            .show(ui, |plot_ui| {
                if spec.is_empty() {
                    return;
                }

                let points: PlotPoints = spec
                    .points
                    .iter()
                    .map(|(date, y)| [Self::date_to_x(*date), *y])
                    .collect();

                plot_ui.line(
                    Line::new(points)
                        .color(Self::line_color(spec))
                        .width(2.0)
                        .name(spec.title),
                );
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::figure::{PRICE_CHART_ID, PRICE_CHART_TITLE};

    #[test]
    fn x_coordinates_round_trip_dates() {
        let d = NaiveDate::from_ymd_opt(2015, 1, 4).unwrap();
        assert_eq!(ChartPlotter::date_to_x(d), 16439.0);
        assert_eq!(ChartPlotter::x_to_date(16439.2), d);
    }

    #[test]
    fn line_color_parses_hex() {
        let spec = ChartSpec {
            id: PRICE_CHART_ID,
            title: PRICE_CHART_TITLE,
            points: Vec::new(),
            value_format: ValueFormat::Currency,
            color: "#17B897",
            fixed_range: true,
        };
        assert_eq!(ChartPlotter::line_color(&spec), Color32::from_rgb(0x17, 0xB8, 0x97));

        let spec = ChartSpec { color: "not a colour", ..spec };
        assert_eq!(ChartPlotter::line_color(&spec), Color32::GRAY);
    }
}
