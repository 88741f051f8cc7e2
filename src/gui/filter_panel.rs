//! Filter Panel Widget
//! Menu row with the region, type, and date range controls.

use crate::config::DashboardConfig;
use crate::data::{CustomerTypeOption, Dataset, FilterSelection};
use chrono::NaiveDate;
use egui::{ComboBox, RichText};

const COMBO_WIDTH: f32 = 170.0;
const DATE_LIST_HEIGHT: f32 = 300.0;

/// Dropdown options derived from the dataset plus the current selection.
pub struct FilterPanel {
    pub regions: Vec<String>,
    pub customer_types: Vec<CustomerTypeOption>,
    pub dates: Vec<NaiveDate>,
    pub selection: FilterSelection,
}

impl FilterPanel {
    /// Build the panel for a dataset. `None` when the dataset is empty, in
    /// which case there is nothing to filter.
    pub fn new(dataset: &Dataset, config: &DashboardConfig) -> Option<Self> {
        let selection = FilterSelection::initial(dataset, config)?;
        Some(Self {
            regions: dataset.regions(),
            customer_types: dataset.customer_types(),
            dates: dataset.dates(),
            selection,
        })
    }

    /// Label shown for the selected customer type.
    fn customer_type_label(&self) -> &str {
        self.customer_types
            .iter()
            .find(|t| t.value == self.selection.customer_type)
            .map(|t| t.label.as_str())
            .unwrap_or(self.selection.customer_type.as_str())
    }

    /// Draw the menu. Returns `Changed` when any filter value was picked.
    pub fn show(&mut self, ui: &mut egui::Ui) -> FilterPanelAction {
        let mut action = FilterPanelAction::None;

        ui.horizontal_top(|ui| {
            // ===== Region =====
            ui.vertical(|ui| {
                ui.label(RichText::new("Region").size(13.0).strong());
                ComboBox::from_id_salt("region-filter")
                    .width(COMBO_WIDTH)
                    .selected_text(&self.selection.region)
                    .show_ui(ui, |ui| {
                        for region in &self.regions {
                            if ui
                                .selectable_label(self.selection.region == *region, region)
                                .clicked()
                                && self.selection.region != *region
                            {
                                self.selection.region = region.clone();
                                action = FilterPanelAction::Changed;
                            }
                        }
                    });
            });

            ui.add_space(20.0);

            // ===== Type =====
            ui.vertical(|ui| {
                ui.label(RichText::new("Type").size(13.0).strong());
                let selected = self.customer_type_label().to_string();
                ComboBox::from_id_salt("type-filter")
                    .width(COMBO_WIDTH)
                    .selected_text(selected)
                    .show_ui(ui, |ui| {
                        for option in &self.customer_types {
                            let is_selected = self.selection.customer_type == option.value;
                            if ui.selectable_label(is_selected, &option.label).clicked()
                                && !is_selected
                            {
                                self.selection.customer_type = option.value.clone();
                                action = FilterPanelAction::Changed;
                            }
                        }
                    });
            });

            ui.add_space(20.0);

            // ===== Date Range =====
            ui.vertical(|ui| {
                ui.label(RichText::new("Date Range").size(13.0).strong());
                ui.horizontal(|ui| {
                    if Self::date_picker(
                        ui,
                        "date-range-start",
                        &self.dates,
                        &mut self.selection.start_date,
                    ) {
                        action = FilterPanelAction::Changed;
                    }
                    ui.label("→");
                    if Self::date_picker(
                        ui,
                        "date-range-end",
                        &self.dates,
                        &mut self.selection.end_date,
                    ) {
                        action = FilterPanelAction::Changed;
                    }
                });
            });
        });

        action
    }

    /// Combo box over the dataset's dates, so picks stay within its bounds.
    fn date_picker(
        ui: &mut egui::Ui,
        id: &str,
        dates: &[NaiveDate],
        value: &mut NaiveDate,
    ) -> bool {
        let mut changed = false;
        ComboBox::from_id_salt(id)
            .width(120.0)
            .height(DATE_LIST_HEIGHT)
            .selected_text(value.format("%b %d, %Y").to_string())
            .show_ui(ui, |ui| {
                for date in dates {
                    let label = date.format("%b %d, %Y").to_string();
                    if ui.selectable_label(*value == *date, label).clicked() && *value != *date {
                        *value = *date;
                        changed = true;
                    }
                }
            });
        changed
    }
}

/// Actions triggered by the filter panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterPanelAction {
    None,
    Changed,
}
