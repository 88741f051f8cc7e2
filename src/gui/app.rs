//! Customer Analytics Main Application
//! Header, filter menu, and chart cards; or the empty state when no data is loaded.

use crate::charts::render;
use crate::config::DashboardConfig;
use crate::data::{DataLoader, Dataset};
use crate::gui::{ChartViewer, FilterPanel, FilterPanelAction};
use egui::{Color32, RichText, TopBottomPanel};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use tracing::{error, info};

const HEADER_TITLE: &str = "Customer Analytics";
const HEADER_DESCRIPTION: &str =
    "Analyze the behavior of Customers and the transactions made between 2015 and 2018";

/// CSV loading result from background thread
enum LoadResult {
    Complete { path: PathBuf, dataset: Dataset },
    Error(String),
}

/// Main application window.
pub struct DashboardApp {
    config: DashboardConfig,
    dataset: Dataset,
    filter_panel: Option<FilterPanel>,
    chart_viewer: ChartViewer,
    status: String,

    // Async CSV loading from the empty state
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
}

impl DashboardApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: DashboardConfig,
        dataset: Dataset,
    ) -> Self {
        let mut app = Self {
            config,
            dataset: Dataset::empty(),
            filter_panel: None,
            chart_viewer: ChartViewer::new(),
            status: String::new(),
            load_rx: None,
            is_loading: false,
        };
        app.install_dataset(dataset);
        app
    }

    /// Swap in a dataset, reset the filters to their defaults, and draw the
    /// initial charts.
    fn install_dataset(&mut self, dataset: Dataset) {
        self.filter_panel = FilterPanel::new(&dataset, &self.config);
        self.dataset = dataset;
        self.chart_viewer.clear();
        self.refresh_charts();
    }

    /// Re-run the filter-and-render callback for the current selection.
    fn refresh_charts(&mut self) {
        if let Some(panel) = &self.filter_panel {
            self.chart_viewer
                .set_charts(render(&self.dataset, &panel.selection));
        }
    }

    /// Pick another CSV and load it in the background.
    fn handle_browse_csv(&mut self) {
        if self.is_loading {
            return;
        }

        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        else {
            return;
        };

        self.status = format!("Loading {}...", path.display());
        self.is_loading = true;

        let (tx, rx) = channel();
        self.load_rx = Some(rx);

        thread::spawn(move || {
            let result = match DataLoader::load(&path) {
                Ok(dataset) => LoadResult::Complete { path, dataset },
                Err(e) => LoadResult::Error(e.to_string()),
            };
            let _ = tx.send(result);
        });
    }

    /// Check for CSV loading results
    fn check_load_results(&mut self) {
        let Some(rx) = self.load_rx.take() else {
            return;
        };

        match rx.try_recv() {
            Ok(LoadResult::Complete { path, dataset }) => {
                self.is_loading = false;
                if dataset.is_empty() {
                    self.status = format!("No rows loaded from {}", path.display());
                } else {
                    info!(path = %path.display(), rows = dataset.len(), "Dashboard data replaced");
                    self.status = format!("Loaded {} rows", dataset.len());
                    self.config.data_path = path;
                    self.install_dataset(dataset);
                }
            }
            Ok(LoadResult::Error(message)) => {
                error!(error = %message, "Failed to load CSV");
                self.status = format!("Error: {}", message);
                self.is_loading = false;
            }
            Err(TryRecvError::Empty) => {
                self.load_rx = Some(rx);
            }
            Err(TryRecvError::Disconnected) => {
                self.status = "Error: loader thread stopped unexpectedly".to_string();
                self.is_loading = false;
            }
        }
    }

    fn show_header(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(10.0);
            ui.label(
                RichText::new(HEADER_TITLE)
                    .size(32.0)
                    .strong()
                    .color(Color32::WHITE),
            );
            ui.label(
                RichText::new(HEADER_DESCRIPTION)
                    .size(14.0)
                    .color(Color32::from_rgb(0xCF, 0xCF, 0xCF)),
            );
            ui.add_space(10.0);
        });
    }

    /// Degenerate state: no dashboard, just a way to pick a file.
    fn show_empty_state(&mut self, ui: &mut egui::Ui) {
        let file_name = self
            .config
            .data_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.config.data_path.display().to_string());

        ui.vertical_centered(|ui| {
            ui.add_space(80.0);
            ui.label(RichText::new("No Data").size(24.0).strong());
            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("No transaction data found in '{}'.", file_name))
                    .size(13.0)
                    .color(Color32::GRAY),
            );
            ui.add_space(15.0);

            ui.add_enabled_ui(!self.is_loading, |ui| {
                if ui.button(RichText::new("📂 Open CSV…").size(14.0)).clicked() {
                    self.handle_browse_csv();
                }
            });

            if !self.status.is_empty() {
                ui.add_space(8.0);
                let color = if self.status.starts_with("Error") {
                    Color32::from_rgb(220, 53, 69)
                } else {
                    Color32::GRAY
                };
                ui.label(RichText::new(&self.status).size(11.0).color(color));
            }
        });
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_load_results();
        if self.is_loading {
            ctx.request_repaint();
        }

        TopBottomPanel::top("header").show(ctx, |ui| {
            self.show_header(ui);
        });

        if self.filter_panel.is_none() {
            egui::CentralPanel::default().show(ctx, |ui| {
                self.show_empty_state(ui);
            });
            return;
        }

        // Filter menu
        TopBottomPanel::top("menu").show(ctx, |ui| {
            ui.add_space(8.0);
            let action = self
                .filter_panel
                .as_mut()
                .map(|panel| panel.show(ui))
                .unwrap_or(FilterPanelAction::None);
            ui.add_space(8.0);

            if action == FilterPanelAction::Changed {
                self.refresh_charts();
            }
        });

        // Charts
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui, self.config.chart_height);
        });
    }
}
