//! Dashboard Configuration
//! Data location, default filter values, and window geometry.

use std::path::PathBuf;

/// Bundled data file, relative to the crate root.
pub const DEFAULT_DATA_FILE: &str = "data/custData.csv";

pub const PRICE_COLOR: &str = "#17B897";
pub const VOLUME_COLOR: &str = "#E12D39";

/// Settings the app is started with.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub default_region: String,
    pub default_customer_type: String,
    pub window_title: String,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    pub chart_height: f32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_DATA_FILE),
            default_region: "Albany".to_string(),
            default_customer_type: "organic".to_string(),
            window_title: "Customer Analytics".to_string(),
            window_size: [1200.0, 900.0],
            min_window_size: [800.0, 600.0],
            chart_height: 280.0,
        }
    }
}
