//! Charts module - Chart descriptions and rendering

pub mod figure;
mod plotter;

pub use figure::{render, ChartSpec, ValueFormat};
pub use plotter::ChartPlotter;
