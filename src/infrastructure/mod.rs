//! Infrastructure layer - File input, configuration and image output

pub mod config;
pub mod glyph_backend;
pub mod loader;
pub mod renderer;

pub use config::{ChartConfig, Config};
pub use loader::{load_csv, read_records, RawRecord};
pub use renderer::{chart_title, render_chart, ImageFormat};
