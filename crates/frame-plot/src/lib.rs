// File: crates/frame-plot/src/lib.rs
// Summary: Exporter library; turns a per-frame statistics CSV into one line chart PNG per metric.

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod table;

pub use config::{ExportConfig, DEFAULT_OUTPUT_PREFIX};
pub use error::ExportError;
pub use export::{build_chart, output_path, ChartExporter, FRAME_COLUMN, METRICS};
pub use table::Table;
