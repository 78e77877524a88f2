// File: crates/frame-plot/src/cli.rs
// Summary: Command-line surface; maps flags onto ExportConfig.

use std::path::PathBuf;

use chart_core::{theme, RenderOptions};
use clap::{Parser, ValueHint};

use crate::config::{ExportConfig, DEFAULT_OUTPUT_PREFIX};

/// Render one line chart per metric from a per-frame statistics CSV.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the CSV file (header row with `frame` and the metric columns)
    #[arg(value_hint = ValueHint::FilePath)]
    pub filename: PathBuf,

    /// Prefix for output plot images: `<PREFIX>_<metric>.png`
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PREFIX)]
    pub output: String,

    /// Image width in pixels
    #[arg(long, default_value_t = chart_core::types::WIDTH)]
    pub width: i32,

    /// Image height in pixels
    #[arg(long, default_value_t = chart_core::types::HEIGHT)]
    pub height: i32,

    /// Colour theme (light, dark)
    #[arg(long, default_value = "light")]
    pub theme: String,

    /// Log progress (load, each chart written) to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn export_config(&self) -> ExportConfig {
        let render = RenderOptions {
            width: self.width.max(1),
            height: self.height.max(1),
            theme: theme::find(&self.theme),
            ..RenderOptions::default()
        };
        ExportConfig::new(self.filename.clone())
            .with_output_prefix(self.output.clone())
            .with_render_options(render)
    }
}
