// File: crates/frame-plot/src/config.rs
// Summary: Explicit run configuration with documented defaults.

use std::path::PathBuf;

use chart_core::RenderOptions;

/// Prefix used for output files when none is given: `plot_min.png`, `plot_mean.png`, ...
pub const DEFAULT_OUTPUT_PREFIX: &str = "plot";

#[derive(Clone, Debug)]
pub struct ExportConfig {
    /// CSV with a header row containing `frame` and every metric column.
    pub source: PathBuf,
    /// Used verbatim: may contain a directory part, which must already exist.
    pub output_prefix: String,
    pub render: RenderOptions,
}

impl ExportConfig {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output_prefix: DEFAULT_OUTPUT_PREFIX.to_string(),
            render: RenderOptions::default(),
        }
    }

    pub fn with_output_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.output_prefix = prefix.into();
        self
    }

    pub fn with_render_options(mut self, render: RenderOptions) -> Self {
        self.render = render;
        self
    }
}
