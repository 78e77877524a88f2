// File: crates/frame-plot/src/error.rs
// Summary: Exporter error taxonomy. Every variant is fatal to the run.

use std::path::PathBuf;

use chart_core::RenderError;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Source missing, unreadable, or not delimited text with a header row.
    #[error("failed to load CSV '{}'", path.display())]
    DataLoad {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A cell in a plotted column is not a number.
    #[error("column '{column}' row {row}: '{value}' is not a number")]
    NonNumeric { column: String, row: usize, value: String },

    #[error("missing required column '{column}'")]
    MissingColumn { column: String },

    #[error("failed to write '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to render chart for '{metric}'")]
    Render {
        metric: String,
        #[source]
        source: RenderError,
    },
}

impl ExportError {
    /// Loading-class failures: nothing has been written yet when these occur.
    pub fn is_data_load(&self) -> bool {
        matches!(self, ExportError::DataLoad { .. } | ExportError::NonNumeric { .. })
    }
}
