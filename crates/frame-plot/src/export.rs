// File: crates/frame-plot/src/export.rs
// Summary: ChartExporter; one `frame` vs metric line chart per fixed metric, saved as PNG.

use std::path::PathBuf;

use chart_core::{Axis, Chart, RenderError, Series};
use tracing::{debug, info};

use crate::config::ExportConfig;
use crate::error::ExportError;
use crate::table::Table;

/// X column shared by every chart.
pub const FRAME_COLUMN: &str = "frame";

/// Metrics plotted against `frame`, in output order.
pub const METRICS: [&str; 8] = [
    "min",
    "lower_quartile",
    "median",
    "higher_quartile",
    "max",
    "mean",
    "center_x",
    "center_y",
];

/// Fraction of the data span left empty on each side of the plot.
const AXIS_MARGIN: f64 = 0.05;

/// `{prefix}_{metric}.png`, prefix taken verbatim.
pub fn output_path(prefix: &str, metric: &str) -> PathBuf {
    PathBuf::from(format!("{prefix}_{metric}.png"))
}

/// Build the chart for one metric: `frame` on x, the metric on y, points in row order.
pub fn build_chart(table: &Table, metric: &str) -> Result<Chart, ExportError> {
    // Presence first: a missing column wins over a bad cell in the other one.
    for column in [FRAME_COLUMN, metric] {
        if !table.has_column(column) {
            return Err(ExportError::MissingColumn { column: column.to_string() });
        }
    }
    let frames = table.numeric_column(FRAME_COLUMN)?;
    let values = table.numeric_column(metric)?;

    let mut chart = Chart::new().with_title(format!("{FRAME_COLUMN} vs {metric}"));
    chart.x_axis = Axis::new(FRAME_COLUMN, 0.0, 1.0);
    chart.y_axis = Axis::new(metric, 0.0, 1.0);
    chart.add_series(Series::from_columns(metric, &frames, &values));
    chart.autoscale_axes(AXIS_MARGIN);
    Ok(chart)
}

pub struct ChartExporter {
    config: ExportConfig,
}

impl ChartExporter {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Load the source table and write every metric chart.
    /// Returns the written paths in metric order.
    pub fn run(&self) -> Result<Vec<PathBuf>, ExportError> {
        let table = Table::from_path(&self.config.source)?;
        info!(
            source = %self.config.source.display(),
            rows = table.len(),
            "loaded frame statistics"
        );
        self.export_table(&table)
    }

    /// Write one PNG per metric. Stops at the first failure; files already written stay.
    pub fn export_table(&self, table: &Table) -> Result<Vec<PathBuf>, ExportError> {
        let mut written = Vec::with_capacity(METRICS.len());
        for metric in METRICS {
            let chart = build_chart(table, metric)?;
            let path = output_path(&self.config.output_prefix, metric);
            debug!(metric, path = %path.display(), "rendering chart");

            // The raster surface is owned by this call and dropped before the next metric.
            chart
                .render_to_png(&self.config.render, &path)
                .map_err(|err| match err {
                    RenderError::Io { path, source } => ExportError::Write { path, source },
                    source => ExportError::Render { metric: metric.to_string(), source },
                })?;

            info!(path = %path.display(), "wrote chart");
            written.push(path);
        }
        Ok(written)
    }
}
