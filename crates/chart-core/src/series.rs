// File: crates/chart-core/src/series.rs
// Summary: Line series model: ordered (x, y) points drawn in insertion order.

#[derive(Clone, Debug, Default)]
pub struct Series {
    /// Name of the plotted column. Metadata only: there is no legend to draw it in.
    pub label: String,
    pub data_xy: Vec<(f64, f64)>,
}

impl Series {
    pub fn with_data(label: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { label: label.into(), data_xy: data }
    }

    /// Zip two equal-length columns into points. Extra values in the longer slice are ignored.
    pub fn from_columns(label: impl Into<String>, xs: &[f64], ys: &[f64]) -> Self {
        let data = xs.iter().copied().zip(ys.iter().copied()).collect();
        Self::with_data(label, data)
    }

    /// Y values in insertion order.
    pub fn y_values(&self) -> Vec<f64> {
        self.data_xy.iter().map(|&(_, y)| y).collect()
    }

    /// Split into runs of consecutive finite points. Non-finite points break the line.
    pub fn finite_runs(&self) -> Vec<&[(f64, f64)]> {
        self.data_xy
            .split(|&(x, y)| !x.is_finite() || !y.is_finite())
            .filter(|run| !run.is_empty())
            .collect()
    }
}
