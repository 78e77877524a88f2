// File: crates/chart-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Format a tick value with just enough decimals to tell neighbouring ticks apart.
pub fn format_tick(value: f64, step: f64) -> String {
    let step = step.abs();
    let decimals = if !step.is_finite() || step >= 1.0 || step == 0.0 {
        0
    } else {
        ((-step.log10()).ceil() as usize).min(6)
    };
    // Avoid "-0" / "-0.00" for values that are zero up to rounding.
    let value = if value.abs() < step * 1e-6 { 0.0 } else { value };
    let s = format!("{:.*}", decimals, value);
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        s[1..].to_string()
    } else {
        s
    }
}
