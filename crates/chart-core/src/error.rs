// File: crates/chart-core/src/error.rs
// Summary: Error type for the raster rendering pipeline.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("failed to read back pixels from raster surface")]
    ReadPixels,

    #[error("encode PNG failed")]
    Encode(#[from] image::ImageError),

    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
