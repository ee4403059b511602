use thiserror::Error;

/// A zero-length vector was asked for its direction.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("cannot normalize degenerate vector ({x}, {y}, {z})")]
pub struct DegenerateVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to read scene: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed scene description: {0}")]
    Json(#[from] serde_json::Error),
    #[error("empty scene")]
    Empty,
    #[error("scene has {count} objects, limit is {max}")]
    TooManyObjects { count: usize, max: usize },
    #[error("object {index}: camera dimensions must be positive, got {width}x{height}")]
    InvalidCamera {
        index: usize,
        width: f64,
        height: f64,
    },
    #[error("object {index}: sphere radius must be positive, got {radius}")]
    InvalidRadius { index: usize, radius: f64 },
    #[error("object {index}: plane normal is degenerate")]
    DegenerateNormal {
        index: usize,
        #[source]
        source: DegenerateVector,
    },
    #[error("object {index}: color channel {value} is outside [0, 1]")]
    ColorOutOfRange { index: usize, value: f64 },
    #[error("object {index}: {field} is not a finite number")]
    NonFinite { index: usize, field: &'static str },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("no camera found in scene")]
    NoCameraFound,
    #[error("output dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
    #[error("unsupported PPM format '{0}', expected p3 or p6")]
    UnsupportedFormat(String),
}

/// Any failure along the load, render, write pipeline.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Scene(#[from] SceneError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Image(#[from] ImageError),
}
