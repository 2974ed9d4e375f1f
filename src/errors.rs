use thiserror::Error;

/// Errors raised by the spherical conversion routines.
#[derive(Debug, Error)]
pub enum GeoconvError {
    /// The inputs describe a geometry the spherical formulas cannot resolve,
    /// such as coincident points or a zero-length offset vector. The legacy
    /// converter divided by zero and let NaN propagate here; this crate fails
    /// fast with a description instead.
    #[error("degenerate geometry in '{operation}': {msg}")]
    DegenerateGeometry {
        operation: &'static str,
        msg: String,
    },
}

pub type Result<T> = std::result::Result<T, GeoconvError>;
