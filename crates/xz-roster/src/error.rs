use std::path::PathBuf;

use thiserror::Error;

/// Reasons a roster refuses to load. Any one of them aborts the whole load.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("read roster {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse roster {origin}: {message}")]
    Parse { origin: String, message: String },
    #[error("unsupported roster format: {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(PathBuf),
    #[error("talent {id}: field `{field}` must not be empty")]
    EmptyField { id: String, field: &'static str },
    #[error("talent {id}: `{field}` must be a finite, non-negative amount (got {value})")]
    Rate { id: String, field: &'static str, value: f64 },
    #[error("talent {id}: dayRateMin {min} exceeds dayRateMax {max}")]
    RateRange { id: String, min: f64, max: f64 },
    #[error("talent {id}: rating {rating} outside 0..=5")]
    Rating { id: String, rating: f64 },
    #[error("duplicate talent id: {0}")]
    DuplicateId(String),
}
