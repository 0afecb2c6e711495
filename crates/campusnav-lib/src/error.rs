use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading the location dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The dataset file does not exist at the resolved path.
    #[error("dataset not found at {path}")]
    NotFound { path: PathBuf },

    /// The file exists but could not be parsed into a feature collection.
    #[error("dataset at {path} is not a valid feature collection: {message}")]
    Malformed { path: PathBuf, message: String },
}

/// Errors raised while resolving a route request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// The path segment did not split into exactly two ids on `-to-`.
    #[error("route segment must be <source_id>-to-<destination_id>")]
    BadFormat,

    /// One or both ids were empty after trimming.
    #[error("source and destination ids must be non-empty")]
    EmptyId,

    /// Source and destination ids are identical after trimming.
    #[error("source and destination ids are the same")]
    SameEndpoint,

    /// The source id matched no feature in the dataset.
    #[error("source location '{id}' not found")]
    SourceNotFound { id: String },

    /// The destination id matched no feature in the dataset.
    #[error("destination location '{id}' not found")]
    DestNotFound { id: String },

    /// An unexpected server-side fault, e.g. a corrupt stored feature.
    #[error("{message}")]
    Internal { message: String },
}

/// Errors raised by the geometry routines.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    /// A coordinate component was NaN or infinite.
    #[error("coordinate ({lon}, {lat}) is not finite")]
    InvalidCoordinate { lon: f64, lat: f64 },
}

/// Geometry failures only happen on corrupt stored data, so they surface as
/// server faults rather than client errors.
impl From<GeometryError> for RouteError {
    fn from(err: GeometryError) -> Self {
        RouteError::Internal {
            message: err.to_string(),
        }
    }
}
