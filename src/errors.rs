use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Shape problems found while reading GeoJSON into typed geometries.
#[derive(Error, Debug, PartialEq)]
pub enum FormatError {
    #[error("missing member \"{0}\"")]
    MissingMember(&'static str),

    #[error("expected {expected} at {path}")]
    UnexpectedValue { path: String, expected: &'static str },

    #[error("position at {path} has {found} ordinates, expected at least 2")]
    TooFewOrdinates { path: String, found: usize },
}

#[derive(Error, Debug, PartialEq)]
pub enum RingError {
    #[error("Ring has {found} coordinates, at least 4 are needed")]
    TooFewCoordinates { found: usize },

    #[error("Ring is not closed: first and last coordinates are not equal.")]
    NotClosed,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("input is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed GeoJSON: {0}")]
    InputFormat(#[from] FormatError),

    #[error("malformed feature {index}: {source}")]
    Feature { index: usize, source: FormatError },

    #[error("Only FeatureCollection is supported, found type {found}")]
    NotAFeatureCollection { found: String },

    #[error("unsupported geometry type \"{0}\"")]
    UnsupportedGeometryType(String),
}
