mod clean;
mod coordinate;
mod linear_ring;
mod polygon;
mod utils;

pub mod cli;
pub mod errors;
pub mod feature_collection;
pub mod geojson;
pub mod geometry;
pub mod io;

pub use clean::{CleanOptions, CleanStats};
pub use coordinate::{Coordinate, Ordinate};
pub use feature_collection::{process_feature_collection, CleanReport, FeatureReport};
pub use geometry::Geometry;
pub use linear_ring::LinearRing;
pub use polygon::Polygon;
