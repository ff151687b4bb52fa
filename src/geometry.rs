use crate::clean::{CleanOptions, CleanStats};
use crate::errors::Error;
use crate::Polygon;
use serde_json::Value;

pub const POLYGON: &str = "Polygon";
pub const MULTI_POLYGON: &str = "MultiPolygon";

/// A GeoJSON geometry, typed where it can be cleaned.
#[derive(PartialEq, Debug, Clone)]
pub enum Geometry {
    Polygon(Polygon),
    MultiPolygon(Vec<Polygon>),
    /// Any other geometry, kept as read.
    Other { type_name: String, raw: Value },
}

impl Geometry {
    pub fn type_name(&self) -> &str {
        match self {
            Geometry::Polygon(_) => POLYGON,
            Geometry::MultiPolygon(_) => MULTI_POLYGON,
            Geometry::Other { type_name, .. } => type_name,
        }
    }

    pub fn is_cleanable_type(type_name: &str) -> bool {
        type_name == POLYGON || type_name == MULTI_POLYGON
    }

    /// Round and deduplicate every ring, returning a new geometry.
    ///
    /// Only polygonal geometries can be cleaned; callers filter the rest out.
    pub fn clean(&self, options: &CleanOptions) -> Result<(Geometry, CleanStats), Error> {
        match self {
            Geometry::Polygon(polygon) => {
                let (polygon, stats) = polygon.clean(options);
                Ok((Geometry::Polygon(polygon), stats))
            }
            Geometry::MultiPolygon(polygons) => {
                let mut stats = CleanStats::default();
                let polygons = polygons
                    .iter()
                    .map(|polygon| {
                        let (polygon, polygon_stats) = polygon.clean(options);
                        stats += polygon_stats;
                        polygon
                    })
                    .collect();
                Ok((Geometry::MultiPolygon(polygons), stats))
            }
            Geometry::Other { type_name, .. } => {
                Err(Error::UnsupportedGeometryType(type_name.clone()))
            }
        }
    }

    /// The `coordinates` member for this geometry.
    pub fn coordinates_json(&self) -> Value {
        match self {
            Geometry::Polygon(polygon) => polygon.to_json(),
            Geometry::MultiPolygon(polygons) => {
                Value::Array(polygons.iter().map(Polygon::to_json).collect())
            }
            Geometry::Other { raw, .. } => raw.get("coordinates").cloned().unwrap_or(Value::Null),
        }
    }
}
