use crate::clean::{CleanOptions, CleanStats};
use crate::errors::{Error, FormatError};
use crate::geojson::{geometry_type, parse_geometry};
use crate::geometry::Geometry;
use serde_json::Value;
use tracing::{debug, info, warn};

pub const FEATURE_COLLECTION: &str = "FeatureCollection";

/// A feature that lost at least one coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureReport {
    pub feature_index: usize,
    pub removed: usize,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CleanReport {
    /// Features whose geometry went through cleaning, whether or not anything
    /// was removed.
    pub cleaned: usize,
    pub stats: CleanStats,
    /// One entry per feature with removals, in feature order.
    pub features: Vec<FeatureReport>,
}

impl CleanReport {
    pub fn total_removed(&self) -> usize {
        self.stats.removed
    }
}

// New `coordinates` member and counts for one feature, or None if skipped.
type FeatureOutcome = Option<(Value, CleanStats)>;

/// Clean every Polygon and MultiPolygon geometry of a FeatureCollection.
///
/// All features are checked and cleaned before any is written back, so on
/// error the document is left as it was. Only `geometry.coordinates` of
/// polygonal features is replaced; everything else is untouched.
pub fn process_feature_collection(
    document: &mut Value,
    options: &CleanOptions,
) -> Result<CleanReport, Error> {
    let features = features_mut(document)?;
    let outcomes = clean_all(features, options)?;

    let mut report = CleanReport::default();
    for (index, (feature, outcome)) in features.iter_mut().zip(outcomes).enumerate() {
        let (coordinates, stats) = match outcome {
            Some(outcome) => outcome,
            None => {
                debug!(feature_index = index, "no polygonal geometry, skipped");
                continue;
            }
        };
        if let Some(geometry) = feature.get_mut("geometry").and_then(Value::as_object_mut) {
            geometry.insert("coordinates".to_string(), coordinates);
        }

        report.cleaned += 1;
        report.stats += stats;
        if stats.removed > 0 {
            info!(
                feature_index = index,
                removed = stats.removed,
                "consecutive duplicates removed"
            );
            report.features.push(FeatureReport {
                feature_index: index,
                removed: stats.removed,
            });
        }
        if stats.degenerate_rings > 0 {
            warn!(
                feature_index = index,
                rings = stats.degenerate_rings,
                "rings left with fewer than 4 coordinates"
            );
        }
    }
    Ok(report)
}

fn features_mut(document: &mut Value) -> Result<&mut Vec<Value>, Error> {
    let object = document
        .as_object_mut()
        .ok_or_else(|| FormatError::UnexpectedValue {
            path: "/".to_string(),
            expected: "a GeoJSON object",
        })?;

    let type_name = object.get("type").ok_or(FormatError::MissingMember("type"))?;
    if type_name.as_str() != Some(FEATURE_COLLECTION) {
        return Err(Error::NotAFeatureCollection {
            found: type_name.to_string(),
        });
    }

    let features = object
        .get_mut("features")
        .ok_or(FormatError::MissingMember("features"))?
        .as_array_mut()
        .ok_or_else(|| FormatError::UnexpectedValue {
            path: "/features".to_string(),
            expected: "an array of features",
        })?;
    Ok(features)
}

#[cfg(not(feature = "rayon"))]
fn clean_all(features: &[Value], options: &CleanOptions) -> Result<Vec<FeatureOutcome>, Error> {
    features
        .iter()
        .enumerate()
        .map(|(index, feature)| clean_feature(index, feature, options))
        .collect()
}

#[cfg(feature = "rayon")]
fn clean_all(features: &[Value], options: &CleanOptions) -> Result<Vec<FeatureOutcome>, Error> {
    use rayon::prelude::*;

    features
        .par_iter()
        .enumerate()
        .map(|(index, feature)| clean_feature(index, feature, options))
        .collect()
}

fn clean_feature(
    index: usize,
    feature: &Value,
    options: &CleanOptions,
) -> Result<FeatureOutcome, Error> {
    let feature = feature
        .as_object()
        .ok_or_else(|| FormatError::UnexpectedValue {
            path: format!("/features/{}", index),
            expected: "a feature object",
        })?;

    let geometry = match feature.get("geometry") {
        None | Some(Value::Null) => return Ok(None),
        Some(geometry) if geometry.is_object() => geometry,
        Some(_) => {
            return Err(Error::Feature {
                index,
                source: FormatError::UnexpectedValue {
                    path: "/geometry".to_string(),
                    expected: "a geometry object or null",
                },
            })
        }
    };

    let type_name = geometry_type(geometry).map_err(|source| Error::Feature { index, source })?;
    if !Geometry::is_cleanable_type(type_name) {
        return Ok(None);
    }

    let geom = parse_geometry(geometry).map_err(|source| Error::Feature { index, source })?;
    let (cleaned, stats) = geom.clean(options)?;
    Ok(Some((cleaned.coordinates_json(), stats)))
}
