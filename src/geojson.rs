use crate::coordinate::Ordinate;
use crate::errors::FormatError;
use crate::geometry::{Geometry, MULTI_POLYGON, POLYGON};
use crate::{Coordinate, LinearRing, Polygon};
use serde_json::Value;

// Indices from the geometry's `coordinates` member down to the current value.
type Trail = Vec<usize>;

fn pointer(trail: &[usize]) -> String {
    let mut path = String::from("/coordinates");
    for index in trail {
        path.push('/');
        path.push_str(&index.to_string());
    }
    path
}

fn expect_array<'a>(
    value: &'a Value,
    trail: &[usize],
    expected: &'static str,
) -> Result<&'a Vec<Value>, FormatError> {
    value.as_array().ok_or_else(|| FormatError::UnexpectedValue {
        path: pointer(trail),
        expected,
    })
}

/// The `type` member of a GeoJSON object.
pub fn geometry_type(geom: &Value) -> Result<&str, FormatError> {
    match geom.get("type") {
        None => Err(FormatError::MissingMember("type")),
        Some(t) => t.as_str().ok_or_else(|| FormatError::UnexpectedValue {
            path: "/type".to_string(),
            expected: "a string",
        }),
    }
}

/// Read a GeoJSON geometry object, checking that `coordinates` nests as its
/// `type` requires.
pub fn parse_geometry(geom: &Value) -> Result<Geometry, FormatError> {
    let type_name = geometry_type(geom)?;
    let mut trail = Trail::new();
    match type_name {
        POLYGON => Ok(Geometry::Polygon(parse_polygon(
            coordinates(geom)?,
            &mut trail,
        )?)),
        MULTI_POLYGON => Ok(Geometry::MultiPolygon(parse_multi_polygon(
            coordinates(geom)?,
            &mut trail,
        )?)),
        _ => Ok(Geometry::Other {
            type_name: type_name.to_string(),
            raw: geom.clone(),
        }),
    }
}

fn coordinates(geom: &Value) -> Result<&Value, FormatError> {
    geom.get("coordinates")
        .ok_or(FormatError::MissingMember("coordinates"))
}

fn parse_multi_polygon(value: &Value, trail: &mut Trail) -> Result<Vec<Polygon>, FormatError> {
    let polygons = expect_array(value, trail, "an array of polygons")?;
    let mut result = Vec::with_capacity(polygons.len());
    for (index, polygon) in polygons.iter().enumerate() {
        trail.push(index);
        result.push(parse_polygon(polygon, trail)?);
        trail.pop();
    }
    Ok(result)
}

fn parse_polygon(value: &Value, trail: &mut Trail) -> Result<Polygon, FormatError> {
    let rings = expect_array(value, trail, "an array of rings")?;
    let mut result = Vec::with_capacity(rings.len());
    for (index, ring) in rings.iter().enumerate() {
        trail.push(index);
        result.push(parse_ring(ring, trail)?);
        trail.pop();
    }
    Ok(Polygon::new(result))
}

fn parse_ring(value: &Value, trail: &mut Trail) -> Result<LinearRing, FormatError> {
    let positions = expect_array(value, trail, "an array of positions")?;
    let mut coords = Vec::with_capacity(positions.len());
    for (index, position) in positions.iter().enumerate() {
        trail.push(index);
        coords.push(parse_position(position, trail)?);
        trail.pop();
    }
    Ok(LinearRing::new(coords))
}

fn parse_position(value: &Value, trail: &mut Trail) -> Result<Coordinate, FormatError> {
    let ordinates = expect_array(value, trail, "a position")?;
    if ordinates.len() < 2 {
        return Err(FormatError::TooFewOrdinates {
            path: pointer(trail),
            found: ordinates.len(),
        });
    }
    let mut result = Vec::with_capacity(ordinates.len());
    for (index, ordinate) in ordinates.iter().enumerate() {
        trail.push(index);
        result.push(parse_ordinate(ordinate, trail)?);
        trail.pop();
    }
    Ok(Coordinate::new(result))
}

fn parse_ordinate(value: &Value, trail: &[usize]) -> Result<Ordinate, FormatError> {
    let number = value.as_number().ok_or_else(|| FormatError::UnexpectedValue {
        path: pointer(trail),
        expected: "a number",
    })?;
    if let Some(i) = number.as_i64() {
        Ok(Ordinate::Int(i))
    } else {
        number
            .as_f64()
            .map(Ordinate::Float)
            .ok_or_else(|| FormatError::UnexpectedValue {
                path: pointer(trail),
                expected: "a finite number",
            })
    }
}
