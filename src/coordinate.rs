use crate::utils::{round_f64, round_i64};
use serde_json::Value;
use std::convert::TryFrom;
use std::fmt;

/// A single numeric component of a coordinate.
///
/// Integral JSON numbers are kept as integers so that they are written back
/// unchanged (`3` stays `3`, not `3.0`).
#[derive(Copy, Clone, Debug)]
pub enum Ordinate {
    Int(i64),
    Float(f64),
}

impl Ordinate {
    pub fn as_f64(self) -> f64 {
        match self {
            Ordinate::Int(i) => i as f64,
            Ordinate::Float(f) => f,
        }
    }

    /// Round to `precision` decimal digits, ties to even.
    pub fn round(self, precision: i32) -> Ordinate {
        match self {
            Ordinate::Float(f) => Ordinate::Float(round_f64(f, precision)),
            Ordinate::Int(i) => {
                let rounded = round_i64(i, precision);
                match i64::try_from(rounded) {
                    Ok(i) => Ordinate::Int(i),
                    Err(_) => Ordinate::Float(rounded as f64),
                }
            }
        }
    }

    pub fn to_json(self) -> Value {
        match self {
            Ordinate::Int(i) => Value::from(i),
            Ordinate::Float(f) => Value::from(f),
        }
    }
}

impl PartialEq for Ordinate {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Ordinate::Int(a), Ordinate::Int(b)) => a == b,
            (Ordinate::Float(a), Ordinate::Float(b)) => a == b,
            (Ordinate::Int(i), Ordinate::Float(f)) | (Ordinate::Float(f), Ordinate::Int(i)) => {
                f.fract() == 0.0 && f == i as f64 && f as i64 == i
            }
        }
    }
}

impl From<f64> for Ordinate {
    fn from(f: f64) -> Self {
        Ordinate::Float(f)
    }
}

impl From<i64> for Ordinate {
    fn from(i: i64) -> Self {
        Ordinate::Int(i)
    }
}

impl fmt::Display for Ordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ordinate::Int(i) => write!(f, "{}", i),
            Ordinate::Float(x) => write!(f, "{:?}", x),
        }
    }
}

/// A GeoJSON position: x, y and any further ordinates (usually elevation).
#[derive(Clone, Debug, PartialEq)]
pub struct Coordinate {
    ordinates: Vec<Ordinate>,
}

impl From<(f64, f64)> for Coordinate {
    fn from(coord: (f64, f64)) -> Self {
        Coordinate::new(vec![coord.0.into(), coord.1.into()])
    }
}

impl From<(f64, f64, f64)> for Coordinate {
    fn from(coord: (f64, f64, f64)) -> Self {
        Coordinate::new(vec![coord.0.into(), coord.1.into(), coord.2.into()])
    }
}

impl From<(i64, i64)> for Coordinate {
    fn from(coord: (i64, i64)) -> Self {
        Coordinate::new(vec![coord.0.into(), coord.1.into()])
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (index, ordinate) in self.ordinates.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", ordinate)?;
        }
        write!(f, ")")
    }
}

impl Coordinate {
    pub fn new(ordinates: Vec<Ordinate>) -> Self {
        Coordinate { ordinates }
    }

    pub fn ordinates(&self) -> &[Ordinate] {
        &self.ordinates
    }

    pub fn z(&self) -> Option<f64> {
        self.ordinates.get(2).map(|o| o.as_f64())
    }

    /// A new coordinate with every ordinate rounded to `precision` digits.
    pub fn round(&self, precision: i32) -> Coordinate {
        Coordinate {
            ordinates: self.ordinates.iter().map(|o| o.round(precision)).collect(),
        }
    }

    pub fn to_json(&self) -> Value {
        Value::Array(self.ordinates.iter().map(|o| o.to_json()).collect())
    }
}
