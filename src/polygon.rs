use crate::clean::{CleanOptions, CleanStats};
use crate::LinearRing;
use serde_json::Value;

/// Rings of a polygon: the shell first, then any holes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    rings: Vec<LinearRing>,
}

impl Polygon {
    pub fn new(rings: Vec<LinearRing>) -> Self {
        Polygon { rings }
    }

    pub fn rings(&self) -> &[LinearRing] {
        &self.rings
    }

    pub fn shell(&self) -> Option<&LinearRing> {
        self.rings.first()
    }

    pub fn holes(&self) -> &[LinearRing] {
        self.rings.get(1..).unwrap_or(&[])
    }

    /// Deduplicate every ring, keeping ring order.
    pub fn clean(&self, options: &CleanOptions) -> (Polygon, CleanStats) {
        let mut stats = CleanStats::default();
        let rings = self
            .rings
            .iter()
            .map(|ring| {
                let (mut cleaned, removed) = ring.dedup_rounded(options.precision);
                stats.removed += removed;
                if options.close_rings && cleaned.close() {
                    stats.rings_closed += 1;
                }
                if cleaned.is_degenerate() {
                    stats.degenerate_rings += 1;
                }
                cleaned
            })
            .collect();
        (Polygon { rings }, stats)
    }

    pub fn to_json(&self) -> Value {
        Value::Array(self.rings.iter().map(LinearRing::to_json).collect())
    }
}
