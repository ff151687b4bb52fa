use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde_json::{json, Value};

use polyclean::{Coordinate, LinearRing};

//// Utility functions

/// A closed, wobbly ring around a random center with `n` densely spaced
/// vertices, so that coarse precisions collapse many of them.
pub(crate) fn get_random_ring(n: usize, seed: u64) -> LinearRing {
    let mut rng = SmallRng::seed_from_u64(seed);
    let center_x: f64 = rng.gen_range(-170.0, 170.0);
    let center_y: f64 = rng.gen_range(-80.0, 80.0);
    let mut coords = Vec::with_capacity(n + 1);
    for i in 0..n {
        let angle = 2.0 * std::f64::consts::PI * (i as f64) / (n as f64);
        let radius: f64 = 0.5 + rng.gen_range(-0.001, 0.001);
        coords.push(Coordinate::from((
            center_x + radius * angle.cos(),
            center_y + radius * angle.sin(),
        )));
    }
    coords.push(coords[0].clone());
    LinearRing::new(coords)
}

pub(crate) fn get_random_rings(count: usize, n: usize, seed: u64) -> Vec<LinearRing> {
    (0..count)
        .map(|i| get_random_ring(n, seed + i as u64))
        .collect()
}

pub(crate) fn make_feature_collection(rings: &[LinearRing]) -> Value {
    let features: Vec<Value> = rings
        .iter()
        .enumerate()
        .map(|(index, ring)| {
            json!({
                "type": "Feature",
                "properties": {"index": index},
                "geometry": {"type": "Polygon", "coordinates": [ring.to_json()]}
            })
        })
        .collect();
    json!({"type": "FeatureCollection", "features": features})
}
