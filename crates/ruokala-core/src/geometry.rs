//! Planar distance ranking.
//!
//! Latitude and longitude are treated as flat Cartesian coordinates. The
//! result is only used as a sort key, so the distortion is acceptable.

use crate::model::Restaurant;
use serde::{Deserialize, Serialize};

/// Euclidean distance between `(x1, y1)` and `(x2, y2)`.
#[must_use]
pub fn planar_distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    (dx * dx + dy * dy).sqrt()
}

/// A position fix in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude
    pub latitude: f64,
    /// Longitude
    pub longitude: f64,
}

impl Coordinates {
    /// Create a new fix.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Planar distance from this fix to a restaurant.
    #[must_use]
    pub fn distance_to(&self, restaurant: &Restaurant) -> f64 {
        planar_distance(
            self.latitude,
            self.longitude,
            restaurant.location.latitude(),
            restaurant.location.longitude(),
        )
    }
}

/// Sort restaurants nearest first.
///
/// The sort is stable, so restaurants at equal distance keep their fetch
/// order. Distances that are not numbers sort last.
pub fn rank_by_distance(restaurants: &mut [Restaurant], observer: Coordinates) {
    restaurants.sort_by(|a, b| {
        observer
            .distance_to(a)
            .total_cmp(&observer.distance_to(b))
    });
}
