//! Great-circle distance and point-in-boundary tests.

use crate::model::{Coordinates, GeoBoundary};

/// Mean Earth radius in meters used by the haversine formula.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two points in meters.
#[must_use]
pub fn haversine_distance_m(from: Coordinates, to: Coordinates) -> f64 {
    let from_lat = from.lat.to_radians();
    let to_lat = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let half_chord = (delta_lat / 2.0).sin().powi(2)
        + from_lat.cos() * to_lat.cos() * (delta_lng / 2.0).sin().powi(2);
    let angle = 2.0 * half_chord.sqrt().atan2((1.0 - half_chord).sqrt());

    EARTH_RADIUS_M * angle
}

/// Even-odd ray casting test treating `ring` as closed.
///
/// Longitude is the x axis and latitude the y axis. Rings with fewer than three
/// vertices contain nothing.
#[must_use]
pub fn point_in_polygon(point: Coordinates, ring: &[Coordinates]) -> bool {
    let Some(mut previous) = ring.last() else {
        return false;
    };

    let mut inside = false;
    for current in ring {
        if (current.lat > point.lat) != (previous.lat > point.lat) {
            let crossing_lng = (previous.lng - current.lng) * (point.lat - current.lat)
                / (previous.lat - current.lat)
                + current.lng;
            if point.lng < crossing_lng {
                inside = !inside;
            }
        }
        previous = current;
    }
    inside
}

impl GeoBoundary {
    /// Whether the point lies inside the boundary; circle edges count as inside.
    #[must_use]
    pub fn contains(&self, point: Coordinates) -> bool {
        match self {
            GeoBoundary::Circle { center, radius } => {
                haversine_distance_m(point, *center) <= *radius
            }
            GeoBoundary::Polygon { coordinates } => point_in_polygon(point, coordinates),
        }
    }
}
