//! Great-circle distance and the synthetic route placeholder.
//!
//! The generated "route" is deliberately crude: the two endpoints joined
//! through their coordinate-space midpoint. It stands in for a real path
//! over the campus walkway network and must not grow interpolation
//! sophistication. Distance, by contrast, is a proper haversine
//! great-circle calculation on a spherical earth.

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// Mean Earth radius in meters used for great-circle distances.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A longitude/latitude pair in degrees, serialized as `[lon, lat]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord(pub f64, pub f64);

impl Coord {
    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.0
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.1
    }

    /// Whether both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.0.is_finite() && self.1.is_finite()
    }

    /// Component-wise average with another coordinate. This is a plain
    /// coordinate-space midpoint, not a geodesic one.
    pub fn midpoint(&self, other: &Coord) -> Coord {
        Coord((self.0 + other.0) / 2.0, (self.1 + other.1) / 2.0)
    }
}

/// A generated route between two points.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteGeometry {
    /// Source, coordinate-space midpoint, destination.
    pub waypoints: [Coord; 3],
    /// Great-circle distance from source to destination in meters.
    pub distance_meters: f64,
}

/// Haversine great-circle distance in meters between two degree coordinates.
///
/// `a = sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlon/2)`,
/// `d = 2·R·asin(√a)` with R = [`EARTH_RADIUS_M`].
pub fn haversine_meters(a: Coord, b: Coord) -> Result<f64, GeometryError> {
    for coord in [a, b] {
        if !coord.is_finite() {
            return Err(GeometryError::InvalidCoordinate {
                lon: coord.lon(),
                lat: coord.lat(),
            });
        }
    }

    let lat1 = a.lat().to_radians();
    let lat2 = b.lat().to_radians();
    let dlat = lat2 - lat1;
    let dlon = (b.lon() - a.lon()).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    Ok(2.0 * EARTH_RADIUS_M * h.sqrt().asin())
}

/// Build the placeholder route between two points: the straight line through
/// the coordinate-space midpoint plus the great-circle distance.
pub fn route_between(src: Coord, dst: Coord) -> Result<RouteGeometry, GeometryError> {
    let distance_meters = haversine_meters(src, dst)?;
    Ok(RouteGeometry {
        waypoints: [src, src.midpoint(&dst), dst],
        distance_meters,
    })
}
