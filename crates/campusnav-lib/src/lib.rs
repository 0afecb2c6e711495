//! Campus navigation library entry points.
//!
//! This crate exposes helpers to load the campus GeoJSON dataset, look up
//! locations by id, and generate the synthetic two-segment route with a
//! great-circle distance estimate. The HTTP service should only depend on
//! the items exported here instead of reimplementing behavior.

#![deny(warnings)]

pub mod dataset;
pub mod error;
pub mod geometry;
pub mod route;

pub use dataset::{Dataset, LocationFeature};
pub use error::{GeometryError, LoadError, RouteError};
pub use geometry::{haversine_meters, route_between, Coord, RouteGeometry, EARTH_RADIUS_M};
pub use route::{
    resolve_route, RouteProperties, RouteRequest, RouteResult, ROUTE_SEPARATOR,
    WALK_SPEED_M_PER_MIN,
};
