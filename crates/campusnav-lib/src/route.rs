//! Route request parsing and resolution.
//!
//! [`resolve_route`] runs the full pipeline for one request: parse and
//! validate the path segment, resolve both endpoints against the dataset,
//! generate the geometry, and assemble the response payload. Each step
//! short-circuits, so earlier failures mask later ones.

use serde::Serialize;
use tracing::debug;

use crate::dataset::{Dataset, LocationFeature};
use crate::error::RouteError;
use crate::geometry::{route_between, Coord};

/// Token separating the two endpoint ids in a route path segment.
pub const ROUTE_SEPARATOR: &str = "-to-";

/// Assumed walking speed in meters per minute for duration estimates.
pub const WALK_SPEED_M_PER_MIN: f64 = 80.0;

/// A validated pair of endpoint ids parsed from a route path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub source_id: String,
    pub destination_id: String,
}

impl RouteRequest {
    /// Parse `"<source_id>-to-<destination_id>"`.
    ///
    /// Checks run in a fixed order: the segment must split into exactly two
    /// parts on [`ROUTE_SEPARATOR`], both parts must be non-empty after
    /// trimming, and the trimmed ids must differ. Distinctness compares ids,
    /// not coordinates, and applies even when neither id exists.
    pub fn parse(path_segment: &str) -> Result<Self, RouteError> {
        let parts: Vec<&str> = path_segment.split(ROUTE_SEPARATOR).collect();
        if parts.len() != 2 {
            return Err(RouteError::BadFormat);
        }

        let source_id = parts[0].trim();
        let destination_id = parts[1].trim();
        if source_id.is_empty() || destination_id.is_empty() {
            return Err(RouteError::EmptyId);
        }
        if source_id == destination_id {
            return Err(RouteError::SameEndpoint);
        }

        Ok(Self {
            source_id: source_id.to_string(),
            destination_id: destination_id.to_string(),
        })
    }
}

/// Properties block echoed back with a generated route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteProperties {
    /// Whole meters with unit suffix, e.g. `"1552m"`.
    pub distance: String,
    /// Whole minutes with unit suffix, e.g. `"19min"`.
    pub duration: String,
    pub source_id: String,
    pub destination_id: String,
    pub source_name: String,
    pub destination_name: String,
}

/// A generated route: exactly three waypoints plus the properties block.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteResult {
    /// Always `"generated_route"`.
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Source, midpoint, destination.
    pub coordinates: Vec<Coord>,
    pub properties: RouteProperties,
}

/// Resolve a route path segment against the dataset.
///
/// The source lookup runs before the destination lookup, so when both ids
/// are unknown the source error wins. That tie-break is part of the API
/// contract and is preserved deliberately.
///
/// A resolved feature with unusable geometry is dataset corruption and maps
/// to [`RouteError::Internal`] rather than a client error.
pub fn resolve_route(dataset: &Dataset, path_segment: &str) -> Result<RouteResult, RouteError> {
    let request = RouteRequest::parse(path_segment)?;

    let source =
        dataset
            .find_by_id(&request.source_id)
            .ok_or_else(|| RouteError::SourceNotFound {
                id: request.source_id.clone(),
            })?;
    let destination =
        dataset
            .find_by_id(&request.destination_id)
            .ok_or_else(|| RouteError::DestNotFound {
                id: request.destination_id.clone(),
            })?;

    let src = feature_coord(source)?;
    let dst = feature_coord(destination)?;

    let geometry = route_between(src, dst)?;
    let meters = geometry.distance_meters;
    debug!(
        source = %source.id,
        destination = %destination.id,
        meters,
        "route generated"
    );

    Ok(RouteResult {
        kind: "generated_route",
        coordinates: geometry.waypoints.to_vec(),
        properties: RouteProperties {
            distance: format!("{}m", meters.floor() as u64),
            duration: format!("{}min", (meters / WALK_SPEED_M_PER_MIN).floor() as u64),
            source_name: source.display_name().to_string(),
            destination_name: destination.display_name().to_string(),
            source_id: request.source_id,
            destination_id: request.destination_id,
        },
    })
}

fn feature_coord(feature: &LocationFeature) -> Result<Coord, RouteError> {
    feature.coordinates.ok_or_else(|| RouteError::Internal {
        message: format!("location '{}' has malformed geometry", feature.id),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn campus() -> Dataset {
        Dataset::from_value(json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "id": "loc1",
                    "geometry": {"type": "Point", "coordinates": [77.000, 13.000]},
                    "properties": {"name": "Gate"}
                },
                {
                    "id": "loc2",
                    "geometry": {"type": "Point", "coordinates": [77.010, 13.010]},
                    "properties": {"name": "Library"}
                },
                {
                    "id": "loc3",
                    "geometry": {"type": "Point", "coordinates": [77.020, 13.005]},
                    "properties": {}
                },
                {
                    "id": "broken",
                    "geometry": {"type": "Point", "coordinates": "oops"},
                    "properties": {"name": "Broken"}
                }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn parse_rejects_missing_separator() {
        assert_eq!(
            RouteRequest::parse("loc1loc2"),
            Err(RouteError::BadFormat)
        );
    }

    #[test]
    fn parse_rejects_repeated_separator() {
        assert_eq!(
            RouteRequest::parse("a-to-b-to-c"),
            Err(RouteError::BadFormat)
        );
    }

    #[test]
    fn parse_rejects_empty_ids() {
        assert_eq!(RouteRequest::parse("-to-loc2"), Err(RouteError::EmptyId));
        assert_eq!(RouteRequest::parse("loc1-to-"), Err(RouteError::EmptyId));
        assert_eq!(RouteRequest::parse("  -to-  "), Err(RouteError::EmptyId));
    }

    #[test]
    fn parse_trims_surrounding_whitespace() {
        let request = RouteRequest::parse(" loc1 -to- loc2 ").unwrap();
        assert_eq!(request.source_id, "loc1");
        assert_eq!(request.destination_id, "loc2");
    }

    #[test]
    fn parse_rejects_identical_ids_even_when_unknown() {
        // Distinctness is checked before existence.
        assert_eq!(
            RouteRequest::parse("no_such_place-to-no_such_place"),
            Err(RouteError::SameEndpoint)
        );
        assert_eq!(
            RouteRequest::parse("loc1 -to- loc1"),
            Err(RouteError::SameEndpoint)
        );
    }

    #[test]
    fn resolve_echoes_endpoint_coordinates_exactly() {
        let result = resolve_route(&campus(), "loc1-to-loc2").unwrap();

        assert_eq!(result.kind, "generated_route");
        assert_eq!(result.coordinates.len(), 3);
        assert_eq!(result.coordinates[0], Coord(77.000, 13.000));
        assert_eq!(result.coordinates[1], Coord(77.005, 13.005));
        assert_eq!(result.coordinates[2], Coord(77.010, 13.010));
    }

    #[test]
    fn resolve_formats_distance_and_duration() {
        let result = resolve_route(&campus(), "loc1-to-loc2").unwrap();
        let props = &result.properties;

        let meters: u64 = props.distance.strip_suffix('m').unwrap().parse().unwrap();
        let minutes: u64 = props.duration.strip_suffix("min").unwrap().parse().unwrap();

        // ~0.01 degrees of separation near 13N is roughly 1.5 km.
        assert!(meters > 0 && meters < 2000, "distance {}", meters);
        assert_eq!(minutes, meters / 80);
    }

    #[test]
    fn resolve_uses_display_names_with_id_fallback() {
        let result = resolve_route(&campus(), "loc1-to-loc3").unwrap();

        assert_eq!(result.properties.source_name, "Gate");
        assert_eq!(result.properties.destination_name, "loc3");
        assert_eq!(result.properties.source_id, "loc1");
        assert_eq!(result.properties.destination_id, "loc3");
    }

    #[test]
    fn missing_source_takes_precedence_over_missing_destination() {
        let err = resolve_route(&campus(), "unknownA-to-unknownB").unwrap_err();
        assert_eq!(
            err,
            RouteError::SourceNotFound {
                id: "unknownA".to_string()
            }
        );
    }

    #[test]
    fn missing_destination_is_reported_when_source_exists() {
        let err = resolve_route(&campus(), "loc1-to-unknownB").unwrap_err();
        assert_eq!(
            err,
            RouteError::DestNotFound {
                id: "unknownB".to_string()
            }
        );
    }

    #[test]
    fn corrupt_geometry_is_a_server_fault() {
        let err = resolve_route(&campus(), "loc1-to-broken").unwrap_err();
        match err {
            RouteError::Internal { message } => assert!(message.contains("broken")),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
