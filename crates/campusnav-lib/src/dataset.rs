//! Loading and lookup for the campus GeoJSON dataset.
//!
//! The dataset is a GeoJSON feature collection of labeled campus points.
//! It is parsed once, held immutable, and looked up by feature id. The raw
//! document is kept alongside the parsed features so the dump endpoint can
//! serve it verbatim.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};

use crate::error::LoadError;
use crate::geometry::Coord;

/// A labeled point feature from the campus dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationFeature {
    /// Unique identifier used for lookups.
    pub id: String,

    /// Point coordinates. `None` when the stored geometry is malformed;
    /// that surfaces as a server fault at resolve time, not a load failure.
    pub coordinates: Option<Coord>,

    /// Optional display name from `properties.name`.
    pub name: Option<String>,
}

impl LocationFeature {
    /// Display name, falling back to the feature id.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// The loaded campus dataset. Immutable after load; safe for unsynchronized
/// concurrent reads.
#[derive(Debug, Clone)]
pub struct Dataset {
    raw: Value,
    features: Vec<LocationFeature>,
}

impl Dataset {
    /// Load the dataset from a GeoJSON file.
    ///
    /// Returns [`LoadError::NotFound`] when the file is absent and
    /// [`LoadError::Malformed`] when it cannot be parsed into a feature
    /// collection.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();

        let text = fs::read_to_string(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => LoadError::NotFound {
                path: path.to_path_buf(),
            },
            _ => LoadError::Malformed {
                path: path.to_path_buf(),
                message: err.to_string(),
            },
        })?;

        let raw: Value = serde_json::from_str(&text).map_err(|err| LoadError::Malformed {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;

        let dataset = Self::from_value(raw).map_err(|message| LoadError::Malformed {
            path: path.to_path_buf(),
            message,
        })?;

        info!(
            path = %path.display(),
            features = dataset.features.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    /// Build a dataset from an already-parsed GeoJSON document.
    ///
    /// Fails with a description of the shape violation when the document has
    /// no `features` array. Features without a string `id` stay in the raw
    /// document but are not indexed; they can never match a lookup.
    pub fn from_value(raw: Value) -> Result<Self, String> {
        let entries = raw
            .get("features")
            .and_then(Value::as_array)
            .ok_or_else(|| "missing 'features' array".to_string())?;

        let mut features = Vec::with_capacity(entries.len());
        for entry in entries {
            let Some(id) = entry.get("id").and_then(Value::as_str) else {
                debug!("skipping feature without a string id");
                continue;
            };
            features.push(LocationFeature {
                id: id.to_string(),
                coordinates: parse_point(entry),
                name: entry
                    .pointer("/properties/name")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            });
        }

        Ok(Self { raw, features })
    }

    /// Linear scan for a feature by exact, case-sensitive id. First match
    /// wins; duplicate ids are a data-quality issue, not a runtime error.
    pub fn find_by_id(&self, id: &str) -> Option<&LocationFeature> {
        self.features.iter().find(|feature| feature.id == id)
    }

    /// The raw GeoJSON document, served verbatim by the dump endpoint.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Number of id-indexed features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether no features were indexed.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// Extract a `[lon, lat]` pair from `geometry.coordinates`, tolerating a
/// trailing altitude element and rejecting non-numeric entries.
fn parse_point(entry: &Value) -> Option<Coord> {
    let coords = entry.pointer("/geometry/coordinates")?.as_array()?;
    let lon = coords.first()?.as_f64()?;
    let lat = coords.get(1)?.as_f64()?;
    Some(Coord(lon, lat))
}
