//! Shared application state for the HTTP handlers.

use std::path::Path;
use std::sync::Arc;

use campusnav_lib::Dataset;
use tracing::{error, info};

/// Cheaply-clonable state shared by all axum handlers.
///
/// Holds the dataset loaded once at startup. A failed load is remembered as
/// absent: the process stays up and data-dependent endpoints report a
/// uniform 500 until the service restarts with a valid dataset. The load is
/// never retried per request.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    dataset: Option<Dataset>,
}

impl AppState {
    /// Load the dataset from `path`. Load failures are logged, not fatal.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let dataset = match Dataset::load(path) {
            Ok(dataset) => {
                info!(path = %path.display(), features = dataset.len(), "dataset ready");
                Some(dataset)
            }
            Err(err) => {
                error!(path = %path.display(), error = %err, "dataset unavailable");
                None
            }
        };
        Self::from_dataset(dataset)
    }

    /// Build state from an already-loaded (or deliberately absent) dataset.
    /// Useful for tests with fixture data.
    pub fn from_dataset(dataset: Option<Dataset>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { dataset }),
        }
    }

    /// The loaded dataset, `None` when the startup load failed.
    pub fn dataset(&self) -> Option<&Dataset> {
        self.inner.dataset.as_ref()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("dataset_loaded", &self.inner.dataset.is_some())
            .field(
                "features",
                &self.inner.dataset.as_ref().map(|d| d.len()).unwrap_or(0),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn one_feature_dataset() -> Dataset {
        Dataset::from_value(json!({
            "features": [
                {"id": "gate", "geometry": {"coordinates": [77.0, 13.0]}, "properties": {}}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn state_without_dataset_reports_none() {
        let state = AppState::from_dataset(None);
        assert!(state.dataset().is_none());
    }

    #[test]
    fn clones_share_the_same_dataset() {
        let state = AppState::from_dataset(Some(one_feature_dataset()));
        let clone = state.clone();

        assert_eq!(state.dataset().unwrap().len(), 1);
        assert_eq!(clone.dataset().unwrap().len(), 1);
    }

    #[test]
    fn load_failure_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::load(dir.path().join("missing.geojson"));
        assert!(state.dataset().is_none());
    }

    #[test]
    fn debug_reports_dataset_presence() {
        let state = AppState::from_dataset(Some(one_feature_dataset()));
        let debug = format!("{:?}", state);

        assert!(debug.contains("dataset_loaded: true"));
        assert!(debug.contains("features: 1"));
    }
}
