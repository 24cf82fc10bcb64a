//! Point store: the observable outcome of loading the well collection.
//!
//! The load is the pipeline's only asynchronous boundary. Consumers see it
//! as a three-state signal and always get a complete snapshot: pending and
//! failed loads expose an empty point set.

use std::sync::Arc;

use broend_map_point_models::Point;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

use crate::SourceError;

/// Coarse status of a [`LoadState`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LoadStatus {
    /// The collection is still being fetched.
    Pending,
    /// The collection loaded.
    Loaded,
    /// The load failed.
    Failed,
}

/// State of the well collection.
///
/// The loaded snapshot is shared and never mutated; a reload replaces it.
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    /// Nothing loaded yet.
    #[default]
    Pending,
    /// A complete snapshot of the loaded wells.
    Loaded(Arc<[Point]>),
    /// The load failed with the given message.
    Failed(String),
}

impl LoadState {
    /// Wraps a loaded point set.
    #[must_use]
    pub fn loaded(points: Vec<Point>) -> Self {
        Self::Loaded(points.into())
    }

    /// Converts a loader result into state, recording a failure as data.
    #[must_use]
    pub fn from_result(result: Result<Vec<Point>, SourceError>) -> Self {
        match result {
            Ok(points) => Self::loaded(points),
            Err(e) => {
                log::error!("Failed to load wells: {e}");
                Self::Failed(e.to_string())
            }
        }
    }

    /// Returns the coarse status.
    #[must_use]
    pub const fn status(&self) -> LoadStatus {
        match self {
            Self::Pending => LoadStatus::Pending,
            Self::Loaded(_) => LoadStatus::Loaded,
            Self::Failed(_) => LoadStatus::Failed,
        }
    }

    /// Whether the load is still in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Whether a snapshot is available.
    #[must_use]
    pub const fn has_value(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// The failure message, if the load failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// The current points; empty unless loaded.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        match self {
            Self::Loaded(points) => &points[..],
            Self::Pending | Self::Failed(_) => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(id: i64) -> Point {
        Point {
            id,
            street_name: "Vesterbrogade".to_string(),
            street_code: "0870".to_string(),
            cluster_id: Some(1),
            latitude: 55.67,
            longitude: 12.55,
            status: "Gældende".to_string(),
            well_type: None,
            parking_distance_m: 3.0,
            recorded_at: None,
        }
    }

    #[test]
    fn pending_exposes_empty_points() {
        let state = LoadState::default();
        assert!(state.is_loading());
        assert!(!state.has_value());
        assert!(state.points().is_empty());
        assert!(state.error().is_none());
    }

    #[test]
    fn failure_is_recorded_as_data() {
        let state = LoadState::from_result(Err(SourceError::Format {
            message: "bad".to_string(),
        }));
        assert_eq!(state.status(), LoadStatus::Failed);
        assert_eq!(state.error(), Some("Format error: bad"));
        assert!(state.points().is_empty());
    }

    #[test]
    fn loaded_exposes_snapshot() {
        let state = LoadState::loaded(vec![point(1), point(2)]);
        assert!(state.has_value());
        assert_eq!(state.points().len(), 2);
        assert_eq!(state.status().as_ref(), "loaded");
    }
}
