//! The highlighted cluster.

use serde::{Deserialize, Serialize};

/// At most one selected cluster id.
///
/// Any id may be selected, including ones no well carries; the map simply
/// highlights nothing in that case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    cluster_id: Option<i64>,
}

impl SelectionState {
    /// Selects `cluster_id`, or clears the selection with `None`.
    pub const fn select(&mut self, cluster_id: Option<i64>) {
        self.cluster_id = cluster_id;
    }

    /// The selected cluster id.
    #[must_use]
    pub const fn current(&self) -> Option<i64> {
        self.cluster_id
    }

    /// Whether `cluster_key` is the selected cluster.
    #[must_use]
    pub fn is_selected(&self, cluster_key: i64) -> bool {
        self.cluster_id == Some(cluster_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        assert_eq!(SelectionState::default().current(), None);
    }

    #[test]
    fn select_and_clear() {
        let mut selection = SelectionState::default();
        selection.select(Some(4));
        assert_eq!(selection.current(), Some(4));
        assert!(selection.is_selected(4));
        assert!(!selection.is_selected(5));

        selection.select(Some(9));
        assert_eq!(selection.current(), Some(9));

        selection.select(None);
        assert_eq!(selection.current(), None);
        assert!(!selection.is_selected(9));
    }

    #[test]
    fn unknown_ids_are_accepted() {
        let mut selection = SelectionState::default();
        selection.select(Some(i64::MAX));
        assert_eq!(selection.current(), Some(i64::MAX));
    }
}
