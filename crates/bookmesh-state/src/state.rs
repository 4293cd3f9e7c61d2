//! User state slice shape and initial value.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::area::Area;
use crate::profile::UserProfile;

/// Index sentinel meaning "no area selected".
pub const NO_SELECTION: i32 = -1;

/// State for the user/area selection slice.
///
/// The area list sits behind an [`Arc`] so transitions that do not touch it
/// share the previous allocation; observers can compare pointers with
/// [`Arc::ptr_eq`] to skip recomputation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserState {
    /// Ordered list of areas the user can select from.
    pub areas: Arc<Vec<Area>>,
    /// Index into `areas`, or [`NO_SELECTION`].
    ///
    /// The reducer never range-checks this; use [`UserState::selected`] for
    /// a guarded read.
    pub selected_area_index: i32,
    /// Currently selected area value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_area: Option<Area>,
    /// Signed-in user's profile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_profile: Option<UserProfile>,
}

impl UserState {
    /// Returns the initial state: no areas, nothing selected, no profile.
    pub fn initial() -> Self {
        Self {
            areas: Arc::new(Vec::new()),
            selected_area_index: NO_SELECTION,
            selected_area: None,
            user_profile: None,
        }
    }

    /// Returns the area at `selected_area_index`, if it is in range.
    pub fn selected(&self) -> Option<&Area> {
        usize::try_from(self.selected_area_index)
            .ok()
            .and_then(|index| self.areas.get(index))
    }
}

impl Default for UserState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = UserState::initial();

        assert!(state.areas.is_empty());
        assert_eq!(state.selected_area_index, NO_SELECTION);
        assert_eq!(state.selected_area, None);
        assert_eq!(state.user_profile, None);
        assert_eq!(state, UserState::default());
    }

    #[test]
    fn test_selected_guards_out_of_range() {
        let state = UserState {
            areas: Arc::new(vec![Area::new(1, "Mapo-gu")]),
            ..UserState::initial()
        };

        assert_eq!(state.selected(), None);

        let state = UserState {
            selected_area_index: 5,
            ..state
        };
        assert_eq!(state.selected(), None);

        let state = UserState {
            selected_area_index: 0,
            ..state
        };
        assert_eq!(state.selected().map(|a| a.id), Some(1));
    }
}
