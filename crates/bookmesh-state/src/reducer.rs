//! Pure reducer for the user state slice.

use std::sync::Arc;

use crate::action::Action;
use crate::state::UserState;

/// Seam between a state container and the transition logic it runs.
///
/// Implementations must be pure: no I/O, no clock, no randomness, and no
/// failure path. The container owns sequencing; the reducer only computes.
pub trait Reducer {
    /// State type this reducer advances.
    type State;
    /// Action type this reducer consumes.
    type Action;

    /// Computes the next state for one action.
    fn reduce(state: Self::State, action: &Self::Action) -> Self::State;
}

/// Reducer for [`UserState`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UserReducer;

impl Reducer for UserReducer {
    type State = UserState;
    type Action = Action;

    fn reduce(state: UserState, action: &Action) -> UserState {
        reduce(state, action)
    }
}

/// Computes the next user state for one action.
///
/// Total and never panics. Actions the slice does not recognize return the
/// input state as-is, so unrelated traffic on a shared dispatch channel is
/// harmless here. Every changed field is a freshly built value; untouched
/// fields keep their previous values, and the area list keeps its previous
/// allocation.
pub fn reduce(state: UserState, action: &Action) -> UserState {
    match action {
        Action::SetAreas { areas } => UserState {
            areas: Arc::new(areas.clone()),
            ..state
        },
        Action::SetSelectedAreaIndex { index } => UserState {
            selected_area_index: *index,
            ..state
        },
        Action::SetSelectedArea { area } => UserState {
            selected_area: Some(area.clone()),
            ..state
        },
        Action::AddArea { area } => {
            let mut areas = Vec::with_capacity(state.areas.len() + 1);
            areas.extend_from_slice(&state.areas);
            areas.push(area.clone());

            UserState {
                areas: Arc::new(areas),
                ..state
            }
        }
        Action::SetUserProfile { profile } => UserState {
            user_profile: Some(profile.clone()),
            ..state
        },
        _ => state,
    }
}
