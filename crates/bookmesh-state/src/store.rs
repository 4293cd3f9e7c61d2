//! Minimal synchronous state container.

use crate::TRACING_TARGET;
use crate::reducer::Reducer;

/// Single-threaded state container.
///
/// Dispatch is strictly sequential: one action in, one transition out. The
/// store never runs the reducer concurrently with itself and never blocks.
pub struct Store<R: Reducer> {
    state: R::State,
}

impl<R: Reducer> Store<R>
where
    R::State: Default,
    R::Action: AsRef<str>,
{
    /// Creates a store seeded with the given state.
    pub fn new(state: R::State) -> Self {
        Self { state }
    }

    /// Borrows the current state.
    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Consumes the store and returns the final state.
    pub fn into_state(self) -> R::State {
        self.state
    }

    /// Applies one action to the current state.
    pub fn dispatch(&mut self, action: &R::Action) {
        tracing::debug!(
            target: TRACING_TARGET,
            action = action.as_ref(),
            "dispatching action"
        );

        let state = std::mem::take(&mut self.state);
        self.state = R::reduce(state, action);
    }
}

impl<R: Reducer> Default for Store<R>
where
    R::State: Default,
    R::Action: AsRef<str>,
{
    fn default() -> Self {
        Self::new(R::State::default())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::action::Action;
    use crate::area::Area;
    use crate::reducer::UserReducer;
    use crate::state::UserState;

    #[test]
    fn test_dispatch_applies_actions_in_order() {
        let mut store: Store<UserReducer> = Store::new(UserState::initial());

        store.dispatch(&Action::SetAreas {
            areas: vec![Area::new(1, "Mapo-gu")],
        });
        store.dispatch(&Action::AddArea {
            area: Area::new(2, "Jongno-gu"),
        });
        store.dispatch(&Action::SetSelectedAreaIndex { index: 1 });

        let state = store.state();
        assert_eq!(
            state.areas.iter().map(|a| a.id).collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert_eq!(state.selected().map(|a| a.id), Some(2));
    }

    #[test]
    fn test_unrecognized_dispatch_keeps_state() {
        let mut store: Store<UserReducer> = Store::default();
        store.dispatch(&Action::SetAreas {
            areas: vec![Area::new(1, "Mapo-gu")],
        });

        let areas_before = Arc::clone(&store.state().areas);
        store.dispatch(&Action::ImageUploaded {
            url: "https://example.com/a.png".into(),
        });

        assert!(Arc::ptr_eq(&store.state().areas, &areas_before));
    }

    #[test]
    fn test_into_state_returns_final_value() {
        let mut store: Store<UserReducer> = Store::default();
        store.dispatch(&Action::SetSelectedAreaIndex { index: 3 });

        assert_eq!(store.into_state().selected_area_index, 3);
    }
}
