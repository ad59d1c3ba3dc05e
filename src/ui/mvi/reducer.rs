//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The only place state transitions happen.
pub trait Reducer {
    type State: UiState;

    type Intent: Intent;

    /// Pure `(State, Intent) -> State`. Side effects belong to the caller.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
