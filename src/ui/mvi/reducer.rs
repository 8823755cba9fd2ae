use super::intent::Intent;
use super::state::UiState;

/// Pure state transition: (State, Intent) -> State.
pub trait Reducer {
    type State: UiState;

    type Intent: Intent;

    /// Returns the next state. Must not touch the document or the network.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
