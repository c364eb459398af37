use super::intent::Intent;
use super::state::UiState;

/// The single place where view state changes.
///
/// `reduce` is a pure function `(State, Intent) -> State`. Anything with a
/// side effect belongs to the caller.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
