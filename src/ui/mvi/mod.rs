//! Model-View-Intent primitives shared by the client view models.
//!
//! ```text
//! click / server outcome ──→ Intent ──→ Reducer ──→ State ──→ view
//!          ↑                                                  │
//!          └──────────────────────────────────────────────────┘
//! ```
//!
//! Reducers never perform I/O. Dispatching confirmation requests and
//! surfacing notices happens in the owner of the state, around the
//! reduce call.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
