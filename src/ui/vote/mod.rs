//! Optimistic vote reconciliation for a single post.
//!
//! # Architecture
//!
//! - `state.rs` - vote/score pair, transition table, per-intent ledger
//! - `intent.rs` - click, confirmation, rejection, external sync
//! - `reducer.rs` - state transitions (pure, no side effects)
//! - `dispatch.rs` - the confirmation seam and rejection taxonomy
//!
//! Every click records its own rollback point in the ledger, so
//! overlapping confirmations resolve independently in any order.

mod dispatch;
mod intent;
mod reducer;
mod state;

pub use dispatch::{RejectionKind, VoteDispatcher};
pub use intent::VoteIntent;
pub use reducer::VoteReducer;
pub use state::{PendingVote, PostVoteState, Ticket, VoteSnapshot, VoteState, VoteType};
