//! Seam between the reconciler and whatever records votes.

use async_trait::async_trait;

use super::state::VoteType;

/// Why the server refused a vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionKind {
    /// Caller has no valid session.
    Unauthenticated,
    /// Anything else: duplicate vote, validation, transport failure.
    Other,
}

/// Sends a vote to the server and reports whether it was recorded.
///
/// Success carries no payload; the optimistic state is already applied.
#[async_trait]
pub trait VoteDispatcher: Send + Sync {
    async fn confirm(&self, post_id: &str, vote_type: VoteType) -> Result<(), RejectionKind>;
}
