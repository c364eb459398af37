//! State for the post vote reconciler.

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ui::mvi::UiState;

/// Direction of a vote the user asked for.
///
/// Serialized as `"UP"` / `"DOWN"` to match the forum API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VoteType {
    Up,
    Down,
}

impl VoteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::Down => "DOWN",
        }
    }
}

impl fmt::Display for VoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The current user's vote on a post, as far as the client believes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VoteState {
    #[default]
    None,
    Up,
    Down,
}

impl VoteState {
    /// Applies `intent` to this state.
    ///
    /// Returns the new state and the score delta the server applies for
    /// the same transition. Repeating the current vote retracts it.
    pub fn transition(self, intent: VoteType) -> (VoteState, i64) {
        match (self, intent) {
            (VoteState::None, VoteType::Up) => (VoteState::Up, 1),
            (VoteState::None, VoteType::Down) => (VoteState::Down, -1),
            (VoteState::Up, VoteType::Up) => (VoteState::None, -1),
            (VoteState::Down, VoteType::Down) => (VoteState::None, 1),
            (VoteState::Up, VoteType::Down) => (VoteState::Down, -2),
            (VoteState::Down, VoteType::Up) => (VoteState::Up, 2),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl From<Option<VoteType>> for VoteState {
    fn from(vote: Option<VoteType>) -> Self {
        match vote {
            None => VoteState::None,
            Some(VoteType::Up) => VoteState::Up,
            Some(VoteType::Down) => VoteState::Down,
        }
    }
}

impl fmt::Display for VoteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one in-flight confirmation.
///
/// Tickets are issued in click order and never reused within a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// `(vote, score)` pair, used both as the visible state and as a rollback point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VoteSnapshot {
    pub vote: VoteState,
    pub score: i64,
}

impl VoteSnapshot {
    pub fn new(vote: VoteState, score: i64) -> Self {
        Self { vote, score }
    }

    /// Snapshot after applying `intent`, with the delta it applied.
    ///
    /// `None` when the score would leave the `i64` range.
    pub fn apply(self, intent: VoteType) -> Option<(VoteSnapshot, i64)> {
        let (vote, delta) = self.vote.transition(intent);
        let score = self.score.checked_add(delta)?;
        Some((VoteSnapshot::new(vote, score), delta))
    }
}

/// Ledger entry for an intent whose confirmation may still matter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingVote {
    pub ticket: Ticket,
    pub intent: VoteType,
    /// State immediately before this intent was applied.
    pub rollback: VoteSnapshot,
    /// Score delta this intent applied.
    pub delta: i64,
    /// Server accepted it. Kept until every older entry resolves, so a
    /// late rejection of an older intent can replay this one.
    pub confirmed: bool,
}

/// Vote reconciler state for one post.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PostVoteState {
    pub(super) current: VoteSnapshot,
    pub(super) ledger: VecDeque<PendingVote>,
    pub(super) next_ticket: u64,
}

impl UiState for PostVoteState {}

impl PostVoteState {
    /// Seeds state from server-provided values.
    pub fn seeded(score: i64, vote: Option<VoteState>) -> Self {
        Self {
            current: VoteSnapshot::new(vote.unwrap_or_default(), score),
            ledger: VecDeque::new(),
            next_ticket: 0,
        }
    }

    pub fn vote(&self) -> VoteState {
        self.current.vote
    }

    pub fn score(&self) -> i64 {
        self.current.score
    }

    pub fn snapshot(&self) -> VoteSnapshot {
        self.current
    }

    /// Ticket the next `Cast` will be issued under.
    pub fn next_ticket(&self) -> Ticket {
        Ticket(self.next_ticket)
    }

    /// Whether an outcome for `ticket` would still be applied.
    pub fn is_pending(&self, ticket: Ticket) -> bool {
        self.ledger
            .iter()
            .any(|entry| entry.ticket == ticket && !entry.confirmed)
    }

    /// Ledger entries, oldest first.
    pub fn ledger(&self) -> impl Iterator<Item = &PendingVote> {
        self.ledger.iter()
    }

    /// Number of intents still waiting on the server.
    pub fn unsettled(&self) -> usize {
        self.ledger.iter().filter(|entry| !entry.confirmed).count()
    }
}
