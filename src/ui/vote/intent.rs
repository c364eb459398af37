//! Intents for the post vote reconciler.

use crate::ui::mvi::Intent;

use super::state::{Ticket, VoteState, VoteType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoteIntent {
    /// User clicked an arrow. Applied optimistically under the next ticket.
    Cast { vote_type: VoteType },

    /// Server recorded the vote sent under `ticket`.
    Confirmed { ticket: Ticket },

    /// Server refused the vote sent under `ticket`.
    Rejected { ticket: Ticket },

    /// Fresh server data changed the user's vote outside a local click.
    /// Score is left untouched.
    Sync { vote: VoteState },
}

impl Intent for VoteIntent {}
