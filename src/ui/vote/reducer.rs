//! Reducer for the post vote reconciler.

use crate::ui::mvi::Reducer;

use super::intent::VoteIntent;
use super::state::{PendingVote, PostVoteState, VoteSnapshot};

/// Pure vote transitions.
///
/// Dispatching the confirmation request and showing notices are the
/// caller's job, around the reduce call.
pub struct VoteReducer;

impl Reducer for VoteReducer {
    type State = PostVoteState;
    type Intent = VoteIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            VoteIntent::Cast { vote_type } => {
                let ticket = state.next_ticket();
                let rollback = state.current;
                let Some((applied, delta)) = rollback.apply(vote_type) else {
                    // Score out of range: nothing applied, no ticket issued.
                    return state;
                };

                state.current = applied;
                state.ledger.push_back(PendingVote {
                    ticket,
                    intent: vote_type,
                    rollback,
                    delta,
                    confirmed: false,
                });
                state.next_ticket += 1;
                state
            }

            VoteIntent::Confirmed { ticket } => {
                if let Some(entry) = state
                    .ledger
                    .iter_mut()
                    .find(|entry| entry.ticket == ticket)
                {
                    entry.confirmed = true;
                }
                prune_settled(&mut state);
                state
            }

            VoteIntent::Rejected { ticket } => {
                let Some(index) = state
                    .ledger
                    .iter()
                    .position(|entry| entry.ticket == ticket && !entry.confirmed)
                else {
                    // Stale or already resolved.
                    return state;
                };

                let Some(rejected) = state.ledger.remove(index) else {
                    return state;
                };

                if index == state.ledger.len() {
                    // Newest intent: undo exactly what it applied.
                    let score = state
                        .current
                        .score
                        .checked_sub(rejected.delta)
                        .unwrap_or(rejected.rollback.score);
                    state.current = VoteSnapshot::new(rejected.rollback.vote, score);
                } else {
                    // Later intents were stacked on top: rebase them onto
                    // the rejected intent's rollback point.
                    let mut current = rejected.rollback;
                    for entry in state.ledger.iter_mut().skip(index) {
                        entry.rollback = current;
                        // An intent that no longer fits in range replays as a no-op.
                        let (applied, delta) = current.apply(entry.intent).unwrap_or((current, 0));
                        entry.delta = delta;
                        current = applied;
                    }
                    state.current = current;
                }

                prune_settled(&mut state);
                state
            }

            VoteIntent::Sync { vote } => {
                state.current.vote = vote;
                state
            }
        }
    }
}

/// Drops confirmed entries that no older unsettled entry can still replay.
fn prune_settled(state: &mut PostVoteState) {
    while state.ledger.front().is_some_and(|entry| entry.confirmed) {
        state.ledger.pop_front();
    }
}
