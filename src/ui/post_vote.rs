//! Vote widget for one mounted post.
//!
//! Owns the reconciler state and is the only thing that mutates it.
//! Confirmations run as spawned tasks that report back over a channel;
//! the owner applies those outcomes on its own task via
//! [`PostVoteView::next_outcome`] or [`PostVoteView::drain`].

use std::collections::HashMap;
use std::sync::Arc;

use scopeguard::ScopeGuard;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::notify::{Notice, Notifier};
use crate::ui::mvi::Reducer;
use crate::ui::vote::{
    PostVoteState, RejectionKind, Ticket, VoteDispatcher, VoteIntent, VoteReducer, VoteSnapshot,
    VoteState, VoteType,
};

/// Server-provided values a post is first displayed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InitialVote {
    pub score: i64,
    /// `None` when the user never voted or is signed out.
    pub vote: Option<VoteState>,
}

/// What happened when an outcome was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Confirmed(Ticket),
    Rejected(Ticket, RejectionKind),
    /// Outcome for a ticket the ledger no longer holds.
    Stale(Ticket),
}

#[derive(Debug)]
struct VoteOutcome {
    ticket: Ticket,
    result: Result<(), RejectionKind>,
}

pub struct PostVoteView {
    post_id: String,
    state: PostVoteState,
    dispatcher: Arc<dyn VoteDispatcher>,
    notifier: Arc<dyn Notifier>,
    outcome_tx: mpsc::UnboundedSender<VoteOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<VoteOutcome>,
    in_flight: HashMap<Ticket, JoinHandle<()>>,
}

impl PostVoteView {
    pub fn mount(
        post_id: impl Into<String>,
        initial: InitialVote,
        dispatcher: Arc<dyn VoteDispatcher>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let post_id = post_id.into();
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        debug!(post_id = %post_id, score = initial.score, vote = ?initial.vote, "Mounted vote view");

        Self {
            post_id,
            state: PostVoteState::seeded(initial.score, initial.vote),
            dispatcher,
            notifier,
            outcome_tx,
            outcome_rx,
            in_flight: HashMap::new(),
        }
    }

    pub fn post_id(&self) -> &str {
        &self.post_id
    }

    pub fn vote(&self) -> VoteState {
        self.state.vote()
    }

    pub fn score(&self) -> i64 {
        self.state.score()
    }

    pub fn snapshot(&self) -> VoteSnapshot {
        self.state.snapshot()
    }

    pub fn state(&self) -> &PostVoteState {
        &self.state
    }

    /// Confirmations that have not reported back yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    /// Applies the vote optimistically, then sends it to the server.
    ///
    /// Returns `None` without dispatching anything when the score cannot
    /// take the vote. Must be called from within a tokio runtime.
    pub fn click(&mut self, vote_type: VoteType) -> Option<Ticket> {
        let ticket = self.state.next_ticket();
        self.dispatch(VoteIntent::Cast { vote_type });
        if !self.state.is_pending(ticket) {
            warn!(
                post_id = %self.post_id,
                %vote_type,
                score = self.state.score(),
                "Vote would overflow the score, ignored"
            );
            return None;
        }
        debug!(
            post_id = %self.post_id,
            %ticket,
            %vote_type,
            vote = %self.state.vote(),
            score = self.state.score(),
            "Applied vote optimistically"
        );

        let dispatcher = Arc::clone(&self.dispatcher);
        let outcome_tx = self.outcome_tx.clone();
        let post_id = self.post_id.clone();
        let handle = tokio::spawn(async move {
            // Fires if the task is torn down before reporting, which is how a
            // panicking dispatcher ends. The ticket then settles as a rejection.
            let unreported = scopeguard::guard(outcome_tx, move |tx| {
                let _ = tx.send(VoteOutcome {
                    ticket,
                    result: Err(RejectionKind::Other),
                });
            });
            let result = dispatcher.confirm(&post_id, vote_type).await;
            let outcome_tx = ScopeGuard::into_inner(unreported);
            // Receiver is gone once the view unmounts.
            let _ = outcome_tx.send(VoteOutcome { ticket, result });
        });
        self.in_flight.insert(ticket, handle);

        Some(ticket)
    }

    /// Resets the user's vote from fresh server data. Score is kept.
    pub fn sync(&mut self, vote: Option<VoteState>) {
        let vote = vote.unwrap_or_default();
        if vote != self.state.vote() {
            debug!(post_id = %self.post_id, %vote, "Synced vote from server data");
        }
        self.dispatch(VoteIntent::Sync { vote });
    }

    /// Waits for the next confirmation outcome and applies it.
    ///
    /// Returns `None` when nothing is in flight.
    pub async fn next_outcome(&mut self) -> Option<Settlement> {
        if self.in_flight.is_empty() {
            return None;
        }
        let outcome = self.outcome_rx.recv().await?;
        Some(self.apply(outcome))
    }

    /// Applies every outcome that has already arrived, without waiting.
    pub fn drain(&mut self) -> Vec<Settlement> {
        let mut settled = Vec::new();
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            settled.push(self.apply(outcome));
        }
        settled
    }

    /// Tears the view down. Outstanding confirmations are abandoned and
    /// their responses never reach any state.
    pub fn unmount(self) {
        info!(
            post_id = %self.post_id,
            abandoned = self.in_flight.len(),
            "Unmounted vote view"
        );
    }

    fn apply(&mut self, outcome: VoteOutcome) -> Settlement {
        let VoteOutcome { ticket, result } = outcome;
        self.in_flight.remove(&ticket);

        if !self.state.is_pending(ticket) {
            debug!(post_id = %self.post_id, %ticket, "Ignoring stale vote outcome");
            return Settlement::Stale(ticket);
        }

        match result {
            Ok(()) => {
                self.dispatch(VoteIntent::Confirmed { ticket });
                debug!(post_id = %self.post_id, %ticket, "Vote confirmed");
                Settlement::Confirmed(ticket)
            }
            Err(kind) => {
                self.dispatch(VoteIntent::Rejected { ticket });
                warn!(
                    post_id = %self.post_id,
                    %ticket,
                    ?kind,
                    vote = %self.state.vote(),
                    score = self.state.score(),
                    "Vote rejected, rolled back"
                );
                self.notifier.notify(match kind {
                    RejectionKind::Unauthenticated => Notice::login_required(),
                    RejectionKind::Other => Notice::vote_not_registered(),
                });
                Settlement::Rejected(ticket, kind)
            }
        }
    }

    fn dispatch(&mut self, intent: VoteIntent) {
        let state = std::mem::take(&mut self.state);
        self.state = VoteReducer::reduce(state, intent);
    }
}

impl Drop for PostVoteView {
    fn drop(&mut self) {
        for (_, handle) in self.in_flight.drain() {
            handle.abort();
        }
    }
}
