//! Vote dispatcher whose responses the test releases by hand.

#![allow(dead_code)]

use std::time::Duration;

use async_trait::async_trait;
use forumkit::ui::vote::{RejectionKind, VoteDispatcher, VoteType};
use parking_lot::Mutex;
use tokio::sync::oneshot;

type Reply = Result<(), RejectionKind>;

struct Call {
    post_id: String,
    vote_type: VoteType,
    reply: Option<oneshot::Sender<Reply>>,
}

/// Each `confirm` parks until the test calls `resolve` for its index.
#[derive(Default)]
pub struct ScriptedDispatcher {
    calls: Mutex<Vec<Call>>,
}

impl ScriptedDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits until at least `count` confirmations have been received.
    pub async fn wait_for_calls(&self, count: usize) {
        let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
        while self.calls.lock().len() < count {
            assert!(
                tokio::time::Instant::now() < deadline,
                "timed out waiting for {} dispatched votes",
                count
            );
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
    }

    /// `(post_id, vote_type)` of every call so far, in arrival order.
    pub fn calls(&self) -> Vec<(String, VoteType)> {
        self.calls
            .lock()
            .iter()
            .map(|c| (c.post_id.clone(), c.vote_type))
            .collect()
    }

    /// Releases call `index` with `reply`. Returns false if the caller is gone.
    pub fn resolve(&self, index: usize, reply: Reply) -> bool {
        let sender = self.calls.lock()[index].reply.take();
        match sender {
            Some(sender) => sender.send(reply).is_ok(),
            None => false,
        }
    }

    /// Waits until the task behind call `index` has been dropped.
    pub async fn wait_abandoned(&self, index: usize) {
        let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
        loop {
            let closed = self.calls.lock()[index]
                .reply
                .as_ref()
                .map_or(true, |sender| sender.is_closed());
            if closed {
                return;
            }
            assert!(
                tokio::time::Instant::now() < deadline,
                "call {} was never abandoned",
                index
            );
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
    }
}

#[async_trait]
impl VoteDispatcher for ScriptedDispatcher {
    async fn confirm(&self, post_id: &str, vote_type: VoteType) -> Result<(), RejectionKind> {
        let (reply, receiver) = oneshot::channel();
        self.calls.lock().push(Call {
            post_id: post_id.to_string(),
            vote_type,
            reply: Some(reply),
        });
        receiver.await.unwrap_or(Err(RejectionKind::Other))
    }
}
