use serde::{Deserialize, Serialize};

use super::{non_empty, ValidationError};
use crate::ui::vote::VoteType;

/// Body of `PATCH /api/community/post/vote`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostVoteRequest {
    pub post_id: String,
    pub vote_type: VoteType,
}

impl PostVoteRequest {
    pub fn new(post_id: &str, vote_type: VoteType) -> Result<Self, ValidationError> {
        Ok(Self {
            post_id: non_empty("Post id", post_id)?,
            vote_type,
        })
    }
}
