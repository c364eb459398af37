use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{bounded, non_empty, ValidationError};

pub const TITLE_MIN: usize = 3;
pub const TITLE_MAX: usize = 128;

/// Body of `POST /api/community/post/create`.
///
/// `content` is the editor's block document. It is passed through
/// verbatim and never inspected here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    pub title: String,
    pub content: Option<Value>,
    pub community_id: String,
}

impl PostDraft {
    pub fn new(
        title: &str,
        content: Option<Value>,
        community_id: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            title: bounded("Title", title, TITLE_MIN, TITLE_MAX)?,
            content,
            community_id: non_empty("Community id", community_id)?,
        })
    }
}
