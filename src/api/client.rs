use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::COOKIE;
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::config::ApiConfig;
use crate::ui::vote::{RejectionKind, VoteDispatcher, VoteType};
use crate::validators::{CommunityCreationRequest, CommunityName, PostDraft, PostVoteRequest};

pub const VOTE_PATH: &str = "/api/community/post/vote";
pub const COMMUNITY_PATH: &str = "/api/community";
pub const POST_CREATE_PATH: &str = "/api/community/post/create";

/// HTTP client for the forum's JSON API.
pub struct ForumClient {
    client: Client,
    base_url: String,
    timeout: Duration,
    session: Option<String>,
}

impl ForumClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let timeout = Duration::from_secs(u64::from(config.timeout_seconds));
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .timeout(timeout)
            .build()
            .map_err(ApiError::ClientBuild)?;

        let session = config
            .session_token
            .as_ref()
            .map(|token| format!("{}={}", config.session_cookie, token));

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout,
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    /// Casts or retracts a vote. Sending the user's current vote again
    /// retracts it server-side.
    pub async fn vote(&self, post_id: &str, vote_type: VoteType) -> Result<(), ApiError> {
        let payload = PostVoteRequest::new(post_id, vote_type)?;
        let builder = self.client.patch(self.url(VOTE_PATH));
        self.send_json(builder, &payload).await?;
        Ok(())
    }

    /// Creates a community and returns its name as the server stored it.
    pub async fn create_community(&self, name: &CommunityName) -> Result<String, ApiError> {
        let payload = CommunityCreationRequest::from(name);
        let builder = self.client.post(self.url(COMMUNITY_PATH));
        let response = self.send_json(builder, &payload).await?;

        let created = response.text().await.map_err(|e| self.transport_error(e))?;
        Ok(created.trim().to_string())
    }

    pub async fn create_post(&self, draft: &PostDraft) -> Result<(), ApiError> {
        let builder = self.client.post(self.url(POST_CREATE_PATH));
        self.send_json(builder, draft).await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send_json<T: Serialize + ?Sized>(
        &self,
        builder: RequestBuilder,
        payload: &T,
    ) -> Result<Response, ApiError> {
        let request_id = Uuid::new_v4().to_string();
        let mut builder = builder
            .header("x-request-id", &request_id)
            .json(payload);

        if let Some(session) = &self.session {
            builder = builder.header(COOKIE, session);
        }

        let response = builder.send().await.map_err(|e| self.transport_error(e))?;
        let status = response.status();

        if status.is_success() {
            debug!(request_id = %request_id, status = status.as_u16(), "Request succeeded");
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        let err = ApiError::from_status(status.as_u16(), message);
        warn!(
            request_id = %request_id,
            status = status.as_u16(),
            error_type = err.error_type(),
            "Request failed"
        );
        Err(err)
    }

    fn transport_error(&self, source: reqwest::Error) -> ApiError {
        if source.is_timeout() {
            ApiError::Timeout {
                duration: self.timeout.as_secs(),
            }
        } else {
            ApiError::Connection {
                base_url: self.base_url.clone(),
                source,
            }
        }
    }
}

#[async_trait]
impl VoteDispatcher for ForumClient {
    async fn confirm(&self, post_id: &str, vote_type: VoteType) -> Result<(), RejectionKind> {
        self.vote(post_id, vote_type)
            .await
            .map_err(|err| err.rejection_kind())
    }
}
