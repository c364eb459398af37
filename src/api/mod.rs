//! Client for the forum server's JSON API.
//!
//! Endpoints:
//! - `PATCH /api/community/post/vote` - cast or retract a vote
//! - `POST /api/community` - create a community
//! - `POST /api/community/post/create` - publish a post

mod client;
mod error;

pub use client::{ForumClient, COMMUNITY_PATH, POST_CREATE_PATH, VOTE_PATH};
pub use error::ApiError;
