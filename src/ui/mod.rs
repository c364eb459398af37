//! View models for forum widgets.

pub mod mvi;
pub mod post_vote;
pub mod vote;
