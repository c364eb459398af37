//! Client core for a community forum: optimistic post voting, the forum
//! JSON API, payload validation and user notices.

pub mod api;
pub mod cli;
pub mod config;
pub mod notify;
pub mod observability;
pub mod ui;
pub mod validators;
