//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_forum;
pub mod scripted;

use std::net::TcpListener;
use std::path::PathBuf;
use tempfile::TempDir;

/// Find a port nothing is listening on.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Create a temporary config file with the given `[api]` body.
pub fn temp_config(api_body: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");

    let content = format!("[api]\n{}\n", api_body);
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
