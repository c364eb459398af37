use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Where the forum server lives and how to talk to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme, host and port of the forum (e.g., "https://forum.example.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Cookie the server reads the session from.
    #[serde(default = "default_session_cookie")]
    pub session_cookie: String,
    /// Session token. Unset means requests go out signed out.
    #[serde(default)]
    pub session_token: Option<String>,
}

fn default_base_url() -> String {
    "http://127.0.0.1:3000".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_session_cookie() -> String {
    "next-auth.session-token".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            session_cookie: default_session_cookie(),
            session_token: None,
        }
    }
}
