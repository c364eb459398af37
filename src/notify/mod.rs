//! User-facing notices (toasts) raised on failure and success paths.

use parking_lot::Mutex;
use tracing::{info, warn};

use crate::api::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Default,
    Destructive,
}

/// A displayable message with a severity flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: Option<String>,
    pub description: String,
    pub severity: Severity,
}

impl Notice {
    pub fn new(title: Option<&str>, description: &str, severity: Severity) -> Self {
        Self {
            title: title.map(str::to_string),
            description: description.to_string(),
            severity,
        }
    }

    pub fn login_required() -> Self {
        Self::new(
            Some("Login required."),
            "You need to be logged in to do that.",
            Severity::Destructive,
        )
    }

    pub fn vote_not_registered() -> Self {
        Self::new(
            Some("Something went wrong."),
            "Your vote was not registered. Please try again.",
            Severity::Destructive,
        )
    }

    pub fn post_published() -> Self {
        Self::new(None, "Your post has been published.", Severity::Default)
    }

    pub fn post_failed(err: &ApiError) -> Self {
        match err {
            ApiError::Unauthorized => Self::login_required(),
            ApiError::InvalidPayload(reason) => Self {
                title: Some("Something went wrong.".to_string()),
                description: reason.to_string(),
                severity: Severity::Destructive,
            },
            _ => Self::new(
                Some("Something went wrong."),
                "Your post was not published. Please try again.",
                Severity::Destructive,
            ),
        }
    }

    pub fn community_created(name: &str) -> Self {
        Self {
            title: None,
            description: format!("Community r/{name} has been created."),
            severity: Severity::Default,
        }
    }

    pub fn community_failed(err: &ApiError) -> Self {
        match err {
            ApiError::Unauthorized => Self::login_required(),
            ApiError::Conflict { .. } => Self::new(
                Some("Community already exists."),
                "Please choose a different community name.",
                Severity::Destructive,
            ),
            ApiError::Validation { .. } | ApiError::InvalidPayload(_) => Self::new(
                Some("Invalid community name."),
                "Please choose a name between 3 and 21 characters.",
                Severity::Destructive,
            ),
            _ => Self::new(
                Some("There was an error."),
                "Could not create community.",
                Severity::Destructive,
            ),
        }
    }

    /// Title and description on one line.
    pub fn text(&self) -> String {
        match &self.title {
            Some(title) => format!("{} {}", title, self.description),
            None => self.description.clone(),
        }
    }
}

/// Sink for notices. Implementations must be callable from any task.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Writes notices to the tracing log.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice.severity {
            Severity::Default => info!(target: "forumkit::notice", "{}", notice.text()),
            Severity::Destructive => warn!(target: "forumkit::notice", "{}", notice.text()),
        }
    }
}

/// Keeps every notice in memory, in arrival order.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().clone()
    }

    pub fn take(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.notices.lock())
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().push(notice);
    }
}
