use std::fmt;

use serde::{Deserialize, Serialize};

use super::{bounded, ValidationError};

pub const COMMUNITY_NAME_MIN: usize = 3;
pub const COMMUNITY_NAME_MAX: usize = 21;

/// A community name that passed length checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommunityName(String);

impl CommunityName {
    pub fn parse(name: &str) -> Result<Self, ValidationError> {
        bounded("Community name", name, COMMUNITY_NAME_MIN, COMMUNITY_NAME_MAX).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommunityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body of `POST /api/community`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityCreationRequest {
    pub name: String,
}

impl From<&CommunityName> for CommunityCreationRequest {
    fn from(name: &CommunityName) -> Self {
        Self {
            name: name.as_str().to_string(),
        }
    }
}
