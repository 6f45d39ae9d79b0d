use std::fmt;

use serde::{Deserialize, Serialize};

/// Build metadata stamped in by `build.rs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildInfo {
    pub version: String,
    pub git_hash: String,
    pub build_profile: String,
    pub build_timestamp: String,
    pub target: String,
}

impl BuildInfo {
    pub fn new() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            git_hash: option_env!("REPO_VERSION").unwrap_or("unknown").to_string(),
            build_profile: option_env!("BUILD_PROFILE")
                .unwrap_or("unknown")
                .to_string(),
            build_timestamp: option_env!("BUILD_TIMESTAMP")
                .unwrap_or("unknown")
                .to_string(),
            target: option_env!("BUILD_TARGET").unwrap_or("unknown").to_string(),
        }
    }

    pub fn short_hash(&self) -> &str {
        match self.git_hash.get(..7) {
            Some(short) if self.git_hash.len() > 7 => short,
            _ => &self.git_hash,
        }
    }

    /// Value sent as the `User-Agent` header
    pub fn user_agent(&self) -> String {
        format!("dockops/{} ({})", self.version, self.short_hash())
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) {} build for {}, built {}",
            self.version,
            self.short_hash(),
            self.build_profile,
            self.target,
            self.build_timestamp
        )
    }
}
