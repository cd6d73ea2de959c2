//! Admin endpoint configuration types

use serde::{Deserialize, Serialize};

use crate::constants::ADMIN_KEY_HEADER;

/// Administrative endpoint configuration
///
/// Admin endpoints refuse every request while `enabled` is false.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Accept admin requests
    pub enabled: bool,
    /// Header carrying the admin key
    pub header: String,
    /// Shared admin key
    pub key: Option<String>,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            header: ADMIN_KEY_HEADER.to_string(),
            key: None,
        }
    }
}

impl AdminConfig {
    /// Enabled config with the given key
    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            enabled: true,
            key: Some(key.into()),
            ..Self::default()
        }
    }

    /// Whether `candidate` matches the configured key
    pub fn accepts(&self, candidate: &str) -> bool {
        self.enabled
            && self
                .key
                .as_deref()
                .is_some_and(|key| !key.is_empty() && constant_time_eq(key, candidate))
    }
}

impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("enabled", &self.enabled)
            .field("header", &self.header)
            .field("key", &self.key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

fn constant_time_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
