use precis_core::PrecisError;
use serde::Deserialize;

/// Limits and identity for HTTP fetches.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Total request timeout, in seconds.
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
    /// Response bodies longer than this are truncated.
    pub max_bytes: usize,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            connect_timeout_secs: 10,
            max_bytes: 5_000_000,
            user_agent: concat!("precis/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl FetchConfig {
    pub fn validate(&self) -> Result<(), PrecisError> {
        if self.timeout_secs == 0 || self.connect_timeout_secs == 0 {
            return Err(PrecisError::Config(
                "fetch timeouts must be positive".to_string(),
            ));
        }
        if self.max_bytes == 0 {
            return Err(PrecisError::Config(
                "fetch max_bytes must be positive".to_string(),
            ));
        }
        if self.user_agent.trim().is_empty() {
            return Err(PrecisError::Config(
                "fetch user_agent must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
