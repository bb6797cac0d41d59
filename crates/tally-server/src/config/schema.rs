use std::time::Duration;

use serde::Deserialize;
use tally_core::counter::{RetryPolicy, DEFAULT_RETRIES, DEFAULT_RETRY_DELAY};
use tally_core::error::{Result, TallyError};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TallyConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub store: StoreSection,
}

impl TallyConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(TallyError::BadRequest("version must be 1".into()));
        }

        self.store.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreSection {
    #[serde(default = "default_store_url")]
    pub url: String,

    #[serde(default = "default_counter_key")]
    pub key: String,

    #[serde(default)]
    pub retry: RetrySection,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            url: default_store_url(),
            key: default_counter_key(),
            retry: RetrySection::default(),
        }
    }
}

impl StoreSection {
    pub fn validate(&self) -> Result<()> {
        if self.key.is_empty() {
            return Err(TallyError::BadRequest("store.key must not be empty".into()));
        }
        self.retry.validate()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RetrySection {
    #[serde(default = "default_retries")]
    pub retries: u32,

    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl Default for RetrySection {
    fn default() -> Self {
        Self {
            retries: default_retries(),
            delay_ms: default_delay_ms(),
        }
    }
}

impl RetrySection {
    pub fn validate(&self) -> Result<()> {
        if self.retries > 100 {
            return Err(TallyError::BadRequest(
                "store.retry.retries must be at most 100".into(),
            ));
        }
        if self.delay_ms > 60_000 {
            return Err(TallyError::BadRequest(
                "store.retry.delay_ms must be at most 60000".into(),
            ));
        }
        Ok(())
    }

    /// Convert the parsed section into the core policy type.
    pub fn policy(&self) -> RetryPolicy {
        RetryPolicy {
            retries: self.retries,
            delay: Duration::from_millis(self.delay_ms),
        }
    }
}

fn default_listen() -> String {
    "0.0.0.0:8000".into()
}
fn default_store_url() -> String {
    "redis://redis:6379".into()
}
fn default_counter_key() -> String {
    "hits".into()
}
fn default_retries() -> u32 {
    DEFAULT_RETRIES
}
fn default_delay_ms() -> u64 {
    DEFAULT_RETRY_DELAY.as_millis() as u64
}
