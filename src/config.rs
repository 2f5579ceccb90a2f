//! Repository configuration
//!
//! Configuration comes from the environment, the same way commit authorship
//! does in git: `MINIGIT_COMMIT_DATE` pins the timestamp recorded in new
//! commits (format `%Y-%m-%d %H:%M:%S %z`), which makes commit ids
//! reproducible in scripts and tests.

use crate::METADATA_DIR;
use chrono::{DateTime, FixedOffset};

pub const COMMIT_DATE_ENV: &str = "MINIGIT_COMMIT_DATE";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    metadata_dir: String,
    commit_date: Option<DateTime<FixedOffset>>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            metadata_dir: METADATA_DIR.to_string(),
            commit_date: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let commit_date = std::env::var(COMMIT_DATE_ENV).ok().and_then(|raw| {
            match DateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT) {
                Ok(date) => Some(date),
                Err(err) => {
                    tracing::warn!(value = %raw, %err, "ignoring unparsable {COMMIT_DATE_ENV}");
                    None
                }
            }
        });

        Config {
            commit_date,
            ..Config::default()
        }
    }

    pub fn with_commit_date(mut self, commit_date: DateTime<FixedOffset>) -> Self {
        self.commit_date = Some(commit_date);
        self
    }

    pub fn metadata_dir(&self) -> &str {
        &self.metadata_dir
    }

    /// Timestamp to record in the next commit
    pub fn commit_timestamp(&self) -> DateTime<FixedOffset> {
        self.commit_date
            .unwrap_or_else(|| chrono::Local::now().fixed_offset())
    }
}
