//! Environment-driven configuration.
//!
//! | Variable     | Default                                |
//! |--------------|----------------------------------------|
//! | `TO_EMAIL`   | `account-holder@localhost`             |
//! | `FROM_EMAIL` | `Account Summary <no-reply@localhost>` |
//! | `SUBJECT`    | `Transaction Summary`                  |
//! | `TXN_STORE`  | unset: transactions kept in memory     |
//! | `OUTBOX_DIR` | unset: messages written to stdout      |
//!
//! Empty values count as unset.

use crate::error::{Result, SummaryError};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_TO_EMAIL: &str = "account-holder@localhost";
pub const DEFAULT_FROM_EMAIL: &str = "Account Summary <no-reply@localhost>";
pub const DEFAULT_SUBJECT: &str = "Transaction Summary";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub to_email: String,
    pub from_email: String,
    pub subject: String,
    /// CSV file transactions are appended to
    pub store_path: Option<PathBuf>,
    /// Directory receiving one `.eml` per processed file
    pub outbox_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            to_email: DEFAULT_TO_EMAIL.to_string(),
            from_email: DEFAULT_FROM_EMAIL.to_string(),
            subject: DEFAULT_SUBJECT.to_string(),
            store_path: None,
            outbox_dir: None,
        }
    }
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let defaults = Config::default();
        let config = Config {
            to_email: get("TO_EMAIL").unwrap_or(defaults.to_email),
            from_email: get("FROM_EMAIL").unwrap_or(defaults.from_email),
            subject: get("SUBJECT").unwrap_or(defaults.subject),
            store_path: get("TXN_STORE").map(PathBuf::from),
            outbox_dir: get("OUTBOX_DIR").map(PathBuf::from),
        };

        if let Some(dir) = &config.outbox_dir {
            if !dir.is_dir() {
                return Err(SummaryError::Config(format!(
                    "OUTBOX_DIR {} is not a directory",
                    dir.display()
                )));
            }
        }

        Ok(config)
    }
}
