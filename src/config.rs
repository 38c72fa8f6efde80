//! Factory settings (JSON):
//! ```text
//! {
//!     "kind": "thread-safe" | "non-thread-safe",
//!     "capacity": <initial capacity or null>
//! }
//! ```
use crate::Error;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Which flavour of set the [`factory`](crate::factory) produces.
#[derive(Debug, Display, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SetKind {
    #[display("thread-safe")]
    ThreadSafe,
    #[default]
    #[display("non-thread-safe")]
    NonThreadSafe,
}

impl FromStr for SetKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "thread-safe" | "ts" => Ok(SetKind::ThreadSafe),
            "non-thread-safe" | "nts" => Ok(SetKind::NonThreadSafe),
            _ => Err(Error::UnknownKind(s.to_string())),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub kind: SetKind,
    /// Pre-allocation hint, never a limit.
    pub capacity: Option<usize>,
}

impl Config {
    pub fn from_file(filepath: impl AsRef<Path>) -> Result<Self, Error> {
        let buf = fs::read(filepath)?;
        Ok(serde_json::from_slice(&buf)?)
    }

    pub fn save(&self, filepath: impl AsRef<Path>) -> Result<(), Error> {
        let json_bytes = serde_json::to_vec_pretty(self)?;
        fs::write(filepath, json_bytes)?;
        Ok(())
    }
}
