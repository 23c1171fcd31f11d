use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::link::DEFAULT_ASSET_FOLDER;
use crate::vcs::git::DEFAULT_PROGRAM;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Executable used for repository queries
    pub git_program: String,
    /// Name of the project's asset folder
    pub asset_folder: String,
    /// Per-command limit such as "5s"; absent means wait until git exits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            git_program: DEFAULT_PROGRAM.to_string(),
            asset_folder: DEFAULT_ASSET_FOLDER.to_string(),
            timeout: None,
        }
    }
}

impl Config {
    /// Parse the configured timeout
    pub fn timeout(&self) -> Result<Option<Duration>> {
        self.timeout
            .as_deref()
            .map(|t| {
                humantime::parse_duration(t.trim())
                    .with_context(|| format!("timeout: invalid duration '{}'", t))
            })
            .transpose()
    }
}
