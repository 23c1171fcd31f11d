pub mod git;

pub use git::GitCli;

use std::fmt;
use std::time::Duration;

#[derive(Debug)]
pub enum VcsError {
    /// The executable could not be started (missing, not permitted, bad working dir)
    Spawn {
        program: String,
        source: std::io::Error,
    },
    /// The process started but collecting its output failed
    Wait {
        command: String,
        source: std::io::Error,
    },
    NonZeroExit {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
    TimedOut {
        command: String,
        timeout: Duration,
    },
}

impl fmt::Display for VcsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VcsError::Spawn { program, source } => {
                write!(f, "Failed to run '{}': {}", program, source)
            }
            VcsError::Wait { command, source } => {
                write!(f, "Failed to wait for '{}': {}", command, source)
            }
            VcsError::NonZeroExit { command, code, stderr } => {
                let code = code.map_or_else(|| "signal".to_string(), |c| c.to_string());
                write!(f, "'{}' exited with {}: {}", command, code, stderr.trim())
            }
            VcsError::TimedOut { command, timeout } => {
                write!(
                    f,
                    "'{}' did not finish within {}",
                    command,
                    humantime::format_duration(*timeout)
                )
            }
        }
    }
}

impl std::error::Error for VcsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VcsError::Spawn { source, .. } | VcsError::Wait { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Version-control client the resolver asks about the working copy.
///
/// Only `run_command` has to be provided; the queries are built on it so a
/// fake can stand in for the real executable in tests.
#[allow(async_fn_in_trait)]
pub trait Vcs {
    /// Run the client with `args` and return its stdout, trimmed.
    async fn run_command(&self, args: &[&str]) -> Result<String, VcsError>;

    /// Name of the checked-out branch ("HEAD" when detached)
    async fn current_branch(&self) -> Result<String, VcsError> {
        let output = self.run_command(&["rev-parse", "--abbrev-ref", "HEAD"]).await?;
        Ok(output.trim().to_string())
    }

    /// Raw URL of the `origin` remote
    async fn remote_url(&self) -> Result<String, VcsError> {
        let output = self
            .run_command(&["config", "--get", "remote.origin.url"])
            .await?;
        Ok(output.trim().to_string())
    }

    /// Top-level directory of the working copy, always '/' separated
    async fn repository_root(&self) -> Result<String, VcsError> {
        let output = self.run_command(&["rev-parse", "--show-toplevel"]).await?;
        Ok(output.trim().replace('\\', "/"))
    }
}
