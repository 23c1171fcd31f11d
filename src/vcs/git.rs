use super::{Vcs, VcsError};
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// Default executable for repository queries
pub const DEFAULT_PROGRAM: &str = "git";

/// Runs the git command-line client as a subprocess
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
    working_dir: PathBuf,
    timeout: Option<Duration>,
}

impl GitCli {
    /// Client running `git` inside `working_dir`, blocking until each command exits
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            working_dir: working_dir.into(),
            timeout: None,
        }
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Kill a command that has not exited after `timeout`. `None` waits forever.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Vcs for GitCli {
    async fn run_command(&self, args: &[&str]) -> Result<String, VcsError> {
        let command = format!("{} {}", self.program, args.join(" "));

        let mut cmd = Command::new(&self.program);
        cmd.args(args)
            .current_dir(&self.working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        #[cfg(windows)]
        {
            const CREATE_NO_WINDOW: u32 = 0x0800_0000;
            cmd.creation_flags(CREATE_NO_WINDOW);
        }

        tracing::debug!("Running {} in {}", command, self.working_dir.display());

        let child = cmd.spawn().map_err(|source| {
            tracing::error!("Exception while running '{}': {}", command, source);
            VcsError::Spawn {
                program: self.program.clone(),
                source,
            }
        })?;

        // Dropping the child on timeout kills it (kill_on_drop)
        let output = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, child.wait_with_output()).await {
                Ok(result) => result,
                Err(_) => {
                    tracing::error!(
                        "'{}' timed out after {}",
                        command,
                        humantime::format_duration(limit)
                    );
                    return Err(VcsError::TimedOut {
                        command,
                        timeout: limit,
                    });
                }
            },
            None => child.wait_with_output().await,
        }
        .map_err(|source| {
            tracing::error!("Exception while waiting for '{}': {}", command, source);
            VcsError::Wait {
                command: command.clone(),
                source,
            }
        })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            tracing::error!("Git error: {}", stderr.trim());
            Err(VcsError::NonZeroExit {
                command,
                code: output.status.code(),
                stderr,
            })
        }
    }
}
