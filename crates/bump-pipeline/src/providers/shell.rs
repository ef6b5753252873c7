use std::path::Path;
use std::process::Command;
use std::time::{Duration, Instant};

use crate::traits::{CommandError, CommandRunner};

const POLL_INTERVAL: Duration = Duration::from_millis(50);
const DEFAULT_LIMIT: Duration = Duration::from_secs(600);

/// Runs commands through `sh -c`, inheriting stdio so hook output
/// reaches the operator's terminal. Waits with a hard time limit
/// instead of blocking forever.
pub struct ShellRunner {
    limit: Duration,
}

impl ShellRunner {
    #[must_use]
    pub fn new() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
        }
    }

    #[must_use]
    pub fn with_limit(limit: Duration) -> Self {
        Self { limit }
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str, cwd: &Path) -> Result<(), CommandError> {
        let mut child = Command::new("sh")
            .arg("-c")
            .arg(command)
            .current_dir(cwd)
            .spawn()
            .map_err(|source| CommandError::Spawn {
                command: command.to_string(),
                source,
            })?;

        let started = Instant::now();
        loop {
            let status = child.try_wait().map_err(|source| CommandError::Wait {
                command: command.to_string(),
                source,
            })?;

            match status {
                Some(status) if status.success() => return Ok(()),
                Some(status) => {
                    return Err(CommandError::Failed {
                        command: command.to_string(),
                        code: status.code(),
                    });
                }
                None => {
                    if started.elapsed() >= self.limit {
                        let _ = child.kill();
                        let _ = child.wait();
                        return Err(CommandError::TimedOut {
                            command: command.to_string(),
                            limit: self.limit,
                        });
                    }
                    std::thread::sleep(POLL_INTERVAL);
                }
            }
        }
    }
}
