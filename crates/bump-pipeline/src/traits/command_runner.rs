use std::path::Path;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("failed to spawn '{command}'")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to wait for '{command}'")]
    Wait {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("command '{command}' exited with {}", code.map_or_else(|| "signal".to_string(), |c| format!("status {c}")))]
    Failed { command: String, code: Option<i32> },

    #[error("command '{command}' did not finish within {limit:?}")]
    TimedOut { command: String, limit: Duration },
}

/// Runs operator-supplied shell commands (hooks, publish).
pub trait CommandRunner: Send + Sync {
    /// Runs `command` in `cwd`, waiting for it to finish.
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be spawned, exits
    /// unsuccessfully, or exceeds the runner's time limit.
    fn run(&self, command: &str, cwd: &Path) -> Result<(), CommandError>;
}
