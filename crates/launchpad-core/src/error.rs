//! Scaffolding outcomes the CLI needs to tell apart
//!
//! Everything else travels as a plain `anyhow::Error` with context attached.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// The user aborted a prompt or declined to overwrite an existing directory
    #[error("Operation cancelled")]
    Cancelled,

    /// An external command ran but exited unsuccessfully
    #[error("`{command}` exited with status {code}{}", format_stderr(.stderr))]
    CommandFailed {
        command: String,
        code: i32,
        stderr: String,
    },

    /// An external command could not be started at all
    #[error("Failed to run `{command}`: {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Template '{name}' not found. Available templates: {available}")]
    UnknownTemplate { name: String, available: String },

    #[error("{path} does not contain a JSON object")]
    ManifestNotObject { path: String },
}

impl ScaffoldError {
    /// Process exit status for this outcome
    pub fn exit_code(&self) -> i32 {
        match self {
            ScaffoldError::Cancelled => 0,
            ScaffoldError::CommandFailed { code, .. } => *code,
            _ => 1,
        }
    }

    /// Map a prompt I/O error: an interrupted prompt means the user cancelled
    pub fn from_prompt(err: io::Error) -> anyhow::Error {
        if err.kind() == io::ErrorKind::Interrupted {
            ScaffoldError::Cancelled.into()
        } else {
            anyhow::Error::new(err).context("Prompt failed")
        }
    }
}

fn format_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(":\n{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ScaffoldError::Cancelled.exit_code(), 0);
        let failed = ScaffoldError::CommandFailed {
            command: "git clone".to_string(),
            code: 128,
            stderr: String::new(),
        };
        assert_eq!(failed.exit_code(), 128);
        let unknown = ScaffoldError::UnknownTemplate {
            name: "nope".to_string(),
            available: "default".to_string(),
        };
        assert_eq!(unknown.exit_code(), 1);
    }

    #[test]
    fn test_command_failed_includes_stderr() {
        let err = ScaffoldError::CommandFailed {
            command: "git clone".to_string(),
            code: 128,
            stderr: "fatal: repository not found\n".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("`git clone` exited with status 128"));
        assert!(msg.ends_with("fatal: repository not found"));
    }

    #[test]
    fn test_interrupted_prompt_is_cancellation() {
        let err = ScaffoldError::from_prompt(io::Error::new(io::ErrorKind::Interrupted, "esc"));
        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::Cancelled)
        ));

        let err = ScaffoldError::from_prompt(io::Error::new(io::ErrorKind::Other, "tty gone"));
        assert!(err.downcast_ref::<ScaffoldError>().is_none());
    }
}
