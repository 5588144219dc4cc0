use crate::core::files::FileError;
use crate::core::properties::OptionError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WrapperError {
    #[error(transparent)]
    File(#[from] FileError),

    #[error(transparent)]
    Option(#[from] OptionError),

    #[error("Failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' failed with {}", describe_exit(*code))]
    SubprocessFailure { program: String, code: Option<i32> },

    #[error("I/O error for '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WrapperError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        WrapperError::Io {
            path: path.into(),
            source,
        }
    }

    /// True for errors raised before any subprocess was started.
    pub fn is_validation(&self) -> bool {
        matches!(self, WrapperError::File(_) | WrapperError::Option(_))
    }
}

fn describe_exit(code: Option<i32>) -> String {
    match code {
        Some(c) => format!("exit code {}", c),
        None => "no exit code (terminated by signal)".to_string(),
    }
}
