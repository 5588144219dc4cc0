use mdwrap::engine::error::WrapperError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Wrapper(#[from] WrapperError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// The process exit code for this error: the wrapped tool's own code when it ran and
    /// failed, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Wrapper(WrapperError::SubprocessFailure {
                code: Some(code), ..
            }) => *code,
            _ => 1,
        }
    }
}
