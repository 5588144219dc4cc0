use super::formats::FileFormat;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileError {
    #[error(
        "Format of {format} file '{path}' is not compatible. Accepted formats: {}",
        accepted.join(", "),
        path = path.display()
    )]
    InvalidFormat {
        path: PathBuf,
        format: FileFormat,
        accepted: Vec<&'static str>,
    },

    #[error("Missing required input file: {0}")]
    MissingRequiredInput(&'static str),

    #[error("Input {format} file does not exist: '{}'", path.display())]
    InputNotFound { path: PathBuf, format: FileFormat },

    #[error("Output folder does not exist for '{}'", path.display())]
    OutputDirNotFound { path: PathBuf },
}

/// A path checked against a [`FileFormat`].
///
/// References are created through one of the validating constructors and are
/// immutable afterwards. Inputs must exist on disk; outputs only need an existing
/// parent directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReference {
    path: PathBuf,
    format: FileFormat,
}

impl FileReference {
    pub fn input(path: impl Into<PathBuf>, format: FileFormat) -> Result<Self, FileError> {
        let reference = Self::with_format(path.into(), format)?;
        if !reference.path.is_file() {
            return Err(FileError::InputNotFound {
                path: reference.path,
                format,
            });
        }
        Ok(reference)
    }

    pub fn output(path: impl Into<PathBuf>, format: FileFormat) -> Result<Self, FileError> {
        let reference = Self::with_format(path.into(), format)?;
        if let Some(parent) = reference.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                return Err(FileError::OutputDirNotFound {
                    path: reference.path,
                });
            }
        }
        Ok(reference)
    }

    /// Validates an input that the operation cannot run without.
    pub fn required_input(
        name: &'static str,
        path: Option<&Path>,
        format: FileFormat,
    ) -> Result<Self, FileError> {
        let path = path.ok_or(FileError::MissingRequiredInput(name))?;
        Self::input(path, format)
    }

    /// Validates an input that may be absent. `None` passes through untouched.
    pub fn optional_input(
        path: Option<&Path>,
        format: FileFormat,
    ) -> Result<Option<Self>, FileError> {
        path.map(|p| Self::input(p, format)).transpose()
    }

    fn with_format(path: PathBuf, format: FileFormat) -> Result<Self, FileError> {
        if !format.matches(&path) {
            return Err(FileError::InvalidFormat {
                path,
                format,
                accepted: format.accepted(),
            });
        }
        Ok(Self { path, format })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> FileFormat {
        self.format
    }

    /// The path as it appears in instruction lines and argument vectors.
    pub fn to_arg(&self) -> String {
        self.path.display().to_string()
    }
}
