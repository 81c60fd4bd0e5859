use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Filesystem step that failed.
#[derive(Debug, Error, Diagnostic, PartialEq, Eq, Clone, Copy)]
pub enum FileOperation {
    #[error("reading the manifest")]
    Read,
    #[error("writing a placeholder file")]
    Write,
    #[error("creating the target directory")]
    Mkdir,
}

#[derive(Debug, Error, Diagnostic)]
#[error("Filesystem error while {operation}: '{path}'")]
#[diagnostic(
    code(husk::io),
    help("Check permissions, that the filename is valid, and that no regular file sits at the directory path.")
)]
pub struct IoError {
    pub operation: FileOperation,
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}
impl IoError {
    pub fn new(operation: FileOperation, path: PathBuf, error: std::io::Error) -> Self {
        Self {
            operation,
            path,
            source: error,
        }
    }

    pub fn read(path: impl Into<PathBuf>, error: std::io::Error) -> Self {
        Self::new(FileOperation::Read, path.into(), error)
    }

    pub fn write(path: impl Into<PathBuf>, error: std::io::Error) -> Self {
        Self::new(FileOperation::Write, path.into(), error)
    }

    pub fn mkdir(path: impl Into<PathBuf>, error: std::io::Error) -> Self {
        Self::new(FileOperation::Mkdir, path.into(), error)
    }
}
