use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures of a patch run. A missing anchor or an already-applied
/// patch is not an error, it is an [`Outcome`](crate::patch::Outcome).
#[derive(Debug, Error)]
pub enum PatchError {
    #[error("cannot read {path}: {source}")]
    FileNotReadable { path: PathBuf, source: io::Error },

    #[error("cannot write {path}: {source}")]
    WriteFailure { path: PathBuf, source: io::Error },

    #[error("invalid patch set {path}: {source}")]
    PatchSetInvalid {
        path: PathBuf,
        source: serde_json::Error,
    },
}
