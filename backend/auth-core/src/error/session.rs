use std::path::PathBuf;

use common::ErrorLocation;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session Read Error: {path}: {source} {location}")]
    ReadError {
        location: ErrorLocation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Session Write Error: {path}: {source} {location}")]
    WriteError {
        location: ErrorLocation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Session Remove Error: {path}: {source} {location}")]
    RemoveError {
        location: ErrorLocation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
