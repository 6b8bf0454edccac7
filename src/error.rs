use std::io;
use std::path::PathBuf;

use appiconset_core::ManifestError;
use thiserror::Error;

pub type Result<T, E = IconsetError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum IconsetError {
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("{action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to decode source image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to render {filename}: {source}")]
    Transform {
        filename: String,
        #[source]
        source: image::ImageError,
    },
    #[error(transparent)]
    Manifest(#[from] ManifestError),
    #[error("iconset at {} is inconsistent: {problems}", path.display())]
    Verify { path: PathBuf, problems: String },
}

impl IconsetError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        IconsetError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}
