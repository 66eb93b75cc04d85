//! Error types for the page model

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("carousel has no slides")]
    NoSlides,

    #[error("no image files found in directory: {}", .0.display())]
    NoImages(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid page config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("unknown section: {0}")]
    UnknownSection(String),

    #[error("duplicate section: {0}")]
    DuplicateSection(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
