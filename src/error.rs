/// Error types for the showcase
///
/// None of these are fatal to the UI: config problems fall back to
/// defaults, asset problems fall back to placeholder tiles and contact
/// problems are shown inline next to the form.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Problems with a portfolio catalog definition
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("portfolio entry has an empty id")]
    EmptyId,

    #[error("portfolio entry '{0}' has an empty title")]
    EmptyTitle(String),

    #[error("duplicate portfolio id '{0}'")]
    DuplicateId(String),

    #[error("invalid portfolio JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Problems loading the site configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("portfolio file {path}: {source}")]
    Catalog {
        path: PathBuf,
        #[source]
        source: CatalogError,
    },
}

/// Problems producing a card thumbnail
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("image not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to write thumbnail {path}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("could not determine cache directory")]
    NoCacheDir,

    #[error("cache directory unavailable: {0}")]
    CacheDir(#[from] io::Error),

    #[error("thumbnail task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Why a contact form submission was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Please fill required fields")]
    MissingFields(Vec<&'static str>),

    #[error("Please enter a valid email address")]
    InvalidEmail,
}
