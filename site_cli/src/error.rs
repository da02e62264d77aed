//! Errors raised while building the site.
//!
//! Rendering itself is total; only config and output I/O can fail.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("failed to read config {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
