//! Crate error type
//!
//! Only two things can fail: reading settings and loading sprite assets.
//! Both happen outside the frame loop; nothing inside a frame returns an error.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A sprite could not be loaded while building a session
    #[error("failed to load image '{name}': {reason}")]
    Asset { name: String, reason: String },

    /// Settings file could not be read
    #[error("failed to read settings from {}: {source}", .path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid JSON for `Settings`
    #[error("invalid settings in {}: {source}", .path.display())]
    SettingsFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
