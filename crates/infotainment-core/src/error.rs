//! Error types for the infotainment core

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Error, Debug)]
pub enum CoreError {
    /// A key outside the 12-key keypad reached the PIN gatekeeper
    #[error("Invalid key: {0:?}")]
    InvalidKey(char),

    /// Submitted PIN did not match the stored secret
    #[error("Wrong PIN. Try again.")]
    SecretMismatch,

    /// A referenced asset (image, model, music folder) is absent
    #[error("Resource missing: {}", .0.display())]
    ResourceMissing(PathBuf),

    #[error("Invalid PIN secret: {0}")]
    InvalidSecret(String),

    #[error("Unknown screen: {0}")]
    UnknownScreen(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
