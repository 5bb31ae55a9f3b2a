//! Error types for the auto-jit override subsystem.

use autojit_config::RegistryError;

/// Errors that can occur while reading auto-jit flags or registering the
/// auto-jit getter.
#[derive(Debug, thiserror::Error)]
pub enum AutoJitError {
    /// `--auto-jit` value is neither a level nor `single-device(<level>)`.
    #[error("invalid auto-jit value `{0}`")]
    InvalidLevel(String),

    /// The flags environment variable holds non UTF-8 data.
    #[error("AUTOJIT_FLAGS is not valid unicode")]
    EnvNotUnicode,

    /// The flag string did not parse (unknown flag, missing value...).
    #[error("invalid AUTOJIT_FLAGS: {0}")]
    InvalidFlags(#[from] clap::Error),

    /// The registry already holds a getter.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}
