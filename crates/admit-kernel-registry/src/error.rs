//! Error types for command registries.

use thiserror::Error;

/// Errors that can occur while looking up or validating a command.
///
/// These propagate to whoever is dispatching the command; the gatekeeper
/// never catches them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Command name is not in the registry.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Argument payload was not a key-value object.
    #[error("args must be an object, got {0}")]
    ArgsNotObject(&'static str),

    /// Argument payload was rejected by an argument validator.
    #[error("invalid args for {command}: {reason}")]
    InvalidArgs { command: String, reason: String },

    /// A registry document could not be turned into entries.
    #[error("malformed registry: {0}")]
    MalformedRegistry(String),
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
