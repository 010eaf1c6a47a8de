//! CommandRegistry trait: the read-only seam to whatever owns the commands.
//!
//! The kernel never loads, mutates or persists a registry. Implementations
//! include [`MemoryRegistry`](crate::MemoryRegistry); hosts can wrap their
//! own config service behind this trait.

use serde::{Deserialize, Serialize};

use admit_kernel_core::CapabilityProfile;

/// One registered command and the capabilities it requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandEntry {
    /// Command name, the registry key.
    #[serde(default)]
    pub name: String,

    /// Capability level required on each dimension.
    pub required_capabilities: CapabilityProfile,

    /// Free-text description for operators.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CommandEntry {
    pub fn new(name: impl Into<String>, required_capabilities: CapabilityProfile) -> Self {
        Self {
            name: name.into(),
            required_capabilities,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Read-only lookup of commands by name.
///
/// Implementations must be safe to query from many threads at once. If the
/// underlying table can change at runtime, synchronizing those updates is
/// the implementation's job.
pub trait CommandRegistry: Send + Sync {
    /// Look up a command by name.
    fn get(&self, name: &str) -> Option<&CommandEntry>;

    /// Whether a command with this name exists.
    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All registered command names, in a stable order.
    fn command_names(&self) -> Vec<&str>;
}

impl<R: CommandRegistry + ?Sized> CommandRegistry for &R {
    fn get(&self, name: &str) -> Option<&CommandEntry> {
        (**self).get(name)
    }

    fn command_names(&self) -> Vec<&str> {
        (**self).command_names()
    }
}

impl<R: CommandRegistry + ?Sized> CommandRegistry for std::sync::Arc<R> {
    fn get(&self, name: &str) -> Option<&CommandEntry> {
        (**self).get(name)
    }

    fn command_names(&self) -> Vec<&str> {
        (**self).command_names()
    }
}
