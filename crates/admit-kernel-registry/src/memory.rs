//! In-memory implementation of the CommandRegistry trait.
//!
//! Hosts that already hold their command table in memory (or tests) can
//! use this directly. It is immutable once shared: all mutation happens
//! through `&mut self` before it is handed to a gatekeeper.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{RegistryError, Result};
use crate::traits::{CommandEntry, CommandRegistry};

/// A command registry backed by a sorted map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryRegistry {
    commands: BTreeMap<String, CommandEntry>,
}

impl MemoryRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a command, returning the previous entry.
    pub fn insert(&mut self, entry: CommandEntry) -> Option<CommandEntry> {
        self.commands.insert(entry.name.clone(), entry)
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_command(mut self, entry: CommandEntry) -> Self {
        self.insert(entry);
        self
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Build a registry from an already-loaded document.
    ///
    /// Expected shape:
    ///
    /// ```json
    /// { "commands": { "<name>": { "required_capabilities": { "host": "...", ... } } } }
    /// ```
    ///
    /// The map key is authoritative for the command name. Reading the
    /// document from disk or a config service is the caller's concern.
    pub fn from_value(document: &Value) -> Result<Self> {
        let commands = document
            .get("commands")
            .and_then(Value::as_object)
            .ok_or_else(|| {
                RegistryError::MalformedRegistry("missing `commands` object".to_string())
            })?;

        let mut registry = Self::new();
        for (name, raw) in commands {
            let mut entry = CommandEntry::deserialize(raw).map_err(|e| {
                RegistryError::MalformedRegistry(format!("command `{}`: {}", name, e))
            })?;
            entry.name = name.clone();
            registry.insert(entry);
        }

        debug!(commands = registry.len(), "built command registry from document");
        Ok(registry)
    }
}

impl CommandRegistry for MemoryRegistry {
    fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.commands.get(name)
    }

    fn command_names(&self) -> Vec<&str> {
        self.commands.keys().map(String::as_str).collect()
    }
}

impl FromIterator<CommandEntry> for MemoryRegistry {
    fn from_iter<I: IntoIterator<Item = CommandEntry>>(iter: I) -> Self {
        let mut registry = Self::new();
        for entry in iter {
            registry.insert(entry);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use admit_kernel_core::CapabilityProfile;
    use serde_json::json;

    fn document() -> Value {
        json!({
            "commands": {
                "deploy": {
                    "required_capabilities": {
                        "host": "TRUSTED",
                        "context": "TRUSTED",
                        "runtime": "TRUSTED",
                        "command": "TRUSTED",
                        "financial": "NONE"
                    },
                    "description": "ship it"
                },
                "status": {
                    "required_capabilities": {
                        "host": "LOCAL",
                        "context": "LOCAL",
                        "runtime": "LOCAL",
                        "command": "LOCAL",
                        "financial": "LOCAL"
                    }
                }
            }
        })
    }

    #[test]
    fn test_from_value() {
        let registry = MemoryRegistry::from_value(&document()).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.command_names(), vec!["deploy", "status"]);

        let deploy = registry.get("deploy").unwrap();
        assert_eq!(deploy.name, "deploy");
        assert_eq!(deploy.description.as_deref(), Some("ship it"));
        assert_eq!(
            deploy.required_capabilities,
            CapabilityProfile::new("TRUSTED", "TRUSTED", "TRUSTED", "TRUSTED", "NONE")
        );
        assert!(registry.contains("status"));
        assert!(!registry.contains("rollback"));
    }

    #[test]
    fn test_from_value_rejects_missing_commands() {
        let err = MemoryRegistry::from_value(&json!({"cmds": {}})).unwrap_err();
        assert!(matches!(err, RegistryError::MalformedRegistry(_)));
    }

    #[test]
    fn test_from_value_rejects_missing_dimension() {
        let doc = json!({
            "commands": {
                "broken": {
                    "required_capabilities": { "host": "LOCAL" }
                }
            }
        });
        let err = MemoryRegistry::from_value(&doc).unwrap_err();
        match err {
            RegistryError::MalformedRegistry(msg) => assert!(msg.contains("broken")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_value_rejects_unknown_dimension() {
        let doc = json!({
            "commands": {
                "extra": {
                    "required_capabilities": {
                        "host": "LOCAL", "context": "LOCAL", "runtime": "LOCAL",
                        "command": "LOCAL", "financial": "LOCAL", "network": "LOCAL"
                    }
                }
            }
        });
        match MemoryRegistry::from_value(&doc).unwrap_err() {
            RegistryError::MalformedRegistry(msg) => {
                assert!(msg.contains("extra"));
                assert!(msg.contains("network"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_insert_replaces() {
        let mut registry = MemoryRegistry::new();
        assert!(registry
            .insert(CommandEntry::new("a", CapabilityProfile::uniform("X")))
            .is_none());
        let previous = registry.insert(CommandEntry::new("a", CapabilityProfile::uniform("Y")));
        assert_eq!(previous.unwrap().required_capabilities, CapabilityProfile::uniform("X"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_collect_from_entries() {
        let registry: MemoryRegistry = ["b", "a"]
            .into_iter()
            .map(|n| CommandEntry::new(n, CapabilityProfile::uniform("X")))
            .collect();
        assert_eq!(registry.command_names(), vec!["a", "b"]);
    }
}
