//! Path values at each provenance stage, and the transitions between them.
//!
//! Each stage is its own type and there are no `From` conversions between
//! them. The only way to obtain a [`MemoryPath`] is [`resolve`], which takes
//! a [`LogicalPath`]; the only way to turn a [`HostPath`] into anything is
//! [`adapt`]. Host input therefore cannot reach the memory stage without
//! passing through the logical stage.

use std::convert::Infallible;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ProvenanceError, Result};
use crate::stage::Stage;

/// Namespace assigned to logical paths adapted from host input.
pub const HOST_NAMESPACE: &str = "host";

/// Implemented by every path type to report which stage it is in.
pub trait Provenance {
    /// The stage every value of this type is in.
    const STAGE: Stage;

    /// Runtime view of [`Self::STAGE`].
    fn stage(&self) -> Stage {
        Self::STAGE
    }
}

/// A raw, untrusted path string originating outside the system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HostPath {
    raw: String,
}

impl HostPath {
    /// Wrap untrusted input without inspecting it.
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The raw input, exactly as received.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl Provenance for HostPath {
    const STAGE: Stage = Stage::Host;
}

/// A `(namespace, key)` identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LogicalPath {
    namespace: String,
    key: String,
}

impl LogicalPath {
    /// Create a logical path in an explicit namespace.
    pub fn new(namespace: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            key: key.into(),
        }
    }

    /// The namespace, `"host"` for adapted input.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The key within the namespace.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for LogicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.key)
    }
}

impl Provenance for LogicalPath {
    const STAGE: Stage = Stage::Logical;
}

/// A resolved in-memory artifact: a logical path plus its content hash and
/// load time.
///
/// There is no public constructor and no `Deserialize` impl; the only way
/// in is [`resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MemoryPath {
    logical: LogicalPath,
    sha256: String,
    loaded_at_utc: String,
}

impl MemoryPath {
    /// The logical path this artifact was resolved from.
    pub fn logical(&self) -> &LogicalPath {
        &self.logical
    }

    /// Content hash as supplied to [`resolve`]. Not verified here.
    pub fn sha256(&self) -> &str {
        &self.sha256
    }

    /// Load timestamp as supplied to [`resolve`].
    pub fn loaded_at_utc(&self) -> &str {
        &self.loaded_at_utc
    }
}

impl Provenance for MemoryPath {
    const STAGE: Stage = Stage::Memory;
}

/// Host → Logical. Always succeeds.
pub fn adapt(host: HostPath) -> LogicalPath {
    LogicalPath {
        namespace: HOST_NAMESPACE.to_string(),
        key: host.raw,
    }
}

/// Logical → Memory. Always succeeds.
///
/// The hash and timestamp are caller-supplied; computing or verifying
/// them belongs to whoever loaded the artifact.
pub fn resolve(
    logical: LogicalPath,
    sha256: impl Into<String>,
    loaded_at_utc: impl Into<String>,
) -> MemoryPath {
    MemoryPath {
        logical,
        sha256: sha256.into(),
        loaded_at_utc: loaded_at_utc.into(),
    }
}

/// Host → Memory. Always fails.
///
/// The success type is uninhabited, so no call to this function can ever
/// yield a [`MemoryPath`].
pub fn forbid_host_to_memory(_host: &HostPath) -> Result<Infallible> {
    Err(ProvenanceError::ForbiddenTransition {
        from: Stage::Host,
        to: Stage::Memory,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapt_sets_host_namespace() {
        let logical = adapt(HostPath::new("foo"));
        assert_eq!(logical, LogicalPath::new("host", "foo"));
        assert_eq!(logical.namespace(), "host");
        assert_eq!(logical.key(), "foo");
    }

    #[test]
    fn test_adapt_keeps_raw_value_verbatim() {
        let raw = "../../etc/passwd\0 with spaces";
        assert_eq!(adapt(HostPath::new(raw)).key(), raw);
    }

    #[test]
    fn test_resolve_carries_inputs() {
        let logical = LogicalPath::new("host", "foo");
        let memory = resolve(logical.clone(), "abc123", "2025-01-01T00:00:00Z");

        assert_eq!(memory.logical(), &logical);
        assert_eq!(memory.sha256(), "abc123");
        assert_eq!(memory.loaded_at_utc(), "2025-01-01T00:00:00Z");
    }

    #[test]
    fn test_forbid_host_to_memory_always_fails() {
        for raw in ["", "foo", "/abs/path", "host:foo"] {
            let err = forbid_host_to_memory(&HostPath::new(raw)).unwrap_err();
            assert_eq!(
                err,
                ProvenanceError::ForbiddenTransition {
                    from: Stage::Host,
                    to: Stage::Memory,
                }
            );
        }
    }

    #[test]
    fn test_stages() {
        let host = HostPath::new("foo");
        assert_eq!(host.stage(), Stage::Host);
        let logical = adapt(host);
        assert_eq!(logical.stage(), Stage::Logical);
        let memory = resolve(logical, "abc123", "2025-01-01T00:00:00Z");
        assert_eq!(memory.stage(), Stage::Memory);
    }

    #[test]
    fn test_logical_display() {
        assert_eq!(LogicalPath::new("host", "a/b").to_string(), "host:a/b");
    }

    #[test]
    fn test_host_path_deserializes_from_string() {
        let host: HostPath = serde_json::from_str("\"input.txt\"").unwrap();
        assert_eq!(host.raw(), "input.txt");
    }

    #[test]
    fn test_memory_path_serializes() {
        let memory = resolve(LogicalPath::new("host", "foo"), "abc123", "2025-01-01T00:00:00Z");
        let value = serde_json::to_value(&memory).unwrap();
        assert_eq!(value["logical"]["namespace"], "host");
        assert_eq!(value["sha256"], "abc123");
    }
}
