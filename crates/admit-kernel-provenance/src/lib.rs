//! # Admit Kernel Provenance
//!
//! A typed state machine for path provenance.
//!
//! ## Overview
//!
//! Path values move through three stages, each its own type:
//!
//! - **HostPath**: raw, untrusted input from outside the system
//! - **LogicalPath**: a `(namespace, key)` identifier
//! - **MemoryPath**: a logical path plus content hash and load time
//!
//! ```text
//! HostPath --adapt--> LogicalPath --resolve--> MemoryPath
//! ```
//!
//! Host input can never become a memory path directly. No function takes a
//! `HostPath` and returns a `MemoryPath`; [`forbid_host_to_memory`] makes
//! the forbidden edge an explicit, always-failing operation.
//!
//! ## Usage
//!
//! ```rust
//! use admit_kernel_provenance::{adapt, resolve, forbid_host_to_memory, HostPath};
//!
//! let host = HostPath::new("config/app.toml");
//! assert!(forbid_host_to_memory(&host).is_err());
//!
//! let logical = adapt(host);
//! let memory = resolve(logical, "abc123", "2025-01-01T00:00:00Z");
//! assert_eq!(memory.logical().namespace(), "host");
//! ```
//!
//! The model records provenance only. It is not a cache and keeps no record
//! of the paths it has seen.

pub mod error;
pub mod path;
pub mod stage;

pub use error::{ProvenanceError, Result};
pub use path::{
    adapt, forbid_host_to_memory, resolve, HostPath, LogicalPath, MemoryPath, Provenance,
    HOST_NAMESPACE,
};
pub use stage::{Stage, Transition};
