//! # Admit Kernel
//!
//! The unified API for the Admit access-control decision kernel.
//!
//! ## Overview
//!
//! The Admit Kernel decides whether an operation may run, given the
//! capabilities of the execution context and of the requested command:
//!
//! - **Capability Lattice**: a meet-semilattice over capability labels; a
//!   set of capabilities is admissible iff its meet is not bottom
//! - **Path Provenance**: typed stages host → logical → memory, with the
//!   host → memory shortcut unrepresentable
//! - **Gatekeeper**: combines the context's five dimensions and the
//!   request's five dimensions through the lattice
//!
//! ## Key Concepts
//!
//! - **Dimension**: one of host, context, runtime, command, financial
//! - **Bottom**: "no capability"; absorbing under meet
//! - **Denial**: a normal `false` / [`Decision::Deny`], never an error
//! - **Registry**: external, read-only table of commands and the
//!   capabilities they require
//!
//! ## Usage
//!
//! ```rust
//! use admit_kernel::{
//!     CapabilityProfile, CommandEntry, ExecutionContext, GateConfig, Gatekeeper,
//!     LatticeBuilder, MemoryRegistry,
//! };
//! use serde_json::json;
//!
//! let lattice = LatticeBuilder::new()
//!     .define("TRUSTED", "TRUSTED", "TRUSTED")
//!     .define("LOCAL", "LOCAL", "LOCAL")
//!     .define_symmetric("TRUSTED", "LOCAL", "LOCAL")
//!     .build()
//!     .unwrap();
//!
//! let registry = MemoryRegistry::new()
//!     .with_command(CommandEntry::new("status", CapabilityProfile::uniform("LOCAL")));
//!
//! let gate = Gatekeeper::new(lattice, registry, GateConfig::default());
//! let ctx = ExecutionContext::uniform("TRUSTED");
//!
//! let decision = gate.admit(&ctx, "status", &json!({})).unwrap();
//! assert!(decision.is_allowed());
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `admit_kernel::core` - Lattice, dimensions, contexts
//! - `admit_kernel::provenance` - Path provenance model
//! - `admit_kernel::registry` - Command registry seam

pub mod args;
pub mod error;
pub mod gate;

// Re-export component crates
pub use admit_kernel_core as core;
pub use admit_kernel_provenance as provenance;
pub use admit_kernel_registry as registry;

// Re-export main types for convenience
pub use args::{ArgsValidator, DeferredArgsValidator};
pub use error::{KernelError, Result};
pub use gate::{
    can_execute, can_execute_with, capabilities_for_command, evaluate, validate_command_request,
    validate_command_request_with, CheckMode, Decision, Denial, GateConfig, Gatekeeper,
};

// Re-export commonly used component types
pub use admit_kernel_core::{
    Capability, CapabilityLattice, CapabilityProfile, Dimension, Dimensions, ExecutionContext,
    LatticeBuilder,
};
pub use admit_kernel_provenance::{
    adapt, forbid_host_to_memory, resolve, HostPath, LogicalPath, MemoryPath,
};
pub use admit_kernel_registry::{CommandEntry, CommandRegistry, MemoryRegistry, RegistryError};
