//! # Admit Kernel Core
//!
//! Pure primitives for the Admit Kernel: the capability lattice and the five
//! capability dimensions.
//!
//! This crate contains no I/O, no storage, no networking. It is pure
//! computation over immutable values that are safe to share across threads.
//!
//! ## Key Types
//!
//! - [`CapabilityLattice`] - Meet-semilattice over capability labels
//! - [`LatticeBuilder`] - Validating constructor for lattices
//! - [`ExecutionContext`] - Ambient trust level, one capability per dimension
//! - [`CapabilityProfile`] - Capability level a command requires
//!
//! ## Example
//!
//! ```rust
//! use admit_kernel_core::LatticeBuilder;
//!
//! let lattice = LatticeBuilder::new()
//!     .define("TRUSTED", "TRUSTED", "TRUSTED")
//!     .define_symmetric("TRUSTED", "LOCAL", "LOCAL")
//!     .define("LOCAL", "LOCAL", "LOCAL")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(lattice.meet("TRUSTED", "LOCAL"), "LOCAL");
//! assert!(lattice.execution_allowed(["TRUSTED", "LOCAL"]));
//! assert!(!lattice.execution_allowed(["TRUSTED", "REMOTE"]));
//! ```

pub mod dimension;
pub mod error;
pub mod lattice;
pub mod types;

pub use dimension::{CapabilityProfile, Dimension, Dimensions, ExecutionContext};
pub use error::{CoreError, Result};
pub use lattice::{CapabilityLattice, LatticeBuilder, LawViolation, DEFAULT_BOTTOM};
pub use types::Capability;
