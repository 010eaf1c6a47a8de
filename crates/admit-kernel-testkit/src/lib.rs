//! # Admit Kernel Testkit
//!
//! Testing utilities for the Admit Kernel.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known contexts and commands with the decision each check mode must produce
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: A reference lattice and registry for setting up test scenarios
//!
//! ## Golden Vectors
//!
//! ```rust
//! use admit_kernel_testkit::vectors::verify_all_vectors;
//!
//! for (name, matches, detail) in verify_all_vectors() {
//!     assert!(matches, "{}: {}", name, detail);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use admit_kernel_testkit::generators::{chain_from_params, ChainParams};
//!
//! proptest! {
//!     #[test]
//!     fn chain_is_lawful(params: ChainParams) {
//!         prop_assert!(chain_from_params(&params).check_laws().is_empty());
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use admit_kernel::CheckMode;
//! use admit_kernel_testkit::fixtures::TestFixture;
//! use serde_json::json;
//!
//! let fixture = TestFixture::new();
//! let gate = fixture.gatekeeper(CheckMode::Independent);
//! let decision = gate.admit(&fixture.context("TRUSTED"), "status", &json!({})).unwrap();
//! assert!(decision.is_allowed());
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{chain_lattice, reference_lattice, reference_registry, TestFixture};
pub use generators::{chain_from_params, ChainParams};
pub use vectors::{all_vectors, decide_vector, verify_all_vectors, GoldenVector};
