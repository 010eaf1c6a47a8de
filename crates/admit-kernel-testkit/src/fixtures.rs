//! Test fixtures and helpers.
//!
//! Common setup code for integration tests: a reference lattice, a sample
//! registry, and a fixture bundling both.

use serde_json::json;

use admit_kernel::{CheckMode, GateConfig, Gatekeeper};
use admit_kernel_core::{
    CapabilityLattice, CapabilityProfile, ExecutionContext, LatticeBuilder,
};
use admit_kernel_registry::MemoryRegistry;

/// Trust levels of the reference chain, highest first.
pub const CHAIN: [&str; 3] = ["ROOT", "TRUSTED", "LOCAL"];

/// A level outside the chain; it only meets with itself.
pub const ISOLATED: &str = "AUDIT";

/// Add a total order over `levels` (highest first) to `builder`.
///
/// Every pair of levels meets to the lower one.
pub fn define_chain(mut builder: LatticeBuilder, levels: &[&str]) -> LatticeBuilder {
    for (i, high) in levels.iter().enumerate() {
        for low in &levels[i..] {
            builder = builder.define_symmetric(*high, *low, *low);
        }
    }
    builder
}

/// A lattice that is exactly the total order over `levels`.
///
/// # Panics
///
/// If `levels` repeats a label or contains the bottom label.
pub fn chain_lattice(levels: &[&str]) -> CapabilityLattice {
    define_chain(LatticeBuilder::new(), levels)
        .build()
        .expect("chain levels must be distinct and non-bottom")
}

/// The reference lattice: [`CHAIN`] plus the [`ISOLATED`] branch.
pub fn reference_lattice() -> CapabilityLattice {
    define_chain(LatticeBuilder::new().define(ISOLATED, ISOLATED, ISOLATED), &CHAIN)
        .build()
        .expect("reference lattice is well-formed")
}

/// A registry with one command per interesting capability shape.
///
/// - `status`: LOCAL everywhere
/// - `transfer`: TRUSTED, with ROOT on runtime and financial
/// - `audit-export`: mixes the isolated branch with the chain
pub fn reference_registry() -> MemoryRegistry {
    MemoryRegistry::from_value(&json!({
        "commands": {
            "status": {
                "required_capabilities": {
                    "host": "LOCAL", "context": "LOCAL", "runtime": "LOCAL",
                    "command": "LOCAL", "financial": "LOCAL"
                },
                "description": "read-only health check"
            },
            "transfer": {
                "required_capabilities": {
                    "host": "TRUSTED", "context": "TRUSTED", "runtime": "ROOT",
                    "command": "TRUSTED", "financial": "ROOT"
                }
            },
            "audit-export": {
                "required_capabilities": {
                    "host": "AUDIT", "context": "LOCAL", "runtime": "LOCAL",
                    "command": "LOCAL", "financial": "LOCAL"
                }
            }
        }
    }))
    .expect("reference registry document is well-formed")
}

/// A test fixture with the reference lattice and registry.
pub struct TestFixture {
    pub lattice: CapabilityLattice,
    pub registry: MemoryRegistry,
}

impl TestFixture {
    /// Create a fixture with the reference lattice and registry.
    pub fn new() -> Self {
        Self {
            lattice: reference_lattice(),
            registry: reference_registry(),
        }
    }

    /// A gatekeeper over clones of this fixture's lattice and registry.
    pub fn gatekeeper(&self, mode: CheckMode) -> Gatekeeper<MemoryRegistry> {
        Gatekeeper::new(
            self.lattice.clone(),
            self.registry.clone(),
            GateConfig { mode },
        )
    }

    /// A context with `level` on every dimension.
    pub fn context(&self, level: &str) -> ExecutionContext {
        ExecutionContext::uniform(level)
    }

    /// A profile with `level` on every dimension.
    pub fn profile(&self, level: &str) -> CapabilityProfile {
        CapabilityProfile::uniform(level)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
