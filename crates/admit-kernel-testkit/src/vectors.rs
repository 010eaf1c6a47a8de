//! Golden decision vectors.
//!
//! Each vector pins the decision for one context and command over the
//! reference lattice and registry, under both check modes. Any change to
//! admission semantics shows up here first.

use serde_json::json;

use admit_kernel::{evaluate, CheckMode, Decision, Denial, ExecutionContext};
use admit_kernel_core::Dimension;
use admit_kernel_registry::CommandRegistry;

use crate::fixtures::{reference_lattice, reference_registry, TestFixture};

/// A golden decision vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Context labels in host, context, runtime, command, financial order.
    pub context: [&'static str; 5],
    /// Command looked up in the reference registry.
    pub command: &'static str,
    /// Expected decision under [`CheckMode::Independent`].
    pub independent: Decision,
    /// Expected decision under [`CheckMode::Pairwise`].
    pub pairwise: Decision,
}

impl GoldenVector {
    /// The execution context this vector describes.
    pub fn execution_context(&self) -> ExecutionContext {
        let [host, context, runtime, command, financial] = self.context;
        ExecutionContext::new(host, context, runtime, command, financial)
    }

    /// The expected decision under `mode`.
    pub fn expected(&self, mode: CheckMode) -> Decision {
        match mode {
            CheckMode::Independent => self.independent,
            CheckMode::Pairwise => self.pairwise,
        }
    }
}

const fn deny(reason: Denial) -> Decision {
    Decision::Deny { reason }
}

/// Get all golden decision vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "root context runs status",
            context: ["ROOT"; 5],
            command: "status",
            independent: Decision::Allow,
            pairwise: Decision::Allow,
        },
        GoldenVector {
            name: "local context runs transfer",
            context: ["LOCAL"; 5],
            command: "transfer",
            independent: Decision::Allow,
            // every pair meets to LOCAL
            pairwise: Decision::Allow,
        },
        GoldenVector {
            name: "audit context runs status",
            context: ["AUDIT"; 5],
            command: "status",
            independent: Decision::Allow,
            pairwise: deny(Denial::DimensionInsufficient(Dimension::Host)),
        },
        GoldenVector {
            name: "audit-export mixes branches",
            context: ["ROOT"; 5],
            command: "audit-export",
            independent: deny(Denial::RequestInconsistent),
            pairwise: deny(Denial::DimensionInsufficient(Dimension::Host)),
        },
        GoldenVector {
            name: "context with audit runtime",
            context: ["ROOT", "ROOT", "AUDIT", "ROOT", "ROOT"],
            command: "status",
            independent: deny(Denial::ContextInconsistent),
            pairwise: deny(Denial::DimensionInsufficient(Dimension::Runtime)),
        },
        GoldenVector {
            name: "unknown financial label",
            context: ["ROOT", "ROOT", "ROOT", "ROOT", "GUEST"],
            command: "transfer",
            independent: deny(Denial::ContextInconsistent),
            pairwise: deny(Denial::DimensionInsufficient(Dimension::Financial)),
        },
        GoldenVector {
            name: "bottom context",
            context: ["BOTTOM"; 5],
            command: "status",
            independent: deny(Denial::ContextInconsistent),
            pairwise: deny(Denial::DimensionInsufficient(Dimension::Host)),
        },
        GoldenVector {
            name: "audit host matches audit-export",
            context: ["AUDIT", "ROOT", "ROOT", "ROOT", "ROOT"],
            command: "audit-export",
            independent: deny(Denial::ContextInconsistent),
            // met values are AUDIT, LOCAL, LOCAL, LOCAL, LOCAL
            pairwise: deny(Denial::CombinedInsufficient),
        },
    ]
}

/// Evaluate `vector` under `mode` against the reference lattice and registry.
///
/// # Panics
///
/// If the vector names a command the reference registry does not hold.
pub fn decide_vector(vector: &GoldenVector, mode: CheckMode) -> Decision {
    let lattice = reference_lattice();
    let registry = reference_registry();
    let request = registry
        .get(vector.command)
        .map(|entry| &entry.required_capabilities)
        .unwrap_or_else(|| panic!("vector '{}' names an unknown command", vector.name));
    evaluate(&lattice, &vector.execution_context(), request, mode)
}

/// Verify all golden vectors under both check modes.
///
/// Returns `(name, matches, detail)` per vector, where `detail` carries the
/// decisions actually produced.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let independent = decide_vector(v, CheckMode::Independent);
            let pairwise = decide_vector(v, CheckMode::Pairwise);
            let matches = independent == v.independent && pairwise == v.pairwise;
            let detail = format!("independent={:?} pairwise={:?}", independent, pairwise);
            (v.name.to_string(), matches, detail)
        })
        .collect()
}

/// Run every vector through a [`admit_kernel::Gatekeeper`] instead of the
/// free functions, returning the names of vectors whose decision differs.
pub fn gatekeeper_mismatches(mode: CheckMode) -> Vec<&'static str> {
    let fixture = TestFixture::new();
    let gate = fixture.gatekeeper(mode);
    all_vectors()
        .into_iter()
        .filter(|v| {
            gate.admit(&v.execution_context(), v.command, &json!({}))
                .map(|decision| decision != v.expected(mode))
                .unwrap_or(true)
        })
        .map(|v| v.name)
        .collect()
}
