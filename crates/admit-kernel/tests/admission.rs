//! End-to-end admission scenarios through the public facade.
//!
//! The lattice and registry are the testkit's reference fixtures, the same
//! ones the golden vectors are pinned against: a small trust chain with an
//! unrelated `AUDIT` branch.
//!
//! ```text
//! ROOT > TRUSTED > LOCAL        AUDIT
//!          \_____________ BOTTOM __/
//! ```

use std::sync::{Arc, Once};
use std::thread;

use admit_kernel::{
    adapt, can_execute, capabilities_for_command, forbid_host_to_memory, resolve,
    validate_command_request, CapabilityProfile, CheckMode, Decision, Denial, Dimension,
    Dimensions, ExecutionContext, GateConfig, Gatekeeper, HostPath, KernelError, RegistryError,
};
use admit_kernel_testkit::fixtures::{reference_lattice, reference_registry};
use admit_kernel_testkit::vectors::{all_vectors, gatekeeper_mismatches};
use serde_json::json;

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    });
}

#[test]
fn chain_lattice_satisfies_semilattice_laws() {
    assert!(reference_lattice().check_laws().is_empty());
}

#[test]
fn consistent_context_and_request_are_admitted() {
    init_tracing();
    let gate = Gatekeeper::new(reference_lattice(), reference_registry(), GateConfig::default());
    let ctx = ExecutionContext::uniform("TRUSTED");

    assert_eq!(gate.admit(&ctx, "status", &json!({})).unwrap(), Decision::Allow);
    assert_eq!(gate.admit(&ctx, "transfer", &json!({"amount": 10})).unwrap(), Decision::Allow);
}

#[test]
fn branch_mixing_request_is_denied_silently() {
    init_tracing();
    let gate = Gatekeeper::new(reference_lattice(), reference_registry(), GateConfig::default());
    let ctx = ExecutionContext::uniform("ROOT");

    let decision = gate.admit(&ctx, "audit-export", &json!({})).unwrap();
    assert_eq!(
        decision,
        Decision::Deny {
            reason: Denial::RequestInconsistent
        }
    );
}

#[test]
fn inconsistent_context_is_denied_even_when_request_alone_passes() {
    let lattice = reference_lattice();
    let registry = reference_registry();
    let request = capabilities_for_command(&registry, "status").unwrap();
    let ctx = ExecutionContext::new("ROOT", "ROOT", "AUDIT", "ROOT", "ROOT");

    assert!(lattice.execution_allowed(request.labels()));
    assert!(!can_execute(&lattice, &ctx, request));
}

#[test]
fn audit_context_separates_independent_and_pairwise_modes() {
    init_tracing();
    let ctx = ExecutionContext::uniform("LOCAL");

    let literal = Gatekeeper::new(
        reference_lattice(),
        reference_registry(),
        GateConfig::default(),
    );
    assert!(literal
        .admit(&ctx, "transfer", &json!({}))
        .unwrap()
        .is_allowed());

    let pairwise = Gatekeeper::new(
        reference_lattice(),
        reference_registry(),
        GateConfig {
            mode: CheckMode::Pairwise,
        },
    );
    // meet(LOCAL, TRUSTED) = LOCAL on every dimension, which is not bottom,
    // so the chain alone does not separate the modes. AUDIT does.
    assert!(pairwise
        .admit(&ctx, "transfer", &json!({}))
        .unwrap()
        .is_allowed());

    let audit_ctx = ExecutionContext::uniform("AUDIT");
    assert!(literal.admit(&audit_ctx, "status", &json!({})).unwrap().is_allowed());
    assert_eq!(
        pairwise.admit(&audit_ctx, "status", &json!({})).unwrap(),
        Decision::Deny {
            reason: Denial::DimensionInsufficient(Dimension::Host)
        }
    );
}

#[test]
fn registry_errors_propagate() {
    let registry = reference_registry();

    assert_eq!(
        validate_command_request(&registry, "nonexistent", &json!({})),
        Err(RegistryError::UnknownCommand("nonexistent".into()))
    );
    assert_eq!(
        validate_command_request(&registry, "status", &json!("not-a-mapping")),
        Err(RegistryError::ArgsNotObject("string"))
    );
    assert_eq!(validate_command_request(&registry, "status", &json!({})), Ok(()));
}

#[test]
fn capabilities_for_command_returns_stored_profile() {
    let registry = reference_registry();
    assert_eq!(
        capabilities_for_command(&registry, "transfer").unwrap(),
        &CapabilityProfile::new("TRUSTED", "TRUSTED", "ROOT", "TRUSTED", "ROOT")
    );
}

#[test]
fn provenance_errors_convert_into_kernel_errors() {
    fn load_directly(raw: &str) -> Result<(), KernelError> {
        forbid_host_to_memory(&HostPath::new(raw))?;
        Ok(())
    }

    assert!(matches!(load_directly("foo"), Err(KernelError::Provenance(_))));

    let memory = resolve(adapt(HostPath::new("foo")), "abc123", "2025-01-01T00:00:00Z");
    assert_eq!(memory.logical().key(), "foo");
}

#[test]
fn gatekeeper_is_shareable_across_threads() {
    let gate = Arc::new(Gatekeeper::new(
        reference_lattice(),
        reference_registry(),
        GateConfig::default(),
    ));

    let handles: Vec<_> = ["ROOT", "TRUSTED", "LOCAL", "AUDIT"]
        .into_iter()
        .map(|level| {
            let gate = Arc::clone(&gate);
            thread::spawn(move || {
                gate.admit(&ExecutionContext::uniform(level), "status", &json!({}))
                    .unwrap()
                    .is_allowed()
            })
        })
        .collect();

    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    // Independent mode: every uniform context is self-consistent, and the
    // request is too.
    assert_eq!(results, vec![true, true, true, true]);
}

#[test]
fn facade_decisions_match_golden_vectors() {
    init_tracing();
    assert!(!all_vectors().is_empty());
    assert_eq!(gatekeeper_mismatches(CheckMode::Independent), Vec::<&str>::new());
    assert_eq!(gatekeeper_mismatches(CheckMode::Pairwise), Vec::<&str>::new());
}
