//! Proptest generators for property-based testing.

use proptest::prelude::*;

use admit_kernel_core::{CapabilityLattice, CapabilityProfile, ExecutionContext, LatticeBuilder};
use admit_kernel_provenance::{HostPath, LogicalPath};

/// Generate a capability label. Never collides with the default bottom.
pub fn label() -> impl Strategy<Value = String> {
    "[A-Z]{1,6}".prop_filter("must not be bottom", |s| s != "BOTTOM")
}

/// Generate a lowercase hex string shaped like a sha256 digest.
pub fn sha256_hex() -> impl Strategy<Value = String> {
    any::<[u8; 32]>().prop_map(|bytes| bytes.iter().map(|b| format!("{:02x}", b)).collect())
}

/// Generate an RFC 3339 UTC timestamp string.
pub fn timestamp_utc() -> impl Strategy<Value = String> {
    (2000u32..2100, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60, 0u32..60).prop_map(
        |(y, mo, d, h, mi, s)| format!("{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z", y, mo, d, h, mi, s),
    )
}

/// Generate a raw host path, including hostile-looking input.
pub fn host_path() -> impl Strategy<Value = HostPath> {
    prop_oneof![
        "[a-z0-9_./-]{0,40}",
        "\\PC{0,40}",
        Just("../../etc/passwd".to_string()),
    ]
    .prop_map(|raw| HostPath::new(raw))
}

/// Generate a logical path in an arbitrary namespace.
pub fn logical_path() -> impl Strategy<Value = LogicalPath> {
    ("[a-z]{1,8}", "\\PC{0,40}").prop_map(|(ns, key)| LogicalPath::new(ns, key))
}

/// Generate five labels drawn from `pool`.
pub fn labels_from(pool: Vec<String>) -> impl Strategy<Value = [String; 5]> {
    prop::array::uniform5(prop::sample::select(pool))
}

/// Generate a context whose dimensions come from `pool`.
pub fn context_from(pool: Vec<String>) -> impl Strategy<Value = ExecutionContext> {
    labels_from(pool).prop_map(|[h, c, r, cmd, f]| ExecutionContext::new(h, c, r, cmd, f))
}

/// Generate a profile whose dimensions come from `pool`.
pub fn profile_from(pool: Vec<String>) -> impl Strategy<Value = CapabilityProfile> {
    labels_from(pool).prop_map(|[h, c, r, cmd, f]| CapabilityProfile::new(h, c, r, cmd, f))
}

/// Parameters for generating a chain lattice.
#[derive(Debug, Clone)]
pub struct ChainParams {
    /// Distinct levels, highest first.
    pub levels: Vec<String>,
}

impl Arbitrary for ChainParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop::collection::btree_set(label(), 1..=6)
            .prop_map(|set| set.into_iter().collect::<Vec<_>>())
            .prop_shuffle()
            .prop_map(|levels| ChainParams { levels })
            .boxed()
    }
}

/// All `(a, b, meet)` entries of the chain described by `params`.
pub fn chain_entries(params: &ChainParams) -> Vec<(String, String, String)> {
    let mut entries = Vec::new();
    for (i, high) in params.levels.iter().enumerate() {
        for low in &params.levels[i..] {
            entries.push((high.clone(), low.clone(), low.clone()));
            if high != low {
                entries.push((low.clone(), high.clone(), low.clone()));
            }
        }
    }
    entries
}

/// Build a lattice from explicit entries, in the given order.
pub fn lattice_from_entries(entries: &[(String, String, String)]) -> CapabilityLattice {
    entries
        .iter()
        .fold(LatticeBuilder::new(), |b, (x, y, m)| {
            b.define(x.as_str(), y.as_str(), m.as_str())
        })
        .build()
        .expect("generated entries are well-formed")
}

/// Build the chain lattice described by `params`.
pub fn chain_from_params(params: &ChainParams) -> CapabilityLattice {
    lattice_from_entries(&chain_entries(params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use admit_kernel::{can_execute, can_execute_with, CheckMode};
    use admit_kernel_core::Dimensions;
    use admit_kernel_provenance::{adapt, forbid_host_to_memory, resolve, HOST_NAMESPACE};

    /// A pool of chain levels plus labels the lattice does not know.
    fn pool(params: &ChainParams) -> Vec<String> {
        let mut pool = params.levels.clone();
        pool.push("STRANGER".to_string());
        pool.push("BOTTOM".to_string());
        pool
    }

    proptest! {
        #[test]
        fn test_chain_is_lawful(params: ChainParams) {
            prop_assert!(chain_from_params(&params).check_laws().is_empty());
        }

        #[test]
        fn test_bottom_absorbs(params: ChainParams, x in label()) {
            let lattice = chain_from_params(&params);
            prop_assert_eq!(lattice.meet("BOTTOM", &x), "BOTTOM");
            prop_assert_eq!(lattice.meet(&x, "BOTTOM"), "BOTTOM");
        }

        #[test]
        fn test_meet_all_is_left_fold(
            params: ChainParams,
            caps in prop::collection::vec(label(), 1..8),
        ) {
            let lattice = chain_from_params(&params);
            let mut expected = caps[0].clone();
            for c in &caps[1..] {
                expected = lattice.meet(&expected, c).as_str().to_string();
            }
            prop_assert_eq!(lattice.meet_all(caps.iter().map(String::as_str)), expected.as_str());
        }

        #[test]
        fn test_execution_allowed_iff_not_bottom(
            params: ChainParams,
            caps in prop::collection::vec(label(), 0..8),
        ) {
            let lattice = chain_from_params(&params);
            let met = lattice.meet_all(caps.iter().map(String::as_str));
            prop_assert_eq!(
                lattice.execution_allowed(caps.iter().map(String::as_str)),
                met != "BOTTOM"
            );
        }

        #[test]
        fn test_equality_ignores_insertion_order(
            shuffled in any::<ChainParams>()
                .prop_flat_map(|p| Just(chain_entries(&p)).prop_shuffle()),
        ) {
            let mut sorted = shuffled.clone();
            sorted.sort();
            prop_assert_eq!(lattice_from_entries(&shuffled), lattice_from_entries(&sorted));
        }

        #[test]
        fn test_adapt_preserves_raw(host in host_path()) {
            let raw = host.raw().to_string();
            let logical = adapt(host);
            prop_assert_eq!(logical.namespace(), HOST_NAMESPACE);
            prop_assert_eq!(logical.key(), raw.as_str());
        }

        #[test]
        fn test_resolve_preserves_inputs(
            logical in logical_path(),
            sha in sha256_hex(),
            ts in timestamp_utc(),
        ) {
            let memory = resolve(logical.clone(), sha.clone(), ts.clone());
            prop_assert_eq!(memory.logical(), &logical);
            prop_assert_eq!(memory.sha256(), sha.as_str());
            prop_assert_eq!(memory.loaded_at_utc(), ts.as_str());
        }

        #[test]
        fn test_host_to_memory_always_forbidden(host in host_path()) {
            prop_assert!(forbid_host_to_memory(&host).is_err());
        }

        #[test]
        fn test_independent_is_conjunction_of_sides(
            (params, ctx, req) in any::<ChainParams>().prop_flat_map(|p| {
                let pool = pool(&p);
                (Just(p), context_from(pool.clone()), profile_from(pool))
            }),
        ) {
            let lattice = chain_from_params(&params);
            let expected = lattice.execution_allowed(ctx.labels())
                && lattice.execution_allowed(req.labels());
            prop_assert_eq!(can_execute(&lattice, &ctx, &req), expected);
        }

        #[test]
        fn test_pairwise_on_chain_requires_known_levels(
            (params, ctx, req) in any::<ChainParams>().prop_flat_map(|p| {
                let pool = pool(&p);
                (Just(p), context_from(pool.clone()), profile_from(pool))
            }),
        ) {
            // In a chain every pair of levels meets to a level, so pairwise
            // admission fails only on labels outside the chain.
            let lattice = chain_from_params(&params);
            let known = |l: &str| params.levels.iter().any(|lv| lv == l);
            let expected = ctx.labels().into_iter().all(known)
                && req.labels().into_iter().all(known);
            prop_assert_eq!(
                can_execute_with(&lattice, &ctx, &req, CheckMode::Pairwise),
                expected
            );
        }
    }
}
