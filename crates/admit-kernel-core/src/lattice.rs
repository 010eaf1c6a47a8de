//! The capability meet-semilattice.
//!
//! A lattice is a closed table of `(a, b) -> meet(a, b)` entries plus a
//! designated bottom element meaning "no capability". Lookups are total:
//! any pair the table does not define meets to bottom, so unknown labels
//! fail closed instead of raising.
//!
//! Lattices are immutable values. Build one with [`LatticeBuilder`]; the
//! builder rejects tables where bottom is not absorbing. The remaining
//! semilattice laws (commutativity, associativity, idempotence) are the
//! table author's responsibility and can be inspected with
//! [`CapabilityLattice::check_laws`].

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, trace};

use crate::error::{CoreError, Result};
use crate::types::Capability;

/// Label used for bottom when the builder is not given one.
pub const DEFAULT_BOTTOM: &str = "BOTTOM";

/// An immutable meet-semilattice over string-labelled capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CapabilityLattice {
    /// Directed meet table: `table[a][b] = meet(a, b)`. Never holds bottom results.
    table: BTreeMap<Capability, BTreeMap<Capability, Capability>>,
    bottom: Capability,
}

impl CapabilityLattice {
    /// Start building a lattice.
    pub fn builder() -> LatticeBuilder {
        LatticeBuilder::new()
    }

    /// The bottom element.
    pub fn bottom(&self) -> &Capability {
        &self.bottom
    }

    /// Whether `label` is this lattice's bottom element.
    pub fn is_bottom(&self, label: &str) -> bool {
        self.bottom.as_str() == label
    }

    /// Number of non-bottom directed entries.
    pub fn len(&self) -> usize {
        self.table.values().map(BTreeMap::len).sum()
    }

    /// Whether every pair meets to bottom.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Iterate over stored entries as `(a, b, meet)` in sorted order.
    pub fn entries(&self) -> impl Iterator<Item = (&Capability, &Capability, &Capability)> {
        self.table
            .iter()
            .flat_map(|(a, row)| row.iter().map(move |(b, m)| (a, b, m)))
    }

    /// Every element the lattice knows about: table labels plus bottom.
    pub fn domain(&self) -> BTreeSet<&Capability> {
        let mut domain = BTreeSet::new();
        domain.insert(&self.bottom);
        for (a, b, m) in self.entries() {
            domain.insert(a);
            domain.insert(b);
            domain.insert(m);
        }
        domain
    }

    /// Meet of two elements. Pairs missing from the table meet to bottom.
    pub fn meet(&self, a: &str, b: &str) -> &Capability {
        match self.table.get(a).and_then(|row| row.get(b)) {
            Some(m) => m,
            None => &self.bottom,
        }
    }

    /// Left fold of [`meet`](Self::meet) over `caps`.
    ///
    /// An empty sequence yields bottom; a single element is returned
    /// unchanged, even if the table has never heard of it.
    pub fn meet_all<'a, I>(&'a self, caps: I) -> &'a str
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut caps = caps.into_iter();
        let Some(first) = caps.next() else {
            return self.bottom.as_str();
        };
        caps.fold(first, |acc, c| self.meet(acc, c).as_str())
    }

    /// True iff the meet of all `caps` is not bottom.
    pub fn execution_allowed<'a, I>(&'a self, caps: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        let met = self.meet_all(caps);
        trace!(bottom = %self.bottom, meet = met, "folded capabilities");
        !self.is_bottom(met)
    }

    /// Report every semilattice law the table breaks over its domain.
    ///
    /// Bottom absorption is not listed: the builder already guarantees it.
    pub fn check_laws(&self) -> Vec<LawViolation> {
        let domain: Vec<&Capability> = self.domain().into_iter().collect();
        let mut violations = Vec::new();

        for &a in &domain {
            let aa = self.meet(a.as_str(), a.as_str());
            if aa != a && !self.is_bottom(a.as_str()) {
                violations.push(LawViolation::NotIdempotent {
                    a: a.clone(),
                    result: aa.clone(),
                });
            }
        }

        for (i, &a) in domain.iter().enumerate() {
            for &b in &domain[i + 1..] {
                let ab = self.meet(a.as_str(), b.as_str());
                let ba = self.meet(b.as_str(), a.as_str());
                if ab != ba {
                    violations.push(LawViolation::NotCommutative {
                        a: a.clone(),
                        b: b.clone(),
                        ab: ab.clone(),
                        ba: ba.clone(),
                    });
                }
            }
        }

        for &a in &domain {
            for &b in &domain {
                for &c in &domain {
                    let left = self.meet(self.meet(a.as_str(), b.as_str()).as_str(), c.as_str());
                    let right = self.meet(a.as_str(), self.meet(b.as_str(), c.as_str()).as_str());
                    if left != right {
                        violations.push(LawViolation::NotAssociative {
                            a: a.clone(),
                            b: b.clone(),
                            c: c.clone(),
                            left: left.clone(),
                            right: right.clone(),
                        });
                    }
                }
            }
        }

        if !violations.is_empty() {
            debug!(
                bottom = %self.bottom,
                count = violations.len(),
                "lattice table breaks semilattice laws"
            );
        }
        violations
    }
}

/// A semilattice law the table fails to satisfy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LawViolation {
    /// `meet(a, a) != a`.
    NotIdempotent { a: Capability, result: Capability },

    /// `meet(a, b) != meet(b, a)`.
    NotCommutative {
        a: Capability,
        b: Capability,
        ab: Capability,
        ba: Capability,
    },

    /// `meet(meet(a, b), c) != meet(a, meet(b, c))`.
    NotAssociative {
        a: Capability,
        b: Capability,
        c: Capability,
        left: Capability,
        right: Capability,
    },
}

/// Builder for [`CapabilityLattice`].
#[derive(Debug, Clone, Default)]
pub struct LatticeBuilder {
    bottom: Option<Capability>,
    entries: Vec<(Capability, Capability, Capability)>,
}

impl LatticeBuilder {
    /// Create a new builder with no entries and the default bottom.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bottom element.
    pub fn bottom(mut self, bottom: impl Into<Capability>) -> Self {
        self.bottom = Some(bottom.into());
        self
    }

    /// Define `meet(a, b) = result` for this ordering only.
    pub fn define(
        mut self,
        a: impl Into<Capability>,
        b: impl Into<Capability>,
        result: impl Into<Capability>,
    ) -> Self {
        self.entries.push((a.into(), b.into(), result.into()));
        self
    }

    /// Define `meet(a, b) = meet(b, a) = result`.
    pub fn define_symmetric(
        self,
        a: impl Into<Capability>,
        b: impl Into<Capability>,
        result: impl Into<Capability>,
    ) -> Self {
        let (a, b, result) = (a.into(), b.into(), result.into());
        if a == b {
            return self.define(a, b, result);
        }
        self.define(a.clone(), b.clone(), result.clone())
            .define(b, a, result)
    }

    /// Validate the table and build the lattice.
    ///
    /// Fails if the bottom label is empty, if any entry involving bottom
    /// yields something other than bottom, or if a pair is defined twice
    /// with different results.
    pub fn build(self) -> Result<CapabilityLattice> {
        let bottom = self
            .bottom
            .unwrap_or_else(|| Capability::from(DEFAULT_BOTTOM));
        if bottom.as_str().is_empty() {
            return Err(CoreError::EmptyBottom);
        }

        let mut table: BTreeMap<Capability, BTreeMap<Capability, Capability>> = BTreeMap::new();
        for (a, b, result) in self.entries {
            if (a == bottom || b == bottom) && result != bottom {
                return Err(CoreError::BottomNotAbsorbing { a, b, result });
            }

            match table.entry(a.clone()).or_default().entry(b.clone()) {
                Entry::Occupied(existing) if *existing.get() != result => {
                    return Err(CoreError::ConflictingDefinition {
                        a,
                        b,
                        existing: existing.get().clone(),
                        new: result,
                    });
                }
                Entry::Occupied(_) => {}
                Entry::Vacant(slot) => {
                    slot.insert(result);
                }
            }
        }

        // Bottom results are implied by a lookup miss; dropping them keeps
        // equality and hashing purely observational.
        for row in table.values_mut() {
            row.retain(|_, m| *m != bottom);
        }
        table.retain(|_, row| !row.is_empty());

        let lattice = CapabilityLattice { table, bottom };

        debug!(
            bottom = %lattice.bottom,
            entries = lattice.len(),
            "built capability lattice"
        );
        Ok(lattice)
    }
}
