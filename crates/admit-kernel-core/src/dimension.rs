//! Capability dimensions, execution contexts and capability profiles.
//!
//! Every admission decision looks at exactly five named axes of trust.
//! Both the ambient [`ExecutionContext`] and the [`CapabilityProfile`] a
//! command requires carry one lattice element per axis.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::types::Capability;

/// One named axis of trust.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Host,
    Context,
    Runtime,
    Command,
    Financial,
}

impl Dimension {
    /// All dimensions, in the fixed order decisions fold over them.
    pub const ALL: [Dimension; 5] = [
        Dimension::Host,
        Dimension::Context,
        Dimension::Runtime,
        Dimension::Command,
        Dimension::Financial,
    ];

    /// The wire key for this dimension.
    pub const fn as_str(self) -> &'static str {
        match self {
            Dimension::Host => "host",
            Dimension::Context => "context",
            Dimension::Runtime => "runtime",
            Dimension::Command => "command",
            Dimension::Financial => "financial",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Dimension::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| CoreError::UnknownDimension(s.to_string()))
    }
}

/// Anything that carries one capability per dimension.
pub trait Dimensions {
    /// The capability on the given axis.
    fn get(&self, dimension: Dimension) -> &Capability;

    /// All five labels in [`Dimension::ALL`] order.
    fn labels(&self) -> [&str; 5] {
        Dimension::ALL.map(|d| self.get(d).as_str())
    }
}

/// The capability level each dimension requires (or provides).
///
/// All five fields are mandatory and no others are allowed; deserializing a
/// map that lacks one, or carries an unknown key, fails.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CapabilityProfile {
    pub host: Capability,
    pub context: Capability,
    pub runtime: Capability,
    pub command: Capability,
    pub financial: Capability,
}

impl CapabilityProfile {
    /// Create a profile from the five dimension values.
    pub fn new(
        host: impl Into<Capability>,
        context: impl Into<Capability>,
        runtime: impl Into<Capability>,
        command: impl Into<Capability>,
        financial: impl Into<Capability>,
    ) -> Self {
        Self {
            host: host.into(),
            context: context.into(),
            runtime: runtime.into(),
            command: command.into(),
            financial: financial.into(),
        }
    }

    /// Create a profile with the same capability on every dimension.
    pub fn uniform(capability: impl Into<Capability>) -> Self {
        let c = capability.into();
        Self::new(c.clone(), c.clone(), c.clone(), c.clone(), c)
    }

    /// Return a copy with one dimension replaced.
    pub fn with(mut self, dimension: Dimension, capability: impl Into<Capability>) -> Self {
        let slot = match dimension {
            Dimension::Host => &mut self.host,
            Dimension::Context => &mut self.context,
            Dimension::Runtime => &mut self.runtime,
            Dimension::Command => &mut self.command,
            Dimension::Financial => &mut self.financial,
        };
        *slot = capability.into();
        self
    }

    /// Build a profile from a loose key-value map.
    ///
    /// Every dimension key must be present. Unknown keys are rejected.
    pub fn from_map<K, V>(map: impl IntoIterator<Item = (K, V)>) -> Result<Self>
    where
        K: AsRef<str>,
        V: Into<Capability>,
    {
        let mut slots: BTreeMap<Dimension, Capability> = BTreeMap::new();
        for (key, value) in map {
            let dimension: Dimension = key.as_ref().parse()?;
            slots.insert(dimension, value.into());
        }

        let mut take = |d: Dimension| slots.remove(&d).ok_or(CoreError::MissingDimension(d));
        Ok(Self {
            host: take(Dimension::Host)?,
            context: take(Dimension::Context)?,
            runtime: take(Dimension::Runtime)?,
            command: take(Dimension::Command)?,
            financial: take(Dimension::Financial)?,
        })
    }
}

impl Dimensions for CapabilityProfile {
    fn get(&self, dimension: Dimension) -> &Capability {
        match dimension {
            Dimension::Host => &self.host,
            Dimension::Context => &self.context,
            Dimension::Runtime => &self.runtime,
            Dimension::Command => &self.command,
            Dimension::Financial => &self.financial,
        }
    }
}

/// The ambient trust level under which an operation is attempted.
///
/// Immutable once constructed: there are no setters, only accessors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExecutionContext {
    dims: CapabilityProfile,
}

impl ExecutionContext {
    /// Create a context from the five dimension values.
    pub fn new(
        host: impl Into<Capability>,
        context: impl Into<Capability>,
        runtime: impl Into<Capability>,
        command: impl Into<Capability>,
        financial: impl Into<Capability>,
    ) -> Self {
        Self {
            dims: CapabilityProfile::new(host, context, runtime, command, financial),
        }
    }

    /// Create a context with the same capability on every dimension.
    pub fn uniform(capability: impl Into<Capability>) -> Self {
        Self {
            dims: CapabilityProfile::uniform(capability),
        }
    }

    /// The host dimension.
    pub fn host(&self) -> &Capability {
        &self.dims.host
    }

    /// The context dimension.
    pub fn context(&self) -> &Capability {
        &self.dims.context
    }

    /// The runtime dimension.
    pub fn runtime(&self) -> &Capability {
        &self.dims.runtime
    }

    /// The command dimension.
    pub fn command(&self) -> &Capability {
        &self.dims.command
    }

    /// The financial dimension.
    pub fn financial(&self) -> &Capability {
        &self.dims.financial
    }
}

impl From<CapabilityProfile> for ExecutionContext {
    fn from(dims: CapabilityProfile) -> Self {
        Self { dims }
    }
}

impl Dimensions for ExecutionContext {
    fn get(&self, dimension: Dimension) -> &Capability {
        self.dims.get(dimension)
    }
}
