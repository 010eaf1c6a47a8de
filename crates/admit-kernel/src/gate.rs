//! The execution gatekeeper: answers "is this operation permitted right now".
//!
//! The free functions ([`can_execute`], [`validate_command_request`],
//! [`capabilities_for_command`]) are the whole decision contract. The
//! [`Gatekeeper`] struct bundles a lattice, a registry and configuration so
//! a dispatcher can run validate → lookup → decide in one call.

use std::fmt;

use serde_json::Value;
use tracing::{debug, trace};

use admit_kernel_core::{
    CapabilityLattice, CapabilityProfile, Dimension, Dimensions, ExecutionContext,
};
use admit_kernel_registry::{CommandRegistry, RegistryError};

use crate::args::{json_kind, ArgsValidator, DeferredArgsValidator};
use crate::error::Result;

/// How context and request capabilities are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CheckMode {
    /// Context and request are each checked for internal consistency: the
    /// five context dimensions must meet to non-bottom, and so must the five
    /// request dimensions. Context is never met against request.
    #[default]
    Independent,

    /// Each context dimension is met with its paired request dimension; every
    /// pairwise meet and the meet of all five results must be non-bottom.
    Pairwise,
}

/// Configuration for a [`Gatekeeper`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GateConfig {
    /// How capabilities are combined.
    pub mode: CheckMode,
}

/// Why an admission was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Denial {
    /// The context's own dimensions meet to bottom.
    ContextInconsistent,
    /// The request's own dimensions meet to bottom.
    RequestInconsistent,
    /// Context and request met to bottom on one dimension.
    DimensionInsufficient(Dimension),
    /// Every dimension met, but the per-dimension results meet to bottom.
    CombinedInsufficient,
}

impl fmt::Display for Denial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Denial::ContextInconsistent => f.write_str("execution context meets to bottom"),
            Denial::RequestInconsistent => f.write_str("requested capabilities meet to bottom"),
            Denial::DimensionInsufficient(d) => {
                write!(f, "context does not satisfy request on {}", d)
            }
            Denial::CombinedInsufficient => {
                f.write_str("per-dimension capabilities meet to bottom")
            }
        }
    }
}

/// Result of an admission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    Allow,
    Deny { reason: Denial },
}

impl Decision {
    /// Whether this is [`Decision::Allow`].
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }
}

/// Decide admission with the default [`CheckMode::Independent`] semantics.
///
/// True only when the context's five dimensions jointly meet to non-bottom
/// AND the request's five dimensions jointly meet to non-bottom. A denial is
/// a plain `false`, never an error.
pub fn can_execute(
    lattice: &CapabilityLattice,
    context: &ExecutionContext,
    request: &CapabilityProfile,
) -> bool {
    can_execute_with(lattice, context, request, CheckMode::Independent)
}

/// Decide admission under an explicit [`CheckMode`].
pub fn can_execute_with(
    lattice: &CapabilityLattice,
    context: &ExecutionContext,
    request: &CapabilityProfile,
    mode: CheckMode,
) -> bool {
    evaluate(lattice, context, request, mode).is_allowed()
}

/// Decide admission and report the reason for a denial.
pub fn evaluate(
    lattice: &CapabilityLattice,
    context: &ExecutionContext,
    request: &CapabilityProfile,
    mode: CheckMode,
) -> Decision {
    let denial = match mode {
        CheckMode::Independent => independent(lattice, context, request),
        CheckMode::Pairwise => pairwise(lattice, context, request),
    };
    trace!(bottom = %lattice.bottom(), ?mode, ?denial, "evaluated admission");

    match denial {
        Some(reason) => Decision::Deny { reason },
        None => Decision::Allow,
    }
}

fn independent(
    lattice: &CapabilityLattice,
    context: &ExecutionContext,
    request: &CapabilityProfile,
) -> Option<Denial> {
    if !lattice.execution_allowed(context.labels()) {
        return Some(Denial::ContextInconsistent);
    }
    if !lattice.execution_allowed(request.labels()) {
        return Some(Denial::RequestInconsistent);
    }
    None
}

fn pairwise(
    lattice: &CapabilityLattice,
    context: &ExecutionContext,
    request: &CapabilityProfile,
) -> Option<Denial> {
    let mut met = Vec::with_capacity(Dimension::ALL.len());
    for d in Dimension::ALL {
        let m = lattice.meet(context.get(d).as_str(), request.get(d).as_str());
        if lattice.is_bottom(m.as_str()) {
            return Some(Denial::DimensionInsufficient(d));
        }
        met.push(m.as_str());
    }

    if !lattice.execution_allowed(met) {
        return Some(Denial::CombinedInsufficient);
    }
    None
}

/// Check that `name` is registered and that `args` is a key-value object.
///
/// Argument values are not checked; see [`validate_command_request_with`]
/// for plugging in a schema validator.
pub fn validate_command_request<R>(
    registry: &R,
    name: &str,
    args: &Value,
) -> std::result::Result<(), RegistryError>
where
    R: CommandRegistry + ?Sized,
{
    validate_command_request_with(registry, name, args, &DeferredArgsValidator)
}

/// [`validate_command_request`] with an explicit argument validator.
pub fn validate_command_request_with<R, V>(
    registry: &R,
    name: &str,
    args: &Value,
    validator: &V,
) -> std::result::Result<(), RegistryError>
where
    R: CommandRegistry + ?Sized,
    V: ArgsValidator + ?Sized,
{
    let Some(entry) = registry.get(name) else {
        debug!(command = name, "command not in registry");
        return Err(RegistryError::UnknownCommand(name.to_string()));
    };

    let Some(object) = args.as_object() else {
        return Err(RegistryError::ArgsNotObject(json_kind(args)));
    };

    validator.validate(entry, object)
}

/// The capability profile the registry declares for `name`.
///
/// Callers normally run [`validate_command_request`] first; a name that is
/// not registered still yields `UnknownCommand` rather than a panic.
pub fn capabilities_for_command<'r, R>(
    registry: &'r R,
    name: &str,
) -> std::result::Result<&'r CapabilityProfile, RegistryError>
where
    R: CommandRegistry + ?Sized,
{
    registry
        .get(name)
        .map(|entry| &entry.required_capabilities)
        .ok_or_else(|| RegistryError::UnknownCommand(name.to_string()))
}

/// Single entry point for dispatchers.
///
/// Holds an immutable lattice, a read-only registry and a configuration.
/// All methods take `&self`, so one gatekeeper can serve many threads.
pub struct Gatekeeper<R: CommandRegistry> {
    lattice: CapabilityLattice,
    registry: R,
    config: GateConfig,
    args_validator: Box<dyn ArgsValidator>,
}

impl<R: CommandRegistry> Gatekeeper<R> {
    /// Create a gatekeeper with deferred argument validation.
    pub fn new(lattice: CapabilityLattice, registry: R, config: GateConfig) -> Self {
        Self {
            lattice,
            registry,
            config,
            args_validator: Box::new(DeferredArgsValidator),
        }
    }

    /// Replace the argument validator.
    pub fn with_args_validator(mut self, validator: impl ArgsValidator + 'static) -> Self {
        self.args_validator = Box::new(validator);
        self
    }

    pub fn lattice(&self) -> &CapabilityLattice {
        &self.lattice
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// See [`validate_command_request_with`].
    pub fn validate(&self, name: &str, args: &Value) -> Result<()> {
        validate_command_request_with(&self.registry, name, args, self.args_validator.as_ref())?;
        Ok(())
    }

    /// See [`capabilities_for_command`].
    pub fn required_capabilities(&self, name: &str) -> Result<&CapabilityProfile> {
        Ok(capabilities_for_command(&self.registry, name)?)
    }

    /// Decide a context against a capability profile under the configured mode.
    pub fn decide(&self, context: &ExecutionContext, request: &CapabilityProfile) -> Decision {
        evaluate(&self.lattice, context, request, self.config.mode)
    }

    /// Validate the request, look up its capabilities, and decide.
    ///
    /// Registry errors propagate. A denial is returned as
    /// [`Decision::Deny`], not as an error.
    pub fn admit(&self, context: &ExecutionContext, name: &str, args: &Value) -> Result<Decision> {
        self.validate(name, args)?;
        let required = self.required_capabilities(name)?;
        let decision = self.decide(context, required);

        if let Decision::Deny { reason } = decision {
            debug!(command = name, %reason, "admission denied");
        }
        Ok(decision)
    }
}
