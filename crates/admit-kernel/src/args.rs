//! Argument payload validation hook.
//!
//! The kernel only checks that a payload is a key-value object. Checking
//! individual argument values against a command's schema is left to an
//! [`ArgsValidator`]; until a schema layer exists, [`DeferredArgsValidator`]
//! accepts every object.

use serde_json::{Map, Value};

use admit_kernel_registry::{CommandEntry, RegistryError};

/// Validates an argument object for a known command.
pub trait ArgsValidator: Send + Sync {
    fn validate(
        &self,
        command: &CommandEntry,
        args: &Map<String, Value>,
    ) -> Result<(), RegistryError>;
}

/// Accepts every argument object. Schema validation is deferred.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeferredArgsValidator;

impl ArgsValidator for DeferredArgsValidator {
    fn validate(
        &self,
        _command: &CommandEntry,
        _args: &Map<String, Value>,
    ) -> Result<(), RegistryError> {
        Ok(())
    }
}

impl<F> ArgsValidator for F
where
    F: Fn(&CommandEntry, &Map<String, Value>) -> Result<(), RegistryError> + Send + Sync,
{
    fn validate(
        &self,
        command: &CommandEntry,
        args: &Map<String, Value>,
    ) -> Result<(), RegistryError> {
        self(command, args)
    }
}

/// JSON type name, for error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
