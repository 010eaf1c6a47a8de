//! Strong type definitions for the Admit Kernel.
//!
//! Lattice elements are a newtype so they cannot be mixed up with arbitrary
//! strings at compile time.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// A single element of a capability lattice, e.g. `"TRUSTED"` or `"BOTTOM"`.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Capability(String);

impl Capability {
    /// Create a capability from any string-like value.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The element label.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the label.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Capability({})", self.0)
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Lets lattice tables be queried with plain `&str` keys.
impl Borrow<str> for Capability {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Capability {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Capability {
    fn from(label: &str) -> Self {
        Self(label.to_owned())
    }
}

impl From<String> for Capability {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl PartialEq<str> for Capability {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Capability {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
