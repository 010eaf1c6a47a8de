//! # Admit Kernel Registry
//!
//! The boundary between the kernel and whatever owns the command table.
//!
//! The kernel consumes a registry through the [`CommandRegistry`] trait and
//! treats it as read-only. [`MemoryRegistry`] is a ready-made implementation
//! for hosts that already hold the table in memory.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{RegistryError, Result};
pub use memory::MemoryRegistry;
pub use traits::{CommandEntry, CommandRegistry};
