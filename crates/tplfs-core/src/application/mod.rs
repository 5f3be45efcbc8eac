//! Application layer for tplfs.
//!
//! This layer contains:
//! - **Services**: the [`TemplateSourceLoader`]
//! - **Ports**: Interface definitions (traits) for backends and engines
//! - **Errors**: Application-specific error types
//!
//! Lookup rules live in `crate::domain`; this layer wires them to the
//! `Filesystem` port.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::TemplateSourceLoader;

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, TemplateSourceProvider};

pub use error::ApplicationError;
