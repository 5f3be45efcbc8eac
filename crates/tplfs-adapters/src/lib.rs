//! Infrastructure adapters for tplfs.
//!
//! This crate implements the ports defined in `tplfs-core::application::ports`
//! and bridges the loader into a template engine.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod renderer;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::MiniJinjaRenderer;
