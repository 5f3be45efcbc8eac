//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `tplfs-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: existence, metadata, and reads over named paths
//!
//! - **Driving (Input) Ports**: Called by template engines, implemented by application
//!   - `TemplateSourceProvider`: name-based source lookup

pub mod input;
pub mod output;

pub use input::TemplateSourceProvider;
pub use output::Filesystem;

#[cfg(test)]
pub use output::MockFilesystem;
