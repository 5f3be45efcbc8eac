//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "load template source by name".

pub mod source_loader;

pub use source_loader::TemplateSourceLoader;
