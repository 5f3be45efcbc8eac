//! tplfs Core - template source loading over a pluggable filesystem
//!
//! This crate provides the domain and application layers that let a template
//! engine resolve, read, and freshness-check template sources through a
//! `Filesystem` port instead of direct file-system calls.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │   Template engine / tplfs-cli           │
//! │   (calls TemplateSourceProvider)        │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        TemplateSourceLoader             │
//! │   resolve · exists · load · cache key   │
//! │              · is_fresh                 │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Filesystem port (trait)            │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    tplfs-adapters (Infrastructure)      │
//! │  (MemoryFilesystem, LocalFilesystem)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tplfs_core::prelude::*;
//!
//! # fn demo(filesystem: Arc<dyn Filesystem>) -> TplfsResult<()> {
//! let loader = TemplateSourceLoader::with_prefix(filesystem, "templates");
//!
//! if loader.is_fresh("index.twig", 1_700_000_000)? {
//!     // reuse the compiled artifact
//! } else {
//!     let source = loader.get_source("index.twig")?;
//!     println!("{}", source.as_str()?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        TemplateSourceLoader,
        ports::{Filesystem, TemplateSourceProvider},
    };
    pub use crate::domain::{EntryKind, FileEntry, PathPrefix, ResolvedPath, Source};
    pub use crate::error::{TplfsError, TplfsResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
