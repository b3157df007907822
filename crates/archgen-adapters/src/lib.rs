//! Infrastructure adapters for archgen.
//!
//! This crate implements the ports defined in
//! `archgen_core::application::ports`. It contains all external
//! dependencies and I/O operations.

pub mod builtin_templates;
pub mod filesystem;
pub mod renderer;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::StubRenderer;
