//! Application layer for archgen.
//!
//! This layer contains:
//! - **Services**: the module catalog, the two emitters, and the
//!   generation orchestrator
//! - **Ports**: trait definitions for filesystem and template rendering
//! - **Errors**: pipeline-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! naming or placement rules itself; those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::{Filesystem, TemplateRenderer};
pub use services::{DtoEmitter, GenerationReport, GenerationService, ModuleCatalog, ServiceEmitter};
