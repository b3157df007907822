//! Archgen Core - naming, placement, and generation pipeline.
//!
//! This crate provides the domain and application layers for the
//! archgen boilerplate generator, following hexagonal (ports and
//! adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           archgen-cli (CLI)             │
//! │   flags/prompts -> ServiceConfig        │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (GenerationService, ModuleCatalog,     │
//! │   DtoEmitter, ServiceEmitter)           │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     Application Ports (Traits)          │
//! │   (Filesystem, TemplateRenderer)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    archgen-adapters (Infrastructure)    │
//! │  (LocalFilesystem, StubRenderer, ...)   │
//! └─────────────────────────────────────────┘
//!
//! Domain layer (pure: LayerKind, ServiceConfig, naming, layout)
//! sits below everything and has no external dependencies.
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use archgen_core::{
//!     application::GenerationService,
//!     domain::{LayerKind, ServiceConfig},
//! };
//! # fn adapters() -> (Box<dyn archgen_core::application::Filesystem>, Box<dyn archgen_core::application::TemplateRenderer>) { unimplemented!() }
//!
//! let (filesystem, renderer) = adapters();
//! let service = GenerationService::new(filesystem, renderer, "src/modules");
//!
//! let config = ServiceConfig::new("invoice", "billing", LayerKind::Application, true)?;
//! let report = service.generate(&config)?;
//! println!("created {}", report.service_path.display());
//! # Ok::<(), archgen_core::error::ArchgenError>(())
//! ```

// Domain layer (pure naming and placement rules)
pub mod domain;

// Application layer (pipeline orchestration)
pub mod application;

// Unified error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Filesystem, GenerationReport, GenerationService, ModuleCatalog, TemplateRenderer,
    };
    pub use crate::domain::{
        LayerKind, RenderContext, SHARED_MODULE, ServiceConfig, ServiceNames,
    };
    pub use crate::error::{ArchgenError, ArchgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
