//! Application services: catalog, emitters, and the orchestrator.

pub mod dto_emitter;
pub mod generation_service;
pub mod module_catalog;
pub mod service_emitter;

pub use dto_emitter::DtoEmitter;
pub use generation_service::{GenerationReport, GenerationService};
pub use module_catalog::ModuleCatalog;
pub use service_emitter::ServiceEmitter;
