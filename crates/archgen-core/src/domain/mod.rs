//! Domain layer: pure naming and placement rules.
//!
//! Nothing in this module touches the filesystem. Given a service name,
//! layer, and module, these types deterministically compute class names,
//! target paths, and import statements; the application layer turns them
//! into writes.

pub mod config;
pub mod context;
pub mod error;
pub mod layer;
pub mod layout;
pub mod naming;

pub use config::{SHARED_MODULE, ServiceConfig};
pub use context::RenderContext;
pub use error::DomainError;
pub use layer::LayerKind;
pub use naming::ServiceNames;
