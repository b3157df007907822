//! Template renderer adapters.

pub mod stub;

pub use stub::StubRenderer;
