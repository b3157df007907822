//! Validated generation request.

use serde::Serialize;

use super::{
    error::DomainError,
    layer::LayerKind,
    naming::{to_snake, validate_identifier},
};

/// Reserved bucket for shared services. Never listed in the module
/// catalog and never a valid target for other layers.
pub const SHARED_MODULE: &str = "shared";

/// One fully validated generation request.
///
/// Construction is the only validation point: a `ServiceConfig` that
/// exists is well-formed, so the pipeline downstream never re-checks
/// names or the layer/module pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceConfig {
    name: String,
    module: String,
    layer: LayerKind,
    create_dtos: bool,
}

impl ServiceConfig {
    /// Build a validated request. The name is normalized to snake case
    /// first; validation errors report the normalized form.
    pub fn new(
        name: &str,
        module: &str,
        layer: LayerKind,
        create_dtos: bool,
    ) -> Result<Self, DomainError> {
        let name = to_snake(name);
        validate_identifier(&name)?;

        let module = to_snake(module);
        validate_identifier(&module)?;

        // Shared layer and shared bucket imply each other.
        if layer.is_shared() != (module == SHARED_MODULE) {
            return Err(DomainError::LayerModuleMismatch {
                layer: layer.to_string(),
                module,
            });
        }

        Ok(Self {
            name,
            module,
            layer,
            create_dtos,
        })
    }

    /// Shorthand for a shared-layer request.
    pub fn shared(name: &str, create_dtos: bool) -> Result<Self, DomainError> {
        Self::new(name, SHARED_MODULE, LayerKind::Shared, create_dtos)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn layer(&self) -> LayerKind {
        self.layer
    }

    pub fn create_dtos(&self) -> bool {
        self.create_dtos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_request_normalizes_the_name() {
        let config = ServiceConfig::new("Invoice", "billing", LayerKind::Domain, true).unwrap();
        assert_eq!(config.name(), "invoice");
        assert_eq!(config.module(), "billing");
        assert!(config.create_dtos());
    }

    #[test]
    fn shared_layer_requires_the_shared_bucket() {
        let err = ServiceConfig::new("mailer", "billing", LayerKind::Shared, false).unwrap_err();
        assert!(matches!(err, DomainError::LayerModuleMismatch { .. }));
    }

    #[test]
    fn shared_bucket_requires_the_shared_layer() {
        let err = ServiceConfig::new("mailer", "shared", LayerKind::Domain, false).unwrap_err();
        assert!(matches!(err, DomainError::LayerModuleMismatch { .. }));
    }

    #[test]
    fn shared_shorthand_is_consistent() {
        let config = ServiceConfig::shared("mailer", true).unwrap();
        assert_eq!(config.module(), SHARED_MODULE);
        assert!(config.layer().is_shared());
    }

    #[test]
    fn invalid_names_are_rejected() {
        assert!(ServiceConfig::new("my-svc", "billing", LayerKind::Domain, true).is_err());
        assert!(ServiceConfig::new("svc", "my module", LayerKind::Domain, true).is_err());
    }
}
