//! Placeholder-substitution renderer over the built-in templates.

use archgen_core::{
    application::ports::TemplateRenderer,
    domain::{LayerKind, RenderContext},
    error::ArchgenResult,
};
use tracing::instrument;

use crate::builtin_templates;

/// Renders the built-in layer templates via simple `{{name}}`
/// substitution.
#[derive(Debug, Clone, Copy)]
pub struct StubRenderer;

impl StubRenderer {
    /// Create a new renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for StubRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for StubRenderer {
    #[instrument(skip_all, fields(layer = %layer))]
    fn render(&self, layer: LayerKind, context: &RenderContext) -> ArchgenResult<String> {
        Ok(context.render(builtin_templates::template_for(layer)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_domain_service_with_dtos() {
        let ctx = RenderContext::new("Order", Some("OrderRequestDto"), Some("OrderResponseDto"));
        let out = StubRenderer::new().render(LayerKind::Domain, &ctx).unwrap();

        assert!(out.contains("class OrderService(DomainService):"));
        assert!(out.contains("def execute(self, request: OrderRequestDto) -> OrderResponseDto:"));
        assert!(!out.contains("{{"), "no placeholder may survive rendering");
    }

    #[test]
    fn renders_none_markers_without_dtos() {
        let ctx = RenderContext::new("Order", None, None);
        let out = StubRenderer::new().render(LayerKind::Shared, &ctx).unwrap();

        assert!(out.contains("class OrderService:"));
        assert!(out.contains("request: None) -> None:"));
    }
}
