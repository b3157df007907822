//! Built-in service body templates, one per layer.
//!
//! Templates are Python source with `{{name}}` placeholders; the
//! substitution itself lives in `archgen_core::domain::RenderContext`.
//! Each template hard-codes its layer's base class, so the renderer only
//! needs the three context parameters.

use archgen_core::domain::LayerKind;

const DOMAIN_SERVICE: &str = "\
class {{service_name}}Service(DomainService):
    \"\"\"Domain service for {{service_name}}.\"\"\"

    def execute(self, request: {{request_dto}}) -> {{response_dto}}:
        raise NotImplementedError
";

const APPLICATION_SERVICE: &str = "\
class {{service_name}}Service(ApplicationService):
    \"\"\"Application service for {{service_name}}.\"\"\"

    def execute(self, request: {{request_dto}}) -> {{response_dto}}:
        raise NotImplementedError
";

const INFRA_SERVICE: &str = "\
class {{service_name}}Service(InfraService):
    \"\"\"Infrastructure service for {{service_name}}.\"\"\"

    def execute(self, request: {{request_dto}}) -> {{response_dto}}:
        raise NotImplementedError
";

const SHARED_SERVICE: &str = "\
class {{service_name}}Service:
    \"\"\"Shared service for {{service_name}}.\"\"\"

    def execute(self, request: {{request_dto}}) -> {{response_dto}}:
        raise NotImplementedError
";

/// The template body for a layer. Total over all four keys.
pub fn template_for(layer: LayerKind) -> &'static str {
    match layer {
        LayerKind::Domain => DOMAIN_SERVICE,
        LayerKind::Application => APPLICATION_SERVICE,
        LayerKind::Infra => INFRA_SERVICE,
        LayerKind::Shared => SHARED_SERVICE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_layer_has_a_template() {
        for layer in LayerKind::ALL {
            let body = template_for(layer);
            assert!(body.contains("{{service_name}}"), "layer {layer}");
            assert!(body.contains("{{request_dto}}"), "layer {layer}");
            assert!(body.contains("{{response_dto}}"), "layer {layer}");
        }
    }

    #[test]
    fn base_classes_match_layer() {
        assert!(template_for(LayerKind::Domain).contains("(DomainService)"));
        assert!(template_for(LayerKind::Application).contains("(ApplicationService)"));
        assert!(template_for(LayerKind::Infra).contains("(InfraService)"));
        // Shared services have no base class.
        assert!(template_for(LayerKind::Shared).contains("class {{service_name}}Service:"));
    }
}
