//! Template substitution context.

/// The three values every layer template can reference.
///
/// Templates use `{{service_name}}`, `{{request_dto}}`, and
/// `{{response_dto}}` placeholders; absent DTO names render as the
/// literal `None` so the generated `execute` signature stays valid
/// Python.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    pub service_name: String,
    pub request_dto: String,
    pub response_dto: String,
}

impl RenderContext {
    pub fn new(service_name: &str, request_dto: Option<&str>, response_dto: Option<&str>) -> Self {
        Self {
            service_name: service_name.to_string(),
            request_dto: request_dto.unwrap_or("None").to_string(),
            response_dto: response_dto.unwrap_or("None").to_string(),
        }
    }

    /// Substitute every placeholder in `source`.
    pub fn render(&self, source: &str) -> String {
        source
            .replace("{{service_name}}", &self.service_name)
            .replace("{{request_dto}}", &self.request_dto)
            .replace("{{response_dto}}", &self.response_dto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_placeholders_are_replaced() {
        let ctx = RenderContext::new("Invoice", Some("InvoiceRequestDto"), Some("InvoiceResponseDto"));
        let out = ctx.render("class {{service_name}}Service:\n    def execute(self, request: {{request_dto}}) -> {{response_dto}}: ...");
        assert_eq!(
            out,
            "class InvoiceService:\n    def execute(self, request: InvoiceRequestDto) -> InvoiceResponseDto: ..."
        );
    }

    #[test]
    fn missing_dtos_render_as_none() {
        let ctx = RenderContext::new("Invoice", None, None);
        assert_eq!(ctx.render("{{request_dto}}/{{response_dto}}"), "None/None");
    }

    #[test]
    fn repeated_placeholders_are_all_replaced() {
        let ctx = RenderContext::new("Order", None, None);
        assert_eq!(
            ctx.render("{{service_name}} {{service_name}}"),
            "Order Order"
        );
    }
}
