//! Architectural layers.

use serde::{Deserialize, Serialize};

/// The four layers a service can belong to.
///
/// `Shared` is special throughout: shared services live in the fixed
/// `shared` bucket instead of a user module, and their generated class
/// has no base class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    Domain,
    Application,
    Infra,
    Shared,
}

impl LayerKind {
    /// All layers, in menu order.
    pub const ALL: [LayerKind; 4] = [
        LayerKind::Domain,
        LayerKind::Application,
        LayerKind::Infra,
        LayerKind::Shared,
    ];

    /// Canonical lowercase identifier, used in paths and logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            LayerKind::Domain => "domain",
            LayerKind::Application => "application",
            LayerKind::Infra => "infra",
            LayerKind::Shared => "shared",
        }
    }

    /// Python base class for services of this layer. Empty for shared
    /// services, which are plain classes.
    pub const fn base_class(self) -> &'static str {
        match self {
            LayerKind::Domain => "DomainService",
            LayerKind::Application => "ApplicationService",
            LayerKind::Infra => "InfraService",
            LayerKind::Shared => "",
        }
    }

    pub const fn is_shared(self) -> bool {
        matches!(self, LayerKind::Shared)
    }
}

impl std::fmt::Display for LayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_are_lowercase() {
        for layer in LayerKind::ALL {
            let s = layer.as_str();
            assert_eq!(s, s.to_ascii_lowercase());
        }
    }

    #[test]
    fn only_shared_is_shared() {
        assert!(LayerKind::Shared.is_shared());
        assert!(!LayerKind::Domain.is_shared());
        assert!(!LayerKind::Application.is_shared());
        assert!(!LayerKind::Infra.is_shared());
    }

    #[test]
    fn shared_has_no_base_class() {
        assert_eq!(LayerKind::Shared.base_class(), "");
        assert_eq!(LayerKind::Application.base_class(), "ApplicationService");
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(LayerKind::Infra.to_string(), "infra");
    }
}
