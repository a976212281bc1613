//! Architecture layers and their name-based resolution.

use serde::{Deserialize, Serialize};

/// One of the three architectural strata encoded in the namespace convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Layer {
    /// Entities, value objects and domain services.
    Domain,
    /// Application services and use cases.
    App,
    /// Persistence, messaging and other adapters.
    Infrastructure,
}

/// Resolution order for namespace suffixes.
///
/// Evaluated front to back; the first layer whose name prefixes the suffix
/// wins. `App` also claims `Application\...`.
pub const LAYER_PRECEDENCE: [Layer; 3] = [Layer::Infrastructure, Layer::App, Layer::Domain];

impl Layer {
    /// Namespace segment naming this layer.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Domain => "Domain",
            Self::App => "App",
            Self::Infrastructure => "Infrastructure",
        }
    }

    /// Resolves the part of a namespace that follows the project root.
    ///
    /// Returns `None` when no layer name leads the suffix.
    #[must_use]
    pub fn resolve(suffix: &str) -> Option<Self> {
        LAYER_PRECEDENCE
            .iter()
            .copied()
            .find(|layer| suffix.starts_with(layer.name()))
    }
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_each_layer() {
        assert_eq!(Layer::resolve("Domain\\Order"), Some(Layer::Domain));
        assert_eq!(Layer::resolve("App\\Handler"), Some(Layer::App));
        assert_eq!(
            Layer::resolve("Infrastructure\\Doctrine"),
            Some(Layer::Infrastructure)
        );
    }

    #[test]
    fn application_counts_as_app() {
        assert_eq!(Layer::resolve("Application\\Command"), Some(Layer::App));
    }

    #[test]
    fn unknown_suffix_is_unclassified() {
        assert_eq!(Layer::resolve("Shared\\Clock"), None);
        assert_eq!(Layer::resolve(""), None);
    }

    #[test]
    fn layer_name_must_lead_the_suffix() {
        // Layer names deeper in the namespace do not count.
        assert_eq!(Layer::resolve("Shared\\Domain\\Id"), None);
    }

    #[test]
    fn precedence_starts_with_infrastructure() {
        assert_eq!(LAYER_PRECEDENCE[0], Layer::Infrastructure);
        assert_eq!(LAYER_PRECEDENCE[2], Layer::Domain);
    }

    #[test]
    fn display_matches_namespace_segment() {
        assert_eq!(Layer::Infrastructure.to_string(), "Infrastructure");
        assert_eq!(format!("{}", Layer::App), "App");
        assert_eq!(format!("{:<6}|", Layer::App), "App   |");
    }
}
