//! The fixed table of forbidden layer dependencies.

use crate::layer::Layer;

/// Every layer with the layers it must not import from.
///
/// Same-layer imports are never taboo. Rows are built from [`taboos`], so
/// the table and the lookup cannot disagree.
pub const TABOOS: [(Layer, &[Layer]); 3] = [
    (Layer::Infrastructure, taboos(Layer::Infrastructure)),
    (Layer::App, taboos(Layer::App)),
    (Layer::Domain, taboos(Layer::Domain)),
];

/// Returns the layers `layer` is forbidden to depend on.
#[must_use]
pub const fn taboos(layer: Layer) -> &'static [Layer] {
    match layer {
        Layer::Infrastructure => &[Layer::Domain],
        Layer::App => &[Layer::Infrastructure],
        Layer::Domain => &[Layer::App, Layer::Infrastructure],
    }
}

/// Whether a `from` file importing from `to` breaks the layering.
#[must_use]
pub fn is_taboo(from: Layer, to: Layer) -> bool {
    taboos(from).contains(&to)
}
