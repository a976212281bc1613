//! Taboos command implementation.

use ddd_lint_core::{Layer, TABOOS};

/// Runs the taboos command.
pub fn run() {
    println!("Forbidden layer dependencies:\n");
    for (layer, forbidden) in TABOOS {
        println!("  {layer:<16} must not use {}", join(forbidden));
    }
    println!();
    println!("Imports within the same layer are always allowed.");
}

fn join(layers: &[Layer]) -> String {
    layers
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
