mod config;
mod detect;
mod geometry;

pub use config::{DEFAULT_METALS, StripConfig};
pub use detect::{CoPair, find_carbonyl_pairs, find_metal_center};
pub use geometry::distance;

use std::collections::HashSet;

use crate::model::structure::Structure;

/// How many carbonyl pairs are removed from a qualifying structure.
/// Fewer detected pairs than this is a warning outcome, not a partial
/// removal.
pub const REMOVED_PAIR_COUNT: usize = 2;

/// Result of running carbonyl removal on a single structure.
///
/// Only `Removed` produces an output file downstream; the other
/// variants are normal skip or warning outcomes, not errors.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Two carbonyls were removed; `pairs` lists the deleted
    /// candidates in scan order.
    Removed {
        structure: Structure,
        pairs: Vec<CoPair>,
    },

    /// The structure declares no atoms at all.
    EmptyStructure,

    /// No whitelisted metal is present.
    NoMetalCenter,

    /// Fewer than [`REMOVED_PAIR_COUNT`] carbonyls were detected.
    TooFewCarbonyls { found: usize },
}

/// Runs the full per-structure pipeline: locate the metal center,
/// detect bound carbonyls, and remove the first two in scan order.
///
/// # Examples
///
/// ```
/// use decarbonyl::{Atom, Outcome, Structure, StripConfig, strip_carbonyls};
///
/// let structure = Structure {
///     atoms: vec![
///         Atom::new("Ir", [0.0, 0.0, 0.0]),
///         Atom::new("C", [1.9, 0.0, 0.0]),
///         Atom::new("O", [3.05, 0.0, 0.0]),
///         Atom::new("C", [0.0, 1.9, 0.0]),
///         Atom::new("O", [0.0, 3.05, 0.0]),
///     ],
///     comment: "Ir(CO)2 fragment".to_string(),
///     extra_lines: Vec::new(),
/// };
///
/// match strip_carbonyls(&structure, &StripConfig::default()) {
///     Outcome::Removed { structure, pairs } => {
///         assert_eq!(pairs.len(), 2);
///         assert_eq!(structure.atom_count(), 1);
///         assert_eq!(structure.atoms[0].element, "Ir");
///     }
///     other => panic!("expected removal, got {other:?}"),
/// }
/// ```
pub fn strip_carbonyls(structure: &Structure, config: &StripConfig) -> Outcome {
    if structure.is_empty() {
        return Outcome::EmptyStructure;
    }

    let Some(metal) = find_metal_center(&structure.atoms, &config.metals) else {
        return Outcome::NoMetalCenter;
    };

    let pairs = find_carbonyl_pairs(&structure.atoms, Some(metal), config);
    if pairs.len() < REMOVED_PAIR_COUNT {
        return Outcome::TooFewCarbonyls { found: pairs.len() };
    }

    let selected: Vec<CoPair> = pairs[..REMOVED_PAIR_COUNT].to_vec();
    let doomed: HashSet<usize> = selected
        .iter()
        .flat_map(|pair| [pair.carbon, pair.oxygen])
        .collect();

    Outcome::Removed {
        structure: structure.without_atoms(&doomed),
        pairs: selected,
    }
}
