//! Batch removal of metal-bound carbonyl ligands from XYZ structure
//! files.
//!
//! Given a directory of plain-text XYZ files, the crate locates the
//! first transition-metal center in each structure, detects CO
//! ligands bound to it by pure distance heuristics, and writes a copy
//! of the file with the first two detected carbonyls removed. It is a
//! file-transformation tool, not a modeling engine: there is no
//! chemistry validation beyond bond-length windows.
//!
//! # Quick Start
//!
//! ```
//! use decarbonyl::{Atom, Outcome, Structure, StripConfig, strip_carbonyls};
//!
//! // A square-planar Ir fragment with two carbonyls
//! let structure = Structure {
//!     atoms: vec![
//!         Atom::new("Ir", [0.0, 0.0, 0.0]),
//!         Atom::new("C", [1.9, 0.0, 0.0]),
//!         Atom::new("O", [3.05, 0.0, 0.0]),
//!         Atom::new("C", [0.0, 1.9, 0.0]),
//!         Atom::new("O", [0.0, 3.05, 0.0]),
//!     ],
//!     comment: "Ir(CO)2".to_string(),
//!     extra_lines: Vec::new(),
//! };
//!
//! let Outcome::Removed { structure: bare, pairs } =
//!     strip_carbonyls(&structure, &StripConfig::default())
//! else {
//!     unreachable!("both carbonyls are in range");
//! };
//!
//! assert_eq!(pairs.len(), 2);
//! assert_eq!(bare.atom_count(), 1);
//! assert_eq!(bare.atoms[0].element, "Ir");
//! ```
//!
//! Directory-level processing lives in [`batch`]: [`batch::run`]
//! applies the pipeline to every `.xyz` file independently, so one
//! malformed file never aborts the rest.
//!
//! # Module Organization
//!
//! - [`io`] — XYZ reading/writing with line-numbered parse errors
//! - [`strip`] — metal location, carbonyl detection, removal policy
//! - [`batch`] — directory scanning and per-file reports
//!
//! Detection thresholds and the metal whitelist are carried in
//! [`StripConfig`], passed explicitly per call; there is no global
//! mutable configuration.

mod model;

pub mod batch;
pub mod io;
pub mod strip;

pub use model::atom::Atom;
pub use model::structure::Structure;

pub use strip::{
    CoPair, DEFAULT_METALS, Outcome, REMOVED_PAIR_COUNT, StripConfig, distance,
    find_carbonyl_pairs, find_metal_center, strip_carbonyls,
};
