use std::collections::HashSet;

use super::atom::Atom;

/// A parsed XYZ structure: the atom block, the comment line, and any
/// trailing lines carried through verbatim for format compatibility.
///
/// Atom order is significant. Indices into `atoms` identify atoms for
/// detection and removal, so the sequence is preserved end-to-end
/// except where atoms are explicitly filtered out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Structure {
    pub atoms: Vec<Atom>,
    pub comment: String,
    pub extra_lines: Vec<String>,
}

impl Structure {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Returns a copy with the atoms at `indices` removed, keeping the
    /// survivors in their original relative order. The comment and
    /// trailing lines are carried over unchanged.
    pub fn without_atoms(&self, indices: &HashSet<usize>) -> Structure {
        let atoms = self
            .atoms
            .iter()
            .enumerate()
            .filter(|(i, _)| !indices.contains(i))
            .map(|(_, atom)| atom.clone())
            .collect();

        Structure {
            atoms,
            comment: self.comment.clone(),
            extra_lines: self.extra_lines.clone(),
        }
    }
}
