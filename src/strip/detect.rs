use std::collections::HashSet;

use super::config::StripConfig;
use super::geometry::distance;
use crate::model::atom::Atom;

/// A carbonyl candidate: indices of a carbon and an oxygen whose
/// separation falls inside the configured bond window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoPair {
    pub carbon: usize,
    pub oxygen: usize,
}

/// Returns the index of the first atom whose element label is in the
/// whitelist, or `None` when the structure has no recognized center.
///
/// `None` is a normal outcome, not an error; only one center is ever
/// considered even if several metals are present.
pub fn find_metal_center(atoms: &[Atom], metals: &HashSet<String>) -> Option<usize> {
    atoms.iter().position(|atom| metals.contains(&atom.element))
}

/// Scans for C–O pairs within the bond-length window, additionally
/// requiring carbon-to-metal proximity when a metal index is given.
///
/// The scan order is part of the contract: carbons ascending in the
/// outer loop, oxygens ascending in the inner loop. Downstream removal
/// takes the first pairs in this order.
///
/// Without a metal index every in-window C–O pair is accepted. The
/// standard pipeline never takes that branch (it requires a metal
/// center first), but the parameter keeps the scan usable on its own.
pub fn find_carbonyl_pairs(
    atoms: &[Atom],
    metal: Option<usize>,
    config: &StripConfig,
) -> Vec<CoPair> {
    let mut pairs = Vec::new();
    let mut seen: HashSet<(usize, usize)> = HashSet::new();

    for (c_idx, carbon) in atoms.iter().enumerate() {
        if carbon.element != "C" {
            continue;
        }

        if let Some(m_idx) = metal {
            if distance(carbon.position, atoms[m_idx].position) > config.metal_carbon_max {
                continue;
            }
        }

        for (o_idx, oxygen) in atoms.iter().enumerate() {
            if oxygen.element != "O" {
                continue;
            }

            let d_co = distance(carbon.position, oxygen.position);
            if d_co < config.co_bond_min || d_co > config.co_bond_max {
                continue;
            }

            // The scan visits each (C, O) combination once, so a
            // duplicate key can only appear if a future detection
            // strategy produces one. Guard the invariant anyway.
            let key = (c_idx.min(o_idx), c_idx.max(o_idx));
            let fresh = seen.insert(key);
            debug_assert!(fresh, "duplicate carbonyl candidate {key:?}");
            if fresh {
                pairs.push(CoPair {
                    carbon: c_idx,
                    oxygen: o_idx,
                });
            }
        }
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metals() -> HashSet<String> {
        StripConfig::default().metals
    }

    fn atom(element: &str, x: f64) -> Atom {
        Atom::new(element, [x, 0.0, 0.0])
    }

    #[test]
    fn first_whitelisted_metal_wins() {
        let atoms = vec![
            atom("C", 0.0),
            atom("Rh", 1.0),
            atom("Ir", 2.0),
        ];
        assert_eq!(find_metal_center(&atoms, &metals()), Some(1));
    }

    #[test]
    fn no_metal_is_a_sentinel() {
        let atoms = vec![atom("C", 0.0), atom("O", 1.15)];
        assert_eq!(find_metal_center(&atoms, &metals()), None);
    }

    #[test]
    fn label_match_is_exact() {
        // "CO" and "c" are not whitelist entries even though Co is.
        let atoms = vec![atom("CO", 0.0), atom("co", 1.0), atom("Co", 2.0)];
        assert_eq!(find_metal_center(&atoms, &metals()), Some(2));
    }

    #[test]
    fn detects_bound_carbonyls_in_scan_order() {
        let config = StripConfig::default();
        let atoms = vec![
            Atom::new("Ir", [0.0, 0.0, 0.0]),
            Atom::new("C", [0.0, 1.9, 0.0]),
            Atom::new("O", [0.0, 3.05, 0.0]),
            Atom::new("C", [1.9, 0.0, 0.0]),
            Atom::new("O", [3.05, 0.0, 0.0]),
        ];

        let pairs = find_carbonyl_pairs(&atoms, Some(0), &config);

        assert_eq!(
            pairs,
            vec![
                CoPair { carbon: 1, oxygen: 2 },
                CoPair { carbon: 3, oxygen: 4 },
            ]
        );
    }

    #[test]
    fn carbon_far_from_metal_is_rejected() {
        let config = StripConfig::default();
        let atoms = vec![
            Atom::new("Ir", [0.0, 0.0, 0.0]),
            Atom::new("C", [5.0, 0.0, 0.0]),
            Atom::new("O", [6.15, 0.0, 0.0]),
        ];
        assert!(find_carbonyl_pairs(&atoms, Some(0), &config).is_empty());
    }

    #[test]
    fn without_metal_every_in_window_pair_is_accepted() {
        let config = StripConfig::default();
        let atoms = vec![
            Atom::new("C", [5.0, 0.0, 0.0]),
            Atom::new("O", [6.15, 0.0, 0.0]),
        ];
        assert_eq!(
            find_carbonyl_pairs(&atoms, None, &config),
            vec![CoPair { carbon: 0, oxygen: 1 }]
        );
    }

    #[test]
    fn bond_window_lower_bound_is_inclusive() {
        let config = StripConfig::default();
        let exactly_min = vec![atom("C", 0.0), atom("O", 1.0)];
        assert_eq!(find_carbonyl_pairs(&exactly_min, None, &config).len(), 1);

        let just_below = vec![atom("C", 0.0), atom("O", 0.999)];
        assert!(find_carbonyl_pairs(&just_below, None, &config).is_empty());
    }

    #[test]
    fn bond_window_upper_bound_is_inclusive() {
        // 1.25 is exactly representable, so the boundary comparison is
        // bit-exact; the default 1.30 is not.
        let config = StripConfig {
            co_bond_max: 1.25,
            ..Default::default()
        };

        let exactly_max = vec![atom("C", 0.0), atom("O", 1.25)];
        assert_eq!(find_carbonyl_pairs(&exactly_max, None, &config).len(), 1);

        let just_above = vec![atom("C", 0.0), atom("O", 1.2500001)];
        assert!(find_carbonyl_pairs(&just_above, None, &config).is_empty());
    }

    #[test]
    fn pair_above_default_window_is_rejected() {
        let config = StripConfig::default();
        let atoms = vec![atom("C", 0.0), atom("O", 1.301)];
        assert!(find_carbonyl_pairs(&atoms, None, &config).is_empty());
    }

    #[test]
    fn detection_is_idempotent() {
        let config = StripConfig::default();
        let atoms = vec![
            Atom::new("Ir", [0.0, 0.0, 0.0]),
            Atom::new("C", [1.9, 0.0, 0.0]),
            Atom::new("O", [3.05, 0.0, 0.0]),
            Atom::new("C", [0.0, 1.9, 0.0]),
            Atom::new("O", [0.0, 3.05, 0.0]),
        ];

        let first = find_carbonyl_pairs(&atoms, Some(0), &config);
        let second = find_carbonyl_pairs(&atoms, Some(0), &config);
        assert_eq!(first, second);
    }

    #[test]
    fn one_carbon_may_pair_with_several_oxygens() {
        // Degenerate geometry, but the scan reports every in-window
        // combination; selection policy is the caller's concern.
        let config = StripConfig::default();
        let atoms = vec![
            Atom::new("C", [0.0, 0.0, 0.0]),
            Atom::new("O", [1.15, 0.0, 0.0]),
            Atom::new("O", [0.0, 1.15, 0.0]),
        ];

        let pairs = find_carbonyl_pairs(&atoms, None, &config);
        assert_eq!(
            pairs,
            vec![
                CoPair { carbon: 0, oxygen: 1 },
                CoPair { carbon: 0, oxygen: 2 },
            ]
        );
    }
}
