use std::collections::HashSet;

/// Element symbols eligible as the complex's center metal.
pub const DEFAULT_METALS: [&str; 9] = ["Ir", "Rh", "Pd", "Pt", "Ni", "Co", "Fe", "Ru", "Os"];

/// Thresholds and whitelist for carbonyl detection.
///
/// All distances are in Ångströms. The C–O window brackets a terminal
/// carbonyl bond (~1.15 Å); `metal_carbon_max` brackets M–CO
/// coordination (Ir–CO and Rh–CO sit around 1.8–2.1 Å).
///
/// # Examples
///
/// ```
/// use decarbonyl::StripConfig;
///
/// let default = StripConfig::default();
/// assert!(default.metals.contains("Ir"));
///
/// // Widen the coordination threshold for a single call
/// let relaxed = StripConfig {
///     metal_carbon_max: 2.5,
///     ..Default::default()
/// };
/// assert!(relaxed.metal_carbon_max > default.metal_carbon_max);
/// ```
#[derive(Debug, Clone)]
pub struct StripConfig {
    /// Element labels recognized as a center metal.
    pub metals: HashSet<String>,

    /// Inclusive lower bound on the C–O bond length.
    pub co_bond_min: f64,

    /// Inclusive upper bound on the C–O bond length.
    pub co_bond_max: f64,

    /// Maximum carbon-to-metal distance for a bound carbonyl.
    pub metal_carbon_max: f64,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            metals: DEFAULT_METALS.iter().map(|s| s.to_string()).collect(),
            co_bond_min: 1.00,
            co_bond_max: 1.30,
            metal_carbon_max: 2.20,
        }
    }
}
