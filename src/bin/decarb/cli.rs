use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "decarb",
    about = "Remove metal-bound carbonyl ligands from XYZ structure files",
    version,
    before_help = crate::display::banner_for_help()
)]
pub struct Cli {
    /// Directory to scan for .xyz files
    #[arg(value_name = "DIRECTORY", default_value = ".")]
    pub directory: PathBuf,

    /// Suffix inserted before the extension on output file names
    #[arg(short, long, value_name = "SUFFIX")]
    pub suffix: Option<String>,

    /// Element eligible as center metal, repeatable (replaces the
    /// built-in whitelist)
    #[arg(long = "metal", value_name = "SYMBOL", action = clap::ArgAction::Append)]
    pub metals: Vec<String>,

    /// Minimum C-O bond length (Å)
    #[arg(long = "co-min", value_name = "Å")]
    pub co_bond_min: Option<f64>,

    /// Maximum C-O bond length (Å)
    #[arg(long = "co-max", value_name = "Å")]
    pub co_bond_max: Option<f64>,

    /// Maximum carbon-to-metal distance (Å)
    #[arg(long = "mc-max", value_name = "Å")]
    pub metal_carbon_max: Option<f64>,

    /// Detection settings file (TOML); explicit flags still win
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress status output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}
