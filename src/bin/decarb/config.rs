use std::fs;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use decarbonyl::batch::BatchConfig;

use crate::cli::Cli;

/// Optional overrides loaded from a `--config` TOML file. Every field
/// falls back to the built-in default when absent; explicit CLI flags
/// take precedence over the file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileOverrides {
    suffix: Option<String>,
    metals: Option<Vec<String>>,
    co_bond_min: Option<f64>,
    co_bond_max: Option<f64>,
    metal_carbon_max: Option<f64>,
}

pub fn build_batch_config(cli: &Cli) -> Result<BatchConfig> {
    let overrides = load_overrides(cli)?;
    let mut config = BatchConfig::default();

    if let Some(suffix) = overrides.suffix {
        config.output_suffix = suffix;
    }
    if let Some(metals) = overrides.metals {
        config.strip.metals = metals.into_iter().collect();
    }
    if let Some(v) = overrides.co_bond_min {
        config.strip.co_bond_min = v;
    }
    if let Some(v) = overrides.co_bond_max {
        config.strip.co_bond_max = v;
    }
    if let Some(v) = overrides.metal_carbon_max {
        config.strip.metal_carbon_max = v;
    }

    if let Some(suffix) = &cli.suffix {
        config.output_suffix = suffix.clone();
    }
    if !cli.metals.is_empty() {
        config.strip.metals = cli.metals.iter().cloned().collect();
    }
    if let Some(v) = cli.co_bond_min {
        config.strip.co_bond_min = v;
    }
    if let Some(v) = cli.co_bond_max {
        config.strip.co_bond_max = v;
    }
    if let Some(v) = cli.metal_carbon_max {
        config.strip.metal_carbon_max = v;
    }

    if config.output_suffix.is_empty() {
        bail!("The output suffix must not be empty (outputs would overwrite inputs)");
    }
    if config.strip.co_bond_min > config.strip.co_bond_max {
        bail!(
            "C-O bond window is inverted: min {} exceeds max {}",
            config.strip.co_bond_min,
            config.strip.co_bond_max
        );
    }
    if config.strip.metals.is_empty() {
        bail!("The metal whitelist must contain at least one element");
    }

    Ok(config)
}

fn load_overrides(cli: &Cli) -> Result<FileOverrides> {
    let Some(path) = &cli.config else {
        return Ok(FileOverrides::default());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&text)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn cli_from(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("decarb").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_without_file_or_flags() {
        let config = build_batch_config(&cli_from(&[])).expect("config");
        assert_eq!(config.output_suffix, "_d");
        assert_eq!(config.strip.co_bond_max, 1.30);
        assert!(config.strip.metals.contains("Ru"));
    }

    #[test]
    fn flags_override_defaults() {
        let config = build_batch_config(&cli_from(&[
            "--suffix",
            "_bare",
            "--metal",
            "W",
            "--metal",
            "Re",
            "--mc-max",
            "2.5",
        ]))
        .expect("config");

        assert_eq!(config.output_suffix, "_bare");
        assert_eq!(config.strip.metal_carbon_max, 2.5);
        assert_eq!(config.strip.metals.len(), 2);
        assert!(config.strip.metals.contains("W"));
        assert!(!config.strip.metals.contains("Ir"));
    }

    #[test]
    fn file_overrides_defaults_and_flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "suffix = \"_x\"\nco_bond_max = 1.4").expect("write");
        let path = file.path().to_str().expect("utf8 path");

        let from_file =
            build_batch_config(&cli_from(&["--config", path])).expect("config");
        assert_eq!(from_file.output_suffix, "_x");
        assert_eq!(from_file.strip.co_bond_max, 1.4);
        // Untouched fields keep their defaults.
        assert_eq!(from_file.strip.co_bond_min, 1.0);

        let flag_wins =
            build_batch_config(&cli_from(&["--config", path, "--suffix", "_y"]))
                .expect("config");
        assert_eq!(flag_wins.output_suffix, "_y");
        assert_eq!(flag_wins.strip.co_bond_max, 1.4);
    }

    #[test]
    fn unknown_config_keys_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "sufix = \"_x\"").expect("write");
        let path = file.path().to_str().expect("utf8 path").to_string();

        let err = build_batch_config(&cli_from(&["--config", &path])).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn inverted_bond_window_is_rejected() {
        let err = build_batch_config(&cli_from(&["--co-min", "1.5"])).unwrap_err();
        assert!(err.to_string().contains("inverted"));
    }

    #[test]
    fn empty_suffix_is_rejected() {
        let err = build_batch_config(&cli_from(&["--suffix", ""])).unwrap_err();
        assert!(err.to_string().contains("suffix"));
    }
}
