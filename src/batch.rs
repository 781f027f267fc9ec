//! Directory-level driver: scan for XYZ files, run the removal
//! pipeline on each, and report per-file outcomes.
//!
//! A failure in one file never aborts the batch; every file gets its
//! own [`FileReport`]. The only fatal condition is an unreadable
//! input directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::io::error::Error;
use crate::io::xyz;
use crate::strip::{CoPair, Outcome, StripConfig, strip_carbonyls};

/// Batch-level settings on top of the detection thresholds.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Inserted before the extension on output file names
    /// (`complex.xyz` -> `complex_d.xyz`).
    pub output_suffix: String,

    pub strip: StripConfig,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            output_suffix: "_d".to_string(),
            strip: StripConfig::default(),
        }
    }
}

/// What happened to a single successfully read file.
#[derive(Debug, Clone, PartialEq)]
pub enum FileStatus {
    /// Carbonyls removed and the filtered structure written out.
    Written {
        output: PathBuf,
        atoms_before: usize,
        atoms_after: usize,
        pairs: Vec<CoPair>,
    },

    /// Structure declared zero atoms.
    SkippedEmpty,

    /// No whitelisted metal in the structure.
    SkippedNoMetal,

    /// Fewer than two carbonyls detected; nothing written.
    TooFewCarbonyls { found: usize },
}

/// Per-file record produced by [`run`]. Parse and I/O failures land
/// in the `Err` arm; they are isolated to the file that caused them.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub result: Result<FileStatus, Error>,
}

/// Lists the regular files in `dir` with the XYZ extension
/// (case-insensitive), sorted by name for deterministic reporting.
pub fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>, Error> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type()?.is_file() {
            continue;
        }
        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(xyz::EXTENSION));
        if matches {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Derives the output name by inserting `suffix` before the
/// extension: `dir/name.xyz` -> `dir/name<suffix>.xyz`.
pub fn output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();

    let mut name = format!("{stem}{suffix}");
    if let Some(ext) = input.extension().and_then(|e| e.to_str()) {
        name.push('.');
        name.push_str(ext);
    }

    input.with_file_name(name)
}

/// Runs the whole pipeline on one file: read, strip, and (when two
/// carbonyls were removed) write the filtered structure next to the
/// input. The input file is never modified.
pub fn process_file(path: &Path, config: &BatchConfig) -> Result<FileStatus, Error> {
    let structure = xyz::read_file(path)?;

    match strip_carbonyls(&structure, &config.strip) {
        Outcome::Removed {
            structure: filtered,
            pairs,
        } => {
            let output = output_path(path, &config.output_suffix);
            xyz::write_file(&output, &filtered)?;
            Ok(FileStatus::Written {
                output,
                atoms_before: structure.atom_count(),
                atoms_after: filtered.atom_count(),
                pairs,
            })
        }
        Outcome::EmptyStructure => Ok(FileStatus::SkippedEmpty),
        Outcome::NoMetalCenter => Ok(FileStatus::SkippedNoMetal),
        Outcome::TooFewCarbonyls { found } => Ok(FileStatus::TooFewCarbonyls { found }),
    }
}

/// Processes every XYZ file in `dir` independently. Returns one
/// report per file; only a directory-level failure is an `Err`.
pub fn run(dir: &Path, config: &BatchConfig) -> Result<Vec<FileReport>, Error> {
    let files = scan_directory(dir)?;

    let reports = files
        .into_iter()
        .map(|path| {
            let result = process_file(&path, config);
            FileReport { path, result }
        })
        .collect();

    Ok(reports)
}
