use std::io::{self, Write};

use anyhow::Error;

use decarbonyl::io::Error as XyzError;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    let hints = collect_hints(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in &hints {
            let wrapped = wrap(hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

fn collect_hints(err: &Error) -> Vec<String> {
    if let Some(xyz_err) = err.downcast_ref::<XyzError>() {
        return match xyz_err {
            XyzError::Io { source } => std_io_hints(source),
            XyzError::Parse { line, .. } => vec![
                format!("The parser gave up near line {line} of the file"),
                "Check the atom count header against the number of records".to_string(),
                "Each record needs an element label and three numeric coordinates".to_string(),
            ],
        };
    }

    if let Some(io_err) = err.downcast_ref::<io::Error>() {
        return std_io_hints(io_err);
    }

    fallback_hints(err)
}

fn std_io_hints(source: &io::Error) -> Vec<String> {
    use io::ErrorKind;

    match source.kind() {
        ErrorKind::NotFound => vec![
            "File or directory not found".to_string(),
            "Check the path spelling and ensure it exists".to_string(),
        ],
        ErrorKind::PermissionDenied => vec![
            "Permission denied accessing the path".to_string(),
            "Check permissions with `ls -la`".to_string(),
        ],
        ErrorKind::WriteZero => vec![
            "Failed to write data (disk full?)".to_string(),
            "Check available disk space".to_string(),
        ],
        _ => vec![
            "I/O operation failed".to_string(),
            "Check the path, permissions, and disk space".to_string(),
        ],
    }
}

fn fallback_hints(err: &Error) -> Vec<String> {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        text.push('\n');
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    let text = text.to_lowercase();

    if text.contains("config file") {
        return vec![
            "The settings file is TOML".to_string(),
            "Valid keys: suffix, metals, co_bond_min, co_bond_max, metal_carbon_max".to_string(),
        ];
    }

    if text.contains("not a directory") || text.contains("no such file") {
        return vec![
            "Pass the directory holding the .xyz files as the first argument".to_string(),
        ];
    }

    Vec::new()
}
