use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use decarbonyl::batch::FileStatus;
use decarbonyl::io::Error;

use super::Context;

/// Streams one status line per processed file and keeps the running
/// tally for the closing summary. Interactive runs get a progress bar
/// and ANSI color; non-TTY runs get plain lines; `--quiet` gets
/// nothing.
pub struct Reporter {
    bar: Option<ProgressBar>,
    colored: bool,
    quiet: bool,
    written: usize,
    skipped: usize,
    warnings: usize,
    failures: usize,
}

impl Reporter {
    pub fn new(ctx: Context, total_files: usize) -> Self {
        let bar = (ctx.interactive && total_files > 0).then(|| {
            let bar = ProgressBar::new(total_files as u64);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("  {bar:32.cyan} {pos}/{len}")
                    .expect("invalid template"),
            );
            bar
        });

        Self {
            bar,
            colored: ctx.interactive,
            quiet: ctx.quiet,
            written: 0,
            skipped: 0,
            warnings: 0,
            failures: 0,
        }
    }

    pub fn file(&mut self, path: &Path, result: &Result<FileStatus, Error>) {
        let line = self.record(path, result);

        if let Some(bar) = &self.bar {
            bar.println(line);
            bar.inc(1);
        } else if !self.quiet {
            let mut stderr = io::stderr().lock();
            let _ = writeln!(stderr, "{line}");
        }
    }

    pub fn finish(self, elapsed: Duration) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
        if self.quiet {
            return;
        }

        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr);
        if self.colored {
            let _ = writeln!(
                stderr,
                "  \x1b[2m╺━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━╸\x1b[0m"
            );
            let _ = writeln!(stderr);
        }
        let _ = writeln!(
            stderr,
            "  {} written, {} skipped, {} warnings, {} failed {:>12}",
            self.written,
            self.skipped,
            self.warnings,
            self.failures,
            format!("{:.2}s", elapsed.as_secs_f64())
        );
        let _ = writeln!(stderr);
    }

    fn record(&mut self, path: &Path, result: &Result<FileStatus, Error>) -> String {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        match result {
            Ok(FileStatus::Written {
                output,
                atoms_before,
                atoms_after,
                pairs,
            }) => {
                self.written += 1;
                let out_name = output
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| output.display().to_string());
                format!(
                    "  {} {:<28} {} → {} atoms ({} CO removed) → {}",
                    self.mark("✓", "\x1b[32m"),
                    name,
                    atoms_before,
                    atoms_after,
                    pairs.len(),
                    out_name
                )
            }
            Ok(FileStatus::SkippedEmpty) => {
                self.skipped += 1;
                format!(
                    "  {} {:<28} no atoms, skipped",
                    self.mark("·", "\x1b[2m"),
                    name
                )
            }
            Ok(FileStatus::SkippedNoMetal) => {
                self.skipped += 1;
                format!(
                    "  {} {:<28} no metal center, skipped",
                    self.mark("·", "\x1b[2m"),
                    name
                )
            }
            Ok(FileStatus::TooFewCarbonyls { found }) => {
                self.warnings += 1;
                format!(
                    "  {} {:<28} found {} CO ligand(s), need 2; nothing removed",
                    self.mark("!", "\x1b[33m"),
                    name,
                    found
                )
            }
            Err(e) => {
                self.failures += 1;
                format!("  {} {:<28} {}", self.mark("✗", "\x1b[31m"), name, e)
            }
        }
    }

    fn mark(&self, glyph: &str, color: &str) -> String {
        if self.colored {
            format!("{color}{glyph}\x1b[0m")
        } else {
            glyph.to_string()
        }
    }
}
