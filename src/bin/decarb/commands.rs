use std::io::{self, Write};
use std::time::Instant;

use anyhow::{Context as _, Result, bail};

use decarbonyl::batch;

use crate::cli::Cli;
use crate::config::build_batch_config;
use crate::display::{Context, Reporter};

pub fn run(cli: Cli, ctx: Context) -> Result<()> {
    let config = build_batch_config(&cli)?;

    if !cli.directory.is_dir() {
        bail!(
            "'{}' is not a directory (pass the folder holding the .xyz files)",
            cli.directory.display()
        );
    }

    let files = batch::scan_directory(&cli.directory)
        .with_context(|| format!("Failed to scan directory: {}", cli.directory.display()))?;

    if files.is_empty() {
        if !ctx.quiet {
            let mut stderr = io::stderr().lock();
            let _ = writeln!(
                stderr,
                "  No .xyz files in {}",
                cli.directory.display()
            );
        }
        return Ok(());
    }

    let started = Instant::now();
    let mut reporter = Reporter::new(ctx, files.len());

    for path in files {
        let result = batch::process_file(&path, &config);
        reporter.file(&path, &result);
    }

    reporter.finish(started.elapsed());
    Ok(())
}
