use crate::config::{Config, FailurePolicy};
use anyhow::{Context, Result};
use icon_core::create_circular_icon;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Result of generating one icon.
#[derive(Debug)]
pub struct IconOutcome {
    pub size: u32,
    pub path: PathBuf,
    /// `Err` carries the full error chain as text
    pub result: std::result::Result<(), String>,
}

impl IconOutcome {
    pub fn is_created(&self) -> bool {
        self.result.is_ok()
    }
}

/// Per-size outcomes of a run, in the order the sizes were processed.
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub outcomes: Vec<IconOutcome>,
}

impl GenerationReport {
    pub fn created(&self) -> impl Iterator<Item = &IconOutcome> {
        self.outcomes.iter().filter(|o| o.is_created())
    }

    pub fn failed(&self) -> impl Iterator<Item = &IconOutcome> {
        self.outcomes.iter().filter(|o| !o.is_created())
    }

    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(IconOutcome::is_created)
    }
}

pub fn icon_file_name(size: u32) -> String {
    format!("logo-{}.png", size)
}

pub fn icon_path(dir: &Path, size: u32) -> PathBuf {
    dir.join(icon_file_name(size))
}

/// Create the output directory if it is missing. Fails when something other
/// than a directory already sits at `dir`.
pub fn prepare_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))
}

/// Generate every configured icon, writing `Created <path>` to `out` after
/// each one.
///
/// Color and sizes are validated before the filesystem is touched, and a
/// directory failure aborts before any icon is written. What happens after a
/// single icon fails depends on [`FailurePolicy`].
pub fn generate<W: Write>(config: &Config, out: &mut W) -> Result<GenerationReport> {
    let color = config.fill_color()?;
    let sizes = config.icon_sizes()?;

    info!(
        "Generating {} icons in {} (fill {})",
        sizes.len(),
        config.output_dir.display(),
        color
    );

    prepare_output_dir(&config.output_dir)?;

    let mut report = GenerationReport::default();
    for size in sizes {
        let path = icon_path(&config.output_dir, size.get());

        let result = create_circular_icon(size, color, &path)
            .with_context(|| format!("Failed to create {}x{} icon", size, size));

        match result {
            Ok(()) => {
                writeln!(out, "Created {}", path.display())
                    .context("Failed to report progress")?;
                report.outcomes.push(IconOutcome {
                    size: size.get(),
                    path,
                    result: Ok(()),
                });
            }
            Err(e) if config.failure_policy == FailurePolicy::FailFast => return Err(e),
            Err(e) => {
                warn!("Skipping {}: {:#}", path.display(), e);
                report.outcomes.push(IconOutcome {
                    size: size.get(),
                    path,
                    result: Err(format!("{:#}", e)),
                });
            }
        }
    }

    info!(
        "Finished: {} created, {} failed",
        report.created().count(),
        report.failed().count()
    );

    Ok(report)
}
