//! New app command
//!
//! Scaffolds a new application directory from the embedded framework
//! skeleton, then appends the app-specific settings block.

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use cascade_core::FrameworkConfig;
use cascade_projects::create_app;

use crate::cli::NewArgs;
use crate::output;

pub fn run(args: NewArgs) -> Result<()> {
    let config =
        FrameworkConfig::embedded().context("Failed to load framework configuration")?;

    output::header(&format!("Create New {} App", config.framework_name));

    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let parent = Utf8PathBuf::try_from(cwd).context("Current directory is not valid UTF-8")?;

    output::kv("App name", &args.name);
    output::kv("Location", parent.join(&args.name).as_str());
    println!();

    output::info("Creating app files...");
    let report = create_app(&args.name, &parent)
        .with_context(|| format!("Failed to create app '{}'", args.name))?;

    for file in &report.created {
        tracing::debug!("created {}", file);
    }

    println!();
    output::success(&format!(
        "Created a new {} app at {}",
        config.framework_name, report.root
    ));
    println!();
    output::info("Next steps:");
    println!("   1. cd {}", args.name);
    println!("   2. {} run", config.module_name());

    Ok(())
}
