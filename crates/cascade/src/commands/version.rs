//! Version command

use crate::cli::VersionArgs;
use crate::output;
use crate::version::VersionInfo;
use anyhow::{Context, Result};
use cascade_core::FrameworkConfig;

pub fn run(args: VersionArgs) -> Result<()> {
    let config =
        FrameworkConfig::embedded().context("Failed to load framework configuration")?;
    let info = VersionInfo::current(config.module_name());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("{}", info.display());

        if let Some(commit) = &info.commit {
            output::kv("Commit", commit);
        }
        if let Some(target) = &info.target {
            output::kv("Target", target);
        }
    }

    Ok(())
}
