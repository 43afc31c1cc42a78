//! App scaffolding for `cascade new`
//!
//! Creates the directory tree of a new application and copies the embedded
//! skeleton into it. The target is `<parent>/<name>`; nothing is written if
//! that directory already exists.

use crate::error::{Error, Result};
use crate::templates::{skeleton_files, template_bytes};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// Subdirectories created under the app root, in creation order.
const APP_DIRS: &[&str] = &["app", "app/routes", "app/static"];

/// Outcome of a successful scaffold
#[derive(Debug)]
pub struct ScaffoldReport {
    /// Root directory of the new app
    pub root: Utf8PathBuf,

    /// Files written, relative to the app root
    pub created: Vec<Utf8PathBuf>,
}

/// Validate an app name: non-empty, no path separators, ASCII alphanumeric
/// plus hyphens and underscores.
pub fn validate_app_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::invalid_app_name(name));
    }

    let valid = name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        return Err(Error::invalid_app_name(name));
    }

    Ok(())
}

/// App-specific settings block appended to the scaffolded settings.py
pub fn app_settings_block(name: &str) -> String {
    format!("\n# App-specific settings\nAPP_NAME = '{}'\n", name)
}

/// Create a new app directory at `<parent>/<name>` from the embedded skeleton
pub fn create_app(name: &str, parent: &Utf8Path) -> Result<ScaffoldReport> {
    validate_app_name(name)?;

    let root = parent.join(name);
    if root.exists() {
        return Err(Error::app_exists(root));
    }

    fs::create_dir_all(&root)?;
    for dir in APP_DIRS {
        fs::create_dir_all(root.join(dir))?;
    }

    let mut created = Vec::with_capacity(skeleton_files().len());
    for rel in skeleton_files() {
        let bytes = template_bytes(rel)?;
        let target = root.join(rel);

        if *rel == "settings.py" {
            // settings.py gets the app-specific block appended
            let mut content = bytes.into_owned();
            content.extend_from_slice(app_settings_block(name).as_bytes());
            fs::write(&target, content)?;
        } else {
            fs::write(&target, bytes)?;
        }

        tracing::debug!("Created file: {}", target);
        created.push(Utf8PathBuf::from(*rel));
    }

    Ok(ScaffoldReport { root, created })
}
