//! # cascade-projects
//!
//! Application scaffolding library for the Cascade CLI:
//! - Embedded skeleton templates (compiled into the binary)
//! - App name validation
//! - Directory and file creation for `cascade new`
//!
//! # Examples
//!
//! ```no_run
//! use camino::Utf8Path;
//! use cascade_projects::create_app;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let report = create_app("myapp", Utf8Path::new("."))?;
//! println!("created {} files under {}", report.created.len(), report.root);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod scaffold;
pub mod templates;

pub use error::{Error, Result};
pub use scaffold::{app_settings_block, create_app, validate_app_name, ScaffoldReport};
pub use templates::{skeleton_files, template_bytes};
