//! Embedded skeleton templates
//!
//! The full file set a new app starts from is compiled into the binary with
//! `rust-embed`. Paths are relative to the app root, so an embedded path is
//! also the target path of the file it produces.

use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Embedded skeleton files
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/assets/skeleton/"]
#[prefix = ""]
struct Skeleton;

/// The fixed set of files a scaffold produces, in creation order.
const SKELETON_FILES: &[&str] = &[
    "settings.py",
    "main.py",
    "app.py",
    "app/routes/index.py",
    "app/static/index.html",
    "app/static/logo.png",
];

/// Relative paths of every file in the skeleton, in creation order
pub fn skeleton_files() -> &'static [&'static str] {
    SKELETON_FILES
}

/// Get the raw bytes of one embedded skeleton file
pub fn template_bytes(path: &str) -> Result<Cow<'static, [u8]>> {
    Skeleton::get(path)
        .map(|file| file.data)
        .ok_or_else(|| Error::template_not_found(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_manifest_entry_is_embedded() {
        for path in skeleton_files() {
            assert!(
                template_bytes(path).is_ok(),
                "missing embedded template: {}",
                path
            );
        }
    }

    #[test]
    fn test_no_unlisted_embedded_files() {
        for embedded in Skeleton::iter() {
            assert!(
                SKELETON_FILES.contains(&embedded.as_ref()),
                "embedded file not in manifest: {}",
                embedded
            );
        }
    }

    #[test]
    fn test_unknown_template_errors() {
        let err = template_bytes("nope.py").unwrap_err();
        assert!(matches!(err, Error::TemplateNotFound { .. }));
    }

    #[test]
    fn test_logo_is_png() {
        let bytes = template_bytes("app/static/logo.png").unwrap();
        assert_eq!(&bytes[..4], b"\x89PNG");
    }
}
