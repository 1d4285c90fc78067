// SPDX-License-Identifier: MPL-2.0
//! Gallery manifest files.
//!
//! A manifest is a TOML file listing the images in display order, with
//! optional alt text and a styling hint:
//!
//! ```toml
//! style = "compact"
//!
//! [[images]]
//! source = "front.jpg"
//! alt = "Front view"
//!
//! [[images]]
//! source = "file:///srv/products/side.jpg"
//! ```
//!
//! Relative sources are resolved against the manifest's directory.

use crate::domain::gallery::GalleryImage;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// File extension that marks a path as a manifest.
pub const MANIFEST_EXTENSION: &str = "toml";

#[derive(Debug, Deserialize)]
struct ManifestFile {
    #[serde(default)]
    style: Option<String>,
    #[serde(default)]
    images: Vec<ManifestEntry>,
}

#[derive(Debug, Deserialize)]
struct ManifestEntry {
    source: String,
    #[serde(default)]
    alt: Option<String>,
}

/// Parsed manifest content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Manifest {
    pub images: Vec<GalleryImage>,
    pub style: Option<String>,
}

/// Returns whether `path` looks like a manifest file.
#[must_use]
pub fn is_manifest(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(MANIFEST_EXTENSION))
}

/// Parses manifest text. Relative sources are joined onto `base_dir`.
///
/// # Errors
///
/// Returns [`Error::Manifest`] for malformed TOML, missing `source` keys or
/// blank sources.
pub fn parse(content: &str, base_dir: &Path) -> Result<Manifest> {
    let file: ManifestFile =
        toml::from_str(content).map_err(|err| Error::Manifest(err.to_string()))?;

    let images = file
        .images
        .into_iter()
        .enumerate()
        .map(|(position, entry)| {
            let source = entry.source.trim();
            if source.is_empty() {
                return Err(Error::Manifest(format!(
                    "image {} has an empty source",
                    position + 1
                )));
            }
            let image = GalleryImage::new(resolve_source(source, base_dir));
            Ok(match entry.alt {
                Some(alt) => image.with_alt(alt),
                None => image,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Manifest {
        images,
        style: file.style.filter(|style| !style.trim().is_empty()),
    })
}

/// Reads and parses the manifest at `path`.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read, otherwise as [`parse`].
pub fn load(path: &Path) -> Result<Manifest> {
    let content = fs::read_to_string(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    parse(&content, base_dir)
}

fn resolve_source(source: &str, base_dir: &Path) -> String {
    if source.starts_with("file://") || Path::new(source).is_absolute() {
        source.to_string()
    } else {
        base_dir.join(source).to_string_lossy().into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn parse_keeps_order_alt_and_style() {
        let manifest = parse(
            r#"
style = "compact square"

[[images]]
source = "front.jpg"
alt = "Front view"

[[images]]
source = "/abs/side.jpg"

[[images]]
source = "file:///srv/back.jpg"
alt = ""
"#,
            Path::new("/products"),
        )
        .expect("manifest should parse");

        assert_eq!(manifest.style.as_deref(), Some("compact square"));
        assert_eq!(manifest.images.len(), 3);
        assert_eq!(manifest.images[0].path(), PathBuf::from("/products/front.jpg"));
        assert_eq!(manifest.images[0].alt_text(), Some("Front view"));
        assert_eq!(manifest.images[1].source(), "/abs/side.jpg");
        assert_eq!(manifest.images[2].source(), "file:///srv/back.jpg");
        assert_eq!(manifest.images[2].alt_text(), None);
    }

    #[test]
    fn empty_manifest_is_valid() {
        let manifest = parse("", Path::new(".")).expect("empty manifest should parse");
        assert!(manifest.images.is_empty());
        assert!(manifest.style.is_none());
    }

    #[test]
    fn missing_source_is_manifest_error() {
        let err = parse("[[images]]\nalt = \"x\"\n", Path::new(".")).unwrap_err();
        assert!(matches!(err, Error::Manifest(_)));
    }

    #[test]
    fn blank_source_is_manifest_error() {
        let err = parse("[[images]]\nsource = \"  \"\n", Path::new(".")).unwrap_err();
        assert_eq!(err.i18n_key(), "error-manifest");
    }

    #[test]
    fn load_resolves_against_manifest_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("gallery.toml");
        fs::write(&path, "[[images]]\nsource = \"a.png\"\n").expect("write manifest");

        let manifest = load(&path).expect("manifest should load");
        assert_eq!(manifest.images[0].path(), temp_dir.path().join("a.png"));
    }

    #[test]
    fn is_manifest_checks_extension() {
        assert!(is_manifest(Path::new("gallery.TOML")));
        assert!(!is_manifest(Path::new("gallery.png")));
    }
}
