// SPDX-License-Identifier: MPL-2.0
//! Builds the gallery's image list from command-line paths or dropped files.
//!
//! Each input may be an image file, a directory (scanned one level deep) or
//! a manifest. Inputs are concatenated in the order given.

use crate::app::config::SortOrder;
use crate::directory_scanner;
use crate::domain::gallery::{GalleryImage, StyleHint};
use crate::error::{Error, Result};
use crate::manifest;
use crate::media;
use std::path::{Path, PathBuf};

/// Ordered images plus the presentation hint that applies to them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GallerySource {
    pub images: Vec<GalleryImage>,
    pub style: StyleHint,
}

impl GallerySource {
    /// Collects images from `paths`.
    ///
    /// Inputs that cannot be read are skipped with a warning. The style hint
    /// comes from `style_override` when given, otherwise from the first
    /// manifest that declares one.
    ///
    /// # Errors
    ///
    /// Returns the first failure when every input failed.
    pub fn from_paths(
        paths: &[PathBuf],
        sort_order: SortOrder,
        style_override: Option<&str>,
    ) -> Result<Self> {
        let mut images = Vec::new();
        let mut manifest_style = None;
        let mut first_error = None;
        let mut any_ok = false;

        for path in paths {
            match collect(path, sort_order) {
                Ok((found, style)) => {
                    any_ok = true;
                    images.extend(found);
                    if manifest_style.is_none() {
                        manifest_style = style;
                    }
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "skipping gallery input");
                    first_error.get_or_insert(err);
                }
            }
        }

        if !any_ok {
            if let Some(err) = first_error {
                return Err(err);
            }
        }

        let hint = style_override.or(manifest_style.as_deref()).unwrap_or("");
        let (style, unknown) = StyleHint::parse(hint);
        if !unknown.is_empty() {
            tracing::debug!(?unknown, "ignoring unknown style tokens");
        }

        Ok(Self { images, style })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

fn collect(path: &Path, sort_order: SortOrder) -> Result<(Vec<GalleryImage>, Option<String>)> {
    if path.is_dir() {
        let images = directory_scanner::scan_directory(path, sort_order)?
            .into_iter()
            .map(|image| GalleryImage::new(image.to_string_lossy().into_owned()))
            .collect();
        return Ok((images, None));
    }

    if manifest::is_manifest(path) {
        let manifest = manifest::load(path)?;
        return Ok((manifest.images, manifest.style));
    }

    if !path.exists() {
        return Err(Error::Io(format!("{} does not exist", path.display())));
    }

    if media::is_supported_image(path) {
        let image = GalleryImage::new(path.to_string_lossy().into_owned());
        return Ok((vec![image], None));
    }

    Err(Error::Image(format!(
        "{} is not a supported image",
        path.display()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"fake").expect("write file");
        path
    }

    #[test]
    fn mixes_files_directories_and_manifests_in_order() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let single = touch(temp_dir.path(), "single.jpg");

        let folder = temp_dir.path().join("folder");
        fs::create_dir(&folder).expect("create dir");
        touch(&folder, "b.png");
        touch(&folder, "a.png");

        let manifest = temp_dir.path().join("gallery.toml");
        fs::write(
            &manifest,
            "style = \"borderless\"\n[[images]]\nsource = \"m.jpg\"\nalt = \"Manifest\"\n",
        )
        .expect("write manifest");

        let source = GallerySource::from_paths(
            &[single, folder, manifest],
            SortOrder::Alphabetical,
            None,
        )
        .expect("sources should load");

        let names: Vec<_> = source
            .images
            .iter()
            .map(|image| image.path().file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect();
        assert_eq!(
            names,
            vec![
                Some("single.jpg".to_string()),
                Some("a.png".to_string()),
                Some("b.png".to_string()),
                Some("m.jpg".to_string()),
            ]
        );
        assert_eq!(source.images[3].alt_text(), Some("Manifest"));
        assert!(source.style.borderless);
    }

    #[test]
    fn style_override_wins_over_manifest() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let manifest = temp_dir.path().join("gallery.toml");
        fs::write(&manifest, "style = \"borderless\"\n").expect("write manifest");

        let source =
            GallerySource::from_paths(&[manifest], SortOrder::Alphabetical, Some("compact"))
                .expect("sources should load");
        assert!(source.style.compact);
        assert!(!source.style.borderless);
    }

    #[test]
    fn unreadable_inputs_are_skipped_when_others_load() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let good = touch(temp_dir.path(), "good.png");
        let missing = temp_dir.path().join("missing.png");
        let text = touch(temp_dir.path(), "notes.txt");

        let source =
            GallerySource::from_paths(&[missing, good, text], SortOrder::Alphabetical, None)
                .expect("one good input is enough");
        assert_eq!(source.images.len(), 1);
    }

    #[test]
    fn all_inputs_failing_returns_first_error() {
        let result = GallerySource::from_paths(
            &[PathBuf::from("/definitely/missing.png")],
            SortOrder::Alphabetical,
            None,
        );
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn no_inputs_is_an_empty_gallery() {
        let source = GallerySource::from_paths(&[], SortOrder::Alphabetical, None)
            .expect("empty input is fine");
        assert!(source.is_empty());
        assert_eq!(source.style, StyleHint::default());
    }
}
