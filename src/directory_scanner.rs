// SPDX-License-Identifier: MPL-2.0
//! Directory scanner for finding and sorting gallery images.
//!
//! Scans one directory level for supported image formats and sorts the
//! result according to the configured sort order.

use crate::app::config::SortOrder;
use crate::error::Result;
use crate::media;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Returns the supported images directly inside `directory`, sorted.
///
/// Subdirectories are not descended into.
///
/// # Errors
///
/// Returns an error if the directory cannot be read.
pub fn scan_directory(directory: &Path, sort_order: SortOrder) -> Result<Vec<PathBuf>> {
    let mut images = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && media::is_supported_image(&path) {
            images.push(path);
        }
    }

    sort_images(&mut images, sort_order);
    tracing::debug!(
        directory = %directory.display(),
        count = images.len(),
        "scanned directory"
    );
    Ok(images)
}

/// Sorts image paths according to the specified sort order.
///
/// Files whose timestamps cannot be read sort first.
fn sort_images(images: &mut [PathBuf], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Alphabetical => {
            images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }
        SortOrder::ModifiedDate => {
            images.sort_by_key(|path| {
                path.metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(SystemTime::UNIX_EPOCH)
            });
        }
        SortOrder::CreatedDate => {
            images.sort_by_key(|path| {
                path.metadata()
                    .and_then(|m| m.created())
                    .unwrap_or(SystemTime::UNIX_EPOCH)
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::tempdir;

    fn create_test_file(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).expect("failed to create test file");
        file.write_all(b"fake image data")
            .expect("failed to write test file");
        path
    }

    #[test]
    fn scan_directory_finds_all_images() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_file(temp_dir.path(), "a.jpg");
        create_test_file(temp_dir.path(), "b.png");
        create_test_file(temp_dir.path(), "c.webp");

        let images = scan_directory(temp_dir.path(), SortOrder::Alphabetical)
            .expect("scan should succeed");
        assert_eq!(images.len(), 3);
    }

    #[test]
    fn scan_directory_sorts_alphabetically() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let img_c = create_test_file(temp_dir.path(), "c.jpg");
        let img_a = create_test_file(temp_dir.path(), "a.jpg");
        let img_b = create_test_file(temp_dir.path(), "b.jpg");

        let images = scan_directory(temp_dir.path(), SortOrder::Alphabetical)
            .expect("scan should succeed");
        assert_eq!(images, vec![img_a, img_b, img_c]);
    }

    #[test]
    fn scan_directory_skips_unsupported_files_and_subdirectories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_file(temp_dir.path(), "notes.txt");
        create_test_file(temp_dir.path(), "clip.mp4");
        fs::create_dir(temp_dir.path().join("nested.jpg")).expect("create dir");
        let kept = create_test_file(temp_dir.path(), "kept.PNG");

        let images = scan_directory(temp_dir.path(), SortOrder::Alphabetical)
            .expect("scan should succeed");
        assert_eq!(images, vec![kept]);
    }

    #[test]
    fn scan_directory_handles_empty_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let images = scan_directory(temp_dir.path(), SortOrder::ModifiedDate)
            .expect("scan should succeed");
        assert!(images.is_empty());
    }

    #[test]
    fn scan_missing_directory_errors() {
        let result = scan_directory(Path::new("/definitely/not/a/dir"), SortOrder::Alphabetical);
        assert!(result.is_err());
    }
}
