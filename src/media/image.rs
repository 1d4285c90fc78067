// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding for slides and thumbnail variants.

use super::cache::Variant;
use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }

    /// Decoded size in bytes (RGBA).
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.width as usize * self.height as usize * 4
    }
}

fn decode_dynamic(path: &Path) -> Result<image_rs::DynamicImage> {
    let bytes = fs::read(path)?;
    Ok(image_rs::load_from_memory(&bytes)?)
}

fn into_image_data(img: &image_rs::DynamicImage) -> ImageData {
    let (width, height) = img.dimensions();
    ImageData::from_rgba(width, height, img.to_rgba8().into_vec())
}

/// Loads a full-size image from the given path.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Image`] if
/// the format is invalid or unsupported.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let img = decode_dynamic(path.as_ref())?;
    Ok(into_image_data(&img))
}

/// Loads an image scaled down so that its longest edge is at most
/// `max_edge`, preserving aspect ratio. Smaller images are kept as is.
///
/// # Errors
///
/// Same as [`load_image`].
pub fn load_thumbnail<P: AsRef<Path>>(path: P, max_edge: u32) -> Result<ImageData> {
    let img = decode_dynamic(path.as_ref())?;
    let (width, height) = img.dimensions();
    if width <= max_edge && height <= max_edge {
        return Ok(into_image_data(&img));
    }
    Ok(into_image_data(&img.thumbnail(max_edge, max_edge)))
}

/// Decodes `path` off the UI thread.
///
/// Returns the path and variant alongside the result so the caller can file
/// it into the cache.
pub async fn decode(path: PathBuf, variant: Variant) -> (PathBuf, Variant, Result<ImageData>) {
    let task_path = path.clone();
    let result = tokio::task::spawn_blocking(move || match variant {
        Variant::Slide => load_image(&task_path),
        Variant::Thumbnail { max_edge } => load_thumbnail(&task_path, max_edge),
    })
    .await
    .unwrap_or_else(|e| Err(Error::Io(format!("Decode task failed: {e}"))));

    (path, variant, result)
}
