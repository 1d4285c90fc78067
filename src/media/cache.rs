// SPDX-License-Identifier: MPL-2.0
//! Decoded image cache.
//!
//! Keeps decoded slides and thumbnail variants so the gallery can hand Iced
//! ready-made handles instead of re-decoding on every layout change.
//!
//! # Design
//!
//! - **LRU eviction**: Least recently used images are evicted first
//! - **Memory-bounded**: Total cache size limited by a byte budget
//! - **Variant-keyed**: A path can be cached as a slide and as a thumbnail

use super::image::ImageData;
use crate::domain::ui::CacheBudget;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Which rendition of an image is cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Full-size decode, used for the main slides.
    Slide,
    /// Scaled copy whose longest edge is at most `max_edge`.
    Thumbnail { max_edge: u32 },
}

/// Statistics about cache performance.
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheStats {
    /// Number of cache hits (image found).
    pub hits: u64,

    /// Number of cache misses (image not found).
    pub misses: u64,

    /// Number of images evicted due to limits.
    pub evictions: u64,

    /// Number of images inserted.
    pub insertions: u64,
}

/// LRU cache of decoded images keyed by path and variant.
pub struct ImageCache {
    cache: LruCache<(PathBuf, Variant), ImageData>,
    max_bytes: usize,
    current_bytes: usize,
    stats: CacheStats,
}

impl ImageCache {
    /// Creates a cache bounded by `budget`.
    #[must_use]
    pub fn new(budget: CacheBudget) -> Self {
        let capacity = NonZeroUsize::new(budget.max_images()).unwrap_or(NonZeroUsize::MIN);

        Self {
            cache: LruCache::new(capacity),
            max_bytes: budget.max_bytes(),
            current_bytes: 0,
            stats: CacheStats::default(),
        }
    }

    /// Inserts a decoded image.
    ///
    /// Returns `false` when the image is larger than half the byte budget and
    /// was not cached.
    pub fn insert(&mut self, path: PathBuf, variant: Variant, image: ImageData) -> bool {
        let size = image.byte_len();
        if size > self.max_bytes / 2 {
            return false;
        }

        let key = (path, variant);
        if let Some(existing) = self.cache.pop(&key) {
            self.current_bytes = self.current_bytes.saturating_sub(existing.byte_len());
        }

        while self.current_bytes + size > self.max_bytes {
            let Some((_, evicted)) = self.cache.pop_lru() else {
                break;
            };
            self.current_bytes = self.current_bytes.saturating_sub(evicted.byte_len());
            self.stats.evictions += 1;
        }

        // `push` also reports an entry evicted by the count limit.
        if let Some((_, evicted)) = self.cache.push(key, image) {
            self.current_bytes = self.current_bytes.saturating_sub(evicted.byte_len());
            self.stats.evictions += 1;
        }
        self.current_bytes += size;
        self.stats.insertions += 1;
        true
    }

    /// Gets an image and marks it as recently used.
    pub fn get(&mut self, path: &Path, variant: Variant) -> Option<&ImageData> {
        let key = (path.to_path_buf(), variant);
        if self.cache.contains(&key) {
            self.stats.hits += 1;
        } else {
            self.stats.misses += 1;
        }
        self.cache.get(&key)
    }

    /// Looks an image up without touching LRU order or statistics.
    #[must_use]
    pub fn peek(&self, path: &Path, variant: Variant) -> Option<&ImageData> {
        self.cache.peek(&(path.to_path_buf(), variant))
    }

    pub fn clear(&mut self) {
        self.cache.clear();
        self.current_bytes = 0;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.current_bytes
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("image_count", &self.cache.len())
            .field("memory_usage", &self.current_bytes)
            .field("max_bytes", &self.max_bytes)
            .field("stats", &self.stats)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MB: usize = 1024 * 1024;

    fn create_test_image(width: u32, height: u32) -> ImageData {
        let pixels = vec![0u8; (width * height * 4) as usize];
        ImageData::from_rgba(width, height, pixels)
    }

    #[test]
    fn insert_and_get_image() {
        let mut cache = ImageCache::new(CacheBudget::default());
        let path = PathBuf::from("/test/image.jpg");

        assert!(cache.insert(path.clone(), Variant::Slide, create_test_image(100, 100)));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&path, Variant::Slide).map(|img| img.width), Some(100));
        assert!(cache.get(&path, Variant::Thumbnail { max_edge: 96 }).is_none());

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
    }

    #[test]
    fn variants_are_cached_separately() {
        let mut cache = ImageCache::new(CacheBudget::default());
        let path = PathBuf::from("/test/image.jpg");
        let thumb = Variant::Thumbnail { max_edge: 96 };

        cache.insert(path.clone(), Variant::Slide, create_test_image(200, 100));
        cache.insert(path.clone(), thumb, create_test_image(96, 48));

        assert_eq!(cache.peek(&path, Variant::Slide).map(|img| img.width), Some(200));
        assert_eq!(cache.peek(&path, thumb).map(|img| img.width), Some(96));
    }

    #[test]
    fn lru_eviction_on_byte_limit() {
        // 8 MB budget; each 1024x512 image is 2 MB.
        let mut cache = ImageCache::new(CacheBudget::new(8, 100));
        for i in 0..5 {
            let path = PathBuf::from(format!("/test/{i}.png"));
            assert!(cache.insert(path, Variant::Slide, create_test_image(1024, 512)));
        }

        assert_eq!(cache.len(), 4);
        assert!(cache.memory_usage() <= 8 * MB);
        assert!(cache.peek(Path::new("/test/0.png"), Variant::Slide).is_none());
        assert!(cache.peek(Path::new("/test/4.png"), Variant::Slide).is_some());
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn count_limit_evicts_least_recent() {
        let mut cache = ImageCache::new(CacheBudget::new(64, 4));
        for i in 0..4 {
            let path = PathBuf::from(format!("/test/{i}.png"));
            cache.insert(path, Variant::Slide, create_test_image(10, 10));
        }
        // Touch 0 so that 1 becomes the eviction candidate.
        let _ = cache.get(Path::new("/test/0.png"), Variant::Slide);
        cache.insert(PathBuf::from("/test/4.png"), Variant::Slide, create_test_image(10, 10));

        assert_eq!(cache.len(), 4);
        assert!(cache.peek(Path::new("/test/0.png"), Variant::Slide).is_some());
        assert!(cache.peek(Path::new("/test/1.png"), Variant::Slide).is_none());
        assert_eq!(cache.memory_usage(), 4 * 10 * 10 * 4);
    }

    #[test]
    fn oversized_image_is_rejected() {
        let mut cache = ImageCache::new(CacheBudget::new(8, 10));
        // 5 MB > half of 8 MB.
        let inserted = cache.insert(
            PathBuf::from("/test/huge.png"),
            Variant::Slide,
            create_test_image(1280, 1024),
        );

        assert!(!inserted);
        assert!(cache.is_empty());
    }

    #[test]
    fn reinserting_replaces_without_double_counting() {
        let mut cache = ImageCache::new(CacheBudget::default());
        let path = PathBuf::from("/test/image.jpg");
        cache.insert(path.clone(), Variant::Slide, create_test_image(10, 10));
        cache.insert(path.clone(), Variant::Slide, create_test_image(20, 10));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.memory_usage(), 20 * 10 * 4);
    }

    #[test]
    fn clear_resets_usage() {
        let mut cache = ImageCache::new(CacheBudget::default());
        cache.insert(PathBuf::from("/a.png"), Variant::Slide, create_test_image(10, 10));
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.memory_usage(), 0);
    }
}
