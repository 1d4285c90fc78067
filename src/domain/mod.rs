// SPDX-License-Identifier: MPL-2.0
//! Domain layer - gallery value types with no dependency on the GUI toolkit.
//!
//! # Modules
//!
//! - [`gallery`]: Gallery input ([`GalleryImage`](gallery::GalleryImage),
//!   [`StyleHint`](gallery::StyleHint))
//! - [`ui`]: UI value objects ([`SlideHeight`](ui::newtypes::SlideHeight),
//!   [`ThumbnailSize`](ui::newtypes::ThumbnailSize), [`CacheBudget`](ui::newtypes::CacheBudget))

pub mod gallery;
pub mod ui;
