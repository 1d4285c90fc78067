// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a product image gallery built with the Iced GUI
//! framework.
//!
//! A main carousel shows one full-bleed slide per image; a strip of
//! thumbnails below it follows the main carousel's selection and jumps to a
//! slide when pressed. Images come from files, folders or TOML manifests.

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod app;
pub mod carousel;
pub mod directory_scanner;
pub mod domain;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod logging;
pub mod manifest;
pub mod media;
pub mod source;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
