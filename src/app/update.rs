// SPDX-License-Identifier: MPL-2.0
//! Update helpers that start work outside the gallery component: the open
//! dialog and gallery loading from user-supplied paths.

use super::Message;
use crate::app::config::SortOrder;
use crate::i18n::fluent::I18n;
use crate::manifest::MANIFEST_EXTENSION;
use crate::media::extensions::IMAGE_EXTENSIONS;
use crate::source::GallerySource;
use crate::ui::notice::Notice;
use iced::Task;
use std::path::PathBuf;

/// Opens the native picker for images and manifests.
pub fn open_file_dialog(i18n: &I18n) -> Task<Message> {
    let images_label = i18n.tr("open-dialog-filter-images");
    let manifest_label = i18n.tr("open-dialog-filter-manifest");

    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter(images_label, IMAGE_EXTENSIONS)
                .add_filter(manifest_label, &[MANIFEST_EXTENSION])
                .pick_files()
                .await
                .map(|handles| {
                    handles
                        .into_iter()
                        .map(|handle| handle.path().to_path_buf())
                        .collect()
                })
                .unwrap_or_default()
        },
        Message::OpenFileDialogResult,
    )
}

/// Builds a gallery source from opened or dropped paths.
///
/// Returns the notice to show instead when nothing usable was found.
pub fn load_source(
    paths: &[PathBuf],
    sort_order: SortOrder,
    style: Option<&str>,
) -> Result<GallerySource, Notice> {
    match GallerySource::from_paths(paths, sort_order, style) {
        Ok(source) if source.is_empty() => {
            tracing::info!(?paths, "no images found");
            Err(Notice::warning("notification-no-images"))
        }
        Ok(source) => Ok(source),
        Err(err) => {
            tracing::warn!(error = %err, "could not open gallery input");
            Err(Notice::error(err.i18n_key()))
        }
    }
}
