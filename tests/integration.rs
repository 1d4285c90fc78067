// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::config::{self, Config, SortOrder};
use iced_gallery::carousel::{CarouselApi, Engine, Options, SlideMetrics};
use iced_gallery::domain::gallery::GalleryImage;
use iced_gallery::gallery::render::render;
use iced_gallery::gallery::SyncController;
use iced_gallery::i18n::fluent::I18n;
use iced_gallery::source::GallerySource;
use std::fs;
use tempfile::tempdir;

const VIEWPORT: f32 = 800.0;

#[derive(Debug, Clone, PartialEq)]
enum Msg {
    MainChanged,
}

/// Main and thumbs engines wired to a controller the way the gallery
/// component wires them, with a manual event pump.
struct Harness {
    main: Engine<Msg>,
    thumbs: Engine<Msg>,
    controller: SyncController,
    images: Vec<GalleryImage>,
}

impl Harness {
    fn mounted(images: Vec<GalleryImage>) -> Self {
        let mut harness = Self {
            main: Engine::new(Options::main()),
            thumbs: Engine::new(Options::thumbs()),
            controller: SyncController::new(),
            images,
        };
        harness.layout(false);
        harness
            .controller
            .mount(&mut harness.main, &mut harness.thumbs, Msg::MainChanged);
        harness.pump();
        harness
    }

    fn layout(&mut self, replaced: bool) {
        let count = self.images.len();
        let main = SlideMetrics::uniform(count, VIEWPORT, 0.0, VIEWPORT);
        let thumbs = SlideMetrics::uniform(count, 96.0, 8.0, VIEWPORT);
        if replaced {
            self.thumbs.reset(&thumbs);
            self.main.reset(&main);
        } else {
            self.thumbs.reinit(&thumbs);
            self.main.reinit(&main);
        }
    }

    fn pump(&mut self) -> usize {
        let mut delivered = 0;
        loop {
            let events = self.main.take_events();
            if events.is_empty() {
                return delivered;
            }
            for event in events {
                assert_eq!(event, Msg::MainChanged);
                delivered += 1;
                self.controller
                    .on_main_selection_changed(&self.main, &mut self.thumbs);
            }
        }
    }

    fn highlighted(&self, i18n: &I18n) -> Vec<bool> {
        render(&self.images, self.controller.selected_index(), i18n)
            .thumbs
            .iter()
            .map(|thumb| thumb.active)
            .collect()
    }
}

fn images(sources: &[&str]) -> Vec<GalleryImage> {
    sources.iter().map(|source| GalleryImage::new(*source)).collect()
}

fn english() -> I18n {
    I18n::new(Some("en-US".to_string()), &Config::default())
}

#[test]
fn initial_render_highlights_first_thumbnail() {
    let i18n = english();
    let harness = Harness::mounted(images(&["a.jpg", "b.jpg", "c.jpg"]));

    assert_eq!(harness.controller.selected_index(), 0);
    assert_eq!(harness.highlighted(&i18n), vec![true, false, false]);
}

#[test]
fn thumbnail_click_round_trips_through_the_main_engine() {
    let i18n = english();
    let mut harness = Harness::mounted(images(&["a.jpg", "b.jpg", "c.jpg"]));

    harness.controller.jump_to(&mut harness.main, 2);
    // Nothing changes until the main engine's event is delivered.
    assert_eq!(harness.controller.selected_index(), 0);

    assert_eq!(harness.pump(), 1);
    assert_eq!(harness.controller.selected_index(), 2);
    assert_eq!(harness.main.selected_scroll_snap(), Some(2));
    assert_eq!(harness.highlighted(&i18n), vec![false, false, true]);
    assert!(harness.thumbs.selected_scroll_snap().is_some());
}

#[test]
fn jumping_to_the_current_slide_changes_nothing() {
    let mut harness = Harness::mounted(images(&["a.jpg", "b.jpg"]));
    harness.controller.jump_to(&mut harness.main, 0);
    assert_eq!(harness.pump(), 0);
    assert_eq!(harness.controller.selected_index(), 0);
}

#[test]
fn replacing_the_image_list_resets_selection() {
    let mut harness = Harness::mounted(images(&["a.jpg", "b.jpg", "c.jpg"]));
    harness.controller.jump_to(&mut harness.main, 2);
    harness.pump();

    harness.images = images(&["1.jpg", "2.jpg", "3.jpg", "4.jpg", "5.jpg"]);
    harness.layout(true);
    assert_eq!(harness.pump(), 1);

    assert_eq!(harness.controller.selected_index(), 0);
    assert_eq!(harness.main.layout().snap_count(), 5);
}

#[test]
fn unmount_mid_drag_fires_nothing_afterwards() {
    let mut harness = Harness::mounted(images(&["a.jpg", "b.jpg", "c.jpg"]));

    harness.main.drag_start(600.0);
    harness.main.drag_move(200.0);
    assert!(harness.main.is_dragging());

    harness.controller.unmount(&mut harness.main);
    harness.controller.unmount(&mut harness.main);
    harness.main.destroy();
    harness.thumbs.destroy();

    harness.main.drag_end();
    harness.main.scroll_next();
    assert!(harness.main.take_events().is_empty());
    assert_eq!(harness.main.listener_count(), 0);
    assert_eq!(harness.controller.selected_index(), 0);
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut english_config = Config::default();
    english_config.general.language = Some("en-US".to_string());
    config::save_to_path(&english_config, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "en-US");

    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");

    let model = render(&images(&["a.jpg"]), 0, &i18n);
    assert_ne!(model.thumbs[0].label, "Go to slide 1");
}

#[test]
fn manifest_and_directory_feed_one_gallery() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let photos = dir.path().join("photos");
    fs::create_dir(&photos).expect("create dir");
    fs::write(photos.join("b.png"), b"fake").expect("write file");
    fs::write(photos.join("a.png"), b"fake").expect("write file");

    let manifest = dir.path().join("shoe.toml");
    fs::write(
        &manifest,
        "style = \"compact\"\n\n[[images]]\nsource = \"photos/a.png\"\nalt = \"Side view\"\n",
    )
    .expect("write manifest");

    let source = GallerySource::from_paths(&[manifest, photos], SortOrder::Alphabetical, None)
        .expect("sources should load");
    assert_eq!(source.images.len(), 3);
    assert!(source.style.compact);

    let model = render(&source.images, 0, &english());
    assert_eq!(model.slides[0].alt, "Side view");
    assert_eq!(model.slides[1].alt, "Image 2");
    assert!(model.slides[0].priority);
    assert_ne!(model.slides[0].key, model.slides[1].key);
}
