// SPDX-License-Identifier: MPL-2.0
use image_rs::{Rgba, RgbaImage};
use tempfile::tempdir;
use weaving_con::app::config::{self, Config};
use weaving_con::app::{App, Message, Tab};
use weaving_con::conference::TALKS;
use weaving_con::i18n::fluent::I18n;
use weaving_con::profile::{
    card_payload, CodeFormat, Photo, ProfileField, ProfileStore, ProfileUpdate, PHOTO_FILE,
};
use weaving_con::ui::name_card::{display, editor};
use weaving_con::ui::talks::{self, Pager, Swipe};

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("tab-name-card"), "Carte de visite");
}

#[test]
fn test_pager_neighbours_cover_every_talk() {
    let pager = Pager::new(TALKS.to_vec()).expect("talk list is not empty");
    let last = pager.len() - 1;

    for i in 0..last {
        assert_eq!(pager.neighbor_after(i), Some(i + 1));
    }
    assert_eq!(pager.neighbor_after(last), None);

    for i in 1..=last {
        assert_eq!(pager.neighbor_before(i), Some(i - 1));
    }
    assert_eq!(pager.neighbor_before(0), None);
}

#[test]
fn test_pager_walks_through_programme() {
    let mut pager = Pager::new(TALKS.to_vec()).expect("talk list is not empty");
    let titles: Vec<_> = std::iter::once(pager.current().title)
        .chain(std::iter::from_fn(|| {
            pager.swipe(Swipe::Left)?;
            Some(pager.current().title)
        }))
        .collect();

    let expected: Vec<_> = TALKS.iter().map(|talk| talk.title).collect();
    assert_eq!(titles, expected);
}

#[test]
fn test_profile_survives_restart() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let photo = Photo::from_rgba(RgbaImage::from_pixel(64, 64, Rgba([120, 60, 200, 255])));

    {
        let mut store = ProfileStore::open(dir.path());
        store.update(ProfileUpdate {
            name: "Ada".into(),
            title: "Weaver".into(),
            photo: Some(photo),
        });
    }

    let store = ProfileStore::open(dir.path());
    let profile = store.snapshot();
    assert_eq!(profile.name, "Ada");
    assert_eq!(profile.title, "Weaver");
    let loaded = profile.photo.expect("photo should persist");
    assert_eq!((loaded.width(), loaded.height()), (64, 64));
    assert!(dir.path().join(PHOTO_FILE).exists());
}

#[test]
fn test_plain_payload_template() {
    assert_eq!(
        card_payload(CodeFormat::Plain, "Ada", "Weaver"),
        "Name: Ada\nTitle: Weaver"
    );
}

#[test]
fn test_edit_flow_through_app() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let store = ProfileStore::open(dir.path());
    let mut app = App::with_store(&Config::default(), Some("en-US".into()), store, Tab::Info);

    let _ = app.update(Message::SelectTab(Tab::NameCard));
    let _ = app.update(Message::NameCard(display::Message::Edit));
    let _ = app.update(Message::Editor(editor::Message::NameChanged("Jane Smith".into())));
    let _ = app.update(Message::Editor(editor::Message::TitleChanged("Loom Lead".into())));
    let _ = app.update(Message::Editor(editor::Message::TitleSubmitted));
    assert!(app.editor().is_some());
    assert_eq!(app.store().text(ProfileField::Name), "");

    let _ = app.update(Message::Editor(editor::Message::Done));

    assert!(app.editor().is_none());
    assert_eq!(app.name_card().payload(), "Name: Jane Smith\nTitle: Loom Lead");

    let reopened = ProfileStore::open(dir.path());
    assert_eq!(reopened.text(ProfileField::Name), "Jane Smith");
}

#[test]
fn test_talks_keys_respect_bounds_through_app() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let store = ProfileStore::open(dir.path());
    let mut app = App::with_store(&Config::default(), None, store, Tab::Talks);

    for _ in 0..10 {
        let _ = app.update(Message::Talks(talks::Message::Next));
    }
    assert_eq!(app.talks().pager().index(), TALKS.len() - 1);
}
