use super::*;
use crate::util::storage::MemoryStore;

fn settings() -> ThemeSettings {
    ThemeSettings::default()
}

fn controller(store: MemoryStore) -> ThemeController<MemoryStore, HeadlessPage> {
    ThemeController::new(store, HeadlessPage::new(), &settings())
}

// =============================================================
// init
// =============================================================

#[test]
fn init_with_stored_dark_applies_marker_and_offers_light() {
    let mut c = controller(MemoryStore::with_entry("theme", "dark"));
    assert_eq!(c.init(), Theme::Dark);
    assert!(c.page().dark);
    let control = c.page().control.expect("control rendered");
    assert_eq!(control.label, "Switch to light mode");
    assert_eq!(control.icon_class, "bx bx-sun");
}

#[test]
fn init_without_stored_value_uses_default() {
    let mut c = controller(MemoryStore::new());
    assert_eq!(c.init(), Theme::Light);
    assert!(!c.page().dark);
    assert_eq!(c.page().control, Some(Theme::Light.affordance()));
}

#[test]
fn init_respects_configured_dark_default() {
    let settings = ThemeSettings { default_theme: Theme::Dark, ..ThemeSettings::default() };
    let mut c = ThemeController::new(MemoryStore::new(), HeadlessPage::new(), &settings);
    assert_eq!(c.init(), Theme::Dark);
    assert!(c.page().dark);
}

#[test]
fn init_ignores_unknown_stored_value() {
    let mut c = controller(MemoryStore::with_entry("theme", "true"));
    assert_eq!(c.init(), Theme::Light);
}

#[test]
fn init_falls_back_when_store_unreadable() {
    let mut c = controller(MemoryStore::with_entry("theme", "dark").failing_reads());
    assert_eq!(c.init(), Theme::Light);
    assert!(!c.page().dark);
}

#[test]
fn init_does_not_write_store() {
    let mut c = controller(MemoryStore::new());
    c.init();
    assert_eq!(c.store().write_count(), 0);
    assert_eq!(c.store().get("theme"), None);
}

#[test]
fn init_twice_keeps_single_control() {
    let mut c = controller(MemoryStore::with_entry("theme", "dark"));
    c.init();
    c.init();
    assert_eq!(c.page().controls_created, 1);
    assert!(c.page().dark);
}

#[test]
fn init_adopts_control_already_in_markup() {
    let mut c = ThemeController::new(
        MemoryStore::with_entry("theme", "dark"),
        HeadlessPage::with_existing_control(),
        &settings(),
    );
    assert_eq!(c.init(), Theme::Dark);
    assert_eq!(c.page().controls_created, 0);
    assert!(c.page().has_control);
    assert_eq!(c.page().control, Some(Theme::Dark.affordance()));
    assert!(c.page().dark);
}

#[test]
fn adopted_control_follows_toggles() {
    let mut c = ThemeController::new(MemoryStore::new(), HeadlessPage::with_existing_control(), &settings());
    c.init();
    c.toggle();
    assert_eq!(c.page().controls_created, 0);
    assert_eq!(c.page().control.map(|a| a.label), Some("Switch to light mode"));
    assert_eq!(c.store().get("theme"), Some("dark"));
}

#[test]
fn custom_storage_key_is_used() {
    let settings = ThemeSettings { storage_key: "site-theme".to_owned(), ..ThemeSettings::default() };
    let mut c = ThemeController::new(MemoryStore::with_entry("site-theme", "dark"), HeadlessPage::new(), &settings);
    assert_eq!(c.init(), Theme::Dark);
    c.toggle();
    assert_eq!(c.store().get("site-theme"), Some("light"));
    assert_eq!(c.store().get("theme"), None);
}

// =============================================================
// toggle
// =============================================================

#[test]
fn stored_light_then_one_toggle_goes_dark() {
    let mut c = controller(MemoryStore::with_entry("theme", "light"));
    c.init();
    assert!(!c.page().dark);

    assert_eq!(c.toggle(), Theme::Dark);
    assert!(c.page().dark);
    assert_eq!(c.store().get("theme"), Some("dark"));
    assert_eq!(c.page().control.map(|a| a.label), Some("Switch to light mode"));
}

#[test]
fn toggle_twice_restores_visible_and_persisted_state() {
    let mut c = controller(MemoryStore::with_entry("theme", "dark"));
    c.init();
    c.toggle();
    c.toggle();
    assert_eq!(c.current(), Theme::Dark);
    assert_eq!(c.store().get("theme"), Some("dark"));
    assert_eq!(c.page().control, Some(Theme::Dark.affordance()));
}

#[test]
fn toggle_writes_once_per_call() {
    let mut c = controller(MemoryStore::new());
    c.init();
    c.toggle();
    c.toggle();
    c.toggle();
    assert_eq!(c.store().write_count(), 3);
}

#[test]
fn toggle_still_flips_when_store_rejects_writes() {
    let mut c = controller(MemoryStore::new().failing_writes());
    c.init();
    assert_eq!(c.toggle(), Theme::Dark);
    assert!(c.page().dark);
    assert_eq!(c.page().control, Some(Theme::Dark.affordance()));
    assert_eq!(c.store().get("theme"), None);
}

#[test]
fn toggle_reads_state_from_page_marker() {
    let mut page = HeadlessPage::new();
    page.dark = true;
    let mut c = ThemeController::new(MemoryStore::new(), page, &settings());
    assert_eq!(c.current(), Theme::Dark);
    assert_eq!(c.toggle(), Theme::Light);
}

// =============================================================
// HeadlessPage
// =============================================================

#[test]
fn headless_page_renders_only_after_control_exists() {
    let mut page = HeadlessPage::new();
    page.render_control(&Theme::Light.affordance());
    assert_eq!(page.control, None);
    assert!(page.ensure_control());
    assert!(!page.ensure_control());
    assert_eq!(page.controls_created, 1);
    page.render_control(&Theme::Light.affordance());
    assert_eq!(page.control, Some(Theme::Light.affordance()));
}

#[test]
fn headless_page_with_existing_control_never_creates() {
    let mut page = HeadlessPage::with_existing_control();
    assert!(!page.ensure_control());
    assert_eq!(page.controls_created, 0);
    page.render_control(&Theme::Dark.affordance());
    assert_eq!(page.control, Some(Theme::Dark.affordance()));
}
