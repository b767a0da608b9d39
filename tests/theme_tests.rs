// Host-side tests for theme persistence.

use folio_core::{
    FolioError, MemoryStore, PreferenceStore, Theme, ThemeController, THEME_STORAGE_KEY,
};

fn stored(ctl: &ThemeController<MemoryStore>) -> Option<String> {
    ctl.store().get(THEME_STORAGE_KEY).unwrap()
}

#[test]
fn missing_preference_loads_dark() {
    let ctl = ThemeController::load(MemoryStore::default());
    assert_eq!(ctl.current(), Theme::Dark);
    assert_eq!(stored(&ctl), None);
}

#[test]
fn stored_light_loads_light() {
    let ctl = ThemeController::load(MemoryStore::with(THEME_STORAGE_KEY, "light"));
    assert_eq!(ctl.current(), Theme::Light);
    assert!(ctl.current().is_light());
}

#[test]
fn toggling_twice_restores_persisted_value() {
    for initial in ["light", "dark"] {
        let mut ctl = ThemeController::load(MemoryStore::with(THEME_STORAGE_KEY, initial));
        let start = ctl.current();
        let (_, first) = ctl.toggle();
        let (_, second) = ctl.toggle();
        assert!(first.is_ok() && second.is_ok());
        assert_eq!(ctl.current(), start);
        assert_eq!(stored(&ctl).as_deref(), Some(initial));
    }
}

#[test]
fn each_toggle_mirrors_into_store() {
    let mut ctl = ThemeController::load(MemoryStore::default());
    let (t, _) = ctl.toggle();
    assert_eq!(t, Theme::Light);
    assert_eq!(stored(&ctl).as_deref(), Some("light"));
    let (t, _) = ctl.toggle();
    assert_eq!(t, Theme::Dark);
    assert_eq!(stored(&ctl).as_deref(), Some("dark"));
}

struct BrokenStore;

impl PreferenceStore for BrokenStore {
    fn get(&self, _: &str) -> folio_core::error::Result<Option<String>> {
        Err(FolioError::Storage("denied".into()))
    }
    fn set(&mut self, _: &str, _: &str) -> folio_core::error::Result<()> {
        Err(FolioError::Storage("denied".into()))
    }
}

#[test]
fn unavailable_storage_still_toggles_in_page() {
    let mut ctl = ThemeController::load(BrokenStore);
    assert_eq!(ctl.current(), Theme::Dark);
    let (theme, written) = ctl.toggle();
    assert_eq!(theme, Theme::Light);
    assert!(matches!(written, Err(FolioError::Storage(_))));
}
