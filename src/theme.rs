use crate::constants::{CLASS_LIGHT_MODE, THEME_TOGGLE_ID};
use crate::dom;
use folio_core::{FolioError, PreferenceStore, Theme, ThemeController};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// `localStorage`, looked up on each access. Private browsing modes may
/// refuse access; that surfaces as [`FolioError::Storage`].
#[derive(Default)]
pub struct LocalStore;

impl LocalStore {
    fn storage(&self) -> folio_core::error::Result<web::Storage> {
        web::window()
            .ok_or_else(|| FolioError::Storage("no window".to_owned()))?
            .local_storage()
            .map_err(|e| FolioError::Storage(format!("{e:?}")))?
            .ok_or_else(|| FolioError::Storage("localStorage disabled".to_owned()))
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> folio_core::error::Result<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| FolioError::Storage(format!("{e:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> folio_core::error::Result<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| FolioError::Storage(format!("{e:?}")))
    }
}

fn apply(body: &web::HtmlElement, theme: Theme) {
    dom::set_class(body, CLASS_LIGHT_MODE, theme.is_light());
}

pub fn wire_theme(document: &web::Document) -> anyhow::Result<()> {
    let body = dom::body(document)?;
    let controller = ThemeController::load(LocalStore);
    if controller.current().is_light() {
        apply(&body, Theme::Light);
    }
    log::info!("[theme] starting in {:?}", controller.current());

    let controller = Rc::new(RefCell::new(controller));
    dom::add_click_listener(document, THEME_TOGGLE_ID, move |_| {
        let (theme, written) = controller.borrow_mut().toggle();
        apply(&body, theme);
        if let Err(e) = written {
            log::warn!("[theme] {e}");
        }
        log::debug!("[theme] toggled to {theme:?}");
    })
}
