use crate::constants::{
    BENTO_ITEM_SELECTOR, CLASS_LOADED, CLASS_VISIBLE, HERO_LETTERS_SELECTOR, PRELOADER_ID,
};
use crate::{dom, letters, timer};
use folio_core::{LoadSchedule, LoadStep};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Resolves once the window `load` event has fired, immediately if it
/// already has.
pub async fn page_loaded(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    if document.ready_state() == "complete" {
        return Ok(());
    }
    let win = window.clone();
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let options = web::AddEventListenerOptions::new();
        options.set_once(true);
        _ = win.add_event_listener_with_callback_and_add_event_listener_options(
            "load", &resolve, &options,
        );
    });
    JsFuture::from(promise).await.map_err(dom::js_err)?;
    Ok(())
}

fn action_for(
    step: LoadStep,
    preloader: Option<&web::HtmlElement>,
    bento: &[web::HtmlElement],
    heroes: &[web::HtmlElement],
) -> Option<Box<dyn FnOnce()>> {
    match step {
        LoadStep::DismissPreloader => {
            let p = preloader?.clone();
            Some(Box::new(move || dom::add_class(&p, CLASS_LOADED)))
        }
        LoadStep::HidePreloader => {
            let p = preloader?.clone();
            Some(Box::new(move || dom::set_style(&p, "display", "none")))
        }
        LoadStep::RevealBento(i) => {
            let item = bento.get(i)?.clone();
            Some(Box::new(move || dom::add_class(&item, CLASS_VISIBLE)))
        }
        LoadStep::RevealHero => {
            let titles = heroes.to_vec();
            Some(Box::new(move || titles.iter().for_each(letters::reveal_title)))
        }
    }
}

/// Schedules the one-shot load animation: preloader fade, bento stagger and
/// the hero letter reveal.
pub fn run_load_sequence(document: &web::Document, schedule: LoadSchedule) -> anyhow::Result<()> {
    let preloader = match dom::require_by_id(document, PRELOADER_ID) {
        Ok(p) => Some(p),
        Err(e) => {
            log::error!("[load] {e}");
            None
        }
    };
    let bento = dom::query_all(document, BENTO_ITEM_SELECTOR);
    let heroes = dom::query_all(document, HERO_LETTERS_SELECTOR);
    log::info!(
        "[load] {} bento items, {} hero titles",
        bento.len(),
        heroes.len()
    );

    for timed in schedule.steps(bento.len()) {
        if let Some(action) = action_for(timed.step, preloader.as_ref(), &bento, &heroes) {
            timer::after(timed.at_ms, action)?;
        }
    }
    Ok(())
}
