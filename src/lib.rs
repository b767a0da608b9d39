#![cfg(target_arch = "wasm32")]
use folio_core::{LoadSchedule, PointerState, ScrollConfig, SliderConfig, TiltConfig};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod clock;
mod constants;
mod dom;
mod events;
mod frame;
mod letters;
mod load;
mod modal;
mod style;
mod theme;
mod timer;

use constants::*;

thread_local! {
    static GLOW_LOOP: RefCell<Option<frame::FrameLoop>> = const { RefCell::new(None) };
}

/// Logs a failed sub-behaviour and carries on; the others do not depend on it.
fn report(name: &str, result: anyhow::Result<()>) {
    match result {
        Ok(()) => log::debug!("[init] {name} wired"),
        Err(e) => log::error!("[init] {name}: {e:?}"),
    }
}

fn wire_glow(document: &web::Document, pointer: Rc<RefCell<PointerState>>) -> anyhow::Result<()> {
    let light = dom::require_by_id(document, CURSOR_LIGHT_ID)?;
    let glow = frame::start_glow(light, pointer);
    GLOW_LOOP.with(|slot| *slot.borrow_mut() = Some(glow));

    let window = dom::window()?;
    // A page entering the back/forward cache keeps its loop; rAF resumes on restore.
    dom::listen(&window, "pagehide", |ev: web::PageTransitionEvent| {
        if ev.persisted() {
            return;
        }
        GLOW_LOOP.with(|slot| {
            if let Some(glow) = slot.borrow_mut().take() {
                glow.stop();
                log::debug!("[frame] glow loop stopped");
            }
        });
    })
}

fn scroll_wiring(document: &web::Document) -> anyhow::Result<events::ScrollWiring> {
    Ok(events::ScrollWiring {
        body: dom::body(document)?,
        hero: dom::require_selector(document, STICKY_HERO_SELECTOR)?,
        progress_bar: dom::require_by_id(document, SCROLL_PROGRESS_ID)?,
        parallax: events::scroll::collect_parallax(document),
        config: ScrollConfig::default(),
    })
}

fn slider_wiring(document: &web::Document) -> anyhow::Result<events::SliderWiring> {
    let link = dom::require_by_id(document, SLIDER_LINK_ID)?
        .dyn_into::<web::HtmlAnchorElement>()
        .map_err(|_| anyhow::anyhow!("#{SLIDER_LINK_ID} is not an anchor"))?;
    Ok(events::SliderWiring {
        handle: dom::require_by_id(document, SLIDER_HANDLE_ID)?,
        track: dom::require_by_id(document, SLIDER_TRACK_ID)?,
        label: dom::require_selector(document, SLIDER_TEXT_SELECTOR)?,
        link,
        config: SliderConfig::default(),
    })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = dom::window()?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    load::page_loaded(&window, &document).await?;

    // Letter spans must exist before the hero reveal and the observer touch them.
    let titles = letters::prepare_all(&document);
    log::info!("[letters] split {titles} titles");

    report(
        "load sequence",
        load::run_load_sequence(&document, LoadSchedule::default()),
    );

    let pointer = Rc::new(RefCell::new(PointerState::default()));
    report("pointer", events::wire_pointer_recorder(pointer.clone()));
    report("theme", theme::wire_theme(&document));
    report("modal", modal::wire_modal(&document));
    report("clock", clock::wire_clock(&document));
    report("section reveal", letters::wire_section_reveal(&document));
    report("glow", wire_glow(&document, pointer));
    report(
        "scroll",
        scroll_wiring(&document).and_then(events::wire_scroll),
    );
    report(
        "card tilt",
        events::wire_card_tilt(&document, TiltConfig::default()),
    );
    report(
        "slider",
        slider_wiring(&document).and_then(events::wire_slider),
    );

    log::info!("folio-web ready");
    Ok(())
}
