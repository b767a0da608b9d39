use crate::constants::{CLASS_VISIBLE, MODAL_CLOSE_ID, MODAL_OVERLAY_ID, MODAL_TRIGGER_ID};
use crate::dom;
use folio_core::{ModalEvent, ModalState};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn render(overlay: &web::HtmlElement, state: ModalState) {
    dom::set_class(overlay, CLASS_VISIBLE, state.is_open());
}

pub fn wire_modal(document: &web::Document) -> anyhow::Result<()> {
    let overlay = dom::require_by_id(document, MODAL_OVERLAY_ID)?;
    let state = Rc::new(Cell::new(ModalState::Closed));

    let dispatch = {
        let state = state.clone();
        let overlay = overlay.clone();
        move |event: ModalEvent| {
            let next = state.get().apply(event);
            if next != state.get() {
                log::debug!("[modal] {:?} -> {next:?}", state.get());
            }
            state.set(next);
            render(&overlay, next);
        }
    };

    let open = dispatch.clone();
    dom::add_click_listener(document, MODAL_TRIGGER_ID, move |_| {
        open(ModalEvent::TriggerClicked)
    })?;

    let close = dispatch.clone();
    dom::add_click_listener(document, MODAL_CLOSE_ID, move |_| {
        close(ModalEvent::CloseClicked)
    })?;

    let backdrop = overlay.clone();
    dom::add_click_listener(document, MODAL_OVERLAY_ID, move |ev: web::MouseEvent| {
        let on_backdrop = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Node>().ok())
            .map(|node| backdrop.is_same_node(Some(&node)))
            .unwrap_or(false);
        dispatch(ModalEvent::OverlayClicked { on_backdrop })
    })
}
