use crate::constants::PROJECT_CARD_SELECTOR;
use crate::{dom, style};
use folio_core::{tilt_for, CardRect, PointerState, TiltConfig};
use glam::DVec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Records the pointer on every window mousemove. Positional DOM writes happen
/// in the frame loop, not here.
pub fn wire_pointer_recorder(pointer: Rc<RefCell<PointerState>>) -> anyhow::Result<()> {
    let window = dom::window()?;
    dom::listen(&window, "mousemove", move |ev: web::MouseEvent| {
        pointer
            .borrow_mut()
            .record(f64::from(ev.client_x()), f64::from(ev.client_y()));
    })
}

pub fn wire_card_tilt(document: &web::Document, config: TiltConfig) -> anyhow::Result<()> {
    let cards = dom::query_all(document, PROJECT_CARD_SELECTOR);
    for card in &cards {
        let card_move = card.clone();
        dom::listen(card, "mousemove", move |ev: web::MouseEvent| {
            let r = card_move.get_bounding_client_rect();
            let rect = CardRect::new(r.left(), r.top(), r.width(), r.height());
            let pointer = DVec2::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
            let t = tilt_for(rect, pointer, &config);
            dom::set_style(
                &card_move,
                "transform",
                &style::tilt(config.perspective_px, t.rotate_x_deg, t.rotate_y_deg),
            );
        })?;

        let card_leave = card.clone();
        let reset = style::tilt_reset(config.perspective_px);
        dom::listen(card, "mouseleave", move |_: web::MouseEvent| {
            dom::set_style(&card_leave, "transform", &reset);
        })?;
    }
    log::info!("[tilt] {} project cards", cards.len());
    Ok(())
}
