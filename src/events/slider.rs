use crate::{dom, style, timer};
use folio_core::{Slider, SliderConfig, SliderGeometry, SliderRelease};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct SliderWiring {
    pub handle: web::HtmlElement,
    pub track: web::HtmlElement,
    pub label: web::HtmlElement,
    pub link: web::HtmlAnchorElement,
    pub config: SliderConfig,
}

/// Horizontal client position of a mouse event, or of the first touch of a
/// touch event.
fn client_x(ev: &web::Event) -> Option<f64> {
    if ev.type_().starts_with("touch") {
        let touch = ev.unchecked_ref::<web::TouchEvent>().touches().get(0)?;
        return Some(f64::from(touch.client_x()));
    }
    ev.dyn_ref::<web::MouseEvent>()
        .map(|m| f64::from(m.client_x()))
}

fn geometry(track: &web::HtmlElement, handle: &web::HtmlElement) -> SliderGeometry {
    let rect = track.get_bounding_client_rect();
    SliderGeometry {
        track_left: rect.left(),
        track_width: rect.width(),
        handle_width: f64::from(handle.offset_width()),
    }
}

fn navigate(href: &str) {
    match dom::window().and_then(|w| w.location().set_href(href).map_err(dom::js_err)) {
        Ok(()) => log::info!("[slider] navigating to {href}"),
        Err(e) => log::error!("[slider] navigation failed: {e:?}"),
    }
}

pub fn wire_slider(w: SliderWiring) -> anyhow::Result<()> {
    let window = dom::window()?;
    let slider = Rc::new(RefCell::new(Slider::new(w.config)));

    // start: the handle is the only place a drag can begin
    for kind in ["mousedown", "touchstart"] {
        let slider_start = slider.clone();
        dom::listen_passive(&w.handle, kind, false, move |ev: web::Event| {
            ev.prevent_default();
            slider_start.borrow_mut().start();
        })?;
    }

    // move: tracked on the window so the pointer may leave the handle
    for kind in ["mousemove", "touchmove"] {
        let slider_move = slider.clone();
        let handle = w.handle.clone();
        let track = w.track.clone();
        let label = w.label.clone();
        dom::listen(&window, kind, move |ev: web::Event| {
            if !slider_move.borrow().is_dragging() {
                return;
            }
            let Some(x) = client_x(&ev) else {
                return;
            };
            let frame = slider_move.borrow_mut().drag_to(x, geometry(&track, &handle));
            if let Some(frame) = frame {
                dom::set_style(&handle, "transform", &style::translate_x(frame.offset));
                dom::set_style(&label, "opacity", &frame.label_opacity.to_string());
            }
        })?;
    }

    // end: commit past the threshold, then always spring back
    for kind in ["mouseup", "touchend"] {
        let slider_end = slider.clone();
        let handle = w.handle.clone();
        let track = w.track.clone();
        let label = w.label.clone();
        let link = w.link.clone();
        let return_ms = w.config.return_ms;
        dom::listen(&window, kind, move |_: web::Event| {
            let track_width = f64::from(track.offset_width());
            let release = slider_end.borrow_mut().end(track_width);
            let Some(release) = release else {
                return;
            };
            if release == SliderRelease::Commit {
                navigate(&link.href());
            }
            dom::set_style(&handle, "transition", &style::transform_transition(return_ms));
            dom::set_style(&handle, "transform", &style::translate_x(0.0));
            dom::set_style(&label, "opacity", "1");
            let handle_reset = handle.clone();
            if let Err(e) = timer::after(return_ms, move || {
                dom::set_style(&handle_reset, "transition", "");
            }) {
                log::warn!("[slider] transition reset not scheduled: {e:?}");
            }
        })?;
    }
    Ok(())
}
