use crate::{dom, style};
use folio_core::PointerState;
use glam::DVec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Self-rescheduling `requestAnimationFrame` loop that can be stopped.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
    handle: Rc<Cell<Option<i32>>>,
    slot: FrameSlot,
}

fn request_frame(slot: &FrameSlot) -> Option<i32> {
    let window = web::window()?;
    let slot = slot.borrow();
    let closure = slot.as_ref()?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}

impl FrameLoop {
    pub fn start(mut tick: impl FnMut() + 'static) -> Self {
        let running = Rc::new(Cell::new(true));
        let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let slot: FrameSlot = Rc::new(RefCell::new(None));

        let running_tick = running.clone();
        let handle_tick = handle.clone();
        let slot_tick = slot.clone();
        *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !running_tick.get() {
                handle_tick.set(None);
                return;
            }
            tick();
            handle_tick.set(request_frame(&slot_tick));
        }) as Box<dyn FnMut()>));

        handle.set(request_frame(&slot));
        Self {
            running,
            handle,
            slot,
        }
    }

    pub fn stop(&self) {
        self.running.set(false);
        if let Some(h) = self.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(h);
            }
        }
        // breaks the closure's reference cycle back to its own slot
        self.slot.borrow_mut().take();
    }
}

/// Centres `#cursor-light` on the last recorded pointer position every frame.
pub fn start_glow(light: web::HtmlElement, pointer: Rc<RefCell<PointerState>>) -> FrameLoop {
    FrameLoop::start(move || {
        let size = DVec2::new(
            f64::from(light.offset_width()),
            f64::from(light.offset_height()),
        );
        let origin = pointer.borrow().centered_origin(size);
        dom::set_style(&light, "transform", &style::translate(origin.x, origin.y));
    })
}
