use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Runs `f` once after `ms`. Returns the timeout handle.
pub fn after(ms: u32, f: impl FnOnce() + 'static) -> anyhow::Result<i32> {
    let window = dom::window()?;
    let callback = Closure::once_into_js(f);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            ms as i32,
        )
        .map_err(dom::js_err)
}

/// Runs `f` every `ms` until the page unloads.
pub fn every(ms: u32, f: impl FnMut() + 'static) -> anyhow::Result<i32> {
    let window = dom::window()?;
    let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
    let handle = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            ms as i32,
        )
        .map_err(dom::js_err)?;
    closure.forget();
    Ok(handle)
}

/// Deferred action where each `schedule` replaces the pending one. The
/// callback is owned here, so a cancelled timeout releases its captures.
#[derive(Default)]
pub struct Debouncer {
    pending: Option<(i32, Closure<dyn FnMut()>)>,
}

impl Debouncer {
    pub fn schedule(&mut self, ms: u32, f: impl FnOnce() + 'static) {
        self.cancel();
        let callback = Closure::once(f);
        let scheduled = dom::window().and_then(|w| {
            w.set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                ms as i32,
            )
            .map_err(dom::js_err)
        });
        match scheduled {
            Ok(handle) => self.pending = Some((handle, callback)),
            Err(e) => log::warn!("[timer] schedule failed: {e:?}"),
        }
    }

    /// Clears the timeout before dropping its callback; a fired callback is
    /// simply released.
    pub fn cancel(&mut self) {
        if let Some((handle, callback)) = self.pending.take() {
            if let Some(w) = web_sys::window() {
                w.clear_timeout_with_handle(handle);
            }
            drop(callback);
        }
    }
}
