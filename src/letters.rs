use crate::constants::{CLASS_VISIBLE, CONTENT_SECTION_SELECTOR, REVEAL_LETTERS_SELECTOR};
use crate::{dom, style};
use folio_core::{letter_delay_ms, split_letters, REVEAL_VISIBILITY_THRESHOLD};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Replaces the element's text with one `<span>` per character.
pub fn split_into_spans(document: &web::Document, el: &web::HtmlElement) -> anyhow::Result<()> {
    let text = el.text_content().unwrap_or_default();
    el.set_inner_html("");
    let mut buf = [0u8; 4];
    for c in split_letters(&text) {
        let span = document.create_element("span").map_err(dom::js_err)?;
        span.set_text_content(Some(&*c.encode_utf8(&mut buf)));
        el.append_child(&span).map_err(dom::js_err)?;
    }
    Ok(())
}

pub fn prepare_all(document: &web::Document) -> usize {
    let titles = dom::query_all(document, REVEAL_LETTERS_SELECTOR);
    for title in &titles {
        if let Err(e) = split_into_spans(document, title) {
            log::warn!("[letters] split failed: {e:?}");
        }
    }
    titles.len()
}

/// Staggers the letter spans so they cascade once their parent is revealed.
pub fn apply_letter_delays(title: &web::Element) {
    for (i, span) in dom::query_all_under(title, "span").iter().enumerate() {
        dom::set_style(span, "transition-delay", &style::millis(letter_delay_ms(i)));
    }
}

pub fn reveal_title(title: &web::HtmlElement) {
    dom::add_class(title, CLASS_VISIBLE);
    apply_letter_delays(title);
}

fn reveal_section(section: &web::Element) {
    dom::add_class(section, CLASS_VISIBLE);
    for title in dom::query_all_under(section, REVEAL_LETTERS_SELECTOR) {
        apply_letter_delays(&title);
    }
}

/// Reveals each content section the first time a fifth of it is on screen.
pub fn wire_section_reveal(document: &web::Document) -> anyhow::Result<()> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                reveal_section(&target);
                // the marker is never removed, so there is nothing left to watch
                observer.unobserve(&target);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_VISIBILITY_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(dom::js_err)?;
    callback.forget();

    let sections = dom::query_all(document, CONTENT_SECTION_SELECTOR);
    for section in &sections {
        observer.observe(section);
    }
    log::info!("[letters] observing {} sections", sections.len());
    Ok(())
}
