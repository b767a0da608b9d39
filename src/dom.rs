use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow!("{:?}", e)
}

pub fn window() -> anyhow::Result<web::Window> {
    web::window().ok_or_else(|| anyhow!("no window"))
}

pub fn body(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    document.body().ok_or_else(|| anyhow!("no body"))
}

pub fn require_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{id}"))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| anyhow!("#{id} is not an HTML element"))
}

pub fn require_selector(
    document: &web::Document,
    selector: &str,
) -> anyhow::Result<web::HtmlElement> {
    document
        .query_selector(selector)
        .map_err(js_err)?
        .ok_or_else(|| anyhow!("missing {selector}"))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| anyhow!("{selector} is not an HTML element"))
}

fn html_elements(list: web::NodeList) -> Vec<web::HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

/// All HTML elements in the document matching `selector`; an invalid
/// selector yields none.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    match document.query_selector_all(selector) {
        Ok(list) => html_elements(list),
        Err(e) => {
            log::warn!("bad selector {selector}: {e:?}");
            Vec::new()
        }
    }
}

pub fn query_all_under(root: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    root.query_selector_all(selector)
        .map(html_elements)
        .unwrap_or_default()
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn add_class(el: &web::Element, class: &str) {
    _ = el.class_list().add_1(class);
}

#[inline]
pub fn remove_class(el: &web::Element, class: &str) {
    _ = el.class_list().remove_1(class);
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}

/// Attaches `handler` for the lifetime of the page.
pub fn listen<E>(
    target: &web::EventTarget,
    kind: &str,
    handler: impl FnMut(E) + 'static,
) -> anyhow::Result<()>
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target
        .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        .map_err(js_err)?;
    closure.forget();
    Ok(())
}

/// Like [`listen`], with an explicit `passive` flag. Handlers that call
/// `preventDefault` must not be passive.
pub fn listen_passive<E>(
    target: &web::EventTarget,
    kind: &str,
    passive: bool,
    handler: impl FnMut(E) + 'static,
) -> anyhow::Result<()>
where
    E: FromWasmAbi + 'static,
{
    let options = web::AddEventListenerOptions::new();
    options.set_passive(passive);
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            closure.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(js_err)?;
    closure.forget();
    Ok(())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(web::MouseEvent) + 'static,
) -> anyhow::Result<()> {
    let el = require_by_id(document, element_id)?;
    listen(&el, "click", move |ev: web::MouseEvent| handler(ev))
}
