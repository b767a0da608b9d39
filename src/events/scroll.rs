use crate::constants::{
    CLASS_HERO_HIDDEN, CLASS_HERO_SCROLLED, CLASS_SCROLLING_DOWN, CLASS_SCROLLING_UP,
    PARALLAX_ATTR, PARALLAX_SELECTOR,
};
use crate::timer::Debouncer;
use crate::{dom, style};
use folio_core::{parse_parallax_speed, PageMetrics, ScrollConfig, ScrollDirection, ScrollReactor};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct ScrollWiring {
    pub body: web::HtmlElement,
    pub hero: web::HtmlElement,
    pub progress_bar: web::HtmlElement,
    pub parallax: Vec<(web::HtmlElement, f64)>,
    pub config: ScrollConfig,
}

/// Parallax elements paired with their parsed speed. Elements with an
/// unparsable speed are skipped.
pub fn collect_parallax(document: &web::Document) -> Vec<(web::HtmlElement, f64)> {
    dom::query_all(document, PARALLAX_SELECTOR)
        .into_iter()
        .filter_map(|el| {
            let raw = el.get_attribute(PARALLAX_ATTR).unwrap_or_default();
            match parse_parallax_speed(&raw) {
                Ok(speed) => Some((el, speed)),
                Err(e) => {
                    log::warn!("[scroll] skipping parallax element: {e}");
                    None
                }
            }
        })
        .collect()
}

fn page_metrics(window: &web::Window, body: &web::HtmlElement) -> PageMetrics {
    PageMetrics {
        scroll_height: f64::from(body.scroll_height()),
        viewport_height: window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0),
    }
}

fn show_direction(body: &web::HtmlElement, direction: ScrollDirection) {
    match direction {
        ScrollDirection::Down => {
            dom::add_class(body, CLASS_SCROLLING_DOWN);
            dom::remove_class(body, CLASS_SCROLLING_UP);
        }
        ScrollDirection::Up => {
            dom::add_class(body, CLASS_SCROLLING_UP);
            dom::remove_class(body, CLASS_SCROLLING_DOWN);
        }
        ScrollDirection::Neutral => {
            dom::remove_class(body, CLASS_SCROLLING_DOWN);
            dom::remove_class(body, CLASS_SCROLLING_UP);
        }
    }
}

pub fn wire_scroll(w: ScrollWiring) -> anyhow::Result<()> {
    let window = dom::window()?;
    let initial = window.scroll_y().unwrap_or(0.0);
    let reactor = Rc::new(RefCell::new(ScrollReactor::new(w.config, initial)));
    let idle = Rc::new(RefCell::new(Debouncer::default()));
    log::info!(
        "[scroll] wired: {} parallax elements, start offset {initial}",
        w.parallax.len()
    );

    let win = window.clone();
    dom::listen_passive(&window, "scroll", true, move |_: web::Event| {
        let offset = win.scroll_y().unwrap_or(0.0);
        let metrics = page_metrics(&win, &w.body);
        let frame = reactor.borrow_mut().on_scroll(offset, metrics);

        show_direction(&w.body, frame.direction);
        let reactor_clear = reactor.clone();
        let body_clear = w.body.clone();
        let ticket = frame.clear_ticket;
        idle.borrow_mut().schedule(frame.clear_after_ms, move || {
            if reactor_clear.borrow_mut().clear_direction(ticket) {
                show_direction(&body_clear, ScrollDirection::Neutral);
            }
        });

        dom::set_class(&w.hero, CLASS_HERO_SCROLLED, frame.header_scrolled);
        dom::set_class(&w.hero, CLASS_HERO_HIDDEN, frame.header_hidden);
        dom::set_style(&w.progress_bar, "width", &style::percent(frame.progress_percent));

        let r = reactor.borrow();
        for (el, speed) in &w.parallax {
            let y = r.parallax_offset(offset, *speed);
            dom::set_style(el, "transform", &style::translate_y(y));
        }
    })
}
