use crate::constants::{TIME_DISPLAY_ID, TIME_ZONE_ATTR};
use crate::{dom, timer};
use folio_core::{Clock, CLOCK_INTERVAL_MS};
use web_sys as web;

/// Writes the zone-local time into `#time-display` now and every second.
pub fn wire_clock(document: &web::Document) -> anyhow::Result<()> {
    let display = dom::require_by_id(document, TIME_DISPLAY_ID)?;
    let clock = Clock::for_zone_or_default(display.get_attribute(TIME_ZONE_ATTR).as_deref());
    log::info!("[clock] showing {}", clock.zone_name());

    let update = move || {
        let text = clock.format_millis(js_sys::Date::now());
        display.set_text_content(Some(&text));
    };
    update();
    timer::every(CLOCK_INTERVAL_MS, update)?;
    Ok(())
}
