use crate::constants::{HEADER_HIDDEN_PX, HEADER_SCROLLED_PX, PARALLAX_FACTOR, SCROLL_IDLE_MS};
use crate::debounce::{Debounce, DebounceTicket};
use crate::error::{FolioError, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollDirection {
    #[default]
    Neutral,
    Up,
    Down,
}

#[derive(Clone, Copy, Debug)]
pub struct ScrollConfig {
    pub idle_ms: f64,
    pub scrolled_px: f64,
    pub hidden_px: f64,
    pub parallax_factor: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            idle_ms: SCROLL_IDLE_MS,
            scrolled_px: HEADER_SCROLLED_PX,
            hidden_px: HEADER_HIDDEN_PX,
            parallax_factor: PARALLAX_FACTOR,
        }
    }
}

/// Document and viewport heights sampled at the time of a scroll event.
#[derive(Clone, Copy, Debug, Default)]
pub struct PageMetrics {
    pub scroll_height: f64,
    pub viewport_height: f64,
}

/// Everything a single scroll event changes on the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollFrame {
    pub offset: f64,
    pub direction: ScrollDirection,
    pub header_scrolled: bool,
    pub header_hidden: bool,
    pub progress_percent: f64,
    /// Deferred clear of the direction marker; hand it back to
    /// [`ScrollReactor::clear_direction`] after `clear_after_ms`.
    pub clear_ticket: DebounceTicket,
    pub clear_after_ms: u32,
}

pub struct ScrollReactor {
    config: ScrollConfig,
    last_offset: f64,
    direction: ScrollDirection,
    idle: Debounce,
}

impl ScrollReactor {
    pub fn new(config: ScrollConfig, initial_offset: f64) -> Self {
        Self {
            config,
            last_offset: initial_offset.max(0.0),
            direction: ScrollDirection::Neutral,
            idle: Debounce::default(),
        }
    }

    /// Offsets that do not increase count as scrolling up. The remembered
    /// offset is clamped at zero so overscroll bounce does not flip direction.
    pub fn on_scroll(&mut self, offset: f64, metrics: PageMetrics) -> ScrollFrame {
        self.direction = if offset > self.last_offset {
            ScrollDirection::Down
        } else {
            ScrollDirection::Up
        };
        self.last_offset = offset.max(0.0);
        let clear_ticket = self.idle.arm();
        ScrollFrame {
            offset,
            direction: self.direction,
            header_scrolled: offset > self.config.scrolled_px,
            header_hidden: offset > self.config.hidden_px,
            progress_percent: scroll_progress(offset, metrics),
            clear_ticket,
            clear_after_ms: self.config.idle_ms.max(0.0) as u32,
        }
    }

    /// Called by the deferred clear. Returns false for a ticket that a later
    /// scroll event superseded.
    pub fn clear_direction(&mut self, ticket: DebounceTicket) -> bool {
        if !self.idle.fire(ticket) {
            return false;
        }
        self.direction = ScrollDirection::Neutral;
        true
    }

    pub fn direction(&self) -> ScrollDirection {
        self.direction
    }

    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    pub fn parallax_offset(&self, offset: f64, speed: f64) -> f64 {
        offset * speed * self.config.parallax_factor
    }
}

/// Percentage of the scrollable range covered, in `[0, 100]`. A page that
/// does not scroll reports zero.
pub fn scroll_progress(offset: f64, metrics: PageMetrics) -> f64 {
    let total = metrics.scroll_height - metrics.viewport_height;
    if total <= 0.0 || !offset.is_finite() {
        return 0.0;
    }
    (offset / total * 100.0).clamp(0.0, 100.0)
}

pub fn parse_parallax_speed(raw: &str) -> Result<f64> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(FolioError::InvalidParallaxSpeed(raw.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_offset_counts_as_up() {
        let mut r = ScrollReactor::new(ScrollConfig::default(), 100.0);
        let f = r.on_scroll(100.0, PageMetrics::default());
        assert_eq!(f.direction, ScrollDirection::Up);
    }

    #[test]
    fn negative_offset_is_remembered_as_zero() {
        let mut r = ScrollReactor::new(ScrollConfig::default(), 0.0);
        r.on_scroll(-40.0, PageMetrics::default());
        assert_eq!(r.last_offset(), 0.0);
        let f = r.on_scroll(1.0, PageMetrics::default());
        assert_eq!(f.direction, ScrollDirection::Down);
    }

    #[test]
    fn stale_clear_is_ignored() {
        let mut r = ScrollReactor::new(ScrollConfig::default(), 0.0);
        let first = r.on_scroll(10.0, PageMetrics::default()).clear_ticket;
        let second = r.on_scroll(20.0, PageMetrics::default()).clear_ticket;
        assert!(!r.clear_direction(first));
        assert_eq!(r.direction(), ScrollDirection::Down);
        assert!(r.clear_direction(second));
        assert_eq!(r.direction(), ScrollDirection::Neutral);
    }

    #[test]
    fn parallax_speed_parsing() {
        assert_eq!(parse_parallax_speed(" 0.4 ").unwrap(), 0.4);
        assert_eq!(parse_parallax_speed("-1").unwrap(), -1.0);
        assert!(parse_parallax_speed("fast").is_err());
        assert!(parse_parallax_speed("NaN").is_err());
        assert!(parse_parallax_speed("").is_err());
    }
}
