use crate::constants::{SLIDER_COMMIT_RATIO, SLIDER_RETURN_MS};

#[derive(Clone, Copy, Debug)]
pub struct SliderConfig {
    /// Release commits when the handle's left edge is strictly past this
    /// fraction of the track width.
    pub commit_ratio: f64,
    pub return_ms: u32,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            commit_ratio: SLIDER_COMMIT_RATIO,
            return_ms: SLIDER_RETURN_MS,
        }
    }
}

/// Track and handle measurements in client pixels.
#[derive(Clone, Copy, Debug, Default)]
pub struct SliderGeometry {
    pub track_left: f64,
    pub track_width: f64,
    pub handle_width: f64,
}

impl SliderGeometry {
    /// A handle wider than its track has nowhere to go.
    pub fn max_offset(&self) -> f64 {
        (self.track_width - self.handle_width).max(0.0)
    }

    /// Handle offset that centres it under `client_x`, kept inside the track.
    pub fn offset_for(&self, client_x: f64) -> f64 {
        let raw = client_x - self.track_left - self.handle_width / 2.0;
        if raw.is_nan() {
            return 0.0;
        }
        raw.clamp(0.0, self.max_offset())
    }
}

/// Label fades out linearly across the first half of the track.
pub fn label_opacity(offset: f64, track_width: f64) -> f64 {
    let half = track_width / 2.0;
    if half <= 0.0 {
        return 1.0;
    }
    (1.0 - offset / half).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderFrame {
    pub offset: f64,
    pub label_opacity: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SliderRelease {
    /// Navigate to the destination, then return the handle.
    Commit,
    /// Return the handle without navigating.
    Return,
}

#[derive(Debug, Default)]
pub struct Slider {
    config: SliderConfig,
    dragging: bool,
    offset: f64,
}

impl Slider {
    pub fn new(config: SliderConfig) -> Self {
        Self {
            config,
            dragging: false,
            offset: 0.0,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn start(&mut self) {
        self.dragging = true;
    }

    pub fn drag_to(&mut self, client_x: f64, geometry: SliderGeometry) -> Option<SliderFrame> {
        if !self.dragging {
            return None;
        }
        self.offset = geometry.offset_for(client_x);
        Some(SliderFrame {
            offset: self.offset,
            label_opacity: label_opacity(self.offset, geometry.track_width),
        })
    }

    /// Ends the gesture. A release without an active drag is ignored.
    pub fn end(&mut self, track_width: f64) -> Option<SliderRelease> {
        if !self.dragging {
            return None;
        }
        self.dragging = false;
        let final_offset = std::mem::take(&mut self.offset);
        if self.commits_at(final_offset, track_width) {
            Some(SliderRelease::Commit)
        } else {
            Some(SliderRelease::Return)
        }
    }

    pub fn commits_at(&self, offset: f64, track_width: f64) -> bool {
        offset > track_width * self.config.commit_ratio
    }
}
