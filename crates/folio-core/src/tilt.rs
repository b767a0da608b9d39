use crate::constants::{TILT_PERSPECTIVE_PX, TILT_SENSITIVITY};
use glam::DVec2;

#[derive(Clone, Copy, Debug)]
pub struct TiltConfig {
    pub sensitivity: f64,
    pub perspective_px: f64,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            sensitivity: TILT_SENSITIVITY,
            perspective_px: TILT_PERSPECTIVE_PX,
        }
    }
}

/// Card bounds in client pixels, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CardRect {
    pub origin: DVec2,
    pub size: DVec2,
}

impl CardRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            origin: DVec2::new(left, top),
            size: DVec2::new(width, height),
        }
    }

    pub fn center(&self) -> DVec2 {
        self.origin + self.size * 0.5
    }
}

/// Rotation in degrees about the card's horizontal (x) and vertical (y) axes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
}

impl Tilt {
    pub const FLAT: Tilt = Tilt {
        rotate_x_deg: 0.0,
        rotate_y_deg: 0.0,
    };
}

/// Moving the pointer up tilts the top edge away; moving it right turns the
/// card to the right.
pub fn tilt_for(rect: CardRect, pointer: DVec2, config: &TiltConfig) -> Tilt {
    if config.sensitivity == 0.0 {
        return Tilt::FLAT;
    }
    let from_center = pointer - rect.center();
    Tilt {
        rotate_x_deg: -from_center.y / config.sensitivity,
        rotate_y_deg: from_center.x / config.sensitivity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_flat() {
        let rect = CardRect::new(10.0, 20.0, 200.0, 100.0);
        let t = tilt_for(rect, rect.center(), &TiltConfig::default());
        assert_eq!(t.rotate_x_deg, 0.0);
        assert_eq!(t.rotate_y_deg, 0.0);
    }

    #[test]
    fn top_right_corner_tilts_top_away_and_turns_right() {
        let rect = CardRect::new(0.0, 0.0, 200.0, 100.0);
        let t = tilt_for(rect, DVec2::new(200.0, 0.0), &TiltConfig::default());
        assert_eq!(t.rotate_x_deg, 2.5);
        assert_eq!(t.rotate_y_deg, 5.0);
    }

    #[test]
    fn zero_sensitivity_stays_flat() {
        let cfg = TiltConfig {
            sensitivity: 0.0,
            ..TiltConfig::default()
        };
        let rect = CardRect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(tilt_for(rect, DVec2::new(100.0, 100.0), &cfg), Tilt::FLAT);
    }
}
