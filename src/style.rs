// Inline style values written by the handlers. Kept free of DOM types so the
// exact strings can be checked on the host.

#[inline]
pub fn translate(x: f64, y: f64) -> String {
    format!("translate({x}px, {y}px)")
}

#[inline]
pub fn translate_x(x: f64) -> String {
    format!("translateX({x}px)")
}

#[inline]
pub fn translate_y(y: f64) -> String {
    format!("translateY({y}px)")
}

#[inline]
pub fn tilt(perspective_px: f64, rotate_x_deg: f64, rotate_y_deg: f64) -> String {
    format!("perspective({perspective_px}px) rotateX({rotate_x_deg}deg) rotateY({rotate_y_deg}deg)")
}

#[inline]
pub fn tilt_reset(perspective_px: f64) -> String {
    format!("perspective({perspective_px}px) rotateX(0) rotateY(0)")
}

#[inline]
pub fn percent(value: f64) -> String {
    format!("{value}%")
}

#[inline]
pub fn millis(ms: u32) -> String {
    format!("{ms}ms")
}

/// `transition` shorthand for sliding a transform back over `ms`.
#[inline]
pub fn transform_transition(ms: u32) -> String {
    format!("transform {}s ease", f64::from(ms) / 1000.0)
}
