// Interaction tuning shared by the core state machines and the web frontend.

// Load sequence
pub const PRELOADER_HIDE_DELAY_MS: u32 = 500; // after `loaded` is applied, before display:none
pub const BENTO_STAGGER_MS: u32 = 100; // per grid item
pub const HERO_REVEAL_DELAY_MS: u32 = 500;

// Letter reveal
pub const LETTER_STAGGER_MS: u32 = 30; // per character
pub const NBSP: char = '\u{00A0}';
pub const REVEAL_VISIBILITY_THRESHOLD: f64 = 0.2; // intersection ratio

// Theme persistence
pub const THEME_STORAGE_KEY: &str = "theme";
pub const THEME_LIGHT_VALUE: &str = "light";
pub const THEME_DARK_VALUE: &str = "dark";

// Clock
pub const CLOCK_INTERVAL_MS: u32 = 1000;
pub const DEFAULT_TIME_ZONE: &str = "Asia/Kolkata";

// Scroll reactor
pub const SCROLL_IDLE_MS: f64 = 150.0; // direction marker clears after this much quiet
pub const HEADER_SCROLLED_PX: f64 = 50.0;
pub const HEADER_HIDDEN_PX: f64 = 300.0;
pub const PARALLAX_FACTOR: f64 = 0.5; // offset * speed * factor

// Card tilt
pub const TILT_SENSITIVITY: f64 = 20.0; // px of pointer travel per degree
pub const TILT_PERSPECTIVE_PX: f64 = 1000.0;

// Slider
pub const SLIDER_COMMIT_RATIO: f64 = 0.8; // commit strictly above this share of the track
pub const SLIDER_RETURN_MS: u32 = 300;
