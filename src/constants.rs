// DOM contract shared with the page markup. Ids are passed to
// `get_element_by_id`, selectors to `query_selector(_all)`.

// Load sequence
pub const PRELOADER_ID: &str = "preloader";
pub const BENTO_ITEM_SELECTOR: &str = ".bento-item";
pub const HERO_LETTERS_SELECTOR: &str = "#profile [data-reveal-letters]";

// Letter reveal
pub const REVEAL_LETTERS_SELECTOR: &str = "[data-reveal-letters]";
pub const CONTENT_SECTION_SELECTOR: &str = ".content-section";

// Theme
pub const THEME_TOGGLE_ID: &str = "theme-toggle";

// Modal
pub const MODAL_TRIGGER_ID: &str = "pega-skill-btn";
pub const MODAL_OVERLAY_ID: &str = "modal-overlay";
pub const MODAL_CLOSE_ID: &str = "modal-close-btn";

// Clock
pub const TIME_DISPLAY_ID: &str = "time-display";
pub const TIME_ZONE_ATTR: &str = "data-time-zone";

// Scroll
pub const STICKY_HERO_SELECTOR: &str = ".sticky-hero";
pub const SCROLL_PROGRESS_ID: &str = "scroll-progress-bar";
pub const PARALLAX_SELECTOR: &str = "[data-parallax]";
pub const PARALLAX_ATTR: &str = "data-parallax";

// Pointer effects
pub const CURSOR_LIGHT_ID: &str = "cursor-light";
pub const PROJECT_CARD_SELECTOR: &str = ".project-card";

// Slider
pub const SLIDER_HANDLE_ID: &str = "slider-handle";
pub const SLIDER_TRACK_ID: &str = "contact-slider-track";
pub const SLIDER_TEXT_SELECTOR: &str = ".slider-text";
pub const SLIDER_LINK_ID: &str = "contact-slider-link";

// Marker classes
pub const CLASS_VISIBLE: &str = "visible";
pub const CLASS_LOADED: &str = "loaded";
pub const CLASS_LIGHT_MODE: &str = "light-mode";
pub const CLASS_SCROLLING_DOWN: &str = "scrolling-down";
pub const CLASS_SCROLLING_UP: &str = "scrolling-up";
pub const CLASS_HERO_SCROLLED: &str = "scrolled";
pub const CLASS_HERO_HIDDEN: &str = "hidden";
