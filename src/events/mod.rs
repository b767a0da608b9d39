pub mod pointer;
pub mod scroll;
pub mod slider;

pub use pointer::{wire_card_tilt, wire_pointer_recorder};
pub use scroll::{wire_scroll, ScrollWiring};
pub use slider::{wire_slider, SliderWiring};
