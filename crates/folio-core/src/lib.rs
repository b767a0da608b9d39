pub mod clock;
pub mod constants;
pub mod debounce;
pub mod error;
pub mod letters;
pub mod load;
pub mod modal;
pub mod scroll;
pub mod slider;
pub mod state;
pub mod store;
pub mod theme;
pub mod tilt;

pub use clock::*;
pub use constants::*;
pub use debounce::*;
pub use error::FolioError;
pub use letters::*;
pub use load::*;
pub use modal::*;
pub use scroll::*;
pub use slider::*;
pub use state::*;
pub use store::*;
pub use theme::*;
pub use tilt::*;
