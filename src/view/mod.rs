//! Terminal display of the waveform and its ruler.

pub mod debounce;
pub mod geometry;
pub mod theme;
pub mod ui;

pub use debounce::ResizeDebouncer;
pub use theme::{Panel, Theme};
pub use ui::{ScopeTui, ViewOptions};
