//! Adaptive time ruler.
//!
//! Picks a tick interval from a fixed table of round durations based on how
//! many pixels each second of audio gets, then lays out labelled major ticks
//! and unlabelled minor ticks.

pub mod scale;
pub mod ticks;

pub use scale::{pixels_per_second, select_scale, ParseScaleError, ScaleFactor, ScaleSetting};
pub use ticks::{emit_ticks, MajorTick, TickScaleSelector, TickSet};
