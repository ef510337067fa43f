//! micro:bit v2 implementations of the core's board traits.
mod oled;
mod outputs;
mod sensors;

pub use oled::*;
pub use outputs::*;
pub use sensors::*;
