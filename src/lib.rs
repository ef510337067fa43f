//! # Mode-sensing core
//!
//! Hardware-independent half of the micro:bit mode-sense firmware: a two-entry menu that
//! chooses between an ambient-light → LED brightness loop and an ambient-noise → alert loop.
//!
//! The [`Dispatcher`] owns every piece of mutable state and talks to the board only through the
//! three collaborator traits in [`hal`]. The firmware binary provides the nRF52 implementations;
//! the unit tests provide recording fakes.
#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod dispatcher;
pub mod hal;
pub mod light;
pub mod noise;
pub mod screen;
pub mod selector;

#[cfg(test)]
mod mock;

pub use config::*;
pub use dispatcher::*;
pub use hal::*;
pub use light::LightStatus;
pub use noise::{AlertState, NoiseStatus, ToneStep, ToneTiming, Waveform, ALERT_TONE};
pub use selector::{Command, Keypad, Mode, ModeSelector, NavigationState, Presses, Selection};
