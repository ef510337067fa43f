//! # Board collaborators
//!
//! The core never touches a peripheral. Everything it needs from the board is expressed by
//! these three traits, implemented by the firmware for the micro:bit and by fakes in tests.
//!
//! Tone playback is `async` and returns only after the requested duration, so the alert burst
//! blocks the control loop exactly as long as it sounds. A driver that wants to play tones in
//! the background can do so behind the same signature without touching the alert logic.
#![allow(async_fn_in_trait)]

use embassy_time::Duration;

use crate::noise::Waveform;

/// One ADC conversion, always within `0..=MAX_SAMPLE`.
pub type RawSample = u16;

/// Top of the 12-bit ADC range.
pub const MAX_SAMPLE: RawSample = 4095;

/// Clamp a raw (possibly negative) conversion into the sample range.
pub fn clamp_sample(raw: i32) -> RawSample {
    raw.clamp(0, MAX_SAMPLE as i32) as RawSample
}

/// Logical analog inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Light,
    Noise,
    Axis,
}

/// Discrete navigation inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonId {
    Confirm,
    Back,
}

/// Independent actuator outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorChannel {
    Led,
    Buzzer,
}

/// Analog Input Reader.
pub trait AnalogInput {
    /// Take a fresh sample of `channel`, clamped to `0..=MAX_SAMPLE`.
    async fn read_channel(&mut self, channel: Channel) -> RawSample;
    /// `true` while the button is held down.
    fn read_button(&mut self, button: ButtonId) -> bool;
}

/// Actuator Driver.
pub trait Actuator {
    /// Continuous brightness, 0 (off) to 255 (full).
    fn set_brightness(&mut self, channel: ActuatorChannel, level: u8);
    /// Hold `waveform` on `channel` for `duration`, then return. A channel that cannot play
    /// tones still takes `duration`.
    async fn play_waveform(&mut self, channel: ActuatorChannel, waveform: Waveform, duration: Duration);
    /// Drive `channel` to its off state.
    fn silence(&mut self, channel: ActuatorChannel);
}

/// Display Renderer. Coordinates are pixels from the top-left corner; text is anchored at the
/// top of its glyphs.
pub trait Renderer {
    type Error: core::fmt::Debug;

    fn clear_screen(&mut self) -> Result<(), Self::Error>;
    fn draw_text(&mut self, text: &str, x: i32, y: i32, inverted: bool) -> Result<(), Self::Error>;
    fn draw_rect(&mut self, x: i32, y: i32, w: u32, h: u32, filled: bool) -> Result<(), Self::Error>;
    /// Push the frame built since the last `clear_screen` to the panel.
    fn commit_frame(&mut self) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_keeps_range() {
        assert_eq!(clamp_sample(-12), 0);
        assert_eq!(clamp_sample(0), 0);
        assert_eq!(clamp_sample(2048), 2048);
        assert_eq!(clamp_sample(4095), 4095);
        assert_eq!(clamp_sample(16_383), MAX_SAMPLE);
    }
}
