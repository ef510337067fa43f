//! # Light-Feedback Loop
//!
//! Maps the ambient light sample straight onto LED brightness: the darker the room, the brighter
//! the LED. Every tick is computed from the latest sample alone; there is no smoothing.
use crate::{RawSample, MAX_SAMPLE};

/// Full-scale LED brightness.
pub const MAX_BRIGHTNESS: u8 = 255;

/// Everything one light tick produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightStatus {
    /// Raw reading the status was computed from.
    pub sample: RawSample,
    /// Light level as a percentage of full scale.
    pub percent: u8,
    /// LED duty, inversely proportional to the light level.
    pub brightness: u8,
    /// LED duty as a percentage of full brightness.
    pub led_percent: u8,
}

/// `255 - sample * 255 / 4095`, with integer floor division.
pub fn brightness(sample: RawSample) -> u8 {
    let sample = u32::from(sample.min(MAX_SAMPLE));
    let max = u32::from(MAX_BRIGHTNESS);
    (max - sample * max / u32::from(MAX_SAMPLE)) as u8
}

/// `sample * 100 / 4095`.
pub fn percentage(sample: RawSample) -> u8 {
    let sample = u32::from(sample.min(MAX_SAMPLE));
    (sample * 100 / u32::from(MAX_SAMPLE)) as u8
}

pub fn tick(sample: RawSample) -> LightStatus {
    let sample = sample.min(MAX_SAMPLE);
    let brightness = brightness(sample);
    LightStatus {
        sample,
        percent: percentage(sample),
        brightness,
        led_percent: (u32::from(brightness) * 100 / u32::from(MAX_BRIGHTNESS)) as u8,
    }
}
