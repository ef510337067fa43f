//! # Noise-Alert Loop
//!
//! Estimates the ambient sound level from the microphone sample and raises an alert when the raw
//! sample crosses a fixed threshold.
//!
//! ## Level estimate
//!
//! ```text
//! v  = sample / 4095 * 3.3
//! dB = 20 * log10(v / 0.006)
//! ```
//!
//! A zero sample has no logarithm; it is reported as the level of one ADC step instead.
//!
//! ## Alert persistence
//!
//! A crossing seeds [`AlertState::Active`] with `alert_ticks` and fires the [`ALERT_TONE`]
//! burst. Each following tick without a crossing counts the alert down; the banner stays on
//! screen while the count is above zero, so one loud sample turns into a visible ~1.5 s signal.
use embassy_time::Duration;
use num_traits::Float;

use crate::{config::Config, RawSample, MAX_SAMPLE};

/// Alert persistence counter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum AlertState {
    #[default]
    Inactive,
    /// Ticks left before the banner clears. `Active(0)` clears on the next quiet tick.
    Active(u8),
}

impl AlertState {
    pub fn is_active(self) -> bool {
        matches!(self, AlertState::Active(_))
    }

    pub fn remaining(self) -> u8 {
        match self {
            AlertState::Inactive => 0,
            AlertState::Active(ticks) => ticks,
        }
    }

    fn seeded(ticks: u8) -> Self {
        if ticks == 0 {
            AlertState::Inactive
        } else {
            AlertState::Active(ticks)
        }
    }

    fn decayed(self) -> Self {
        match self {
            AlertState::Inactive | AlertState::Active(0 | 1) => AlertState::Inactive,
            AlertState::Active(ticks) => AlertState::Active(ticks - 1),
        }
    }
}

/// One note of the alert sound. A frequency of zero is a rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneStep {
    pub frequency_hz: u32,
    pub duration: Duration,
    pub volume_percent: u8,
}

impl ToneStep {
    pub const fn new(frequency_hz: u32, duration_ms: u64, volume_percent: u8) -> Self {
        Self {
            frequency_hz,
            duration: Duration::from_millis(duration_ms),
            volume_percent,
        }
    }

    /// PWM settings for this step.
    ///
    /// `period = timer_hz / (frequency * subdivision)`, `duty = period * volume / 100`.
    pub fn waveform(&self, timing: &ToneTiming) -> Waveform {
        let divisor = self.frequency_hz.saturating_mul(timing.subdivision.max(1));
        if divisor == 0 {
            return Waveform::Rest;
        }
        let period_ticks = timing.timer_hz / divisor;
        let volume = u32::from(self.volume_percent.min(100));
        Waveform::Square {
            period_ticks,
            duty_ticks: (u64::from(period_ticks) * u64::from(volume) / 100) as u32,
        }
    }
}

/// Played, in order, every time the alert fires.
pub const ALERT_TONE: [ToneStep; 3] = [
    ToneStep::new(1000, 100, 80),
    ToneStep::new(1200, 100, 80),
    ToneStep::new(800, 100, 80),
];

/// Counter clock of the tone PWM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneTiming {
    /// Counter frequency after the prescaler.
    pub timer_hz: u32,
    /// Counter periods per tone period.
    pub subdivision: u32,
}

impl Default for ToneTiming {
    fn default() -> Self {
        // 16 MHz PWM clock with a /16 prescaler.
        Self {
            timer_hz: 1_000_000,
            subdivision: 1,
        }
    }
}

/// What the tone channel should output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    /// Silence.
    Rest,
    /// Square wave: counter top and compare value, in timer ticks.
    Square { period_ticks: u32, duty_ticks: u32 },
}

/// Everything one noise tick produces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseStatus {
    pub sample: RawSample,
    pub decibels: f32,
    /// Minimum level that raises the alert.
    pub threshold_decibels: f32,
    pub alert: AlertState,
    /// Threshold crossed this tick: the alert tone must play.
    pub triggered: bool,
}

impl NoiseStatus {
    pub fn banner(&self) -> bool {
        self.alert.is_active()
    }
}

pub fn voltage(sample: RawSample, config: &Config) -> f32 {
    f32::from(sample.min(MAX_SAMPLE)) / f32::from(MAX_SAMPLE) * config.supply_voltage
}

/// Level of one ADC step; stands in for samples with no logarithm.
pub fn floor_decibels(config: &Config) -> f32 {
    20.0 * Float::log10(voltage(1, config) / config.reference_voltage)
}

pub fn decibels(sample: RawSample, config: &Config) -> f32 {
    let v = voltage(sample, config);
    if v <= 0.0 {
        return floor_decibels(config);
    }
    20.0 * Float::log10(v / config.reference_voltage)
}

pub fn tick(sample: RawSample, alert: AlertState, config: &Config) -> NoiseStatus {
    let sample = sample.min(MAX_SAMPLE);
    let triggered = sample > config.noise_threshold;
    let alert = if triggered {
        AlertState::seeded(config.alert_ticks)
    } else {
        alert.decayed()
    };
    NoiseStatus {
        sample,
        decibels: decibels(sample, config),
        threshold_decibels: decibels(config.noise_threshold, config),
        alert,
        triggered,
    }
}
