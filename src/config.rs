//! Tunables for the control loop and both feedback loops.
use embassy_time::Duration;

use crate::{noise::ToneTiming, selector::Mode, RawSample};

/// How the menu highlight is moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationModel {
    /// The axis picks the highlighted mode through the dead-zone; the buttons enter and leave.
    Axis,
    /// Buttons only: `back` in the menu steps the highlight, `confirm` enters.
    Buttons,
}

/// Hysteresis band for the navigation axis.
///
/// Samples strictly below `low` select [`Mode::Noise`], strictly above `high` select
/// [`Mode::Light`], anything in `low..=high` keeps the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadZone {
    pub low: RawSample,
    pub high: RawSample,
}

/// Complete firmware configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Delay between control-loop iterations.
    pub tick_period: Duration,
    pub navigation: NavigationModel,
    pub dead_zone: DeadZone,
    /// Noise samples strictly above this raise the alert.
    pub noise_threshold: RawSample,
    /// Ticks the alert banner persists after the last crossing.
    pub alert_ticks: u8,
    /// ADC full-scale voltage.
    pub supply_voltage: f32,
    /// 0 dB reference voltage for the noise estimate.
    pub reference_voltage: f32,
    pub tone: ToneTiming,
    /// Silence held after each alert tone step.
    pub tone_gap: Duration,
    /// Mode highlighted at power-up.
    pub default_mode: Mode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_period: Duration::from_millis(100),
            navigation: NavigationModel::Axis,
            dead_zone: DeadZone {
                low: 1000,
                high: 3000,
            },
            noise_threshold: 2600,
            alert_ticks: 15,
            supply_voltage: 3.3,
            reference_voltage: 0.006,
            tone: ToneTiming::default(),
            tone_gap: Duration::from_millis(50),
            default_mode: Mode::Light,
        }
    }
}
