//! # Sensor Input Module
//!
//! Analog and button inputs on the nRF52833, using the SAADC (Successive Approximation ADC)
//! peripheral for the three analog channels:
//!
//! | Channel | Source                         | SAADC input |
//! |---------|--------------------------------|-------------|
//! | Light   | LDR divider on edge pin P1     | AIN1        |
//! | Noise   | on-board MEMS microphone       | AIN3        |
//! | Axis    | knob / joystick axis on P2     | AIN2        |
//!
//! The SAADC runs at 12-bit resolution so samples land in the core's native `0..=4095` range.
//! Buttons A and B are the confirm and back inputs.
use crate::*;

/// Three-channel SAADC, channels in [`Channel`] order: light, noise, axis.
pub type Adc = saadc::Saadc<'static, 3>;

/// Analog inputs plus the two navigation buttons.
pub struct Sensors {
    adc: Adc,
    confirm: Button,
    back: Button,
    // Powers the microphone while held high.
    _mic_power: Output<'static, AnyPin>,
}

impl Sensors {
    /// Calibrates the ADC and takes ownership of the inputs.
    ///
    /// # Arguments
    ///
    /// * `adc` - SAADC configured with the light, noise and axis channels, in that order
    /// * `confirm` - button that enters the highlighted mode
    /// * `back` - button that leaves a mode
    /// * `mic_power` - MIC_EN pin, already driven high
    pub async fn new(adc: Adc, confirm: Button, back: Button, mic_power: Output<'static, AnyPin>) -> Self {
        adc.calibrate().await;
        Self {
            adc,
            confirm,
            back,
            _mic_power: mic_power,
        }
    }

    fn index(channel: Channel) -> usize {
        match channel {
            Channel::Light => 0,
            Channel::Noise => 1,
            Channel::Axis => 2,
        }
    }
}

impl AnalogInput for Sensors {
    /// Converts all three channels and returns the requested one, clamped to `0..=4095`.
    async fn read_channel(&mut self, channel: Channel) -> RawSample {
        let mut buf = [0; 3];
        self.adc.sample(&mut buf).await;
        clamp_sample(i32::from(buf[Self::index(channel)]))
    }

    fn read_button(&mut self, button: ButtonId) -> bool {
        match button {
            ButtonId::Confirm => self.confirm.is_low(),
            ButtonId::Back => self.back.is_low(),
        }
    }
}
