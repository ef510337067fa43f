//! # Actuator Output Module
//!
//! Hardware PWM for the two actuator channels:
//!
//! - **LED** on edge pin P9 through PWM0. The counter top is 255, so a brightness level is
//!   written straight through as the compare value.
//! - **Buzzer** on the on-board speaker through PWM1. The counter runs at 1 MHz
//!   (16 MHz / 16); a tone is programmed as counter top = period and compare = duty, both
//!   taken from the [`Waveform`] the core computed.
//!
//! The nRF PWM counter is 15 bits wide, so tone periods longer than 32767 ticks (tones below
//! ~31 Hz) are clamped.
use crate::*;

/// Largest value the 15-bit PWM counter accepts.
const COUNTER_MAX: u32 = 0x7fff;

/// LED and speaker PWM outputs.
pub struct Outputs {
    led: SimplePwm<'static, peripherals::PWM0>,
    speaker: SimplePwm<'static, peripherals::PWM1>,
}

impl Outputs {
    /// Sets both channels up and leaves them off.
    pub fn new(
        mut led: SimplePwm<'static, peripherals::PWM0>,
        mut speaker: SimplePwm<'static, peripherals::PWM1>,
    ) -> Self {
        led.set_prescaler(pwm::Prescaler::Div1);
        led.set_max_duty(u16::from(u8::MAX));
        led.set_duty(0, 0);

        speaker.set_prescaler(pwm::Prescaler::Div16);
        speaker.set_duty(0, 0);
        speaker.disable();

        Self { led, speaker }
    }

    fn tone(&mut self, period_ticks: u32, duty_ticks: u32) {
        let top = period_ticks.clamp(1, COUNTER_MAX) as u16;
        let duty = duty_ticks.min(u32::from(top)) as u16;
        self.speaker.enable();
        self.speaker.set_max_duty(top);
        self.speaker.set_duty(0, duty);
    }

    fn quiet(&mut self) {
        self.speaker.set_duty(0, 0);
        self.speaker.disable();
    }
}

impl Actuator for Outputs {
    fn set_brightness(&mut self, channel: ActuatorChannel, level: u8) {
        match channel {
            ActuatorChannel::Led => self.led.set_duty(0, u16::from(level)),
            ActuatorChannel::Buzzer => rprintln!("outputs: buzzer has no brightness"),
        }
    }

    /// Holds the waveform for `duration`, then returns with it still programmed; the next step
    /// or a [`silence`](Self::silence) replaces it.
    async fn play_waveform(&mut self, channel: ActuatorChannel, waveform: Waveform, duration: Duration) {
        if channel == ActuatorChannel::Buzzer {
            match waveform {
                Waveform::Square {
                    period_ticks,
                    duty_ticks,
                } => self.tone(period_ticks, duty_ticks),
                Waveform::Rest => self.quiet(),
            }
        } else {
            rprintln!("outputs: {:?} cannot play tones", channel);
        }
        Timer::after(duration).await;
    }

    fn silence(&mut self, channel: ActuatorChannel) {
        match channel {
            ActuatorChannel::Led => self.led.set_duty(0, 0),
            ActuatorChannel::Buzzer => self.quiet(),
        }
    }
}
