//! Recording stand-ins for the board, used by the unit tests.
use embassy_time::Duration;

use crate::{
    noise::Waveform, ActuatorChannel, Actuator, AnalogInput, ButtonId, Channel, RawSample,
    Renderer,
};

#[derive(Debug, Default)]
pub struct FakeInputs {
    pub light: RawSample,
    pub noise: RawSample,
    pub axis: RawSample,
    pub confirm: bool,
    pub back: bool,
}

impl AnalogInput for FakeInputs {
    async fn read_channel(&mut self, channel: Channel) -> RawSample {
        match channel {
            Channel::Light => self.light,
            Channel::Noise => self.noise,
            Channel::Axis => self.axis,
        }
    }

    fn read_button(&mut self, button: ButtonId) -> bool {
        match button {
            ButtonId::Confirm => self.confirm,
            ButtonId::Back => self.back,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Brightness(ActuatorChannel, u8),
    Play(ActuatorChannel, Waveform, Duration),
    Silence(ActuatorChannel),
}

#[derive(Debug, Default)]
pub struct FakeOutputs {
    pub log: Vec<Output>,
    pub led: u8,
}

impl FakeOutputs {
    /// Audible steps, rests left out.
    pub fn tones(&self) -> Vec<(Waveform, Duration)> {
        self.log
            .iter()
            .filter_map(|o| match o {
                Output::Play(ActuatorChannel::Buzzer, w @ Waveform::Square { .. }, d) => {
                    Some((*w, *d))
                }
                _ => None,
            })
            .collect()
    }
}

impl Actuator for FakeOutputs {
    fn set_brightness(&mut self, channel: ActuatorChannel, level: u8) {
        if channel == ActuatorChannel::Led {
            self.led = level;
        }
        self.log.push(Output::Brightness(channel, level));
    }

    async fn play_waveform(&mut self, channel: ActuatorChannel, waveform: Waveform, duration: Duration) {
        self.log.push(Output::Play(channel, waveform, duration));
    }

    fn silence(&mut self, channel: ActuatorChannel) {
        if channel == ActuatorChannel::Led {
            self.led = 0;
        }
        self.log.push(Output::Silence(channel));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Draw {
    Text(String, bool),
    Rect { filled: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusError;

#[derive(Debug, Default)]
pub struct FakeDisplay {
    pending: Vec<Draw>,
    pub frames: Vec<Vec<Draw>>,
    /// Fail every call once set.
    pub broken: bool,
}

impl FakeDisplay {
    pub fn last_frame(&self) -> &[Draw] {
        self.frames.last().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Some text in the last committed frame contains `needle`.
    pub fn shows(&self, needle: &str) -> bool {
        self.last_frame()
            .iter()
            .any(|d| matches!(d, Draw::Text(text, _) if text.contains(needle)))
    }

    fn check(&self) -> Result<(), BusError> {
        if self.broken {
            Err(BusError)
        } else {
            Ok(())
        }
    }
}

impl Renderer for FakeDisplay {
    type Error = BusError;

    fn clear_screen(&mut self) -> Result<(), BusError> {
        self.check()?;
        self.pending.clear();
        Ok(())
    }

    fn draw_text(&mut self, text: &str, _x: i32, _y: i32, inverted: bool) -> Result<(), BusError> {
        self.check()?;
        self.pending.push(Draw::Text(text.into(), inverted));
        Ok(())
    }

    fn draw_rect(&mut self, _x: i32, _y: i32, _w: u32, _h: u32, filled: bool) -> Result<(), BusError> {
        self.check()?;
        self.pending.push(Draw::Rect { filled });
        Ok(())
    }

    fn commit_frame(&mut self) -> Result<(), BusError> {
        self.check()?;
        self.frames.push(core::mem::take(&mut self.pending));
        Ok(())
    }
}
