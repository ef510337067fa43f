//! # Control Loop
//!
//! The [`Dispatcher`] is the only owner of mutable state: the current [`State`], the menu
//! selector, the button edge detector and the alert counter. Every tick it samples the inputs,
//! runs the menu or the active feedback loop, drives the actuators and redraws the screen.
//!
//! ## States
//!
//! ```text
//! Menu ──navigation──▶ Menu                 (redraw on change only)
//! Menu ──confirm─────▶ InMode(highlighted)  (first loop tick runs at once)
//! InMode(m) ──tick───▶ InMode(m)            (light or noise loop body)
//! InMode(m) ──back───▶ Menu                 (outputs silenced, menu redrawn)
//! ```
//!
//! Alert tone playback is awaited inside the tick, so no input is sampled while it sounds.
use core::convert::Infallible;

use embassy_time::Timer;
use rtt_target::rprintln;

use crate::{
    config::{Config, NavigationModel},
    light,
    noise::{self, AlertState, Waveform, ALERT_TONE},
    screen,
    selector::{Command, Keypad, Mode, ModeSelector, NavigationState},
    ActuatorChannel, Actuator, AnalogInput, ButtonId, Channel, Renderer,
};

/// Macro-state of the control loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Menu,
    InMode(Mode),
}

pub struct Dispatcher<I, A, R> {
    inputs: I,
    actuators: A,
    display: R,
    config: Config,
    selector: ModeSelector,
    keypad: Keypad,
    state: State,
    alert: AlertState,
}

impl<I, A, R> Dispatcher<I, A, R>
where
    I: AnalogInput,
    A: Actuator,
    R: Renderer,
{
    pub fn new(inputs: I, actuators: A, display: R, config: Config) -> Self {
        Self {
            inputs,
            actuators,
            display,
            selector: ModeSelector::new(config.dead_zone, config.default_mode),
            keypad: Keypad::default(),
            state: State::Menu,
            alert: AlertState::Inactive,
            config,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn alert(&self) -> AlertState {
        self.alert
    }

    pub fn highlighted(&self) -> Mode {
        self.selector.highlighted()
    }

    pub fn inputs_mut(&mut self) -> &mut I {
        &mut self.inputs
    }

    pub fn actuators(&self) -> &A {
        &self.actuators
    }

    pub fn display(&self) -> &R {
        &self.display
    }

    /// One iteration of the control loop.
    pub async fn tick(&mut self) -> Result<(), R::Error> {
        let confirm = self.inputs.read_button(ButtonId::Confirm);
        let back = self.inputs.read_button(ButtonId::Back);
        let presses = self.keypad.update(confirm, back);

        match self.state {
            State::Menu => match presses.command(Command::Confirm) {
                Some(Command::Confirm) => self.enter(self.selector.highlighted()).await,
                Some(Command::Back) if self.config.navigation == NavigationModel::Buttons => {
                    let selection = self.selector.step();
                    rprintln!("menu: {:?}", selection.mode);
                    screen::menu(&mut self.display, selection.mode)
                }
                _ => self.navigate().await,
            },
            State::InMode(mode) => match presses.command(Command::Back) {
                Some(Command::Back) => self.leave(mode),
                _ => self.run_mode(mode).await,
            },
        }
    }

    /// Run forever, one [`tick`](Self::tick) per `tick_period`.
    ///
    /// Only returns if the display fails.
    pub async fn run(mut self) -> Result<Infallible, R::Error> {
        loop {
            self.tick().await?;
            Timer::after(self.config.tick_period).await;
        }
    }

    async fn navigate(&mut self) -> Result<(), R::Error> {
        let selection = match self.config.navigation {
            NavigationModel::Axis => {
                let sample = self.inputs.read_channel(Channel::Axis).await;
                let nav = self.selector.resolve(sample);
                self.selector.select(nav)
            }
            NavigationModel::Buttons => self.selector.select(NavigationState::NoChange),
        };
        if selection.redraw {
            rprintln!("menu: {:?}", selection.mode);
            screen::menu(&mut self.display, selection.mode)?;
        }
        Ok(())
    }

    async fn enter(&mut self, mode: Mode) -> Result<(), R::Error> {
        rprintln!("entering {:?}", mode);
        self.state = State::InMode(mode);
        self.alert = AlertState::Inactive;
        self.run_mode(mode).await
    }

    fn leave(&mut self, mode: Mode) -> Result<(), R::Error> {
        rprintln!("leaving {:?}", mode);
        self.actuators.silence(ActuatorChannel::Led);
        self.actuators.silence(ActuatorChannel::Buzzer);
        self.alert = AlertState::Inactive;
        self.state = State::Menu;
        screen::menu(&mut self.display, self.selector.highlighted())?;
        self.selector.mark_drawn();
        Ok(())
    }

    async fn run_mode(&mut self, mode: Mode) -> Result<(), R::Error> {
        match mode {
            Mode::Light => self.light_tick().await,
            Mode::Noise => self.noise_tick().await,
        }
    }

    async fn light_tick(&mut self) -> Result<(), R::Error> {
        let sample = self.inputs.read_channel(Channel::Light).await;
        let status = light::tick(sample);
        rprintln!("light: adc {} brightness {}", status.sample, status.brightness);
        self.actuators.set_brightness(ActuatorChannel::Led, status.brightness);
        screen::light(&mut self.display, &status)
    }

    async fn noise_tick(&mut self) -> Result<(), R::Error> {
        let sample = self.inputs.read_channel(Channel::Noise).await;
        let status = noise::tick(sample, self.alert, &self.config);
        self.alert = status.alert;
        rprintln!("noise: adc {} level {} dB", status.sample, status.decibels);
        screen::noise(&mut self.display, &status)?;
        if status.triggered {
            rprintln!("noise: alert, {} ticks", status.alert.remaining());
            self.play_alert().await;
        }
        Ok(())
    }

    async fn play_alert(&mut self) {
        for step in ALERT_TONE.iter() {
            let waveform = step.waveform(&self.config.tone);
            self.actuators
                .play_waveform(ActuatorChannel::Buzzer, waveform, step.duration)
                .await;
            self.actuators
                .play_waveform(ActuatorChannel::Buzzer, Waveform::Rest, self.config.tone_gap)
                .await;
        }
        self.actuators.silence(ActuatorChannel::Buzzer);
    }
}
