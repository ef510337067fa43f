//! # Mode Selector
//!
//! Turns navigation input into the highlighted [`Mode`].
//!
//! Two input models feed it:
//!
//! - **Axis**: one analog sample partitioned by a [`DeadZone`]. The band between the two
//!   thresholds keeps the previous choice, so a knob resting near the middle never flickers
//!   between entries.
//! - **Buttons**: a [`Keypad`] turns the raw confirm/back levels into one [`Command`] per press.
//!
//! The selector also remembers which mode was last drawn, so the menu is only redrawn when the
//! highlight actually moves.
use crate::{config::DeadZone, RawSample};

/// The feedback loops the menu can enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Ambient light drives LED brightness.
    Light,
    /// Ambient noise drives the buzzer and alert banner.
    Noise,
}

impl Mode {
    /// Menu order.
    pub const ALL: [Mode; 2] = [Mode::Light, Mode::Noise];

    pub fn label(self) -> &'static str {
        match self {
            Mode::Light => "LUMINOSIDADE",
            Mode::Noise => "RUIDO",
        }
    }

    /// The entry after this one, wrapping around.
    pub fn next(self) -> Mode {
        match self {
            Mode::Light => Mode::Noise,
            Mode::Noise => Mode::Light,
        }
    }
}

/// What a navigation sample asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationState {
    SelectLight,
    SelectNoise,
    NoChange,
}

/// Result of feeding one navigation decision to the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub mode: Mode,
    /// The menu needs to be drawn for `mode`.
    pub redraw: bool,
}

/// Current menu highlight plus the mode last shown on screen.
#[derive(Debug, Clone)]
pub struct ModeSelector {
    dead_zone: DeadZone,
    highlighted: Mode,
    drawn: Option<Mode>,
}

impl ModeSelector {
    pub fn new(dead_zone: DeadZone, initial: Mode) -> Self {
        Self {
            dead_zone,
            highlighted: initial,
            drawn: None,
        }
    }

    pub fn highlighted(&self) -> Mode {
        self.highlighted
    }

    /// Classify an axis sample against the dead-zone.
    pub fn resolve(&self, sample: RawSample) -> NavigationState {
        if sample < self.dead_zone.low {
            NavigationState::SelectNoise
        } else if sample > self.dead_zone.high {
            NavigationState::SelectLight
        } else {
            NavigationState::NoChange
        }
    }

    /// Apply a navigation decision.
    ///
    /// `redraw` is set the first time the selector is asked (nothing has been drawn yet) and
    /// whenever the highlight differs from what was last drawn.
    pub fn select(&mut self, nav: NavigationState) -> Selection {
        match nav {
            NavigationState::SelectLight => self.highlighted = Mode::Light,
            NavigationState::SelectNoise => self.highlighted = Mode::Noise,
            NavigationState::NoChange => (),
        }
        let redraw = self.drawn != Some(self.highlighted);
        self.drawn = Some(self.highlighted);
        Selection {
            mode: self.highlighted,
            redraw,
        }
    }

    /// Move the highlight to the next entry (button navigation).
    pub fn step(&mut self) -> Selection {
        let nav = match self.highlighted.next() {
            Mode::Light => NavigationState::SelectLight,
            Mode::Noise => NavigationState::SelectNoise,
        };
        self.select(nav)
    }

    /// Record that the menu has just been drawn for the current highlight by someone else.
    pub fn mark_drawn(&mut self) {
        self.drawn = Some(self.highlighted);
    }
}

/// A button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Confirm,
    Back,
}

/// Edge detector for the two navigation buttons.
///
/// A command is produced on the released → pressed transition only, so a button held across
/// many ticks acts once.
#[derive(Debug, Default, Clone)]
pub struct Keypad {
    confirm_held: bool,
    back_held: bool,
}

/// Commands that became pressed on this tick.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Presses {
    pub confirm: bool,
    pub back: bool,
}

impl Keypad {
    pub fn update(&mut self, confirm: bool, back: bool) -> Presses {
        let presses = Presses {
            confirm: confirm && !self.confirm_held,
            back: back && !self.back_held,
        };
        self.confirm_held = confirm;
        self.back_held = back;
        presses
    }
}

impl Presses {
    /// The command that wins when both buttons went down together; `prefer` breaks the tie.
    pub fn command(self, prefer: Command) -> Option<Command> {
        match (self.confirm, self.back) {
            (true, true) => Some(prefer),
            (true, false) => Some(Command::Confirm),
            (false, true) => Some(Command::Back),
            (false, false) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector() -> ModeSelector {
        ModeSelector::new(DeadZone { low: 1000, high: 3000 }, Mode::Light)
    }

    #[test]
    fn dead_zone_edges() {
        let s = selector();
        assert_eq!(s.resolve(0), NavigationState::SelectNoise);
        assert_eq!(s.resolve(999), NavigationState::SelectNoise);
        assert_eq!(s.resolve(1000), NavigationState::NoChange);
        assert_eq!(s.resolve(2048), NavigationState::NoChange);
        assert_eq!(s.resolve(3000), NavigationState::NoChange);
        assert_eq!(s.resolve(3001), NavigationState::SelectLight);
        assert_eq!(s.resolve(4095), NavigationState::SelectLight);
    }

    #[test]
    fn mid_band_keeps_previous_mode() {
        let mut s = selector();
        let nav = s.resolve(200);
        assert_eq!(s.select(nav).mode, Mode::Noise);
        for _ in 0..100 {
            let nav = s.resolve(2000);
            let selection = s.select(nav);
            assert_eq!(selection.mode, Mode::Noise);
            assert!(!selection.redraw);
        }
        let nav = s.resolve(3500);
        assert_eq!(s.select(nav).mode, Mode::Light);
    }

    #[test]
    fn redraw_only_on_change() {
        let mut s = selector();
        // Nothing on screen yet.
        assert!(s.select(NavigationState::SelectLight).redraw);
        assert!(!s.select(NavigationState::SelectLight).redraw);
        assert!(!s.select(NavigationState::NoChange).redraw);
        assert!(s.select(NavigationState::SelectNoise).redraw);
        assert!(!s.select(NavigationState::SelectNoise).redraw);
        assert!(s.select(NavigationState::SelectLight).redraw);
    }

    #[test]
    fn step_wraps() {
        let mut s = selector();
        s.mark_drawn();
        let selection = s.step();
        assert_eq!(selection, Selection { mode: Mode::Noise, redraw: true });
        assert_eq!(s.step().mode, Mode::Light);
    }

    #[test]
    fn held_button_fires_once() {
        let mut keypad = Keypad::default();
        assert_eq!(keypad.update(true, false).command(Command::Confirm), Some(Command::Confirm));
        for _ in 0..10 {
            assert_eq!(keypad.update(true, false).command(Command::Confirm), None);
        }
        assert_eq!(keypad.update(false, false).command(Command::Confirm), None);
        assert_eq!(keypad.update(true, false).command(Command::Confirm), Some(Command::Confirm));
    }

    #[test]
    fn simultaneous_press_uses_preference() {
        let mut keypad = Keypad::default();
        let presses = keypad.update(true, true);
        assert_eq!(presses.command(Command::Confirm), Some(Command::Confirm));
        assert_eq!(presses.command(Command::Back), Some(Command::Back));

        // Back goes down while confirm is still held from before.
        let mut keypad = Keypad::default();
        keypad.update(true, false);
        assert_eq!(keypad.update(true, true).command(Command::Confirm), Some(Command::Back));
    }
}
