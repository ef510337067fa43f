//! Fixed screen layouts for a 128×64 panel.
//!
//! Each function draws one complete frame and commits it.
use core::fmt::Write;

use heapless::String;

use crate::{light::LightStatus, noise::NoiseStatus, selector::Mode, Renderer};

/// Holds the longest status line, `ATUAL -999.9 DB` included.
type Line = String<24>;

const MENU_ROWS: [i32; 2] = [20, 40];

/// Largest level shown; anything beyond is pinned to the edge.
const MAX_SHOWN_DB: f32 = 999.9;

fn shown(db: f32) -> f32 {
    db.clamp(-MAX_SHOWN_DB, MAX_SHOWN_DB)
}

pub fn menu<R: Renderer>(display: &mut R, highlighted: Mode) -> Result<(), R::Error> {
    display.clear_screen()?;
    display.draw_text("MENU", 50, 5, false)?;
    for (mode, y) in Mode::ALL.iter().zip(MENU_ROWS) {
        let selected = *mode == highlighted;
        if selected {
            display.draw_rect(6, y - 3, 116, 16, false)?;
        }
        display.draw_text(mode.label(), 10, y, selected)?;
    }
    display.commit_frame()
}

pub fn light<R: Renderer>(display: &mut R, status: &LightStatus) -> Result<(), R::Error> {
    let mut line = Line::new();
    display.clear_screen()?;

    let _ = write!(line, "LUZ ATUAL {}%", status.percent);
    display.draw_text(&line, 10, 10, false)?;

    line.clear();
    let _ = write!(line, "BRILHO {}", status.brightness);
    display.draw_text(&line, 10, 20, false)?;

    line.clear();
    let _ = write!(line, "LED {}%", status.led_percent);
    display.draw_text(&line, 10, 30, false)?;

    display.commit_frame()
}

pub fn noise<R: Renderer>(display: &mut R, status: &NoiseStatus) -> Result<(), R::Error> {
    let mut line = Line::new();
    display.clear_screen()?;

    if status.banner() {
        display.draw_rect(0, 0, 128, 26, true)?;
        display.draw_text("ALERTA", 46, 2, true)?;
        display.draw_text("SOM ALTO", 40, 14, true)?;
    }

    let _ = write!(line, "MIN {:.1} DB", shown(status.threshold_decibels));
    display.draw_text(&line, 10, 34, false)?;

    line.clear();
    let _ = write!(line, "ATUAL {:.1} DB", shown(status.decibels));
    display.draw_text(&line, 10, 48, false)?;

    display.commit_frame()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        mock::{Draw, FakeDisplay},
        noise::{self, AlertState},
        Config,
    };

    #[test]
    fn menu_marks_highlight() {
        let mut display = FakeDisplay::default();
        menu(&mut display, Mode::Noise).unwrap();
        let frame = display.last_frame();
        assert!(frame.contains(&Draw::Text("RUIDO".into(), true)));
        assert!(frame.contains(&Draw::Text("LUMINOSIDADE".into(), false)));
        assert_eq!(frame.iter().filter(|d| matches!(d, Draw::Rect { .. })).count(), 1);
    }

    #[test]
    fn noise_banner_follows_alert() {
        let config = Config::default();
        let mut display = FakeDisplay::default();

        let quiet = noise::tick(4095, AlertState::Inactive, &config);
        let quiet = NoiseStatus { alert: AlertState::Inactive, ..quiet };
        noise(&mut display, &quiet).unwrap();
        assert!(!display.shows("ALERTA"));
        assert!(display.shows("MIN 50.9 DB"));
        assert!(display.shows("ATUAL 54.8 DB"));

        let loud = noise::tick(4095, AlertState::Inactive, &config);
        noise(&mut display, &loud).unwrap();
        assert!(display.shows("ALERTA"));
        assert!(display.shows("SOM ALTO"));
    }

    #[test]
    fn extreme_levels_are_pinned() {
        let mut display = FakeDisplay::default();
        let base = noise::tick(0, AlertState::Inactive, &Config::default());
        let status = NoiseStatus {
            decibels: f32::MAX,
            threshold_decibels: f32::MIN,
            ..base
        };
        noise(&mut display, &status).unwrap();
        let frame = display.last_frame();
        assert!(frame.contains(&Draw::Text("ATUAL 999.9 DB".into(), false)));
        assert!(frame.contains(&Draw::Text("MIN -999.9 DB".into(), false)));
    }
}
