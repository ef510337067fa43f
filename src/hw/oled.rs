//! SSD1306 128×64 OLED on TWIM0, drawn through `embedded-graphics` into the driver's frame
//! buffer and pushed to the panel on [`Renderer::commit_frame`].
use crate::*;

use display_interface::DisplayError;
use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoTextStyle, MonoTextStyleBuilder},
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::{Baseline, Text},
};
use ssd1306::{mode::BufferedGraphicsMode, prelude::*, I2CDisplayInterface, Ssd1306};

pub type I2c = twim::Twim<'static, peripherals::TWISPI0>;

type Panel = Ssd1306<I2CInterface<I2c>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

pub struct Oled {
    panel: Panel,
}

impl Oled {
    /// Initialises the controller and blanks the panel.
    pub fn new(i2c: I2c) -> Result<Self, DisplayError> {
        let interface = I2CDisplayInterface::new(i2c);
        let mut panel = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        panel.init()?;
        DrawTarget::clear(&mut panel, BinaryColor::Off)?;
        panel.flush()?;
        Ok(Self { panel })
    }

    fn style(inverted: bool) -> MonoTextStyle<'static, BinaryColor> {
        if inverted {
            MonoTextStyleBuilder::new()
                .font(&FONT_6X10)
                .text_color(BinaryColor::Off)
                .background_color(BinaryColor::On)
                .build()
        } else {
            MonoTextStyle::new(&FONT_6X10, BinaryColor::On)
        }
    }
}

impl Renderer for Oled {
    type Error = DisplayError;

    fn clear_screen(&mut self) -> Result<(), DisplayError> {
        DrawTarget::clear(&mut self.panel, BinaryColor::Off)
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, inverted: bool) -> Result<(), DisplayError> {
        Text::with_baseline(text, Point::new(x, y), Self::style(inverted), Baseline::Top)
            .draw(&mut self.panel)?;
        Ok(())
    }

    fn draw_rect(&mut self, x: i32, y: i32, w: u32, h: u32, filled: bool) -> Result<(), DisplayError> {
        let style = if filled {
            PrimitiveStyle::with_fill(BinaryColor::On)
        } else {
            PrimitiveStyle::with_stroke(BinaryColor::On, 1)
        };
        Rectangle::new(Point::new(x, y), Size::new(w, h))
            .into_styled(style)
            .draw(&mut self.panel)
    }

    fn commit_frame(&mut self) -> Result<(), DisplayError> {
        self.panel.flush()
    }
}
