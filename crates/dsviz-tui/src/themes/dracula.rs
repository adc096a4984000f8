//! Dracula theme
//! https://draculatheme.com/

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        background: Color::Rgb(0x28, 0x2a, 0x36),
        panel: Color::Rgb(0x21, 0x22, 0x2c),
        foreground: Color::Rgb(0xf8, 0xf8, 0xf2),
        dim: Color::Rgb(0x62, 0x72, 0xa4),
        border: Color::Rgb(0xbd, 0x93, 0xf9),
        arrow: Color::Rgb(0x8b, 0xe9, 0xfd),
        pointer: Color::Rgb(0xf1, 0xfa, 0x8c),
        accent: Color::Rgb(0x50, 0xfa, 0x7b),
        status_bg: Color::Rgb(0x44, 0x47, 0x5a),
        status_fg: Color::Rgb(0xf8, 0xf8, 0xf2),
        warning: Color::Rgb(0xff, 0xb8, 0x6c),
    }
}
