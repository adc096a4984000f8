//! One Dark theme (Atom)

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        background: Color::Rgb(0x28, 0x2c, 0x34),
        panel: Color::Rgb(0x21, 0x25, 0x2b),
        foreground: Color::Rgb(0xab, 0xb2, 0xbf),
        dim: Color::Rgb(0x5c, 0x63, 0x70),
        border: Color::Rgb(0x61, 0xaf, 0xef),
        arrow: Color::Rgb(0x56, 0xb6, 0xc2),
        pointer: Color::Rgb(0xe5, 0xc0, 0x7b),
        accent: Color::Rgb(0x98, 0xc3, 0x79),
        status_bg: Color::Rgb(0x3e, 0x44, 0x51),
        status_fg: Color::Rgb(0xab, 0xb2, 0xbf),
        warning: Color::Rgb(0xd1, 0x9a, 0x66),
    }
}
