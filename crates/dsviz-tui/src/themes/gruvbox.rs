//! Gruvbox theme variants

use ratatui::style::Color;
use crate::theme::Theme;

pub fn dark() -> Theme {
    Theme::default()
}

pub fn light() -> Theme {
    Theme {
        background: Color::Rgb(0xfb, 0xf1, 0xc7),
        panel: Color::Rgb(0xf2, 0xe5, 0xbc),
        foreground: Color::Rgb(0x65, 0x47, 0x35),
        dim: Color::Rgb(0x92, 0x83, 0x74),
        border: Color::Rgb(0x45, 0x70, 0x7a),
        arrow: Color::Rgb(0x7c, 0x6f, 0x64),
        pointer: Color::Rgb(0xb4, 0x71, 0x09),
        accent: Color::Rgb(0x6c, 0x78, 0x2e),
        status_bg: Color::Rgb(0xeb, 0xdb, 0xb2),
        status_fg: Color::Rgb(0x3c, 0x38, 0x36),
        warning: Color::Rgb(0xc3, 0x5e, 0x0a),
    }
}
