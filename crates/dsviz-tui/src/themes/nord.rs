//! Nord theme
//! https://www.nordtheme.com/

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        background: Color::Rgb(0x2e, 0x34, 0x40), // nord0
        panel: Color::Rgb(0x3b, 0x42, 0x52),      // nord1
        foreground: Color::Rgb(0xec, 0xef, 0xf4), // nord6
        dim: Color::Rgb(0x5e, 0x68, 0x7a),
        border: Color::Rgb(0x88, 0xc0, 0xd0),     // nord8
        arrow: Color::Rgb(0xd8, 0xde, 0xe9),      // nord4
        pointer: Color::Rgb(0xeb, 0xcb, 0x8b),    // nord13
        accent: Color::Rgb(0x8f, 0xbc, 0xbb),     // nord7
        status_bg: Color::Rgb(0x43, 0x4c, 0x5e),  // nord2
        status_fg: Color::Rgb(0xe5, 0xe9, 0xf0),  // nord5
        warning: Color::Rgb(0xd0, 0x87, 0x70),    // nord12
    }
}
