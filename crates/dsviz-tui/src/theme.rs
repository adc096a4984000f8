use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    /// Canvas background
    pub background: Color,
    /// Panel background (source pane, popups)
    pub panel: Color,
    /// Node labels
    pub foreground: Color,
    /// Secondary text (line numbers, hints)
    pub dim: Color,
    pub border: Color,
    pub arrow: Color,
    pub pointer: Color,
    /// Titles and the current source line marker
    pub accent: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Gruvbox Dark
        Self {
            background: Color::Rgb(0x28, 0x28, 0x28),
            panel: Color::Rgb(0x32, 0x30, 0x2f),
            foreground: Color::Rgb(0xd4, 0xbe, 0x98),
            dim: Color::Rgb(0x92, 0x83, 0x74),
            border: Color::Rgb(0x7d, 0xae, 0xa3),
            arrow: Color::Rgb(0xa8, 0x99, 0x84),
            pointer: Color::Rgb(0xd8, 0xa6, 0x57),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
            status_bg: Color::Rgb(0x45, 0x40, 0x3d),
            status_fg: Color::Rgb(0xdd, 0xc7, 0xa1),
            warning: Color::Rgb(0xe7, 0x8a, 0x4e),
        }
    }
}

impl Theme {
    /// Blend `color` towards the canvas background; `opacity` 0 is fully hidden
    pub fn fade(&self, color: Color, opacity: f64) -> Color {
        blend(self.background, color, opacity)
    }
}

/// Linear blend between two RGB colors; non-RGB colors snap at the midpoint
pub fn blend(from: Color, to: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r0, g0, b0), Color::Rgb(r1, g1, b1)) => {
            let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
            Color::Rgb(mix(r0, r1), mix(g0, g1), mix(b0, b1))
        }
        _ => {
            if t < 0.5 {
                from
            } else {
                to
            }
        }
    }
}
