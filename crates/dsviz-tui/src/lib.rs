pub mod event;
pub mod input;
pub mod scene;
pub mod surface;
pub mod theme;
pub mod themes;
pub mod tween;
pub mod widgets;

pub use surface::TerminalSurface;
pub use theme::Theme;
pub use themes::{available_themes, load_theme};
