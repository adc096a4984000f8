mod canvas;
mod source;
mod status_bar;

pub use canvas::{CellMetrics, ListCanvasWidget};
pub use source::SourcePaneWidget;
pub use status_bar::{StatusBarWidget, StatusLine};
