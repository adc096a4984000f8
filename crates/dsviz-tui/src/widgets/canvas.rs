use dsviz_core::animation::SceneElement;
use dsviz_core::model::{Layout, Point};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Block,
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::scene::Scene;
use crate::theme::Theme;

/// Opacity below which nothing is drawn
const VISIBLE: f64 = 0.02;

/// Conversion from layout units to terminal cells
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    /// Layout units per column
    pub unit_x: f64,
    /// Layout units per row
    pub unit_y: f64,
}

impl Default for CellMetrics {
    fn default() -> Self {
        // 100x50 boxes become 10x3 cells, 70-unit rows become 4 lines
        Self {
            unit_x: 10.0,
            unit_y: 17.5,
        }
    }
}

impl CellMetrics {
    pub fn col(&self, x: f64) -> i32 {
        (x / self.unit_x).round() as i32
    }

    pub fn row(&self, y: f64) -> i32 {
        (y / self.unit_y).round() as i32
    }

    pub fn cells(&self, at: Point) -> (i32, i32) {
        (self.col(at.x), self.row(at.y))
    }
}

/// Draws the scene: one box per element, arrows between neighbours in a row,
/// and the traversal pointer above the box it points at
pub struct ListCanvasWidget;

impl ListCanvasWidget {
    pub fn render(frame: &mut Frame, area: Rect, scene: &Scene, layout: &Layout, theme: &Theme) {
        let block = Block::default().style(Style::default().bg(theme.background));
        frame.render_widget(block, area);
        Self::draw(frame.buffer_mut(), area, scene, layout, theme, CellMetrics::default());
    }

    pub fn draw(
        buf: &mut Buffer,
        area: Rect,
        scene: &Scene,
        layout: &Layout,
        theme: &Theme,
        metrics: CellMetrics,
    ) {
        let box_cols = metrics.col(layout.box_width).max(3);
        let box_rows = metrics.row(layout.box_height).max(3);

        let elements: Vec<&SceneElement> = scene
            .elements()
            .map(|(_, element)| element)
            .filter(|element| element.opacity > VISIBLE)
            .collect();

        for element in &elements {
            if let Some(next) = right_neighbour(element, &elements, layout) {
                draw_arrow(buf, area, element, next, box_cols, box_rows, theme, metrics);
            }
        }

        for element in &elements {
            draw_box(buf, area, element, box_cols, box_rows, theme, metrics);
        }

        let pointer = scene.pointer();
        if let Some(at) = pointer.at {
            if pointer.opacity > VISIBLE {
                let (col, row) = metrics.cells(at);
                let style = Style::default()
                    .fg(theme.fade(theme.pointer, pointer.opacity))
                    .add_modifier(Modifier::BOLD);
                put(buf, area, col + box_cols / 2, row - 1, "▼", style);
            }
        }
    }
}

/// The element occupying the next slot in the same row.
///
/// Neighbouring slots of a row always belong to one list, so adjacency is
/// exactly the successor link of the frame being shown.
fn right_neighbour<'a>(
    element: &SceneElement,
    elements: &[&'a SceneElement],
    layout: &Layout,
) -> Option<&'a SceneElement> {
    let step = layout.box_width + layout.inner_padding;
    elements.iter().copied().find(|other| {
        (other.at.y - element.at.y).abs() < layout.row_height / 2.0
            && (other.at.x - element.at.x - step).abs() < step / 2.0
    })
}

fn draw_box(
    buf: &mut Buffer,
    area: Rect,
    element: &SceneElement,
    cols: i32,
    rows: i32,
    theme: &Theme,
    metrics: CellMetrics,
) {
    let (col, row) = metrics.cells(element.at);
    let border = Style::default()
        .fg(theme.fade(theme.border, element.opacity))
        .bg(theme.background);
    let inner = (cols - 2).max(0) as usize;

    put(buf, area, col, row, &format!("┌{}┐", "─".repeat(inner)), border);
    for r in 1..rows - 1 {
        put(buf, area, col, row + r, &format!("│{}│", " ".repeat(inner)), border);
    }
    put(buf, area, col, row + rows - 1, &format!("└{}┘", "─".repeat(inner)), border);

    let label = truncate(&element.value.to_string(), inner);
    let offset = (inner.saturating_sub(label.width()) / 2) as i32;
    let style = Style::default()
        .fg(theme.fade(theme.foreground, element.opacity))
        .bg(theme.background);
    put(buf, area, col + 1 + offset, row + rows / 2, &label, style);
}

#[allow(clippy::too_many_arguments)]
fn draw_arrow(
    buf: &mut Buffer,
    area: Rect,
    from: &SceneElement,
    to: &SceneElement,
    box_cols: i32,
    box_rows: i32,
    theme: &Theme,
    metrics: CellMetrics,
) {
    let (col, row) = metrics.cells(from.at);
    let start = col + box_cols;
    let end = metrics.col(to.at.x) - 1;
    if end < start {
        return;
    }
    let shaft = "─".repeat((end - start) as usize);
    let style = Style::default()
        .fg(theme.fade(theme.arrow, from.opacity.min(to.opacity)))
        .bg(theme.background);
    put(buf, area, start, row + box_rows / 2, &format!("{}▶", shaft), style);
}

/// Shorten `text` to at most `max` columns, marking the cut with an ellipsis
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Write `text` at a cell offset inside `area`, clipping anything outside
fn put(buf: &mut Buffer, area: Rect, col: i32, row: i32, text: &str, style: Style) {
    if row < 0 || row >= area.height as i32 {
        return;
    }
    let mut x = col;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0) as i32;
        if w == 0 {
            continue;
        }
        if x >= 0 && x + w <= area.width as i32 {
            if let Some(cell) = buf.cell_mut((area.x + x as u16, area.y + row as u16)) {
                cell.set_char(ch).set_style(style);
            }
        }
        x += w;
    }
}
