use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::canvas::truncate;
use crate::theme::Theme;

/// State shown in the bottom bar
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine {
    /// Last diagnostic or progress message
    pub message: Option<String>,
    pub problems: usize,
    pub finished: bool,
}

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, status: &StatusLine, theme: &Theme) {
        let mode = if status.finished { "DONE" } else { "PLAYING" };
        let status_text = match &status.message {
            Some(msg) => format!(" {} | {}", mode, msg),
            None => format!(" {}", mode),
        };
        let problems = if status.problems > 0 {
            format!(" {} warnings ", status.problems)
        } else {
            String::new()
        };
        let help_hint = if status.finished { " q:quit " } else { " q:stop " };

        let room = (area.width as usize).saturating_sub(problems.width() + help_hint.width());
        let status_text = truncate(&status_text, room);
        let used = status_text.width() + problems.width() + help_hint.width();
        let padding_len = (area.width as usize).saturating_sub(used);

        let base = Style::default().bg(theme.status_bg);
        let line = Line::from(vec![
            Span::styled(status_text, base.fg(theme.status_fg)),
            Span::styled(" ".repeat(padding_len), base),
            Span::styled(problems, base.fg(theme.warning)),
            Span::styled(help_hint, base.fg(theme.dim)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(status: &StatusLine, width: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, 1)).unwrap();
        terminal
            .draw(|frame| {
                StatusBarWidget::render(frame, frame.area(), status, &Theme::default())
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..width)
            .map(|x| buffer.cell((x, 0)).map(|c| c.symbol()).unwrap_or(" "))
            .collect()
    }

    #[test]
    fn test_long_message_keeps_counters_visible() {
        let status = StatusLine {
            message: Some("step 3: no element for node 7 in the current frame".to_string()),
            problems: 2,
            finished: false,
        };
        let line = render(&status, 40);
        assert!(line.starts_with(" PLAYING | step 3"));
        assert!(line.contains("…"));
        assert!(line.ends_with(" 2 warnings  q:stop "));
    }

    #[test]
    fn test_finished_hint() {
        let status = StatusLine {
            finished: true,
            ..Default::default()
        };
        let line = render(&status, 30);
        assert!(line.starts_with(" DONE"));
        assert!(line.ends_with(" q:quit "));
    }
}
