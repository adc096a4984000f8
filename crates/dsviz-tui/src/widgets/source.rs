use dsviz_core::animation::StepInfo;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::theme::Theme;

/// Source lines attached to the step being played
pub struct SourcePaneWidget;

impl SourcePaneWidget {
    pub fn render(frame: &mut Frame, area: Rect, step: Option<&StepInfo>, theme: &Theme) {
        let title = match step {
            Some(step) => format!(" {}/{} {} ", step.index + 1, step.total, step.operation),
            None => " source ".to_string(),
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.dim))
            .title_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
            .style(Style::default().bg(theme.panel));

        let paragraph = Paragraph::new(Self::lines(step, theme))
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }

    fn lines(step: Option<&StepInfo>, theme: &Theme) -> Vec<Line<'static>> {
        let Some(step) = step else {
            return Vec::new();
        };
        if step.source.is_empty() {
            return vec![Line::from(Span::styled(
                "(no source)",
                Style::default().fg(theme.dim),
            ))];
        }

        let gutter = step.source.len().to_string().len();
        step.source
            .iter()
            .enumerate()
            .map(|(i, text)| {
                Line::from(vec![
                    Span::styled(
                        format!("{:>width$} ", i + 1, width = gutter),
                        Style::default().fg(theme.dim),
                    ),
                    Span::styled(text.clone(), Style::default().fg(theme.foreground)),
                ])
            })
            .collect()
    }
}
