//! Terminal implementation of the playback surface

use async_trait::async_trait;
use dsviz_core::animation::{Command, StepInfo, Surface, Transition};
use dsviz_core::diagnostics::Diagnostic;
use dsviz_core::model::Layout;
use dsviz_core::{Error, PlaybackReport, Result};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout as Split},
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, trace};

use crate::input::Action;
use crate::scene::Scene;
use crate::theme::Theme;
use crate::tween::{timing::frame_interval, Tween};
use crate::widgets::{ListCanvasWidget, SourcePaneWidget, StatusBarWidget, StatusLine};

/// Tallest the source pane grows, borders included
const MAX_SOURCE_HEIGHT: u16 = 12;

/// Draws the scene to a ratatui terminal and animates transition groups at a
/// fixed frame rate
pub struct TerminalSurface<B: Backend> {
    terminal: Terminal<B>,
    scene: Scene,
    layout: Layout,
    theme: Theme,
    fps: u32,
    step: Option<StepInfo>,
    status: StatusLine,
    actions: Option<mpsc::UnboundedReceiver<Action>>,
    diagnostics: Option<mpsc::UnboundedReceiver<Diagnostic>>,
}

impl<B: Backend> TerminalSurface<B> {
    pub fn new(terminal: Terminal<B>, theme: Theme, fps: u32) -> Self {
        Self {
            terminal,
            scene: Scene::new(),
            layout: Layout::default(),
            theme,
            fps,
            step: None,
            status: StatusLine::default(),
            actions: None,
            diagnostics: None,
        }
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Keyboard actions; `Quit` interrupts a running transition
    pub fn with_actions(mut self, rx: mpsc::UnboundedReceiver<Action>) -> Self {
        self.actions = Some(rx);
        self
    }

    /// Diagnostics to surface in the status bar
    pub fn with_diagnostics(mut self, rx: mpsc::UnboundedReceiver<Diagnostic>) -> Self {
        self.diagnostics = Some(rx);
        self
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn into_terminal(self) -> Terminal<B> {
        self.terminal
    }

    /// Keep the final frame on screen until the user quits
    pub async fn wait_for_quit(&mut self) -> Result<()> {
        if self.actions.is_none() {
            return Ok(());
        }
        while let Some(action) = match self.actions.as_mut() {
            Some(rx) => rx.recv().await,
            None => None,
        } {
            match action {
                Action::Quit => break,
                Action::Redraw => self.redraw()?,
                Action::None => {}
            }
        }
        Ok(())
    }

    pub fn redraw(&mut self) -> Result<()> {
        self.drain_diagnostics();
        let Self {
            terminal,
            scene,
            layout,
            theme,
            step,
            status,
            ..
        } = self;
        terminal
            .draw(|frame| render(frame, scene, layout, theme, step.as_ref(), status))
            .map_err(|e| Error::Surface(e.to_string()))?;
        Ok(())
    }

    fn drain_diagnostics(&mut self) {
        let Some(rx) = self.diagnostics.as_mut() else {
            return;
        };
        while let Ok(diagnostic) = rx.try_recv() {
            if diagnostic.is_problem() {
                self.status.problems += 1;
                self.status.message = Some(diagnostic.to_string());
            }
        }
    }

    fn check_interrupt(&mut self) -> Result<()> {
        if let Some(rx) = self.actions.as_mut() {
            while let Ok(action) = rx.try_recv() {
                if action == Action::Quit {
                    debug!("Playback interrupted by user");
                    return Err(Error::Interrupted);
                }
            }
        }
        Ok(())
    }
}

fn render(
    frame: &mut Frame,
    scene: &Scene,
    layout: &Layout,
    theme: &Theme,
    step: Option<&StepInfo>,
    status: &StatusLine,
) {
    let source_lines = step.map(|s| s.source.len().max(1)).unwrap_or(1) as u16;
    let source_height = (source_lines + 2).min(MAX_SOURCE_HEIGHT);

    let chunks = Split::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(source_height),
            Constraint::Length(1),
        ])
        .split(frame.area());

    ListCanvasWidget::render(frame, chunks[0], scene, layout, theme);
    SourcePaneWidget::render(frame, chunks[1], step, theme);
    StatusBarWidget::render(frame, chunks[2], status, theme);
}

#[async_trait]
impl<B: Backend + Send> Surface for TerminalSurface<B> {
    fn apply(&mut self, command: Command) {
        trace!(?command, "Apply");
        self.scene.apply(&command);
    }

    async fn run(&mut self, group: Vec<Transition>) -> Result<()> {
        let tween = Tween::new(group);
        if tween.is_instant() {
            for (target, sample) in tween.end_state() {
                self.scene.set(target, sample);
            }
            return self.redraw();
        }

        let interval = frame_interval(self.fps);
        let start = Instant::now();
        loop {
            self.check_interrupt()?;
            let elapsed = start.elapsed();
            for (target, sample) in tween.sample(elapsed) {
                self.scene.set(target, sample);
            }
            self.redraw()?;
            if tween.is_complete(elapsed) {
                break;
            }
            tokio::time::sleep(interval).await;
        }
        Ok(())
    }

    async fn begin_step(&mut self, step: &StepInfo) -> Result<()> {
        self.check_interrupt()?;
        self.step = Some(step.clone());
        self.redraw()
    }

    async fn finish(&mut self, report: &PlaybackReport) -> Result<()> {
        self.status.finished = true;
        if self.status.message.is_none() {
            self.status.message = Some(format!(
                "{} steps, {} skipped",
                report.steps, report.skipped
            ));
        }
        self.redraw()
    }
}
