use async_trait::async_trait;

use super::effect::{Command, Transition};
use crate::operation::OperationKind;
use crate::player::PlaybackReport;
use crate::Result;

/// Presentation data for the step about to play
#[derive(Debug, Clone, PartialEq)]
pub struct StepInfo {
    pub index: usize,
    pub total: usize,
    pub kind: OperationKind,
    /// Pretty-printed operation
    pub operation: String,
    pub source: Vec<String>,
    /// Whether the step's transitions take time once flags and config are applied
    pub animate: bool,
}

/// The rendering collaborator.
///
/// Commands are applied synchronously. `run` starts every transition of a
/// group together and resolves once all of them have finished; a group whose
/// durations are all zero must resolve without waiting.
#[async_trait]
pub trait Surface: Send {
    fn apply(&mut self, command: Command);

    async fn run(&mut self, group: Vec<Transition>) -> Result<()>;

    /// Called before the step's mutation is applied
    async fn begin_step(&mut self, _step: &StepInfo) -> Result<()> {
        Ok(())
    }

    /// Called once after the last step
    async fn finish(&mut self, _report: &PlaybackReport) -> Result<()> {
        Ok(())
    }
}

#[async_trait]
impl<S: Surface + ?Sized> Surface for &mut S {
    fn apply(&mut self, command: Command) {
        (**self).apply(command)
    }

    async fn run(&mut self, group: Vec<Transition>) -> Result<()> {
        (**self).run(group).await
    }

    async fn begin_step(&mut self, step: &StepInfo) -> Result<()> {
        (**self).begin_step(step).await
    }

    async fn finish(&mut self, report: &PlaybackReport) -> Result<()> {
        (**self).finish(report).await
    }
}
