use std::path::Path;

use anyhow::Result;
use serde_json::{json, Value};
use tokio::sync::mpsc;

use dsviz_core::animation::Durations;
use dsviz_core::diff::{diff, FrameDiff};
use dsviz_core::model::Frame;
use dsviz_core::{pretty_print, AppConfig, Diagnostic, Operations, Player, RecordingSurface};

/// What one step did, as printed by `trace`
struct StepTrace {
    index: usize,
    operation: String,
    animate: bool,
    lists: Vec<Vec<String>>,
    changes: FrameDiff,
    diagnostics: Vec<Diagnostic>,
}

pub async fn run(config: &AppConfig, path: &Path, json: bool) -> Result<()> {
    let operations = Operations::from_path(path)?;
    let (steps, elapsed_ms) = trace(config, &operations).await?;

    if json {
        let steps: Vec<Value> = steps.iter().map(to_json).collect();
        let document = json!({
            "steps": steps,
            "animation_ms": elapsed_ms,
        });
        println!("{}", serde_json::to_string_pretty(&document)?);
    } else {
        for step in &steps {
            print_step(step);
        }
        println!("{} steps, {}ms of animation", steps.len(), elapsed_ms);
    }
    Ok(())
}

async fn trace(config: &AppConfig, operations: &Operations) -> Result<(Vec<StepTrace>, u128)> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut player =
        Player::new(RecordingSurface::new(), config.animation.clone()).with_diagnostics(tx);
    let durations = Durations::resolve(&operations.metadata, &config.animation);
    let total = operations.len();

    let mut steps = Vec::with_capacity(total);
    for (index, entry) in operations.operations.iter().enumerate() {
        let before = player.frame().clone();
        player.step(index, total, entry, &durations).await?;

        let mut diagnostics = Vec::new();
        while let Ok(diagnostic) = rx.try_recv() {
            if diagnostic.is_problem() {
                diagnostics.push(diagnostic);
            }
        }

        steps.push(StepTrace {
            index,
            operation: pretty_print(&entry.operation),
            animate: entry.metadata.animate,
            lists: lists(player.frame()),
            changes: diff(&before, player.frame()),
            diagnostics,
        });
    }

    let elapsed = player.surface().elapsed().as_millis();
    Ok((steps, elapsed))
}

fn lists(frame: &Frame) -> Vec<Vec<String>> {
    (0..frame.list_count())
        .map(|i| frame.list(i).map(|e| e.value.to_string()).collect())
        .collect()
}

fn summary(changes: &FrameDiff) -> String {
    if changes.is_empty() {
        return "no change".to_string();
    }
    let mut parts = Vec::new();
    if !changes.entering.is_empty() {
        parts.push(format!("+{}", changes.entering.len()));
    }
    if !changes.exiting.is_empty() {
        parts.push(format!("-{}", changes.exiting.len()));
    }
    let moved = changes.moved().count();
    if moved > 0 {
        parts.push(format!("~{} moved", moved));
    }
    let relabelled = changes.relabelled().count();
    if relabelled > 0 {
        parts.push(format!("{} relabelled", relabelled));
    }
    parts.join(", ")
}

fn print_step(step: &StepTrace) {
    let marker = if step.animate { "" } else { " (instant)" };
    println!("[{}] {}{}  {}", step.index, step.operation, marker, summary(&step.changes));
    for (i, list) in step.lists.iter().enumerate() {
        println!("    {}: {}", i, list.join(" -> "));
    }
    for diagnostic in &step.diagnostics {
        println!("    ! {}", diagnostic);
    }
}

fn to_json(step: &StepTrace) -> Value {
    json!({
        "index": step.index,
        "operation": step.operation,
        "animate": step.animate,
        "lists": step.lists,
        "entering": step.changes.entering.iter().map(|e| e.id).collect::<Vec<_>>(),
        "exiting": step.changes.exiting.iter().map(|e| e.id).collect::<Vec<_>>(),
        "moved": step.changes.moved().map(|c| c.id()).collect::<Vec<_>>(),
        "relabelled": step.changes.relabelled().map(|c| c.id()).collect::<Vec<_>>(),
        "diagnostics": step.diagnostics.iter().map(|d| d.to_string()).collect::<Vec<_>>(),
    })
}
