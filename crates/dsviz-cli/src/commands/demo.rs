use std::path::Path;

use anyhow::{Context, Result};

use dsviz_core::{Operations, Recorder};

/// Append three values, then reverse the list in place
pub fn build() -> Operations {
    let mut recorder = Recorder::new();

    let head = recorder.init(1i64, None, &["head = Node(1)"]);
    let second = recorder.init(2i64, None, &["head.next = Node(2)"]);
    recorder.set_next(head, Some(second), &["head.next = Node(2)"]);
    recorder.get_next(head, &["tail = head.next"]);
    let third = recorder.init(3i64, None, &["tail.next = Node(3)"]);
    recorder.set_next(second, Some(third), &["tail.next = Node(3)"]);
    recorder.set_value(second, 20i64, &["head.next.value *= 10"]);

    let reverse = [
        "prev = None",
        "while head:",
        "    head.next, prev, head = prev, head, head.next",
    ];
    recorder.get_next(head, &reverse);
    recorder.set_next(head, None, &reverse);
    recorder.get_next(second, &reverse);
    recorder.set_next(second, Some(head), &reverse);
    recorder.get_next(third, &reverse);
    recorder.set_next(third, Some(second), &reverse);

    recorder.visualize()
}

pub fn run(output: Option<&Path>) -> Result<()> {
    let json = build().to_json_pretty()?;
    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("cannot write {}", path.display()))?;
            println!("Wrote demo log to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
