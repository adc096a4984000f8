use std::path::Path;

use anyhow::Result;

use dsviz_core::{pretty_print, Operations};

pub fn run(path: &Path) -> Result<()> {
    let operations = Operations::from_path(path)?;

    let metadata = &operations.metadata;
    if let Some(ms) = metadata.transition_duration {
        println!("# transition_duration: {}ms", ms);
    }
    if let Some(ms) = metadata.fade_in_duration {
        println!("# fade_in_duration: {}ms", ms);
    }

    let width = operations.len().to_string().len();
    for (index, entry) in operations.operations.iter().enumerate() {
        let marker = if entry.metadata.animate { ' ' } else { '~' };
        println!(
            "{:>width$}{} {}",
            index,
            marker,
            pretty_print(&entry.operation),
            width = width
        );
        for line in &entry.metadata.source {
            println!("{:>width$}  | {}", "", line, width = width);
        }
    }

    if operations.is_empty() {
        println!("(empty log)");
    }
    Ok(())
}
