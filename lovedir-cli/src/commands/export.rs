use std::path::Path;

use anyhow::{Context, Result};
use lovedir_core::{Journal, build_calendar_document};
use owo_colors::OwoColorize;

pub fn run(journal: &Journal, output: Option<&Path>) -> Result<()> {
    let events = journal.calendar_events();
    let ics = build_calendar_document(&events);

    match output {
        Some(path) => {
            std::fs::write(path, &ics)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "Exported {} {} to {}",
                events.len(),
                crate::render::pluralize("anniversary", events.len() as i64),
                path.display().bold()
            );
        }
        None => print!("{}", ics),
    }

    Ok(())
}
