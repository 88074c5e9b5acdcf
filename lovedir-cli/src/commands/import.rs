use std::path::Path;

use anyhow::{Context, Result};
use lovedir_core::Journal;
use lovedir_core::ics::parse_calendar_document;
use owo_colors::OwoColorize;

pub fn run(mut journal: Journal, file: &Path) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let events = parse_calendar_document(&content);
    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    let report = journal.import_events(&events);
    for added in &report.added {
        println!("{} {} {}", "+".green(), added.name.bold(), added.date.dimmed());
    }
    for (event, err) in &report.rejected {
        println!("   {}  {}", event.title, err.to_string().red());
    }

    journal.save()?;
    println!(
        "{}",
        format!(
            "Imported {} of {} into {} ({} already present)",
            report.added.len(),
            events.len(),
            journal.path().display(),
            report.duplicates
        )
        .dimmed()
    );

    Ok(())
}
