use anyhow::Result;
use chrono::NaiveDate;
use lovedir_core::{EntryEdit, EntryFilter, EntryTag, Journal};
use owo_colors::OwoColorize;

use super::confirm_removal;
use crate::render::{Render, pluralize};

pub fn add(
    mut journal: Journal,
    title: &str,
    note: &str,
    date: NaiveDate,
    tag: EntryTag,
) -> Result<()> {
    let added = journal.add_entry(title, note, &date.to_string(), tag)?.clone();
    journal.save()?;

    println!("{} {}", "+".green(), added.render());
    Ok(())
}

pub fn list(journal: &Journal, filter: &EntryFilter) -> Result<()> {
    let entries = journal.entries(filter);

    if entries.is_empty() {
        println!("{}", "No entries found".dimmed());
        return Ok(());
    }

    for entry in &entries {
        println!("{}  {}", entry.render(), entry.id.dimmed());
    }
    println!(
        "{}",
        format!("{} {}", entries.len(), pluralize("entry", entries.len() as i64)).dimmed()
    );

    Ok(())
}

pub fn edit(mut journal: Journal, id: &str, edit: EntryEdit) -> Result<()> {
    let Some(edited) = journal.edit_entry(id, edit)?.cloned() else {
        anyhow::bail!("No entry with id '{}'", id);
    };
    journal.save()?;

    println!("{} {}", "~".yellow(), edited.render());
    Ok(())
}

pub fn remove(mut journal: Journal, id: &str, yes: bool) -> Result<()> {
    let Some(entry) = journal
        .entries(&EntryFilter::default())
        .into_iter()
        .find(|e| e.id == id)
        .cloned()
    else {
        anyhow::bail!("No entry with id '{}'", id);
    };

    if !confirm_removal(&format!("'{}'", entry.title), yes)? {
        return Ok(());
    }

    journal.remove_entry(id);
    journal.save()?;

    println!("{} {}", "-".red(), entry.title.red());
    Ok(())
}
