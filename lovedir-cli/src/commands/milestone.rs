use anyhow::Result;
use lovedir_core::Journal;
use owo_colors::OwoColorize;

use super::confirm_removal;
use crate::render::Render;

pub fn add(mut journal: Journal, title: &str, date: &str, note: Option<&str>) -> Result<()> {
    let added = journal.add_milestone(title, date, note)?.clone();
    journal.save()?;

    println!("{} {}", "+".green(), added.render());
    Ok(())
}

pub fn list(journal: &Journal) -> Result<()> {
    let milestones = journal.milestones();

    if milestones.is_empty() {
        println!("{}", "No milestones yet".dimmed());
        return Ok(());
    }

    for milestone in milestones {
        println!("{}  {}", milestone.render(), milestone.id.dimmed());
    }

    Ok(())
}

pub fn remove(mut journal: Journal, id: &str, yes: bool) -> Result<()> {
    let Some(milestone) = journal.milestones().iter().find(|m| m.id == id).cloned() else {
        anyhow::bail!("No milestone with id '{}'", id);
    };

    if !confirm_removal(&format!("'{}'", milestone.title), yes)? {
        return Ok(());
    }

    journal.remove_milestone(id);
    journal.save()?;

    println!("{} {}", "-".red(), milestone.title.red());
    Ok(())
}
