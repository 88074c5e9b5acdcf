use anyhow::Result;
use lovedir_core::Journal;
use owo_colors::OwoColorize;

use super::confirm_removal;
use crate::render::Render;

pub fn add(mut journal: Journal, title: &str, category: Option<&str>) -> Result<()> {
    let added = journal.add_wish(title, category)?.clone();
    journal.save()?;

    println!("{} {}  {}", "+".green(), added.render(), added.category.dimmed());
    Ok(())
}

pub fn list(journal: &Journal) -> Result<()> {
    let groups = journal.wishes_by_category();

    if groups.is_empty() {
        println!("{}", "No wishes yet".dimmed());
        return Ok(());
    }

    for (i, (category, wishes)) in groups.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", category.bold());
        for wish in wishes {
            println!("  {}  {}", wish.render(), wish.id.dimmed());
        }
    }

    Ok(())
}

pub fn toggle(mut journal: Journal, id: &str) -> Result<()> {
    let Some(done) = journal.toggle_wish(id) else {
        anyhow::bail!("No wish with id '{}'", id);
    };
    journal.save()?;

    if let Some(wish) = journal.wishes().iter().find(|w| w.id == id) {
        let state = if done { "done".green().to_string() } else { "open".yellow().to_string() };
        println!("{}  {}", wish.render(), state);
    }
    Ok(())
}

pub fn remove(mut journal: Journal, id: &str, yes: bool) -> Result<()> {
    let Some(wish) = journal.wishes().iter().find(|w| w.id == id).cloned() else {
        anyhow::bail!("No wish with id '{}'", id);
    };

    if !confirm_removal(&format!("'{}'", wish.title), yes)? {
        return Ok(());
    }

    journal.remove_wish(id);
    journal.save()?;

    println!("{} {}", "-".red(), wish.title.red());
    Ok(())
}
