use anyhow::Result;
use chrono::NaiveDate;
use lovedir_core::Journal;
use owo_colors::OwoColorize;
use serde_json::json;

use super::confirm_removal;
use crate::render::{format_countdown, render_anniversary};

pub fn add(mut journal: Journal, name: &str, date: &str) -> Result<()> {
    let added = journal.add_anniversary(name, date)?.clone();
    journal.save()?;

    println!("{} {} {}", "+".green(), added.name.bold(), added.date.dimmed());
    Ok(())
}

pub fn list(journal: &Journal, today: NaiveDate, as_json: bool) -> Result<()> {
    let upcoming = journal.upcoming(today);

    if as_json {
        let rows: Vec<_> = upcoming
            .iter()
            .map(|(a, days)| {
                json!({
                    "id": a.id,
                    "name": a.name,
                    "date": a.date,
                    "days_until": days,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if upcoming.is_empty() {
        println!("{}", "No anniversaries yet. Add one with `lovedir add`".dimmed());
        return Ok(());
    }

    for (anniversary, days) in &upcoming {
        println!("{}", render_anniversary(anniversary, *days));
    }

    Ok(())
}

pub fn remove(mut journal: Journal, id: &str, yes: bool) -> Result<()> {
    let Some(anniversary) = journal.anniversaries().iter().find(|a| a.id == id).cloned() else {
        anyhow::bail!("No anniversary with id '{}'", id);
    };

    if !confirm_removal(&format!("'{}'", anniversary.name), yes)? {
        return Ok(());
    }

    journal.remove_anniversary(id);
    journal.save()?;

    println!("{} {}", "-".red(), anniversary.name.red());
    Ok(())
}

pub fn next(journal: &Journal, today: NaiveDate) -> Result<()> {
    match journal.nearest_anniversary(today) {
        Some((anniversary, days)) => {
            println!(
                "{} {}",
                anniversary.name.bold(),
                format_countdown(Some(days))
            );
        }
        None => println!("{}", "No upcoming anniversaries".dimmed()),
    }

    Ok(())
}
