//! Colored terminal rendering for journal types.

use lovedir_core::{Anniversary, Entry, Milestone, Wish};
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for Milestone {
    fn render(&self) -> String {
        let mut line = format!("{}  {}", self.date.dimmed(), self.title.bold());
        if let Some(ref note) = self.note {
            line.push_str(&format!("  {}", note.dimmed()));
        }
        line
    }
}

impl Render for Entry {
    fn render(&self) -> String {
        let mut line = format!("{}  {}", self.date.dimmed(), self.title.bold());
        if let Some(tag) = self.tag {
            line.push_str(&format!("  {}", format!("#{tag}").magenta()));
        }
        if !self.note.is_empty() {
            line.push_str(&format!("  {}", self.note.dimmed()));
        }
        line
    }
}

impl Render for Wish {
    fn render(&self) -> String {
        if self.done {
            format!("[x] {}", self.title.strikethrough().dimmed())
        } else {
            format!("[ ] {}", self.title)
        }
    }
}

/// One anniversary row: date, name, countdown and id.
pub fn render_anniversary(anniversary: &Anniversary, days: Option<i64>) -> String {
    format!(
        "{}  {}  {}  {}",
        anniversary.date.dimmed(),
        anniversary.name.bold(),
        format_countdown(days),
        anniversary.id.dimmed()
    )
}

/// "today", "tomorrow", "in 12 days", or "invalid date".
pub fn format_countdown(days: Option<i64>) -> String {
    match days {
        Some(0) => "today".green().to_string(),
        Some(1) => "tomorrow".yellow().to_string(),
        Some(n) => format!("in {} {}", n, pluralize("day", n)),
        None => "invalid date".red().to_string(),
    }
}

pub fn pluralize(word: &str, count: i64) -> &str {
    if count == 1 {
        word
    } else {
        match word {
            "day" => "days",
            "anniversary" => "anniversaries",
            "entry" => "entries",
            _ => word,
        }
    }
}
