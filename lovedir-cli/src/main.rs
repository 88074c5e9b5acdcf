mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use lovedir_core::{EntryEdit, EntryFilter, EntryTag, Journal, LoveDirConfig};

#[derive(Parser)]
#[command(name = "lovedir")]
#[command(about = "Count down to your anniversaries and export them to your calendar")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Days until the next occurrence of a date
    Countdown {
        /// Date (YYYY-MM-DD)
        date: String,

        /// Count from this day instead of today (YYYY-MM-DD)
        #[arg(long)]
        today: Option<String>,
    },
    /// Add an anniversary
    Add {
        name: String,

        /// Date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,
    },
    /// List anniversaries, soonest first
    List {
        #[arg(long)]
        today: Option<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove an anniversary by id
    Remove {
        id: String,

        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Show the nearest anniversary
    Next {
        #[arg(long)]
        today: Option<String>,
    },
    /// Days since the configured start date
    Together {
        #[arg(long)]
        today: Option<String>,
    },
    /// Manage milestones
    Milestone {
        #[command(subcommand)]
        command: MilestoneCommands,
    },
    /// Manage diary entries
    Entry {
        #[command(subcommand)]
        command: EntryCommands,
    },
    /// Manage the wishlist
    Wish {
        #[command(subcommand)]
        command: WishCommands,
    },
    /// Export anniversaries as an .ics calendar
    Export {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Import events from an .ics file as anniversaries
    Import { file: PathBuf },
    /// Show config and data paths
    Config,
}

#[derive(Subcommand)]
enum MilestoneCommands {
    Add {
        title: String,

        /// Date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        #[arg(short, long)]
        note: Option<String>,
    },
    List,
    Remove {
        id: String,

        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum EntryCommands {
    Add {
        /// Title (defaults to "Untitled" when only a note is given)
        #[arg(default_value = "")]
        title: String,

        #[arg(short, long, default_value = "")]
        note: String,

        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// anniversary, travel, daily, surprise, study, work or other
        #[arg(short, long, default_value_t = EntryTag::default())]
        tag: EntryTag,
    },
    /// List entries, newest first
    List {
        #[arg(short, long)]
        tag: Option<EntryTag>,

        /// Only entries whose title or note contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Earliest date to include (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Latest date to include (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },
    Edit {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(short, long)]
        note: Option<String>,

        #[arg(short, long)]
        date: Option<String>,

        #[arg(short, long)]
        tag: Option<EntryTag>,
    },
    Remove {
        id: String,

        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum WishCommands {
    Add {
        title: String,

        /// Category (defaults to "Travel")
        #[arg(short, long)]
        category: Option<String>,
    },
    /// List wishes by category
    List,
    /// Mark a wish done, or open again
    Toggle { id: String },
    Remove {
        id: String,

        #[arg(short, long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Countdown { date, today } => {
            commands::countdown::run(&date, today.as_deref().map(parse_date_flag).transpose()?)
        }
        Commands::Add { name, date } => commands::anniversary::add(load_journal()?, &name, &date),
        Commands::List { today, json } => {
            commands::anniversary::list(&load_journal()?, resolve_today(today.as_deref())?, json)
        }
        Commands::Remove { id, yes } => commands::anniversary::remove(load_journal()?, &id, yes),
        Commands::Next { today } => {
            commands::anniversary::next(&load_journal()?, resolve_today(today.as_deref())?)
        }
        Commands::Together { today } => {
            let config = LoveDirConfig::load()?;
            commands::together::run(&config, resolve_today(today.as_deref())?)
        }
        Commands::Milestone { command } => match command {
            MilestoneCommands::Add { title, date, note } => {
                commands::milestone::add(load_journal()?, &title, &date, note.as_deref())
            }
            MilestoneCommands::List => commands::milestone::list(&load_journal()?),
            MilestoneCommands::Remove { id, yes } => {
                commands::milestone::remove(load_journal()?, &id, yes)
            }
        },
        Commands::Entry { command } => match command {
            EntryCommands::Add {
                title,
                note,
                date,
                tag,
            } => {
                let date = resolve_today(date.as_deref())?;
                commands::entry::add(load_journal()?, &title, &note, date, tag)
            }
            EntryCommands::List {
                tag,
                search,
                from,
                to,
            } => {
                let filter = EntryFilter {
                    tag,
                    text: search,
                    from: from.as_deref().map(parse_date_flag).transpose()?,
                    to: to.as_deref().map(parse_date_flag).transpose()?,
                };
                commands::entry::list(&load_journal()?, &filter)
            }
            EntryCommands::Edit {
                id,
                title,
                note,
                date,
                tag,
            } => {
                let edit = EntryEdit {
                    title,
                    note,
                    date,
                    tag,
                };
                commands::entry::edit(load_journal()?, &id, edit)
            }
            EntryCommands::Remove { id, yes } => commands::entry::remove(load_journal()?, &id, yes),
        },
        Commands::Wish { command } => match command {
            WishCommands::Add { title, category } => {
                commands::wish::add(load_journal()?, &title, category.as_deref())
            }
            WishCommands::List => commands::wish::list(&load_journal()?),
            WishCommands::Toggle { id } => commands::wish::toggle(load_journal()?, &id),
            WishCommands::Remove { id, yes } => commands::wish::remove(load_journal()?, &id, yes),
        },
        Commands::Export { output } => commands::export::run(&load_journal()?, output.as_deref()),
        Commands::Import { file } => commands::import::run(load_journal()?, &file),
        Commands::Config => commands::config::run(),
    }
}

fn load_journal() -> Result<Journal> {
    let config = LoveDirConfig::load()?;
    Ok(Journal::load(&config)?)
}

/// `--today` if given, otherwise the local date.
fn resolve_today(today: Option<&str>) -> Result<NaiveDate> {
    match today {
        Some(s) => parse_date_flag(s),
        None => Ok(Local::now().date_naive()),
    }
}

fn parse_date_flag(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid date format '{}'. Expected YYYY-MM-DD", s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_resolve_today_from_flag() {
        let today = resolve_today(Some("2025-06-01")).unwrap();
        assert_eq!(today, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
    }

    #[test]
    fn test_resolve_today_rejects_bad_flag() {
        assert!(resolve_today(Some("June 1st")).is_err());
    }

    #[test]
    fn test_parses_milestone_add() {
        let cli = Cli::try_parse_from([
            "lovedir", "milestone", "add", "First trip", "--date", "2023-10-16", "--note", "sea",
        ])
        .unwrap();

        match cli.command {
            Commands::Milestone {
                command: MilestoneCommands::Add { title, date, note },
            } => {
                assert_eq!(title, "First trip");
                assert_eq!(date, "2023-10-16");
                assert_eq!(note.as_deref(), Some("sea"));
            }
            _ => panic!("expected milestone add"),
        }
    }

    #[test]
    fn test_parses_entry_add_with_defaults() {
        let cli = Cli::try_parse_from(["lovedir", "entry", "add", "Picnic"]).unwrap();

        match cli.command {
            Commands::Entry {
                command:
                    EntryCommands::Add {
                        title,
                        note,
                        date,
                        tag,
                    },
            } => {
                assert_eq!(title, "Picnic");
                assert_eq!(note, "");
                assert!(date.is_none());
                assert_eq!(tag, EntryTag::Daily);
            }
            _ => panic!("expected entry add"),
        }
    }

    #[test]
    fn test_parses_entry_list_filters() {
        let cli = Cli::try_parse_from([
            "lovedir", "entry", "list", "--tag", "Travel", "--search", "sea", "--from",
            "2024-01-01",
        ])
        .unwrap();

        match cli.command {
            Commands::Entry {
                command:
                    EntryCommands::List {
                        tag,
                        search,
                        from,
                        to,
                    },
            } => {
                assert_eq!(tag, Some(EntryTag::Travel));
                assert_eq!(search.as_deref(), Some("sea"));
                assert_eq!(from.as_deref(), Some("2024-01-01"));
                assert!(to.is_none());
            }
            _ => panic!("expected entry list"),
        }
    }

    #[test]
    fn test_rejects_unknown_entry_tag() {
        assert!(Cli::try_parse_from(["lovedir", "entry", "add", "x", "--tag", "party"]).is_err());
    }

    #[test]
    fn test_parses_wish_toggle() {
        let cli = Cli::try_parse_from(["lovedir", "wish", "toggle", "abc"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Wish {
                command: WishCommands::Toggle { ref id }
            } if id == "abc"
        ));
    }
}
