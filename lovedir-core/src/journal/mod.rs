//! The journal: anniversaries, milestones, diary entries and wishes stored as one
//! JSON file.

mod entry;
mod wish;

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::anniversary_date::AnniversaryDate;
use crate::config::LoveDirConfig;
use crate::error::{LoveDirError, LoveDirResult};
use crate::ics::CalendarEvent;
use crate::recurrence;

pub use entry::{Entry, EntryEdit, EntryFilter, EntryTag};
pub use wish::{DEFAULT_WISH_CATEGORY, Wish};

/// A yearly date worth counting down to (birthdays, the day you met, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anniversary {
    pub id: String,
    pub name: String,
    /// YYYY-MM-DD
    pub date: String,
}

/// A one-off moment on the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: String,
    /// YYYY-MM-DD
    pub date: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct JournalData {
    #[serde(default)]
    anniversaries: Vec<Anniversary>,
    #[serde(default)]
    milestones: Vec<Milestone>,
    #[serde(default)]
    entries: Vec<Entry>,
    #[serde(default)]
    wishes: Vec<Wish>,
}

/// What [`Journal::import_events`] did with each event.
#[derive(Debug, Default)]
pub struct ImportReport {
    pub added: Vec<Anniversary>,
    /// Events already present with the same name and date.
    pub duplicates: usize,
    pub rejected: Vec<(CalendarEvent, LoveDirError)>,
}

pub struct Journal {
    path: PathBuf,
    data: JournalData,
}

impl Journal {
    /// Load the journal from the configured data directory.
    pub fn load(config: &LoveDirConfig) -> LoveDirResult<Self> {
        Self::open(config.journal_path())
    }

    /// Open the journal at `path`. A missing file is an empty journal.
    pub fn open(path: impl Into<PathBuf>) -> LoveDirResult<Self> {
        let path = path.into();

        let data = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            serde_json::from_str(&content).map_err(|e| {
                LoveDirError::Storage(format!("Could not read {}: {e}", path.display()))
            })?
        } else {
            JournalData::default()
        };

        Ok(Journal { path, data })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self) -> LoveDirResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&self.data)?;
        std::fs::write(&self.path, content)?;

        Ok(())
    }

    // =========================================================================
    // Anniversaries
    // =========================================================================

    pub fn anniversaries(&self) -> &[Anniversary] {
        &self.data.anniversaries
    }

    /// Add an anniversary to the front of the list.
    pub fn add_anniversary(&mut self, name: &str, date: &str) -> LoveDirResult<&Anniversary> {
        let name = require_name(name)?;
        let date = require_date(date)?;

        self.data.anniversaries.insert(
            0,
            Anniversary {
                id: Uuid::new_v4().to_string(),
                name,
                date,
            },
        );

        Ok(&self.data.anniversaries[0])
    }

    /// Returns false when no anniversary has this id.
    pub fn remove_anniversary(&mut self, id: &str) -> bool {
        let before = self.data.anniversaries.len();
        self.data.anniversaries.retain(|a| a.id != id);
        self.data.anniversaries.len() != before
    }

    /// Anniversaries with their countdowns, soonest first.
    pub fn upcoming(&self, today: NaiveDate) -> Vec<(&Anniversary, Option<i64>)> {
        let mut items: Vec<&Anniversary> = self.data.anniversaries.iter().collect();
        recurrence::sort_by_next_occurrence(&mut items, today, |a| a.date.as_str());

        items
            .into_iter()
            .map(|a| (a, recurrence::days_until_next_occurrence(&a.date, today)))
            .collect()
    }

    pub fn nearest_anniversary(&self, today: NaiveDate) -> Option<(&Anniversary, i64)> {
        recurrence::nearest(&self.data.anniversaries, today, |a| a.date.as_str())
    }

    /// Anniversaries in list order, ready for ICS export.
    pub fn calendar_events(&self) -> Vec<CalendarEvent> {
        self.data
            .anniversaries
            .iter()
            .map(|a| CalendarEvent::new(a.name.clone(), a.date.clone()))
            .collect()
    }

    /// Add each event as an anniversary unless one with the same name and date
    /// already exists. Events with an empty title or unparseable date are rejected
    /// without stopping the import.
    pub fn import_events(&mut self, events: &[CalendarEvent]) -> ImportReport {
        let mut report = ImportReport::default();

        for event in events {
            let title = event.title.trim();
            let date = AnniversaryDate::parse(&event.date).map(|d| d.to_string());
            let exists = self
                .data
                .anniversaries
                .iter()
                .any(|a| a.name == title && Some(&a.date) == date.as_ref());
            if exists {
                report.duplicates += 1;
                continue;
            }

            match self.add_anniversary(title, &event.date) {
                Ok(added) => report.added.push(added.clone()),
                Err(e) => report.rejected.push((event.clone(), e)),
            }
        }

        report
    }

    // =========================================================================
    // Milestones
    // =========================================================================

    /// Milestones in date order.
    pub fn milestones(&self) -> &[Milestone] {
        &self.data.milestones
    }

    pub fn add_milestone(
        &mut self,
        title: &str,
        date: &str,
        note: Option<&str>,
    ) -> LoveDirResult<&Milestone> {
        let title = require_name(title)?;
        let date = require_date(date)?;
        let note = note.map(str::trim).filter(|n| !n.is_empty()).map(String::from);

        let milestone = Milestone {
            id: Uuid::new_v4().to_string(),
            date,
            title,
            note,
        };
        let id = milestone.id.clone();

        self.data.milestones.push(milestone);
        self.data.milestones.sort_by(|a, b| a.date.cmp(&b.date));

        let index = self
            .data
            .milestones
            .iter()
            .position(|m| m.id == id)
            .unwrap_or_default();
        Ok(&self.data.milestones[index])
    }

    /// Returns false when no milestone has this id.
    pub fn remove_milestone(&mut self, id: &str) -> bool {
        let before = self.data.milestones.len();
        self.data.milestones.retain(|m| m.id != id);
        self.data.milestones.len() != before
    }
}

fn require_name(name: &str) -> LoveDirResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(LoveDirError::InvalidInput("Name must not be empty".into()));
    }
    Ok(name.to_string())
}

/// Normalize a date to YYYY-MM-DD, rejecting anything unparseable.
fn require_date(date: &str) -> LoveDirResult<String> {
    AnniversaryDate::parse(date)
        .map(|d| d.to_string())
        .ok_or_else(|| {
            LoveDirError::InvalidInput(format!("Invalid date '{date}'. Expected YYYY-MM-DD"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn temp_journal() -> (tempfile::TempDir, Journal) {
        let dir = tempfile::tempdir().unwrap();
        let journal = Journal::open(dir.path().join("journal.json")).unwrap();
        (dir, journal)
    }

    #[test]
    fn test_missing_file_is_empty_journal() {
        let (_dir, journal) = temp_journal();
        assert!(journal.anniversaries().is_empty());
        assert!(journal.milestones().is_empty());
    }

    #[test]
    fn test_add_anniversary_goes_first_and_normalizes_date() {
        let (_dir, mut journal) = temp_journal();
        journal.add_anniversary("Together", "2023-07-08").unwrap();
        let added = journal.add_anniversary("  Birthday ", "2001/03/06").unwrap();

        assert_eq!(added.name, "Birthday");
        assert_eq!(added.date, "2001-03-06");
        assert_eq!(journal.anniversaries()[0].name, "Birthday");
        assert_eq!(journal.anniversaries()[1].name, "Together");
    }

    #[test]
    fn test_add_anniversary_rejects_bad_input() {
        let (_dir, mut journal) = temp_journal();

        let err = journal.add_anniversary("   ", "2023-07-08").unwrap_err();
        assert!(matches!(err, LoveDirError::InvalidInput(_)));

        let err = journal.add_anniversary("Oops", "not-a-date").unwrap_err();
        assert!(matches!(err, LoveDirError::InvalidInput(_)));

        assert!(journal.anniversaries().is_empty());
    }

    #[test]
    fn test_remove_anniversary() {
        let (_dir, mut journal) = temp_journal();
        let id = journal.add_anniversary("Together", "2023-07-08").unwrap().id.clone();

        assert!(!journal.remove_anniversary("missing"));
        assert!(journal.remove_anniversary(&id));
        assert!(journal.anniversaries().is_empty());
    }

    #[test]
    fn test_save_and_reopen() {
        let (dir, mut journal) = temp_journal();
        journal.add_anniversary("Together", "2023-07-08").unwrap();
        journal
            .add_milestone("First trip", "2023-10-16", Some("by the sea"))
            .unwrap();
        journal
            .add_entry("Picnic", "sunny", "2024-05-01", EntryTag::Daily)
            .unwrap();
        journal.add_wish("See the sea", None).unwrap();
        journal.save().unwrap();

        let reopened = Journal::open(dir.path().join("journal.json")).unwrap();
        assert_eq!(reopened.path(), journal.path());
        assert_eq!(reopened.anniversaries(), journal.anniversaries());
        assert_eq!(reopened.milestones(), journal.milestones());
        assert_eq!(reopened.wishes(), journal.wishes());
        assert_eq!(
            reopened.entries(&EntryFilter::default()),
            journal.entries(&EntryFilter::default())
        );
    }

    #[test]
    fn test_corrupt_file_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.json");
        std::fs::write(&path, "{ nope").unwrap();

        let err = Journal::open(&path).err().unwrap();
        assert!(matches!(err, LoveDirError::Storage(_)));
    }

    #[test]
    fn test_upcoming_and_nearest() {
        let (_dir, mut journal) = temp_journal();
        journal.add_anniversary("Together", "2023-07-08").unwrap();
        journal.add_anniversary("Her birthday", "2001-03-06").unwrap();
        journal.add_anniversary("His birthday", "2001-04-03").unwrap();

        let today = ymd(2025, 3, 10);
        let names: Vec<_> = journal
            .upcoming(today)
            .iter()
            .map(|(a, _)| a.name.as_str())
            .collect();
        assert_eq!(names, vec!["His birthday", "Together", "Her birthday"]);

        let (nearest, days) = journal.nearest_anniversary(today).unwrap();
        assert_eq!(nearest.name, "His birthday");
        assert_eq!(days, 24);
    }

    #[test]
    fn test_milestones_sorted_by_date() {
        let (_dir, mut journal) = temp_journal();
        journal.add_milestone("Together", "2023-07-08", None).unwrap();
        journal.add_milestone("Confession", "2023-06-25", Some("  ")).unwrap();
        journal.add_milestone("100 days", "2023-10-16", None).unwrap();

        let titles: Vec<_> = journal.milestones().iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Confession", "Together", "100 days"]);
        assert!(journal.milestones()[0].note.is_none());
    }

    #[test]
    fn test_import_skips_duplicates_and_bad_events() {
        let (_dir, mut journal) = temp_journal();
        journal.add_anniversary("Together", "2023-07-08").unwrap();

        let report = journal.import_events(&[
            CalendarEvent::new("Together", "2023-07-08"),
            CalendarEvent::new("Birthday", "2001-03-06"),
            CalendarEvent::new("Birthday", "2001-03-06"),
            CalendarEvent::new("Broken", "someday"),
            CalendarEvent::new("  ", "2001-03-06"),
        ]);

        assert_eq!(report.added.len(), 1);
        assert_eq!(report.added[0].name, "Birthday");
        assert_eq!(report.duplicates, 2);
        assert_eq!(report.rejected.len(), 2);
        assert_eq!(report.rejected[0].0.title, "Broken");
        assert!(matches!(report.rejected[1].1, LoveDirError::InvalidInput(_)));
        assert_eq!(journal.anniversaries().len(), 2);
    }

    #[test]
    fn test_import_of_export_adds_nothing() {
        let (_dir, mut journal) = temp_journal();
        journal.add_anniversary("Together", "2023-07-08").unwrap();
        journal.add_anniversary("a,b;c", "2001-03-06").unwrap();

        let ics = crate::build_calendar_document(&journal.calendar_events());
        let report = journal.import_events(&crate::ics::parse_calendar_document(&ics));

        assert!(report.added.is_empty());
        assert_eq!(report.duplicates, 2);
    }

    #[test]
    fn test_calendar_events_keep_list_order() {
        let (_dir, mut journal) = temp_journal();
        journal.add_anniversary("Together", "2023-07-08").unwrap();
        journal.add_anniversary("Birthday", "2001-03-06").unwrap();

        assert_eq!(
            journal.calendar_events(),
            vec![
                CalendarEvent::new("Birthday", "2001-03-06"),
                CalendarEvent::new("Together", "2023-07-08"),
            ]
        );
    }
}
