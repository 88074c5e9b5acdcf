//! Diary entries: dated notes with an optional tag.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Journal, require_date};
use crate::anniversary_date::AnniversaryDate;
use crate::error::{LoveDirError, LoveDirResult};

/// Title given to an entry that only has a note.
pub const UNTITLED_ENTRY: &str = "Untitled";

/// The fixed set of tags an entry can carry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryTag {
    Anniversary,
    Travel,
    #[default]
    Daily,
    Surprise,
    Study,
    Work,
    Other,
}

impl EntryTag {
    pub const ALL: [EntryTag; 7] = [
        EntryTag::Anniversary,
        EntryTag::Travel,
        EntryTag::Daily,
        EntryTag::Surprise,
        EntryTag::Study,
        EntryTag::Work,
        EntryTag::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EntryTag::Anniversary => "anniversary",
            EntryTag::Travel => "travel",
            EntryTag::Daily => "daily",
            EntryTag::Surprise => "surprise",
            EntryTag::Study => "study",
            EntryTag::Work => "work",
            EntryTag::Other => "other",
        }
    }
}

impl fmt::Display for EntryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryTag {
    type Err = LoveDirError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let known: Vec<_> = Self::ALL.iter().map(|t| t.as_str()).collect();
                LoveDirError::InvalidInput(format!(
                    "Unknown tag '{s}'. Expected one of: {}",
                    known.join(", ")
                ))
            })
    }
}

/// A dated diary entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    /// YYYY-MM-DD
    pub date: String,
    pub title: String,
    #[serde(default)]
    pub note: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<EntryTag>,
}

/// Which entries to list. The default matches everything.
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    pub tag: Option<EntryTag>,
    /// Case-insensitive substring of title or note.
    pub text: Option<String>,
    /// Inclusive lower date bound.
    pub from: Option<NaiveDate>,
    /// Inclusive upper date bound.
    pub to: Option<NaiveDate>,
}

impl EntryFilter {
    pub fn matches(&self, entry: &Entry) -> bool {
        if self.tag.is_some_and(|tag| entry.tag != Some(tag)) {
            return false;
        }

        if let Some(text) = self.text.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            let haystack = format!("{}{}", entry.title, entry.note).to_lowercase();
            if !haystack.contains(&text.to_lowercase()) {
                return false;
            }
        }

        if self.from.is_none() && self.to.is_none() {
            return true;
        }
        let Some(date) = AnniversaryDate::parse(&entry.date).map(|d| d.date()) else {
            return false;
        };
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }
}

/// Fields to change on an existing entry. `None` leaves a field as it is.
#[derive(Debug, Clone, Default)]
pub struct EntryEdit {
    pub title: Option<String>,
    pub note: Option<String>,
    pub date: Option<String>,
    pub tag: Option<EntryTag>,
}

impl Journal {
    /// Entries matching `filter`, newest first.
    pub fn entries(&self, filter: &EntryFilter) -> Vec<&Entry> {
        self.data.entries.iter().filter(|e| filter.matches(e)).collect()
    }

    /// Add an entry. It needs a title or a note; a missing title becomes
    /// [`UNTITLED_ENTRY`].
    pub fn add_entry(
        &mut self,
        title: &str,
        note: &str,
        date: &str,
        tag: EntryTag,
    ) -> LoveDirResult<&Entry> {
        let title = title.trim();
        let note = note.trim();
        if title.is_empty() && note.is_empty() {
            return Err(LoveDirError::InvalidInput(
                "An entry needs a title or a note".into(),
            ));
        }

        let entry = Entry {
            id: Uuid::new_v4().to_string(),
            date: require_date(date)?,
            title: entry_title(title),
            note: note.to_string(),
            tag: Some(tag),
        };
        let id = entry.id.clone();

        self.data.entries.insert(0, entry);
        self.sort_entries();

        let index = self.entry_index(&id).unwrap_or_default();
        Ok(&self.data.entries[index])
    }

    /// Apply `edit` to the entry with this id. `Ok(None)` when there is none.
    pub fn edit_entry(&mut self, id: &str, edit: EntryEdit) -> LoveDirResult<Option<&Entry>> {
        let Some(index) = self.entry_index(id) else {
            return Ok(None);
        };
        let date = edit.date.as_deref().map(require_date).transpose()?;

        let entry = &mut self.data.entries[index];
        if let Some(title) = edit.title {
            entry.title = entry_title(title.trim());
        }
        if let Some(note) = edit.note {
            entry.note = note.trim().to_string();
        }
        if let Some(date) = date {
            entry.date = date;
        }
        if let Some(tag) = edit.tag {
            entry.tag = Some(tag);
        }

        self.sort_entries();
        let index = self.entry_index(id).unwrap_or_default();
        Ok(Some(&self.data.entries[index]))
    }

    /// Returns false when no entry has this id.
    pub fn remove_entry(&mut self, id: &str) -> bool {
        let before = self.data.entries.len();
        self.data.entries.retain(|e| e.id != id);
        self.data.entries.len() != before
    }

    fn entry_index(&self, id: &str) -> Option<usize> {
        self.data.entries.iter().position(|e| e.id == id)
    }

    // Stable, so entries sharing a date keep the newest-added first
    fn sort_entries(&mut self) {
        self.data.entries.sort_by(|a, b| b.date.cmp(&a.date));
    }
}

fn entry_title(title: &str) -> String {
    if title.is_empty() {
        UNTITLED_ENTRY.to_string()
    } else {
        title.to_string()
    }
}
