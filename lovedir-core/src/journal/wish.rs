//! The wishlist: things to do together, grouped by category.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Journal, require_name};
use crate::error::LoveDirResult;

/// Category given to a wish added without one.
pub const DEFAULT_WISH_CATEGORY: &str = "Travel";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wish {
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub done: bool,
}

impl Journal {
    pub fn wishes(&self) -> &[Wish] {
        &self.data.wishes
    }

    /// Add a wish to the front of the list.
    pub fn add_wish(&mut self, title: &str, category: Option<&str>) -> LoveDirResult<&Wish> {
        let title = require_name(title)?;
        let category = category
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_WISH_CATEGORY)
            .to_string();

        self.data.wishes.insert(
            0,
            Wish {
                id: Uuid::new_v4().to_string(),
                title,
                category,
                done: false,
            },
        );

        Ok(&self.data.wishes[0])
    }

    /// Flip a wish between open and done. Returns the new state, or `None` when no
    /// wish has this id.
    pub fn toggle_wish(&mut self, id: &str) -> Option<bool> {
        let wish = self.data.wishes.iter_mut().find(|w| w.id == id)?;
        wish.done = !wish.done;
        Some(wish.done)
    }

    /// Returns false when no wish has this id.
    pub fn remove_wish(&mut self, id: &str) -> bool {
        let before = self.data.wishes.len();
        self.data.wishes.retain(|w| w.id != id);
        self.data.wishes.len() != before
    }

    /// Wishes grouped by category. Categories appear in the order their first wish
    /// does, and wishes keep list order within a category.
    pub fn wishes_by_category(&self) -> Vec<(&str, Vec<&Wish>)> {
        let mut groups: Vec<(&str, Vec<&Wish>)> = Vec::new();

        for wish in &self.data.wishes {
            match groups.iter().position(|(c, _)| *c == wish.category) {
                Some(index) => groups[index].1.push(wish),
                None => groups.push((wish.category.as_str(), vec![wish])),
            }
        }

        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoveDirError;

    fn temp_journal() -> (tempfile::TempDir, Journal) {
        let dir = tempfile::tempdir().unwrap();
        let journal = Journal::open(dir.path().join("journal.json")).unwrap();
        (dir, journal)
    }

    #[test]
    fn test_add_wish_goes_first_with_default_category() {
        let (_dir, mut journal) = temp_journal();
        journal.add_wish("Learn to dive", Some("Study")).unwrap();
        let added = journal.add_wish(" See the sea ", Some("  ")).unwrap();

        assert_eq!(added.title, "See the sea");
        assert_eq!(added.category, DEFAULT_WISH_CATEGORY);
        assert!(!added.done);
        assert_eq!(journal.wishes()[0].title, "See the sea");
    }

    #[test]
    fn test_add_wish_rejects_empty_title() {
        let (_dir, mut journal) = temp_journal();
        let err = journal.add_wish("   ", None).unwrap_err();
        assert!(matches!(err, LoveDirError::InvalidInput(_)));
        assert!(journal.wishes().is_empty());
    }

    #[test]
    fn test_toggle_wish() {
        let (_dir, mut journal) = temp_journal();
        let id = journal.add_wish("See the sea", None).unwrap().id.clone();

        assert_eq!(journal.toggle_wish(&id), Some(true));
        assert_eq!(journal.toggle_wish(&id), Some(false));
        assert_eq!(journal.toggle_wish("missing"), None);
    }

    #[test]
    fn test_remove_wish() {
        let (_dir, mut journal) = temp_journal();
        let id = journal.add_wish("See the sea", None).unwrap().id.clone();

        assert!(!journal.remove_wish("missing"));
        assert!(journal.remove_wish(&id));
        assert!(journal.wishes().is_empty());
    }

    #[test]
    fn test_wishes_grouped_in_first_seen_order() {
        let (_dir, mut journal) = temp_journal();
        journal.add_wish("Hot pot", Some("Food")).unwrap();
        journal.add_wish("Kyoto", None).unwrap();
        journal.add_wish("Ramen", Some("Food")).unwrap();

        let groups: Vec<_> = journal
            .wishes_by_category()
            .into_iter()
            .map(|(c, list)| (c, list.iter().map(|w| w.title.as_str()).collect::<Vec<_>>()))
            .collect();
        assert_eq!(
            groups,
            vec![("Food", vec!["Ramen", "Hot pot"]), ("Travel", vec!["Kyoto"])]
        );
    }
}
