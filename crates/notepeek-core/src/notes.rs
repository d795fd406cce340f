use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{Error, Result};

/// A single note in the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: u32,
    pub title: String,
    pub description: String,
}

impl Note {
    pub fn new(id: u32, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct NotesFile {
    #[serde(default)]
    notes: Vec<Note>,
}

/// The static source list the screen filters
#[derive(Debug, Clone, Default)]
pub struct NoteList {
    source: Vec<Note>,
}

impl NoteList {
    pub fn new(source: Vec<Note>) -> Self {
        Self { source }
    }

    /// Built-in notes shown when no notes file is configured
    pub fn sample() -> Self {
        Self::new(vec![
            Note::new(1, "First Item", "This is the first item"),
            Note::new(2, "Groceries", "Oat milk, lemons, rye bread"),
            Note::new(3, "Meeting Notes", "Move the release review to Thursday"),
            Note::new(4, "Reading List", "Finish the chapter on ownership"),
            Note::new(5, "Ideas", "Pull down on the list to search"),
        ])
    }

    /// Read notes from a TOML file of `[[notes]]` tables
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: NotesFile = toml::from_str(&content).map_err(|e| Error::NotesParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        info!(count = file.notes.len(), path = %path.display(), "Loaded notes");
        Ok(Self::new(file.notes))
    }

    pub fn all(&self) -> &[Note] {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Notes whose title contains `query` (case-sensitive), in source order
    pub fn filter(&self, query: &str) -> Vec<Note> {
        self.source
            .iter()
            .filter(|note| note.title.contains(query))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single() -> NoteList {
        NoteList::new(vec![Note::new(1, "First Item", "This is the first item")])
    }

    #[test]
    fn test_filter_matches_title_substring() {
        let notes = single();
        let hits = notes.filter("First");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
    }

    #[test]
    fn test_filter_no_match_is_empty() {
        assert!(single().filter("xyz").is_empty());
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        assert!(single().filter("first").is_empty());
        assert_eq!(single().filter("Item").len(), 1);
    }

    #[test]
    fn test_empty_query_restores_source_order() {
        let notes = NoteList::sample();
        assert_eq!(notes.filter(""), notes.all().to_vec());
    }

    #[test]
    fn test_filter_keeps_source_order() {
        let notes = NoteList::new(vec![
            Note::new(7, "b note", ""),
            Note::new(3, "a note", ""),
            Note::new(9, "other", ""),
        ]);
        let ids: Vec<u32> = notes.filter("note").iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![7, 3]);
    }

    #[test]
    fn test_load_from_toml() {
        let path = std::env::temp_dir().join(format!("notepeek-notes-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            r#"
            [[notes]]
            id = 1
            title = "Alpha"
            description = "first"

            [[notes]]
            id = 2
            title = "Beta"
            description = "second"
            "#,
        )
        .unwrap();

        let notes = NoteList::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(notes.len(), 2);
        assert_eq!(notes.all()[1].title, "Beta");
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let path = std::env::temp_dir().join(format!("notepeek-bad-notes-{}.toml", std::process::id()));
        std::fs::write(&path, "[[notes]]\nid = \"not a number\"\n").unwrap();

        let err = NoteList::load(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(matches!(err, Error::NotesParse { .. }));
    }
}
