use super::{char_len, parse_id, FormDraft};
use crate::api::{CreateFolderRequest, CreateTagRequest, NoteRequest};
use crate::models::{Folder, Note, Tag};

pub(crate) const DEFAULT_FOLDER_COLOR: &str = "#4A90E2";
pub(crate) const FOLDER_NAME_MAX: usize = 25;
pub(crate) const NOTE_TITLE_MAX: usize = 100;
pub(crate) const TAG_NAME_MAX: usize = 50;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct FolderDraft {
    pub name: String,
    pub color: String,
}

impl Default for FolderDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            color: DEFAULT_FOLDER_COLOR.to_string(),
        }
    }
}

impl FormDraft for FolderDraft {
    fn set_field(&mut self, name: &str, value: String) {
        match name {
            "name" => self.name = value,
            "color" => self.color = value,
            _ => {}
        }
    }

    fn validate(&self) -> Result<(), String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Folder name is required".to_string());
        }
        if char_len(name) > FOLDER_NAME_MAX {
            return Err(format!("Folder name must be at most {FOLDER_NAME_MAX} characters"));
        }
        Ok(())
    }
}

impl FolderDraft {
    pub fn from_folder(folder: &Folder) -> Self {
        Self {
            name: folder.name.clone(),
            color: folder.color.clone(),
        }
    }

    pub fn to_request(&self) -> CreateFolderRequest {
        CreateFolderRequest {
            name: self.name.trim().to_string(),
            color: self.color.clone(),
        }
    }
}

/// Draft shared by CreateNote and EditNote. `folder_id` holds the raw
/// `<select>` value; empty means "no folder chosen".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct NoteDraft {
    pub title: String,
    pub content: String,
    pub folder_id: String,
}

impl NoteDraft {
    pub fn from_note(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            content: note.content_str().to_string(),
            folder_id: note.folder_id.to_string(),
        }
    }

    /// Only valid after `validate` succeeded.
    pub fn to_request(&self) -> Option<NoteRequest> {
        Some(NoteRequest {
            title: self.title.trim().to_string(),
            content: self.content.clone(),
            folder_id: parse_id(&self.folder_id)?,
        })
    }
}

impl FormDraft for NoteDraft {
    fn set_field(&mut self, name: &str, value: String) {
        match name {
            "title" => self.title = value,
            "content" => self.content = value,
            "folder_id" => self.folder_id = value,
            _ => {}
        }
    }

    fn validate(&self) -> Result<(), String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Title is required".to_string());
        }
        if char_len(title) > NOTE_TITLE_MAX {
            return Err(format!("Title must be at most {NOTE_TITLE_MAX} characters"));
        }
        if parse_id(&self.folder_id).is_none() {
            return Err("Please select a folder".to_string());
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct TagDraft {
    pub name: String,
}

impl FormDraft for TagDraft {
    fn set_field(&mut self, name: &str, value: String) {
        if name == "name" {
            self.name = value;
        }
    }

    fn validate(&self) -> Result<(), String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Tag name is required".to_string());
        }
        if char_len(name) > TAG_NAME_MAX {
            return Err(format!("Tag name must be at most {TAG_NAME_MAX} characters"));
        }
        Ok(())
    }
}

impl TagDraft {
    /// Tag names are unique; reject a name already in `existing`.
    pub fn validate_against(&self, existing: &[Tag]) -> Result<(), String> {
        self.validate()?;
        let name = self.name.trim();
        if existing.iter().any(|t| t.name == name) {
            return Err("Tag already exists".to_string());
        }
        Ok(())
    }

    pub fn to_request(&self) -> CreateTagRequest {
        CreateTagRequest {
            name: self.name.trim().to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct SearchDraft {
    pub query: String,
    pub folder_id: String,
    pub tag_id: String,
}

impl FormDraft for SearchDraft {
    fn set_field(&mut self, name: &str, value: String) {
        match name {
            "query" => self.query = value,
            "folder_id" => self.folder_id = value,
            "tag_id" => self.tag_id = value,
            _ => {}
        }
    }

    fn validate(&self) -> Result<(), String> {
        if self.can_search() {
            Ok(())
        } else {
            Err("Enter a search term".to_string())
        }
    }
}

impl SearchDraft {
    pub fn can_search(&self) -> bool {
        !self.query.trim().is_empty()
    }

    pub fn can_clear(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn folder(&self) -> Option<i64> {
        parse_id(&self.folder_id)
    }

    pub fn tag(&self) -> Option<i64> {
        parse_id(&self.tag_id)
    }
}

/// Tag list after the server created `created`: appended at the end.
pub(crate) fn tags_after_create(tags: &[Tag], created: Tag) -> Vec<Tag> {
    let mut next = tags.to_vec();
    next.push(created);
    next
}

pub(crate) fn tags_after_delete(tags: &[Tag], deleted_id: i64) -> Vec<Tag> {
    tags.iter().filter(|t| t.id != deleted_id).cloned().collect()
}

/// Tags that can still be attached to `note`: all tags minus those whose name
/// is already on the note. Matching is by name because notes only carry names.
pub(crate) fn available_tags(all: &[Tag], note: &Note) -> Vec<Tag> {
    all.iter().filter(|t| !note.has_tag(&t.name)).cloned().collect()
}

pub(crate) fn tag_id_for_name(all: &[Tag], name: &str) -> Option<i64> {
    all.iter().find(|t| t.name == name).map(|t| t.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(id: i64, name: &str) -> Tag {
        Tag {
            id,
            name: name.to_string(),
        }
    }

    fn note_with_tags(tags: &[&str]) -> Note {
        Note {
            id: 3,
            title: "x".to_string(),
            content: Some("y".to_string()),
            folder_id: 2,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            updated_at: None,
        }
    }

    #[test]
    fn test_folder_draft_seeded_from_folder() {
        let folder = Folder {
            id: 4,
            name: "Work".to_string(),
            color: "#112233".to_string(),
        };
        let mut d = FolderDraft::from_folder(&folder);
        assert_eq!(d.validate(), Ok(()));

        d.set_field("name", "Office".to_string());
        let req = d.to_request();
        assert_eq!(req.name, "Office");
        assert_eq!(req.color, "#112233");
    }

    #[test]
    fn test_folder_draft_requires_name() {
        let d = FolderDraft::default();
        assert_eq!(d.color, DEFAULT_FOLDER_COLOR);
        assert_eq!(d.validate(), Err("Folder name is required".to_string()));

        let mut d = FolderDraft::default();
        d.set_field("name", "a".repeat(26));
        assert!(d.validate().is_err());

        d.set_field("name", "  Work ".to_string());
        d.set_field("color", "#000000".to_string());
        assert_eq!(d.validate(), Ok(()));
        let req = d.to_request();
        assert_eq!(req.name, "Work");
        assert_eq!(req.color, "#000000");
    }

    #[test]
    fn test_note_draft_requires_title_and_folder() {
        let mut d = NoteDraft::default();
        assert_eq!(d.validate(), Err("Title is required".to_string()));

        d.set_field("title", "Groceries".to_string());
        assert_eq!(d.validate(), Err("Please select a folder".to_string()));

        d.set_field("folder_id", "2".to_string());
        assert_eq!(d.validate(), Ok(()));
        let req = d.to_request().expect("valid draft builds a request");
        assert_eq!(req.folder_id, 2);
        assert_eq!(req.content, "");
    }

    #[test]
    fn test_note_draft_from_note() {
        let d = NoteDraft::from_note(&note_with_tags(&[]));
        assert_eq!(d.title, "x");
        assert_eq!(d.content, "y");
        assert_eq!(d.folder_id, "2");
    }

    #[test]
    fn test_tag_draft_rejects_duplicates() {
        let existing = vec![tag(7, "work")];
        let mut d = TagDraft::default();
        assert_eq!(d.validate_against(&existing), Err("Tag name is required".to_string()));

        d.set_field("name", " work ".to_string());
        assert_eq!(d.validate_against(&existing), Err("Tag already exists".to_string()));

        d.set_field("name", "home".to_string());
        assert_eq!(d.validate_against(&existing), Ok(()));
    }

    #[test]
    fn test_search_draft_controls() {
        let mut d = SearchDraft::default();
        assert!(!d.can_search());
        assert!(!d.can_clear());

        d.set_field("query", "  ".to_string());
        assert!(!d.can_search());
        assert!(d.can_clear());

        d.set_field("query", "milk".to_string());
        d.set_field("folder_id", "4".to_string());
        assert!(d.can_search());
        assert_eq!(d.folder(), Some(4));
        assert_eq!(d.tag(), None);
    }

    #[test]
    fn test_available_tags_is_set_difference_by_name() {
        let all = vec![tag(1, "work"), tag(2, "home"), tag(3, "urgent")];
        let note = note_with_tags(&["home"]);
        let avail = available_tags(&all, &note);
        assert_eq!(avail, vec![tag(1, "work"), tag(3, "urgent")]);

        // After attaching "work" the refreshed note no longer offers it.
        let refreshed = note_with_tags(&["home", "work"]);
        assert_eq!(available_tags(&all, &refreshed), vec![tag(3, "urgent")]);
    }

    #[test]
    fn test_tag_id_for_name() {
        let all = vec![tag(1, "work"), tag(2, "home")];
        assert_eq!(tag_id_for_name(&all, "home"), Some(2));
        assert_eq!(tag_id_for_name(&all, "missing"), None);
    }

    #[test]
    fn test_created_tag_lands_at_end() {
        let existing = vec![tag(1, "home"), tag(2, "ideas")];
        let next = tags_after_create(&existing, tag(7, "work"));
        assert_eq!(next.len(), 3);
        assert_eq!(next[..2], existing[..]);
        assert_eq!(next.last(), Some(&tag(7, "work")));
    }

    #[test]
    fn test_deleted_tag_is_removed() {
        let existing = vec![tag(1, "home"), tag(7, "work"), tag(2, "ideas")];
        let next = tags_after_delete(&existing, 7);
        assert_eq!(next, vec![tag(1, "home"), tag(2, "ideas")]);

        // Unknown id leaves the list as it was.
        assert_eq!(tags_after_delete(&next, 99), next);
    }
}
