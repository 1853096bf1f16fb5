use serde::{Deserialize, Serialize};

/// Session user as returned by `/login`, `/signup` and `/check_session`.
///
/// The server only guarantees `id` and `username`; `email` is optional.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Folder {
    pub id: i64,
    pub name: String,
    /// Hex color, e.g. `#4A90E2`.
    pub color: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Note {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    pub folder_id: i64,

    /// Tag names, in server order. The client never sees tag ids here.
    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Note {
    pub fn content_str(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }

    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t == name)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Tag {
    pub id: i64,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Pagination {
    pub limit: i64,
    pub offset: i64,
    pub total: i64,
    pub has_more: bool,
    #[serde(default)]
    pub next_offset: Option<i64>,
}

/// `GET /api/notes` and `GET /api/notes/search` envelope.
///
/// Search responses carry no pagination block.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct NotesPage {
    pub notes: Vec<Note>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub(crate) struct FolderList {
    pub folders: Vec<Folder>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub(crate) struct TagList {
    pub tags: Vec<Tag>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notes_page_contract_deserialize() {
        let json = r#"{
            "notes": [
                {"id": 3, "title": "x", "content": null, "folder_id": 2,
                 "tags": ["work"], "updated_at": "2025-01-02T10:00:00", "created_at": "2025-01-01T10:00:00"}
            ],
            "pagination": {"limit": 20, "offset": 0, "total": 1, "has_more": false, "next_offset": null}
        }"#;
        let page: NotesPage = serde_json::from_str(json).expect("notes page should parse");
        assert_eq!(page.notes.len(), 1);
        assert_eq!(page.notes[0].content_str(), "");
        assert!(page.notes[0].has_tag("work"));
        let p = page.pagination.expect("pagination block");
        assert_eq!(p.total, 1);
        assert!(!p.has_more);
    }

    #[test]
    fn test_search_response_has_no_pagination() {
        let json = r#"{"notes": []}"#;
        let page: NotesPage = serde_json::from_str(json).expect("search response should parse");
        assert!(page.notes.is_empty());
        assert!(page.pagination.is_none());
    }

    #[test]
    fn test_note_without_tags_defaults_to_empty() {
        let json = r#"{"id": 1, "title": "t", "folder_id": 4}"#;
        let note: Note = serde_json::from_str(json).expect("note should parse");
        assert!(note.tags.is_empty());
        assert!(note.updated_at.is_none());
    }

    #[test]
    fn test_user_without_email() {
        let user: User =
            serde_json::from_str(r#"{"id": 1, "username": "u"}"#).expect("user should parse");
        assert_eq!(user.username, "u");
        assert!(user.email.is_none());
    }
}
