use crate::models::{Folder, Note, NotesPage, Pagination, Tag, User};

/// Monotonic request counter for one collection.
///
/// Every list refresh takes a ticket; only the response carrying the latest
/// ticket is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    pub fn begin(&mut self) -> u64 {
        self.latest = self.latest.saturating_add(1);
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

#[derive(Clone, Debug, PartialEq, Eq, strum::Display)]
pub(crate) enum DisplayMode {
    Listing,
    Editing(Note),
    Searching { query: String, results: Vec<Note> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ModeEvent {
    NoteOpened(Note),
    EditCancelled,
    NoteSaved,
    NoteRemoved,
    SearchSubmitted { query: String, results: Vec<Note> },
    SearchCleared,
    FolderSelected,
}

impl DisplayMode {
    pub fn transition(self, event: ModeEvent) -> DisplayMode {
        use DisplayMode::*;
        use ModeEvent::*;

        match (self, event) {
            (Listing, NoteOpened(note)) => Editing(note),
            // Opening a search hit edits it; leaving the editor lands on the list.
            (Searching { .. }, NoteOpened(note)) => Editing(note),
            (Editing(_), EditCancelled | NoteSaved | NoteRemoved) => Listing,
            (Listing | Searching { .. }, SearchSubmitted { query, results }) => {
                Searching { query, results }
            }
            (Searching { .. }, SearchCleared | FolderSelected) => Listing,
            (state, event) => {
                log::debug!("display mode {state}: ignoring {event:?}");
                state
            }
        }
    }

    pub fn editing(&self) -> Option<&Note> {
        match self {
            DisplayMode::Editing(note) => Some(note),
            _ => None,
        }
    }
}

/// Ticket handed out by `DashboardStore::begin_*` and echoed back with the
/// response.
pub(crate) type Ticket = u64;

#[derive(Clone, Debug)]
pub(crate) enum DashboardMsg {
    SessionResolved(User),
    FoldersLoaded { ticket: Ticket, folders: Vec<Folder> },
    TagsLoaded { ticket: Ticket, tags: Vec<Tag> },
    NotesLoaded { ticket: Ticket, page: NotesPage },
    LoadFailed(String),
    DismissError,

    FolderCreated(Folder),
    FolderUpdated(Folder),
    FolderDeleted(i64),
    /// `None` is "All Notes"; clicking the active folder again clears the filter.
    FolderClicked(Option<i64>),

    NoteCreated(Note),
    NoteUpdated(Note),
    /// Tag attach/detach re-fetched the note; the editor stays open.
    NoteRefreshed(Note),
    NoteDeleted(i64),
    NoteOpened(Note),
    EditCancelled,

    TagsReplaced(Vec<Tag>),

    SearchSubmitted { query: String, results: Vec<Note> },
    SearchCleared,
}

/// Everything the Dashboard owns. Children never touch it directly; they hand
/// their server payload back through a callback and the page applies a
/// `DashboardMsg`.
#[derive(Clone, Debug)]
pub(crate) struct DashboardStore {
    pub user: Option<User>,
    pub folders: Vec<Folder>,
    pub tags: Vec<Tag>,
    pub notes: Vec<Note>,
    pub pagination: Option<Pagination>,
    pub selected_folder: Option<i64>,
    pub mode: DisplayMode,
    pub error: Option<String>,

    folders_seq: RequestSeq,
    tags_seq: RequestSeq,
    notes_seq: RequestSeq,
}

impl Default for DashboardStore {
    fn default() -> Self {
        Self {
            user: None,
            folders: vec![],
            tags: vec![],
            notes: vec![],
            pagination: None,
            selected_folder: None,
            mode: DisplayMode::Listing,
            error: None,
            folders_seq: RequestSeq::default(),
            tags_seq: RequestSeq::default(),
            notes_seq: RequestSeq::default(),
        }
    }
}

impl DashboardStore {
    pub fn begin_folders_load(&mut self) -> Ticket {
        self.folders_seq.begin()
    }

    pub fn begin_tags_load(&mut self) -> Ticket {
        self.tags_seq.begin()
    }

    /// Takes a notes ticket for the current folder filter.
    pub fn begin_notes_load(&mut self) -> (Ticket, Option<i64>) {
        (self.notes_seq.begin(), self.selected_folder)
    }

    pub fn selected_folder_name(&self) -> Option<&str> {
        let id = self.selected_folder?;
        self.folders
            .iter()
            .find(|f| f.id == id)
            .map(|f| f.name.as_str())
    }

    /// "Showing N of TOTAL" for the listing; `None` until a page arrived.
    pub fn showing_line(&self) -> Option<String> {
        self.pagination
            .as_ref()
            .map(|p| format!("Showing {} of {}", self.notes.len(), p.total))
    }

    fn set_mode(&mut self, event: ModeEvent) {
        let mode = std::mem::replace(&mut self.mode, DisplayMode::Listing);
        self.mode = mode.transition(event);
    }

    fn replace_note(&mut self, note: &Note) {
        if let Some(slot) = self.notes.iter_mut().find(|n| n.id == note.id) {
            *slot = note.clone();
        }
    }

    pub fn apply(&mut self, msg: DashboardMsg) {
        match msg {
            DashboardMsg::SessionResolved(user) => {
                self.user = Some(user);
            }
            DashboardMsg::FoldersLoaded { ticket, folders } => {
                if !self.folders_seq.is_current(ticket) {
                    log::debug!("dropping stale folders response #{ticket}");
                    return;
                }
                self.folders = folders;
            }
            DashboardMsg::TagsLoaded { ticket, tags } => {
                if !self.tags_seq.is_current(ticket) {
                    log::debug!("dropping stale tags response #{ticket}");
                    return;
                }
                self.tags = tags;
            }
            DashboardMsg::NotesLoaded { ticket, page } => {
                if !self.notes_seq.is_current(ticket) {
                    log::debug!("dropping stale notes response #{ticket}");
                    return;
                }
                self.notes = page.notes;
                self.pagination = page.pagination;
            }
            DashboardMsg::LoadFailed(message) => {
                self.error = Some(message);
            }
            DashboardMsg::DismissError => {
                self.error = None;
            }

            DashboardMsg::FolderCreated(folder) => {
                self.folders.push(folder);
            }
            DashboardMsg::FolderUpdated(folder) => {
                if let Some(slot) = self.folders.iter_mut().find(|f| f.id == folder.id) {
                    *slot = folder;
                }
            }
            DashboardMsg::FolderDeleted(id) => {
                self.folders.retain(|f| f.id != id);
                if self.selected_folder == Some(id) {
                    self.selected_folder = None;
                }
            }
            DashboardMsg::FolderClicked(id) => {
                self.selected_folder = match id {
                    Some(id) if self.selected_folder == Some(id) => None,
                    other => other,
                };
                self.set_mode(ModeEvent::FolderSelected);
            }

            DashboardMsg::NoteCreated(note) => {
                self.notes.insert(0, note);
                if let Some(p) = self.pagination.as_mut() {
                    p.total = p.total.saturating_add(1);
                }
            }
            DashboardMsg::NoteUpdated(note) => {
                self.replace_note(&note);
                self.set_mode(ModeEvent::NoteSaved);
            }
            DashboardMsg::NoteRefreshed(note) => {
                self.replace_note(&note);
                if let DisplayMode::Editing(current) = &mut self.mode {
                    if current.id == note.id {
                        *current = note;
                    }
                }
            }
            DashboardMsg::NoteDeleted(id) => {
                let before = self.notes.len();
                self.notes.retain(|n| n.id != id);
                if self.notes.len() < before {
                    if let Some(p) = self.pagination.as_mut() {
                        p.total = p.total.saturating_sub(1).max(0);
                    }
                }
                self.set_mode(ModeEvent::NoteRemoved);
            }
            DashboardMsg::NoteOpened(note) => {
                self.set_mode(ModeEvent::NoteOpened(note));
            }
            DashboardMsg::EditCancelled => {
                self.set_mode(ModeEvent::EditCancelled);
            }

            DashboardMsg::TagsReplaced(tags) => {
                self.tags = tags;
            }

            DashboardMsg::SearchSubmitted { query, results } => {
                self.set_mode(ModeEvent::SearchSubmitted { query, results });
            }
            DashboardMsg::SearchCleared => {
                self.set_mode(ModeEvent::SearchCleared);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: i64, title: &str) -> Note {
        Note {
            id,
            title: title.to_string(),
            content: None,
            folder_id: 1,
            tags: vec![],
            updated_at: None,
        }
    }

    fn store_with_notes(ids: &[i64]) -> DashboardStore {
        let mut s = DashboardStore::default();
        let (ticket, _) = s.begin_notes_load();
        s.apply(DashboardMsg::NotesLoaded {
            ticket,
            page: NotesPage {
                notes: ids.iter().map(|id| note(*id, &format!("n{id}"))).collect(),
                pagination: None,
            },
        });
        s
    }

    fn ids(s: &DashboardStore) -> Vec<i64> {
        s.notes.iter().map(|n| n.id).collect()
    }

    #[test]
    fn test_showing_line_tracks_local_create_and_delete() {
        let mut s = DashboardStore::default();
        assert_eq!(s.showing_line(), None);

        let (ticket, _) = s.begin_notes_load();
        s.apply(DashboardMsg::NotesLoaded {
            ticket,
            page: NotesPage {
                notes: vec![note(1, "a"), note(2, "b")],
                pagination: Some(Pagination {
                    limit: 20,
                    offset: 0,
                    total: 2,
                    has_more: false,
                    next_offset: None,
                }),
            },
        });
        assert_eq!(s.showing_line().as_deref(), Some("Showing 2 of 2"));

        s.apply(DashboardMsg::NoteCreated(note(3, "c")));
        assert_eq!(s.showing_line().as_deref(), Some("Showing 3 of 3"));

        s.apply(DashboardMsg::NoteDeleted(2));
        assert_eq!(s.showing_line().as_deref(), Some("Showing 2 of 2"));

        // Unknown id: nothing removed, total untouched.
        s.apply(DashboardMsg::NoteDeleted(99));
        assert_eq!(s.showing_line().as_deref(), Some("Showing 2 of 2"));
    }

    #[test]
    fn test_transitions_follow_table() {
        let m = DisplayMode::Listing.transition(ModeEvent::NoteOpened(note(1, "a")));
        assert_eq!(m, DisplayMode::Editing(note(1, "a")));
        assert_eq!(m.transition(ModeEvent::EditCancelled), DisplayMode::Listing);

        let m = DisplayMode::Listing.transition(ModeEvent::SearchSubmitted {
            query: "q".to_string(),
            results: vec![note(2, "b")],
        });
        assert!(matches!(m, DisplayMode::Searching { ref query, .. } if query == "q"));
        assert_eq!(m.clone().transition(ModeEvent::SearchCleared), DisplayMode::Listing);
        assert_eq!(m.transition(ModeEvent::FolderSelected), DisplayMode::Listing);
    }

    #[test]
    fn test_undefined_transitions_keep_state() {
        assert_eq!(
            DisplayMode::Listing.transition(ModeEvent::EditCancelled),
            DisplayMode::Listing
        );
        let editing = DisplayMode::Editing(note(1, "a"));
        assert_eq!(
            editing.clone().transition(ModeEvent::FolderSelected),
            editing.clone()
        );
        assert_eq!(
            editing.clone().transition(ModeEvent::SearchSubmitted {
                query: "q".to_string(),
                results: vec![],
            }),
            editing
        );
    }

    #[test]
    fn test_request_seq_discards_stale() {
        let mut seq = RequestSeq::default();
        let first = seq.begin();
        let second = seq.begin();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_stale_notes_response_is_dropped() {
        let mut s = DashboardStore::default();
        s.apply(DashboardMsg::FolderClicked(Some(1)));
        let (old, filter_old) = s.begin_notes_load();
        s.apply(DashboardMsg::FolderClicked(Some(2)));
        let (new, filter_new) = s.begin_notes_load();
        assert_eq!(filter_old, Some(1));
        assert_eq!(filter_new, Some(2));

        s.apply(DashboardMsg::NotesLoaded {
            ticket: new,
            page: NotesPage {
                notes: vec![note(20, "folder 2")],
                pagination: None,
            },
        });
        s.apply(DashboardMsg::NotesLoaded {
            ticket: old,
            page: NotesPage {
                notes: vec![note(10, "folder 1")],
                pagination: None,
            },
        });
        assert_eq!(ids(&s), vec![20]);
    }

    #[test]
    fn test_folder_created_appends_once() {
        let mut s = DashboardStore::default();
        let (ticket, folders) = (
            s.begin_folders_load(),
            vec![Folder {
                id: 1,
                name: "a".to_string(),
                color: "#fff".to_string(),
            }],
        );
        s.apply(DashboardMsg::FoldersLoaded { ticket, folders });
        s.apply(DashboardMsg::FolderCreated(Folder {
            id: 2,
            name: "b".to_string(),
            color: "#000".to_string(),
        }));
        let names: Vec<_> = s.folders.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_note_created_prepends() {
        let mut s = store_with_notes(&[1, 2]);
        s.apply(DashboardMsg::NoteCreated(note(9, "new")));
        assert_eq!(ids(&s), vec![9, 1, 2]);
    }

    #[test]
    fn test_note_updated_replaces_in_place_and_exits_edit() {
        let mut s = store_with_notes(&[1, 3, 5]);
        s.apply(DashboardMsg::NoteOpened(note(3, "n3")));
        assert!(s.mode.editing().is_some());

        let mut updated = note(3, "x");
        updated.content = Some("y".to_string());
        updated.folder_id = 2;
        s.apply(DashboardMsg::NoteUpdated(updated.clone()));

        assert_eq!(ids(&s), vec![1, 3, 5]);
        assert_eq!(s.notes[1], updated);
        assert_eq!(s.notes[0].title, "n1");
        assert_eq!(s.mode, DisplayMode::Listing);
    }

    #[test]
    fn test_note_deleted_removes_exactly_one_and_exits_edit() {
        let mut s = store_with_notes(&[1, 3, 5]);
        s.apply(DashboardMsg::NoteOpened(note(3, "n3")));
        s.apply(DashboardMsg::NoteDeleted(3));
        assert_eq!(ids(&s), vec![1, 5]);
        assert_eq!(s.mode, DisplayMode::Listing);
    }

    #[test]
    fn test_note_refreshed_keeps_editing_with_new_tags() {
        let mut s = store_with_notes(&[3]);
        s.apply(DashboardMsg::NoteOpened(note(3, "n3")));

        let mut refreshed = note(3, "n3");
        refreshed.tags = vec!["work".to_string()];
        s.apply(DashboardMsg::NoteRefreshed(refreshed.clone()));

        assert_eq!(s.mode.editing(), Some(&refreshed));
        assert_eq!(s.notes[0].tags, vec!["work".to_string()]);
    }

    #[test]
    fn test_folder_click_toggles_filter_and_exits_search() {
        let mut s = DashboardStore::default();
        s.apply(DashboardMsg::SearchSubmitted {
            query: "q".to_string(),
            results: vec![],
        });
        s.apply(DashboardMsg::FolderClicked(Some(4)));
        assert_eq!(s.selected_folder, Some(4));
        assert_eq!(s.mode, DisplayMode::Listing);

        s.apply(DashboardMsg::FolderClicked(Some(4)));
        assert_eq!(s.selected_folder, None);

        s.apply(DashboardMsg::FolderClicked(Some(4)));
        s.apply(DashboardMsg::FolderClicked(None));
        assert_eq!(s.selected_folder, None);
    }

    #[test]
    fn test_folder_updated_replaces_in_place() {
        let mut s = DashboardStore::default();
        for (id, name) in [(1, "Work"), (2, "Home")] {
            s.apply(DashboardMsg::FolderCreated(Folder {
                id,
                name: name.to_string(),
                color: "#4A90E2".to_string(),
            }));
        }
        s.apply(DashboardMsg::FolderClicked(Some(1)));

        s.apply(DashboardMsg::FolderUpdated(Folder {
            id: 1,
            name: "Office".to_string(),
            color: "#FF0000".to_string(),
        }));

        let names: Vec<&str> = s.folders.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Office", "Home"]);
        assert_eq!(s.folders[0].color, "#FF0000");
        assert_eq!(s.selected_folder_name(), Some("Office"));
    }

    #[test]
    fn test_deleting_selected_folder_clears_filter() {
        let mut s = DashboardStore::default();
        s.apply(DashboardMsg::FolderCreated(Folder {
            id: 4,
            name: "w".to_string(),
            color: "#fff".to_string(),
        }));
        s.apply(DashboardMsg::FolderClicked(Some(4)));
        assert_eq!(s.selected_folder_name(), Some("w"));

        s.apply(DashboardMsg::FolderDeleted(4));
        assert!(s.folders.is_empty());
        assert_eq!(s.selected_folder, None);
    }

    #[test]
    fn test_tags_replaced_wholesale() {
        let mut s = DashboardStore::default();
        let ticket = s.begin_tags_load();
        s.apply(DashboardMsg::TagsLoaded {
            ticket,
            tags: vec![Tag {
                id: 1,
                name: "old".to_string(),
            }],
        });
        s.apply(DashboardMsg::TagsReplaced(vec![Tag {
            id: 7,
            name: "work".to_string(),
        }]));
        assert_eq!(s.tags.len(), 1);
        assert_eq!(s.tags[0].id, 7);
    }
}
