//! Form components. Each owns its draft, loading flag and inline error, issues
//! exactly one request per submit, and reports the server payload upward
//! through a callback. None of them touch collections owned by a page.

mod create_folder;
mod create_note;
mod edit_folder;
mod edit_note;
mod login_form;
mod options;
mod search_notes;
mod signup_form;
mod tag_manager;

pub use create_folder::CreateFolder;
pub use create_note::CreateNote;
pub use edit_folder::EditFolder;
pub use edit_note::EditNote;
pub(crate) use edit_note::EditOutcome;
pub use login_form::LoginForm;
pub use search_notes::SearchNotes;
pub use signup_form::SignupForm;
pub use tag_manager::TagManager;
