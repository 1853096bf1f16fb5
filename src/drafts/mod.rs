mod note;
mod session;

pub(crate) use note::{
    available_tags, tag_id_for_name, tags_after_create, tags_after_delete, FolderDraft,
    NoteDraft, SearchDraft, TagDraft, FOLDER_NAME_MAX, NOTE_TITLE_MAX, TAG_NAME_MAX,
};
pub(crate) use session::{LoginDraft, SignupDraft};

/// Local, unsaved field values of a form.
///
/// `Default` is the empty draft a form resets to after a successful submit.
pub(crate) trait FormDraft: Default + Clone {
    /// Applies an input change. `name` is the input's `name` attribute;
    /// unknown names are ignored.
    fn set_field(&mut self, name: &str, value: String);

    /// Client-side checks run before any request is issued.
    fn validate(&self) -> Result<(), String>;
}

/// Two-step confirmation for destructive actions.
///
/// `arm` shows the confirmation; `take` returns true once, only when armed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct ConfirmGate<T: Copy + PartialEq> {
    armed: Option<T>,
}

impl<T: Copy + PartialEq> ConfirmGate<T> {
    pub fn arm(&mut self, target: T) {
        self.armed = Some(target);
    }

    pub fn cancel(&mut self) {
        self.armed = None;
    }

    pub fn is_armed_for(&self, target: T) -> bool {
        self.armed == Some(target)
    }

    pub fn take(&mut self, target: T) -> bool {
        if self.armed == Some(target) {
            self.armed = None;
            true
        } else {
            false
        }
    }
}

pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Parses a `<select>` value holding an optional id.
pub(crate) fn parse_id(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_gate_requires_arming() {
        let mut gate = ConfirmGate::<i64>::default();
        assert!(!gate.take(3));

        gate.arm(3);
        assert!(gate.is_armed_for(3));
        assert!(!gate.take(4));
        assert!(gate.take(3));
        assert!(!gate.take(3));
    }

    #[test]
    fn test_confirm_gate_cancel() {
        let mut gate = ConfirmGate::<i64>::default();
        gate.arm(1);
        gate.cancel();
        assert!(!gate.is_armed_for(1));
        assert!(!gate.take(1));
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("12"), Some(12));
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("abc"), None);
    }
}
