//! Create-vs-update state for the single in-flight form.
//!
//! [`FormState`] is the pure half of the form controller: a draft plus an
//! optional editing target, with one transition per user action. Async
//! orchestration (what happens around the network calls) lives in
//! [`crate::directory::Directory`].

use crate::models::{User, UserDraft, UserField};

/// The draft under edit and the record it targets, if any.
///
/// `editing == None` means the next submission creates a new user;
/// `editing == Some(id)` means it updates the user with that id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    draft: UserDraft,
    editing: Option<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &UserDraft {
        &self.draft
    }

    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Update exactly one draft field. Never touches the editing target.
    pub fn set_field(&mut self, field: UserField, value: String) {
        self.draft.set(field, value);
    }

    /// Load an existing record into the draft and target it for update.
    pub fn begin_edit(&mut self, user: &User) {
        self.draft = UserDraft::from_user(user);
        self.editing = Some(user.id.clone());
    }

    /// Back to an empty create form.
    pub fn reset(&mut self) {
        self.draft = UserDraft::default();
        self.editing = None;
    }

    /// Reset only if `id` is the record currently being edited. Used when the
    /// record under edit is deleted.
    pub fn cancel_if_editing(&mut self, id: &str) {
        if self.editing.as_deref() == Some(id) {
            self.reset();
        }
    }

    /// Whether submission is permitted. The UI's disabled attribute and the
    /// submit guard both call this, so they can never disagree.
    pub fn can_submit(&self) -> bool {
        self.draft.is_complete()
    }
}
