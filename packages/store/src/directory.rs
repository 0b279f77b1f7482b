//! # Directory — client state synchronized against the collaborator API
//!
//! This module is the core of the app. [`Directory`] pairs the collection
//! cache (the local mirror of every user record) with the form controller
//! ([`crate::form::FormState`]) and orchestrates each operation against an
//! abstract [`UsersApi`], so the same logic runs against the real HTTP client
//! or an in-memory fake ([`crate::MemoryApi`]) in tests.
//!
//! ## [`UsersApi`] trait
//!
//! An async interface with one method per REST operation — `list_users`,
//! `create_user`, `update_user`, `delete_user` — all returning
//! `Result<_, ApiError>`.
//!
//! ## Synchronization model
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`refresh`](Directory::refresh) | Fetches the full collection and replaces the cache wholesale. No merge or diff; the last response wins. On failure the cache keeps its previous value. |
//! | [`submit`](Directory::submit) | Sends a create or update depending on the editing target, then resets the form and refreshes. Gated by [`can_submit`](Directory::can_submit); returns `Ok(false)` without sending anything when the draft is incomplete. |
//! | [`delete`](Directory::delete) | Requests deletion, cancels the form if it was editing that record, then refreshes — in that order even when the delete request fails. |
//!
//! Updates send trimmed field values; creates send the draft exactly as
//! entered. Form transitions only happen after the corresponding request
//! resolves successfully, so a failed call leaves both the form and the cache
//! untouched apart from the returned error.

use std::future::Future;

use thiserror::Error;

use crate::form::FormState;
use crate::models::{User, UserDraft, UserField};

/// Errors surfaced by collaborator API calls.
///
/// These are reported as non-blocking notices; no state transition is tied to
/// them and no retry is attempted.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server rejected the request (status {0})")]
    ServerRejected(u16),
    #[error("request timed out")]
    Timeout,
}

/// Async interface to the collaborator user API.
pub trait UsersApi {
    fn list_users(
        &self,
    ) -> impl Future<Output = Result<Vec<User>, ApiError>>;
    fn create_user(
        &self,
        draft: &UserDraft,
    ) -> impl Future<Output = Result<User, ApiError>>;
    fn update_user(
        &self,
        id: &str,
        draft: &UserDraft,
    ) -> impl Future<Output = Result<User, ApiError>>;
    fn delete_user(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<(), ApiError>>;
}

/// The collection cache plus the form controller.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Directory {
    users: Vec<User>,
    form: FormState,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached sequence, in whatever order the API returned it.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn draft(&self) -> &UserDraft {
        self.form.draft()
    }

    pub fn editing(&self) -> Option<&str> {
        self.form.editing()
    }

    pub fn is_editing(&self) -> bool {
        self.form.is_editing()
    }

    pub fn can_submit(&self) -> bool {
        self.form.can_submit()
    }

    pub fn set_field(&mut self, field: UserField, value: String) {
        self.form.set_field(field, value);
    }

    pub fn begin_edit(&mut self, user: &User) {
        self.form.begin_edit(user);
    }

    /// Reset the form only if it is editing `id`.
    pub fn cancel_if_editing(&mut self, id: &str) {
        self.form.cancel_if_editing(id);
    }

    /// Replace the cached collection without touching the form. Lets a
    /// completed delete fold its refreshed list into a state that has picked
    /// up keystrokes since the request was sent.
    pub fn replace_users(&mut self, users: Vec<User>) {
        self.users = users;
    }

    /// Replace the cache with the server's current collection.
    pub async fn refresh<A: UsersApi>(&mut self, api: &A) -> Result<(), ApiError> {
        let users = api.list_users().await?;
        self.users = users;
        Ok(())
    }

    /// Send the draft as a create or update, then reset the form and refresh.
    ///
    /// Returns `Ok(false)` when the draft is incomplete: nothing is sent and
    /// nothing changes. The gate is the same predicate the UI uses to disable
    /// the submit button.
    pub async fn submit<A: UsersApi>(&mut self, api: &A) -> Result<bool, ApiError> {
        if !self.can_submit() {
            return Ok(false);
        }
        match self.form.editing() {
            Some(id) => {
                // Updates carry trimmed values; creates go out as entered.
                let id = id.to_string();
                api.update_user(&id, &self.form.draft().trimmed()).await?;
            }
            None => {
                api.create_user(self.form.draft()).await?;
            }
        }
        self.form.reset();
        self.refresh(api).await?;
        Ok(true)
    }

    /// Delete a record by id. The form is cancelled (if it was editing that
    /// record) and the cache refreshed regardless of the delete's outcome; the
    /// first error encountered is returned.
    pub async fn delete<A: UsersApi>(&mut self, api: &A, id: &str) -> Result<(), ApiError> {
        let deleted = api.delete_user(id).await;
        self.form.cancel_if_editing(id);
        let refreshed = self.refresh(api).await;
        deleted.and(refreshed)
    }
}
