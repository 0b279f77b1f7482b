use std::sync::{Arc, Mutex};

use crate::directory::{ApiError, UsersApi};
use crate::models::{User, UserDraft};

/// In-memory [`UsersApi`] for testing.
///
/// Assigns sequential ids the way the collaborator would, counts every request
/// it receives, and captures the last create/update body so tests can assert
/// exactly what went over the wire. `set_offline(true)` makes every operation
/// fail with [`ApiError::Network`].
#[derive(Clone, Debug, Default)]
pub struct MemoryApi {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    users: Vec<User>,
    next_id: u64,
    offline: bool,
    calls: CallCounts,
    last_create: Option<UserDraft>,
    last_update: Option<(String, UserDraft)>,
}

/// Number of requests received, per operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CallCounts {
    pub lists: usize,
    pub creates: usize,
    pub updates: usize,
    pub deletes: usize,
}

impl MemoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the server-side collection with existing records.
    pub fn with_users(users: Vec<User>) -> Self {
        let api = Self::default();
        api.inner.lock().unwrap().users = users;
        api
    }

    /// Replace the server-side collection out-of-band, as if another client
    /// had mutated it.
    pub fn set_users(&self, users: Vec<User>) {
        self.inner.lock().unwrap().users = users;
    }

    pub fn set_offline(&self, offline: bool) {
        self.inner.lock().unwrap().offline = offline;
    }

    pub fn calls(&self) -> CallCounts {
        self.inner.lock().unwrap().calls
    }

    pub fn last_create(&self) -> Option<UserDraft> {
        self.inner.lock().unwrap().last_create.clone()
    }

    pub fn last_update(&self) -> Option<(String, UserDraft)> {
        self.inner.lock().unwrap().last_update.clone()
    }
}

impl UsersApi for MemoryApi {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.lists += 1;
        if inner.offline {
            return Err(ApiError::Network("offline".to_string()));
        }
        Ok(inner.users.clone())
    }

    async fn create_user(&self, draft: &UserDraft) -> Result<User, ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.creates += 1;
        if inner.offline {
            return Err(ApiError::Network("offline".to_string()));
        }
        inner.last_create = Some(draft.clone());
        inner.next_id += 1;
        let user = User {
            id: format!("u{}", inner.next_id),
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            job_title: draft.job_title.clone(),
            gender: draft.gender.clone(),
        };
        inner.users.push(user.clone());
        Ok(user)
    }

    async fn update_user(&self, id: &str, draft: &UserDraft) -> Result<User, ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.updates += 1;
        if inner.offline {
            return Err(ApiError::Network("offline".to_string()));
        }
        inner.last_update = Some((id.to_string(), draft.clone()));
        let Some(user) = inner.users.iter_mut().find(|u| u.id == id) else {
            return Err(ApiError::ServerRejected(404));
        };
        user.first_name = draft.first_name.clone();
        user.last_name = draft.last_name.clone();
        user.job_title = draft.job_title.clone();
        user.gender = draft.gender.clone();
        Ok(user.clone())
    }

    async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.deletes += 1;
        if inner.offline {
            return Err(ApiError::Network("offline".to_string()));
        }
        inner.users.retain(|u| u.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::Directory;
    use crate::models::UserField;

    fn user(id: &str, first: &str) -> User {
        User {
            id: id.to_string(),
            first_name: first.to_string(),
            last_name: "Chen".to_string(),
            job_title: "Designer".to_string(),
            gender: "M".to_string(),
        }
    }

    fn fill_draft(dir: &mut Directory, first: &str, last: &str, job: &str, gender: &str) {
        dir.set_field(UserField::FirstName, first.to_string());
        dir.set_field(UserField::LastName, last.to_string());
        dir.set_field(UserField::JobTitle, job.to_string());
        dir.set_field(UserField::Gender, gender.to_string());
    }

    #[tokio::test]
    async fn incomplete_draft_sends_nothing() {
        let api = MemoryApi::new();
        let mut dir = Directory::new();

        dir.set_field(UserField::FirstName, "Ana".to_string());
        dir.set_field(UserField::Gender, "   ".to_string());
        assert!(!dir.can_submit());

        let submitted = dir.submit(&api).await.unwrap();
        assert!(!submitted);
        assert_eq!(api.calls(), CallCounts::default());
    }

    #[tokio::test]
    async fn create_round_trip() {
        let api = MemoryApi::new();
        let mut dir = Directory::new();

        fill_draft(&mut dir, "Ana", "Li", "Engineer", "F");
        assert!(dir.can_submit());

        let submitted = dir.submit(&api).await.unwrap();
        assert!(submitted);

        let calls = api.calls();
        assert_eq!(calls.creates, 1);
        assert_eq!(calls.lists, 1);
        assert_eq!(calls.updates, 0);

        assert_eq!(dir.draft(), &UserDraft::default());
        assert!(!dir.is_editing());
        assert_eq!(dir.users().len(), 1);
        assert_eq!(dir.users()[0].first_name, "Ana");
    }

    #[tokio::test]
    async fn create_sends_fields_as_entered() {
        let api = MemoryApi::new();
        let mut dir = Directory::new();

        fill_draft(&mut dir, " Ana ", "Li", "Engineer ", " F");
        dir.submit(&api).await.unwrap();

        let sent = api.last_create().unwrap();
        assert_eq!(sent.first_name, " Ana ");
        assert_eq!(sent.job_title, "Engineer ");
    }

    #[tokio::test]
    async fn edit_then_update_round_trip() {
        let api = MemoryApi::with_users(vec![user("u1", "Bo")]);
        let mut dir = Directory::new();
        dir.refresh(&api).await.unwrap();

        let bo = dir.users()[0].clone();
        dir.begin_edit(&bo);
        assert_eq!(dir.editing(), Some("u1"));
        assert_eq!(dir.draft().first_name, "Bo");

        dir.set_field(UserField::FirstName, "  Beau ".to_string());
        let submitted = dir.submit(&api).await.unwrap();
        assert!(submitted);

        let (id, sent) = api.last_update().unwrap();
        assert_eq!(id, "u1");
        assert_eq!(sent.first_name, "Beau");

        let calls = api.calls();
        assert_eq!(calls.updates, 1);
        assert_eq!(calls.creates, 0);
        assert_eq!(calls.lists, 2);

        assert!(!dir.is_editing());
        assert_eq!(dir.draft(), &UserDraft::default());
        assert_eq!(dir.users()[0].first_name, "Beau");
    }

    #[tokio::test]
    async fn delete_while_editing_resets_the_form() {
        let api = MemoryApi::with_users(vec![user("u1", "Bo"), user("u2", "Ada")]);
        let mut dir = Directory::new();
        dir.refresh(&api).await.unwrap();

        let bo = dir.users()[0].clone();
        dir.begin_edit(&bo);
        dir.set_field(UserField::JobTitle, "Architect".to_string());

        dir.delete(&api, "u1").await.unwrap();
        assert!(!dir.is_editing());
        assert_eq!(dir.draft(), &UserDraft::default());
        assert_eq!(dir.users().len(), 1);
        assert_eq!(dir.users()[0].id, "u2");
    }

    #[tokio::test]
    async fn delete_of_another_record_leaves_the_form_alone() {
        let api = MemoryApi::with_users(vec![user("u1", "Bo"), user("u2", "Ada")]);
        let mut dir = Directory::new();
        dir.refresh(&api).await.unwrap();

        let ada = dir.users()[1].clone();
        dir.begin_edit(&ada);

        dir.delete(&api, "u1").await.unwrap();
        assert_eq!(dir.editing(), Some("u2"));
        assert_eq!(dir.draft().first_name, "Ada");
        assert_eq!(api.calls().deletes, 1);
        assert_eq!(api.calls().lists, 2);
    }

    #[tokio::test]
    async fn refresh_replaces_the_cache_wholesale() {
        let api = MemoryApi::with_users(vec![user("u1", "Bo"), user("u2", "Ada")]);
        let mut dir = Directory::new();
        dir.refresh(&api).await.unwrap();
        assert_eq!(dir.users().len(), 2);

        // Another client rewrote the collection; nothing old may survive.
        api.set_users(vec![user("u3", "Kim")]);
        dir.refresh(&api).await.unwrap();
        assert_eq!(dir.users(), &[user("u3", "Kim")]);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_the_stale_cache() {
        let api = MemoryApi::with_users(vec![user("u1", "Bo")]);
        let mut dir = Directory::new();
        dir.refresh(&api).await.unwrap();

        api.set_offline(true);
        let err = dir.refresh(&api).await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
        assert_eq!(dir.users().len(), 1);
    }

    #[tokio::test]
    async fn failed_submit_leaves_the_form_untouched() {
        let api = MemoryApi::with_users(vec![user("u1", "Bo")]);
        let mut dir = Directory::new();
        dir.refresh(&api).await.unwrap();

        let bo = dir.users()[0].clone();
        dir.begin_edit(&bo);
        dir.set_field(UserField::FirstName, "Beau".to_string());

        api.set_offline(true);
        assert!(dir.submit(&api).await.is_err());
        assert_eq!(dir.editing(), Some("u1"));
        assert_eq!(dir.draft().first_name, "Beau");
    }

    #[tokio::test]
    async fn failed_delete_still_cancels_editing() {
        let api = MemoryApi::with_users(vec![user("u1", "Bo")]);
        let mut dir = Directory::new();
        dir.refresh(&api).await.unwrap();

        let bo = dir.users()[0].clone();
        dir.begin_edit(&bo);

        api.set_offline(true);
        assert!(dir.delete(&api, "u1").await.is_err());
        assert!(!dir.is_editing());
        assert_eq!(dir.draft(), &UserDraft::default());
        // The stale cache is retained since the refresh failed too.
        assert_eq!(dir.users().len(), 1);
    }

    #[tokio::test]
    async fn keystrokes_during_delete_of_another_record_survive() {
        let api = MemoryApi::with_users(vec![user("u1", "Bo"), user("u2", "Ada")]);
        let mut live = Directory::new();
        live.refresh(&api).await.unwrap();

        // A delete runs against a snapshot of the state at click time...
        let mut snapshot = live.clone();
        // ...while the user keeps typing into the live form.
        live.set_field(UserField::FirstName, "An".to_string());
        live.set_field(UserField::FirstName, "Ana".to_string());

        snapshot.delete(&api, "u1").await.unwrap();

        // Completion folds back only the cancellation and the fresh list.
        live.cancel_if_editing("u1");
        live.replace_users(snapshot.users().to_vec());

        assert_eq!(live.draft().first_name, "Ana");
        assert_eq!(live.users().len(), 1);
        assert_eq!(live.users()[0].id, "u2");
    }

    #[tokio::test]
    async fn delete_completion_merge_still_cancels_a_live_edit() {
        let api = MemoryApi::with_users(vec![user("u1", "Bo"), user("u2", "Ada")]);
        let mut live = Directory::new();
        live.refresh(&api).await.unwrap();

        let bo = live.users()[0].clone();
        live.begin_edit(&bo);

        let mut snapshot = live.clone();
        live.set_field(UserField::JobTitle, "Architect".to_string());

        snapshot.delete(&api, "u1").await.unwrap();
        live.cancel_if_editing("u1");
        live.replace_users(snapshot.users().to_vec());

        assert!(!live.is_editing());
        assert_eq!(live.draft(), &UserDraft::default());
        assert_eq!(live.users().len(), 1);
    }

    #[tokio::test]
    async fn update_of_a_missing_record_is_rejected() {
        let api = MemoryApi::new();
        let mut dir = Directory::new();

        dir.begin_edit(&user("ghost", "Bo"));
        let err = dir.submit(&api).await.unwrap_err();
        assert_eq!(err, ApiError::ServerRejected(404));
        assert_eq!(dir.editing(), Some("ghost"));
    }
}
