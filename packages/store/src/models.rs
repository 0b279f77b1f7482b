//! # Domain models for directory users
//!
//! The collaborator API owns [`User`] records and speaks camelCase JSON with a
//! Mongo-style `_id` key; the serde renames below pin that wire format. The
//! client never constructs a `User` itself — identity is assigned server-side.
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`User`] | A persisted record as returned by the collaborator. |
//! | [`UserDraft`] | The form's edit buffer: the four editable fields, no id. |
//! | [`UserField`] | Tagged key for updating one draft field at a time. |

use serde::{Deserialize, Serialize};

/// A user record owned by the collaborator API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-assigned identity, immutable once created.
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub job_title: String,
    pub gender: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// The four editable fields of a user, in form order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserField {
    FirstName,
    LastName,
    JobTitle,
    Gender,
}

impl UserField {
    pub const ALL: [UserField; 4] = [
        UserField::FirstName,
        UserField::LastName,
        UserField::JobTitle,
        UserField::Gender,
    ];

    /// Placeholder / label text for the form input.
    pub fn label(&self) -> &'static str {
        match self {
            UserField::FirstName => "First Name",
            UserField::LastName => "Last Name",
            UserField::JobTitle => "Job Title",
            UserField::Gender => "Gender",
        }
    }
}

/// In-progress, not-yet-submitted form values for a user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    pub first_name: String,
    pub last_name: String,
    pub job_title: String,
    pub gender: String,
}

impl UserDraft {
    /// Copy the editable fields of an existing record, identity excluded.
    pub fn from_user(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            job_title: user.job_title.clone(),
            gender: user.gender.clone(),
        }
    }

    pub fn get(&self, field: UserField) -> &str {
        match field {
            UserField::FirstName => &self.first_name,
            UserField::LastName => &self.last_name,
            UserField::JobTitle => &self.job_title,
            UserField::Gender => &self.gender,
        }
    }

    pub fn set(&mut self, field: UserField, value: String) {
        match field {
            UserField::FirstName => self.first_name = value,
            UserField::LastName => self.last_name = value,
            UserField::JobTitle => self.job_title = value,
            UserField::Gender => self.gender = value,
        }
    }

    /// The submission-gating predicate: every field non-empty after trimming.
    pub fn is_complete(&self) -> bool {
        UserField::ALL
            .iter()
            .all(|f| !self.get(*f).trim().is_empty())
    }

    /// A copy with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        Self {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            job_title: self.job_title.trim().to_string(),
            gender: self.gender.trim().to_string(),
        }
    }
}
