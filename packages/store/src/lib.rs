pub mod directory;
pub mod form;
pub mod models;

mod memory;
pub use memory::{CallCounts, MemoryApi};

pub use directory::{ApiError, Directory, UsersApi};
pub use form::FormState;
pub use models::{User, UserDraft, UserField};
