//! This crate contains all shared UI for the workspace.

mod notices;
pub use notices::{
    push_notice, use_notices, Notice, NoticeLevel, NoticeLog, NoticePanel, NoticeProvider,
};

mod user_form;
pub use user_form::UserForm;

mod user_list;
pub use user_list::UserList;

pub mod views;
