use dioxus::prelude::*;

use store::{Directory, User, UserField};

use crate::notices::{push_notice, use_notices, NoticeLevel, NoticePanel};
use crate::{UserForm, UserList};

fn make_client() -> api::Client {
    api::Client::from_env()
}

/// The single page: form on top, notices, then the cached collection.
///
/// The whole [`Directory`] lives in one signal. Async handlers clone it out,
/// run the operation on the clone, and set the result back in one piece, so
/// the rendered state is always a complete value and the last completed
/// operation wins. Synchronous transitions write through the signal directly.
#[component]
pub fn HomeView() -> Element {
    let mut directory = use_signal(Directory::new);
    let mut notices = use_notices();

    // Fetch the collection once on mount. `peek` keeps the resource from
    // re-running on its own write.
    let _loader = use_resource(move || async move {
        let client = make_client();
        let mut dir = (*directory.peek()).clone();
        if let Err(e) = dir.refresh(&client).await {
            tracing::error!("initial refresh failed: {e}");
            push_notice(&mut notices, NoticeLevel::Error, &format!("Load failed: {e}"));
        }
        directory.set(dir);
    });

    let handle_field = move |(field, value): (UserField, String)| {
        directory.write().set_field(field, value);
    };

    let handle_submit = move |_| {
        spawn(async move {
            let client = make_client();
            let mut dir = directory();
            let was_editing = dir.is_editing();
            match dir.submit(&client).await {
                Ok(true) => {
                    let message = if was_editing { "User updated" } else { "User added" };
                    push_notice(&mut notices, NoticeLevel::Success, message);
                }
                Ok(false) => {}
                Err(e) => {
                    tracing::error!("submit failed: {e}");
                    push_notice(&mut notices, NoticeLevel::Error, &format!("Save failed: {e}"));
                }
            }
            directory.set(dir);
        });
    };

    let handle_edit = move |user: User| {
        directory.write().begin_edit(&user);
    };

    let handle_delete = move |id: String| {
        spawn(async move {
            let client = make_client();
            let mut dir = directory();
            match dir.delete(&client, &id).await {
                Ok(()) => push_notice(&mut notices, NoticeLevel::Success, "User deleted"),
                Err(e) => {
                    tracing::error!("delete failed: {e}");
                    push_notice(&mut notices, NoticeLevel::Error, &format!("Delete failed: {e}"));
                }
            }
            // Keystrokes typed while the request was in flight stay live:
            // only the cancellation and the refreshed collection are folded
            // back into the current state.
            let mut current = directory();
            current.cancel_if_editing(&id);
            current.replace_users(dir.users().to_vec());
            directory.set(current);
        });
    };

    rsx! {
        div {
            class: "home",
            UserForm {
                draft: directory().draft().clone(),
                editing: directory().is_editing(),
                on_field: handle_field,
                on_submit: handle_submit,
            }

            NoticePanel {}

            UserList {
                users: directory().users().to_vec(),
                on_edit: handle_edit,
                on_delete: handle_delete,
            }
        }
    }
}
