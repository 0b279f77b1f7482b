use dioxus::prelude::*;
use store::User;

/// The cached collection, one card per record.
#[component]
pub fn UserList(
    users: Vec<User>,
    on_edit: EventHandler<User>,
    on_delete: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "user-list",
            for user in users {
                UserCard {
                    key: "{user.id}",
                    user: user.clone(),
                    on_edit: move |u| on_edit.call(u),
                    on_delete: move |id| on_delete.call(id),
                }
            }
        }
    }
}

#[component]
fn UserCard(
    user: User,
    on_edit: EventHandler<User>,
    on_delete: EventHandler<String>,
) -> Element {
    let edit_user = user.clone();
    let delete_id = user.id.clone();

    rsx! {
        div {
            class: "user-card",
            div {
                class: "user-card-info",
                p { class: "user-card-name", "{user.full_name()}" }
                p {
                    class: "user-card-meta",
                    strong { "Gender: " }
                    "{user.gender}"
                    " | "
                    strong { "Job: " }
                    "{user.job_title}"
                }
            }

            div {
                class: "user-card-actions",
                button {
                    class: "edit",
                    onclick: move |_| on_edit.call(edit_user.clone()),
                    "Edit"
                }
                button {
                    class: "delete",
                    onclick: move |_| on_delete.call(delete_id.clone()),
                    "Delete"
                }
            }
        }
    }
}
