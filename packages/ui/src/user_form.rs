use dioxus::prelude::*;
use store::{UserDraft, UserField};

/// Create/edit form for a user record.
///
/// The four inputs are generated from [`UserField::ALL`] with a single input
/// handler. The submit button's `disabled` attribute comes from
/// [`UserDraft::is_complete`] — the same predicate that gates submission in
/// the directory, so the two can never disagree.
#[component]
pub fn UserForm(
    draft: UserDraft,
    editing: bool,
    on_field: EventHandler<(UserField, String)>,
    on_submit: EventHandler<()>,
) -> Element {
    let complete = draft.is_complete();

    rsx! {
        div {
            class: "user-form",
            h2 {
                class: "user-form-title",
                if editing { "Edit User" } else { "Add New User" }
            }

            for field in UserField::ALL {
                input {
                    key: "{field.label()}",
                    r#type: "text",
                    placeholder: field.label(),
                    value: "{draft.get(field)}",
                    oninput: move |evt: FormEvent| on_field.call((field, evt.value())),
                }
            }

            button {
                class: if editing { "user-form-submit editing" } else { "user-form-submit" },
                disabled: !complete,
                onclick: move |_| on_submit.call(()),
                if editing { "Update User" } else { "Add User" }
            }
        }
    }
}
