//! Non-blocking notices for completed and failed operations.
//!
//! A [`Signal<NoticeLog>`] lives in Dioxus context; any handler can push to it
//! via [`push_notice`] and the [`NoticePanel`] renders the most recent entries.
//! Failures never block input — the form and list stay interactive while a
//! notice is shown.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub timestamp: String,
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoticeLog {
    pub entries: Vec<Notice>,
}

pub fn use_notices() -> Signal<NoticeLog> {
    use_context::<Signal<NoticeLog>>()
}

pub fn push_notice(log: &mut Signal<NoticeLog>, level: NoticeLevel, message: &str) {
    let ts = current_time();
    log.write().entries.push(Notice {
        timestamp: ts,
        level,
        message: message.to_string(),
    });
}

/// Provider component that owns the notice log.
/// Wrap the app with this component so views can call [`use_notices`].
#[component]
pub fn NoticeProvider(children: Element) -> Element {
    let log = use_signal(NoticeLog::default);
    use_context_provider(|| log);

    rsx! {
        {children}
    }
}

/// The most recent notices, newest first.
#[component]
pub fn NoticePanel() -> Element {
    let notices = use_notices();
    let recent: Vec<Notice> = notices()
        .entries
        .iter()
        .rev()
        .take(4)
        .cloned()
        .collect();

    rsx! {
        div {
            class: "notice-panel",
            for notice in recent {
                div {
                    class: match notice.level {
                        NoticeLevel::Info => "notice notice-info",
                        NoticeLevel::Success => "notice notice-success",
                        NoticeLevel::Error => "notice notice-error",
                    },
                    span { class: "notice-time", "{notice.timestamp}" }
                    span { "{notice.message}" }
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    "00:00:00".to_string()
}
