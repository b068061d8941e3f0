//! Transient notice overlay
//!
//! A single short-lived notice (success or error) shown above the chat.
//! Each notice auto-dismisses after a couple of seconds; a newer notice
//! simply replaces the current one.

use crate::app::AppState;
use dioxus::prelude::*;
use uuid::Uuid;

/// How long a notice stays on screen
const NOTICE_DURATION: std::time::Duration = std::time::Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// One transient notice. The id lets the dismiss timer tell whether the
/// notice it was started for is still the one on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: Uuid,
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            text: text.into(),
        }
    }
}

#[component]
pub fn NoticeHost() -> Element {
    let app_state = use_context::<AppState>();
    let notice = app_state.notice;

    // Arm a dismiss timer whenever a new notice appears.
    use_effect(move || {
        let Some(id) = notice.read().as_ref().map(|n| n.id) else {
            return;
        };
        spawn(async move {
            tokio::time::sleep(NOTICE_DURATION).await;
            let mut notice = notice;
            let still_current = notice.peek().as_ref().map(|n| n.id) == Some(id);
            if still_current {
                notice.set(None);
            }
        });
    });

    let current = notice.read().clone();
    match current {
        None => rsx! { div {} },
        Some(n) => {
            let class = match n.kind {
                NoticeKind::Success => "notice notice-success",
                NoticeKind::Error => "notice notice-error",
            };
            rsx! {
                div { class: "{class}", "{n.text}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_ids_differ() {
        let a = Notice::new(NoticeKind::Success, "copied");
        let b = Notice::new(NoticeKind::Success, "copied");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_notice_keeps_kind_and_text() {
        let n = Notice::new(NoticeKind::Error, "copy failed");
        assert_eq!(n.kind, NoticeKind::Error);
        assert_eq!(n.text, "copy failed");
    }
}
