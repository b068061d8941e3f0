//! Root Dioxus application component
//!
//! This module contains the main App component that serves as the root of the UI tree.

use crate::api::ChatClient;
use crate::storage::settings::{load_settings, AppSettings};
use crate::types::transcript::Transcript;
use crate::ui::components::notice::{Notice, NoticeKind};
use crate::ui::Layout;
use dioxus::prelude::*;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;

static MAIN_CSS: Asset = asset!("/assets/main.css");

/// Global application state shared across components
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<ChatClient>,
    /// The ordered message store for this session
    pub transcript: Signal<Transcript>,
    /// Opaque id assigned by the server on the first reply; session-only
    pub conversation_id: Signal<Option<String>>,
    /// Current search term; filters the rendered list, never the store
    pub search_term: Signal<String>,
    pub settings: Signal<AppSettings>,
    /// Bumped on every send; a typewriter task whose epoch is stale stops
    pub reveal_epoch: Arc<AtomicU64>,
    /// Transient notice shown in the overlay, if any
    pub notice: Signal<Option<Notice>>,
}

impl AppState {
    pub fn new() -> Self {
        tracing::info!("AppState initialized");
        let settings = load_settings();
        let api = ChatClient::new(&settings.api_endpoint, settings.request_timeout_secs);

        Self {
            api: Arc::new(api),
            transcript: Signal::new(Transcript::new()),
            conversation_id: Signal::new(None),
            search_term: Signal::new(String::new()),
            settings: Signal::new(settings),
            reveal_epoch: Arc::new(AtomicU64::new(0)),
            notice: Signal::new(None),
        }
    }

    /// Show a transient notice, replacing whatever is currently shown
    pub fn notify(&self, kind: NoticeKind, text: impl Into<String>) {
        let mut notice = self.notice;
        notice.set(Some(Notice::new(kind, text)));
    }
}

#[component]
pub fn App() -> Element {
    use_context_provider(AppState::new);

    rsx! {
        document::Title { "Banter" }
        document::Stylesheet { href: MAIN_CSS }
        Layout {}
    }
}
