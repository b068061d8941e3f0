//! UI components for Banter
//!
//! This module contains all user interface components built with Dioxus.

pub mod chat;
pub mod components;

use crate::app::AppState;
use chat::ChatView;
use components::notice::NoticeHost;
use dioxus::prelude::*;

/// Top-level layout: header with title and search, the chat view, and the
/// transient notice overlay.
#[component]
pub fn Layout() -> Element {
    let app_state = use_context::<AppState>();
    let mut search_term = app_state.search_term;

    rsx! {
        div { class: "app-shell",
            header { class: "app-header",
                h1 { class: "app-title", "Banter" }

                div { class: "search-box",
                    svg {
                        class: "search-icon",
                        width: "14",
                        height: "14",
                        view_box: "0 0 24 24",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "2",
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        circle { cx: "11", cy: "11", r: "8" }
                        line { x1: "21", y1: "21", x2: "16.65", y2: "16.65" }
                    }
                    input {
                        class: "search-input",
                        r#type: "text",
                        placeholder: "Search the conversation",
                        value: "{search_term}",
                        oninput: move |evt| search_term.set(evt.value()),
                    }
                }
            }

            ChatView {}
            NoticeHost {}
        }
    }
}
