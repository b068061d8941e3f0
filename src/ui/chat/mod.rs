//! Chat interface components
//!
//! Contains the main chat view, message display, and input components.

pub mod input;
pub mod message;

use dioxus::prelude::*;
use input::ChatInput;
use message::MessageBubble;
use std::sync::atomic::Ordering;
use std::time::Duration;
use uuid::Uuid;

use crate::app::AppState;
use crate::types::message::Message;
use crate::ui::components::notice::NoticeKind;

#[component]
pub fn ChatView() -> Element {
    let app_state = use_context::<AppState>();
    let transcript = app_state.transcript;
    let is_sending = use_signal(|| false);

    // Keep the newest message in view on every store update, including
    // each typewriter tick.
    use_effect(move || {
        let _ = transcript.read().len();
        document::eval(
            r#"const el = document.getElementById("messages-end");
               if (el) el.scrollIntoView({ behavior: "smooth" });"#,
        );
    });

    // Handler for sending a message
    let handle_send = {
        let app_state = app_state.clone();
        let mut is_sending = is_sending.clone();
        move |text: String| {
            // Explicit single-flight: the input is disabled while a request
            // is pending, and this guard backs that up.
            if is_sending() {
                return;
            }

            let mut transcript = app_state.transcript;
            let Some(user_message) = transcript.write().push_user(&text) else {
                return;
            };
            transcript.write().begin_typing();
            is_sending.set(true);

            // A new send supersedes any typewriter still revealing a
            // previous reply.
            let epoch = app_state.reveal_epoch.fetch_add(1, Ordering::SeqCst) + 1;

            let app_state = app_state.clone();
            let mut is_sending = is_sending.clone();
            spawn(async move {
                let conversation_id = app_state.conversation_id.peek().clone();
                let result = app_state
                    .api
                    .send(conversation_id.as_deref(), &user_message)
                    .await;

                let mut transcript = app_state.transcript;
                match result {
                    Ok(response) => {
                        // Adopt the server-assigned conversation id on the
                        // first successful reply.
                        if let Some(id) = response.conversation_id {
                            let mut conversation = app_state.conversation_id;
                            if conversation.peek().is_none() {
                                tracing::info!("Conversation started: {}", id);
                                conversation.set(Some(id));
                            }
                        }

                        is_sending.set(false);
                        match response.assistant_message {
                            Some(reply) => {
                                let target = transcript.write().begin_reply();
                                let interval = app_state.settings.peek().reveal_interval_ms;
                                reveal_reply(&app_state, target, &reply, interval, epoch).await;
                            }
                            None => transcript.write().clear_typing(),
                        }
                    }
                    Err(e) => {
                        transcript.write().clear_typing();
                        tracing::error!("Chat request failed: {}", e);
                        app_state.notify(NoticeKind::Error, "Could not reach the assistant.");
                        is_sending.set(false);
                    }
                }
            });
        }
    };

    // Snapshot the filtered view outside rsx so the read borrows end
    // before rendering.
    let visible: Vec<Message> = {
        let transcript = transcript.read();
        let term = app_state.search_term.read();
        transcript
            .filtered(&term)
            .into_iter()
            .cloned()
            .collect()
    };

    rsx! {
        div { class: "chat-container",

            // Messages area
            div { class: "messages-container",
                for msg in visible {
                    MessageBubble { key: "{msg.id}", message: msg.clone() }
                }
                div { id: "messages-end" }
            }

            // Input area
            ChatInput {
                on_send: handle_send,
                is_sending: is_sending(),
            }
        }
    }
}

/// Typewriter reveal: one additional character per tick into the message
/// identified by `target`, until the whole reply is shown.
///
/// The task is keyed by the message's stable id rather than "the last
/// message", and checks the shared epoch on every tick: when a newer send
/// has started, the reveal finalizes its message to the full reply text and
/// stops instead of racing the newer reveal.
async fn reveal_reply(app_state: &AppState, target: Uuid, reply: &str, interval_ms: u64, epoch: u64) {
    let mut transcript = app_state.transcript;
    let mut shown = 0usize;

    while shown < reply.len() {
        tokio::time::sleep(Duration::from_millis(interval_ms)).await;

        if app_state.reveal_epoch.load(Ordering::SeqCst) != epoch {
            if let Some(msg) = transcript.write().get_mut(target) {
                msg.content = reply.to_string();
            }
            return;
        }

        let next = next_reveal_boundary(reply, shown);
        if next == shown {
            break;
        }
        shown = next;

        match transcript.write().get_mut(target) {
            Some(msg) => msg.content = reply[..shown].to_string(),
            None => return,
        }
    }
}

/// Byte offset of the revealed prefix after one more tick: advances by one
/// character, not one byte, so multi-byte text never splits mid-character.
fn next_reveal_boundary(reply: &str, shown: usize) -> usize {
    match reply[shown..].chars().next() {
        Some(c) => shown + c.len_utf8(),
        None => shown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_advances_one_char_per_tick() {
        let reply = "hi";
        assert_eq!(next_reveal_boundary(reply, 0), 1);
        assert_eq!(next_reveal_boundary(reply, 1), 2);
        assert_eq!(next_reveal_boundary(reply, 2), 2);
    }

    #[test]
    fn test_reveal_respects_char_boundaries() {
        let reply = "héllo";
        let mut shown = 0;
        let mut prefixes = Vec::new();
        loop {
            let next = next_reveal_boundary(reply, shown);
            if next == shown {
                break;
            }
            shown = next;
            prefixes.push(&reply[..shown]);
        }
        assert_eq!(prefixes, vec!["h", "hé", "hél", "héll", "héllo"]);
    }

    #[test]
    fn test_reveal_ends_with_full_reply() {
        let reply = "final content ✓";
        let mut shown = 0;
        loop {
            let next = next_reveal_boundary(reply, shown);
            if next == shown {
                break;
            }
            shown = next;
        }
        assert_eq!(&reply[..shown], reply);
    }
}
