//! Chat input component - multi-line textarea with send button

use dioxus::prelude::*;

/// Estimate how many rows the textarea needs based on content
fn compute_rows(text: &str) -> usize {
    let newlines = text.chars().filter(|&c| c == '\n').count();
    // Each visual line ~ 70 chars for our input width
    let wrap_lines: usize = text
        .lines()
        .map(|line| {
            if line.is_empty() {
                0
            } else {
                (line.len().saturating_sub(1)) / 70
            }
        })
        .sum();
    let total = newlines + wrap_lines + 1;
    total.clamp(1, 8)
}

#[component]
pub fn ChatInput(on_send: EventHandler<String>, is_sending: bool) -> Element {
    let mut text = use_signal(String::new);

    let handle_keydown = move |evt: KeyboardEvent| {
        if evt.key() == Key::Enter && !evt.modifiers().contains(Modifiers::SHIFT) {
            evt.prevent_default();
            if !is_sending && !text().trim().is_empty() {
                on_send.call(text());
                text.set(String::new());
            }
        }
    };

    let can_send = !is_sending && !text().trim().is_empty();
    let rows = compute_rows(&text());
    let rows_str = format!("{rows}");

    let send_class = if can_send {
        "send-button"
    } else {
        "send-button send-button-disabled"
    };

    rsx! {
        div { class: "input-area",

            div { class: "input-container",

                // Auto-expanding textarea
                textarea {
                    class: "input-textarea",
                    placeholder: "Type your message... (Shift+Enter for a new line)",
                    value: "{text}",
                    oninput: move |evt| text.set(evt.value()),
                    onkeydown: handle_keydown,
                    disabled: is_sending,
                    rows: "{rows_str}",
                }

                button {
                    class: "{send_class}",
                    title: "Send (Enter)",
                    disabled: !can_send,
                    onclick: move |_| {
                        if can_send {
                            on_send.call(text());
                            text.set(String::new());
                        }
                    },
                    svg {
                        width: "16",
                        height: "16",
                        view_box: "0 0 24 24",
                        fill: "currentColor",
                        path { d: "M2.01 21L23 12 2.01 3 2 10l15 2-15 2z" }
                    }
                }
            }

            p { class: "input-hint", "Enter to send, Shift+Enter for a new line" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_row_for_short_text() {
        assert_eq!(compute_rows(""), 1);
        assert_eq!(compute_rows("hello"), 1);
    }

    #[test]
    fn test_rows_grow_with_newlines() {
        assert_eq!(compute_rows("a\nb"), 2);
        assert_eq!(compute_rows("a\nb\nc"), 3);
    }

    #[test]
    fn test_rows_are_clamped() {
        let tall = "x\n".repeat(40);
        assert_eq!(compute_rows(&tall), 8);
    }

    #[test]
    fn test_long_lines_wrap() {
        let long = "x".repeat(200);
        assert!(compute_rows(&long) > 1);
    }
}
