//! Message display components
//!
//! Splits raw message text into plain-text and fenced-code segments and
//! renders them as paragraphs and copyable code blocks.

use crate::app::AppState;
use crate::types::message::{Message, Role};
use crate::ui::components::notice::NoticeKind;
use dioxus::prelude::*;
use once_cell::sync::Lazy;
use regex::Regex;

// ============================================================================
// Segment renderer
// ============================================================================

/// Non-greedy fenced-code span: opening and closing triple backticks.
/// An unterminated trailing fence is deliberately not matched and renders
/// as literal text (known limitation inherited from the fence grammar).
static FENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```(.*?)```").expect("fence regex compiles"));

/// Runs of blank lines that collapse to a single paragraph break
static PARAGRAPH_BREAK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{2,}").expect("paragraph regex compiles"));

/// A contiguous run of message content, classified for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Code(String),
}

/// Split raw message text into alternating text and code segments.
///
/// Text before, between, and after code fences becomes text segments; fence
/// interiors become code segments with the markers stripped. No escaping or
/// nested-fence handling.
pub fn parse_segments(content: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last = 0;

    for m in FENCE_RE.find_iter(content) {
        if m.start() > last {
            segments.push(Segment::Text(content[last..m.start()].to_string()));
        }
        // Interior of the fence, markers stripped.
        segments.push(Segment::Code(content[m.start() + 3..m.end() - 3].to_string()));
        last = m.end();
    }

    if last < content.len() {
        segments.push(Segment::Text(content[last..].to_string()));
    }

    segments
}

/// Split a text segment into paragraphs of lines.
///
/// One or more blank lines collapse to a paragraph break; within a
/// paragraph, every line break is preserved as an explicit break.
pub fn split_paragraphs(text: &str) -> Vec<Vec<String>> {
    let normalized = text.trim().replace("\r\n", "\n");
    let collapsed = PARAGRAPH_BREAK_RE.replace_all(&normalized, "\n\n");

    collapsed
        .split("\n\n")
        .map(|paragraph| paragraph.split('\n').map(str::to_string).collect())
        .collect()
}

// ============================================================================
// Components
// ============================================================================

/// Write text to the system clipboard through the webview.
///
/// `navigator.clipboard` is feature-detected; a missing API or a rejected
/// write both report failure. No retry.
async fn write_clipboard(text: &str) -> Result<(), String> {
    let mut eval = document::eval(
        r#"
        const text = await dioxus.recv();
        if (!navigator.clipboard || !navigator.clipboard.writeText) {
            console.error("navigator.clipboard is not available in this webview");
            dioxus.send(false);
        } else {
            try {
                await navigator.clipboard.writeText(text);
                dioxus.send(true);
            } catch (err) {
                console.error("clipboard write rejected:", err);
                dioxus.send(false);
            }
        }
        "#,
    );

    eval.send(text)
        .map_err(|e| format!("eval send failed: {e:?}"))?;

    match eval.recv::<bool>().await {
        Ok(true) => Ok(()),
        Ok(false) => Err("clipboard unavailable or write rejected".to_string()),
        Err(e) => Err(format!("eval failed: {e:?}")),
    }
}

/// A fixed-width code block with a copy action
#[component]
pub fn CodeBlock(code: String) -> Element {
    let app_state = use_context::<AppState>();

    let code_for_copy = code.clone();
    let on_copy = move |_| {
        let app_state = app_state.clone();
        let text = code_for_copy.clone();
        spawn(async move {
            match write_clipboard(&text).await {
                Ok(()) => app_state.notify(NoticeKind::Success, "Code copied!"),
                Err(e) => {
                    tracing::error!("Failed to copy code to clipboard: {}", e);
                    app_state.notify(NoticeKind::Error, "Could not copy the code.");
                }
            }
        });
    };

    rsx! {
        div { class: "code-block",
            pre { class: "code-pre",
                code { "{code}" }
            }
            button {
                class: "copy-button",
                title: "Copy code",
                onclick: on_copy,
                svg {
                    width: "14",
                    height: "14",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    rect { x: "9", y: "9", width: "13", height: "13", rx: "2", ry: "2" }
                    path { d: "M5 15H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h9a2 2 0 0 1 2 2v1" }
                }
            }
        }
    }
}

/// Message content renderer: paragraphs with explicit line breaks,
/// interleaved with code blocks
#[component]
fn MessageContent(content: String) -> Element {
    let segments = parse_segments(&content);

    rsx! {
        div { class: "message-content",
            for segment in segments {
                match segment {
                    Segment::Text(text) => rsx! {
                        for lines in split_paragraphs(&text) {
                            p { class: "message-paragraph",
                                for line in lines {
                                    "{line}"
                                    br {}
                                }
                            }
                        }
                    },
                    Segment::Code(code) => rsx! {
                        CodeBlock { code: code }
                    },
                }
            }
        }
    }
}

/// Animated three-dot indicator shown while the assistant is composing
#[component]
fn TypingIndicator() -> Element {
    rsx! {
        div { class: "typing-indicator",
            span { class: "typing-dot", "." }
            span { class: "typing-dot", "." }
            span { class: "typing-dot", "." }
        }
    }
}

#[component]
pub fn MessageBubble(message: Message) -> Element {
    if message.is_typing {
        return rsx! {
            div { class: "message message-assistant",
                TypingIndicator {}
            }
        };
    }

    let bubble_class = match message.role {
        Role::User => "message message-user",
        Role::Assistant => "message message-assistant",
    };

    rsx! {
        div { class: "{bubble_class}",
            MessageContent { content: message.content.clone() }
            div { class: "message-time", "{message.time}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> Segment {
        Segment::Code(s.to_string())
    }

    fn text(s: &str) -> Segment {
        Segment::Text(s.to_string())
    }

    #[test]
    fn test_plain_text_is_one_segment() {
        assert_eq!(parse_segments("hello world"), vec![text("hello world")]);
    }

    #[test]
    fn test_lone_code_block() {
        assert_eq!(parse_segments("```print(1)```"), vec![code("print(1)")]);
    }

    #[test]
    fn test_text_around_code() {
        let segments = parse_segments("before ```let x = 1;``` after");
        assert_eq!(
            segments,
            vec![text("before "), code("let x = 1;"), text(" after")]
        );
    }

    #[test]
    fn test_two_fence_pairs_interleave() {
        let segments = parse_segments("a ```one``` b ```two``` c");
        let codes = segments
            .iter()
            .filter(|s| matches!(s, Segment::Code(_)))
            .count();
        let texts = segments
            .iter()
            .filter(|s| matches!(s, Segment::Text(_)))
            .count();
        assert_eq!(codes, 2);
        assert!(texts <= 3);
        assert_eq!(
            segments,
            vec![text("a "), code("one"), text(" b "), code("two"), text(" c")]
        );
    }

    #[test]
    fn test_segments_reconstruct_the_source() {
        let source = "intro\n```fn main() {}\n```\nmiddle ```x``` end";
        let rebuilt: String = parse_segments(source)
            .iter()
            .map(|s| match s {
                Segment::Text(t) => t.clone(),
                Segment::Code(c) => format!("```{c}```"),
            })
            .collect();
        assert_eq!(rebuilt, source);
    }

    #[test]
    fn test_unterminated_fence_stays_literal() {
        let segments = parse_segments("look: ```no closing fence");
        assert_eq!(segments, vec![text("look: ```no closing fence")]);
    }

    #[test]
    fn test_non_greedy_matching() {
        // Four fences form two pairs, not one outer pair.
        let segments = parse_segments("```a``````b```");
        assert_eq!(segments, vec![code("a"), code("b")]);
    }

    #[test]
    fn test_empty_content_has_no_segments() {
        assert!(parse_segments("").is_empty());
    }

    #[test]
    fn test_paragraphs_split_on_blank_line_runs() {
        let paragraphs = split_paragraphs("first\n\nsecond\n\n\n\nthird");
        assert_eq!(
            paragraphs,
            vec![
                vec!["first".to_string()],
                vec!["second".to_string()],
                vec!["third".to_string()],
            ]
        );
    }

    #[test]
    fn test_line_breaks_preserved_within_paragraph() {
        let paragraphs = split_paragraphs("one\ntwo\nthree");
        assert_eq!(paragraphs.len(), 1);
        // Line count equals source line breaks plus one.
        assert_eq!(paragraphs[0].len(), 3);
    }

    #[test]
    fn test_windows_line_endings_normalized() {
        let paragraphs = split_paragraphs("a\r\n\r\nb\r\nc");
        assert_eq!(
            paragraphs,
            vec![
                vec!["a".to_string()],
                vec!["b".to_string(), "c".to_string()],
            ]
        );
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        let paragraphs = split_paragraphs("\n\n  hello  \n\n");
        assert_eq!(paragraphs, vec![vec!["hello".to_string()]]);
    }
}
