//! Chat history page rendering.
//!
//! The page is a fixed asset (`transcript.html`) with two slots. Rendering
//! serializes the messages and the initials map to JSON and drops them into
//! those slots; no markup is generated here.

use serde::Serialize;

use crate::core::models::Message;
use crate::errors::ChatlogError;
use crate::transcript::initials::UserInitials;

pub const DEFAULT_OUTPUT_FILE: &str = "index.html";

pub const MESSAGES_SLOT: &str = "{{messages_json}}";
pub const INITIALS_SLOT: &str = "{{user_initials_json}}";

const PAGE_TEMPLATE: &str = include_str!("transcript.html");

pub fn render_page(
    messages: &[Message],
    initials: &UserInitials,
) -> Result<String, ChatlogError> {
    render_with_template(PAGE_TEMPLATE, messages, initials)
}

/// Fills both slots of `template` in a single pass, so slot markers that
/// happen to appear inside message text are left alone.
pub fn render_with_template(
    template: &str,
    messages: &[Message],
    initials: &UserInitials,
) -> Result<String, ChatlogError> {
    let (head, rest) = template.split_once(MESSAGES_SLOT).ok_or_else(|| {
        ChatlogError::TemplateError(format!("template is missing {MESSAGES_SLOT}"))
    })?;
    let (middle, tail) = rest.split_once(INITIALS_SLOT).ok_or_else(|| {
        ChatlogError::TemplateError(format!(
            "template is missing {INITIALS_SLOT} after {MESSAGES_SLOT}"
        ))
    })?;

    let messages_json = script_json(messages)?;
    let initials_json = script_json(initials)?;

    let mut page =
        String::with_capacity(template.len() + messages_json.len() + initials_json.len());
    page.push_str(head);
    page.push_str(&messages_json);
    page.push_str(middle);
    page.push_str(&initials_json);
    page.push_str(tail);
    Ok(page)
}

// Angle brackets only occur inside JSON strings, where `\u003c`/`\u003e` decode
// to the same text. No `</script>`, `<!--` or `<script` can reach the parser.
fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ChatlogError> {
    Ok(serde_json::to_string_pretty(value)?
        .replace('<', "\\u003c")
        .replace('>', "\\u003e"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_template_has_both_slots_in_order() {
        let messages_at = PAGE_TEMPLATE.find(MESSAGES_SLOT).unwrap();
        let initials_at = PAGE_TEMPLATE.find(INITIALS_SLOT).unwrap();
        assert!(messages_at < initials_at);
    }

    #[test]
    fn test_slot_marker_inside_message_text_is_not_expanded() {
        let messages = vec![Message::new("Q", INITIALS_SLOT)];
        let initials: UserInitials = [("1", "AB")].into_iter().collect();
        let template = "m={{messages_json}};u={{user_initials_json}};";
        let page = render_with_template(template, &messages, &initials).unwrap();
        assert!(page.contains("\"text\": \"{{user_initials_json}}\""));
        assert!(page.ends_with("u={\n  \"1\": \"AB\"\n};"));
    }

    #[test]
    fn test_missing_slot_is_a_template_error() {
        let err =
            render_with_template("no slots here", &[], &UserInitials::default()).unwrap_err();
        assert!(matches!(err, ChatlogError::TemplateError(_)));
    }

    #[test]
    fn test_script_close_tag_is_escaped() {
        let messages = vec![Message::new("A", "</script><b>hi</b>")];
        let page = render_page(&messages, &UserInitials::default()).unwrap();
        assert!(!page.contains("</script><b>"));
        assert!(page.contains("\\u003c/script\\u003e\\u003cb\\u003ehi"));
    }

    #[test]
    fn test_comment_opener_in_text_stays_out_of_script() {
        let messages = vec![Message::new("Q", "<!--<script>")];
        let initials: UserInitials = [("default", "<!--")].into_iter().collect();
        let page = render_page(&messages, &initials).unwrap();

        let start = page.find("const messages = ").unwrap();
        let end = page.find("const chatMessagesEl").unwrap();
        let blob = &page[start..end];
        assert!(!blob.contains("<!--"));
        assert!(!blob.contains("<script"));
        assert!(!blob.contains('<'));
        assert!(!blob.contains('>'));

        // The template's own closing tag still ends the element.
        assert_eq!(page.matches("</script>").count(), 1);

        let json = blob
            .trim_start_matches("const messages = ")
            .split(";\n")
            .next()
            .unwrap();
        let back: Vec<Message> = serde_json::from_str(json).unwrap();
        assert_eq!(back, messages);
    }
}
