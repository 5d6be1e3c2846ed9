//! Slack Block Kit payload types
//!
//! Serializable model of the subset of Block Kit the notifier uses.
//! Field names and the `type` tags must match Slack's incoming-webhook
//! contract exactly; they are verified by the serialization tests below.

use serde::Serialize;

/// A text object inside a block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Text {
    /// Plain text, used in header blocks
    PlainText {
        text: String,
        emoji: bool,
    },
    /// Slack-flavored markdown, used in sections and context elements
    Mrkdwn {
        text: String,
    },
}

impl Text {
    /// Plain text with emoji rendering enabled
    pub fn plain(text: impl Into<String>) -> Self {
        Text::PlainText {
            text: text.into(),
            emoji: true,
        }
    }

    /// Slack-flavored markdown text
    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Text::Mrkdwn { text: text.into() }
    }
}

/// A single layout block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Large header line
    Header { text: Text },
    /// Markdown section
    Section { text: Text },
    /// Horizontal rule
    Divider,
    /// Small footer line
    Context { elements: Vec<Text> },
}

/// The webhook request body: a fallback summary plus the block layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    /// Fallback text shown in notifications and unfurls
    pub text: String,
    /// Ordered block layout
    pub blocks: Vec<Block>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_header_block_shape() {
        let block = Block::Header {
            text: Text::plain("Hello"),
        };

        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "header",
                "text": {"type": "plain_text", "text": "Hello", "emoji": true}
            })
        );
    }

    #[test]
    fn test_section_block_shape() {
        let block = Block::Section {
            text: Text::mrkdwn("*bold*"),
        };

        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "section",
                "text": {"type": "mrkdwn", "text": "*bold*"}
            })
        );
    }

    #[test]
    fn test_divider_block_shape() {
        let value = serde_json::to_value(Block::Divider).unwrap();
        assert_eq!(value, json!({"type": "divider"}));
    }

    #[test]
    fn test_context_block_shape() {
        let block = Block::Context {
            elements: vec![Text::mrkdwn("footer")],
        };

        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "context",
                "elements": [{"type": "mrkdwn", "text": "footer"}]
            })
        );
    }

    #[test]
    fn test_message_shape() {
        let message = Message {
            text: "summary".to_string(),
            blocks: vec![Block::Divider],
        };

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(
            value,
            json!({"text": "summary", "blocks": [{"type": "divider"}]})
        );
    }
}
