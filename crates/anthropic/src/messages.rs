use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Body of `POST /v1/messages`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MessagesRequest {
    pub model: String,
    pub max_tokens: u32,
    pub messages: Vec<Message>,
}

/// One block of the response `content` array.
///
/// Tool use, thinking and any future block kinds collapse into `Other`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text { text: String },
    #[serde(other)]
    Other,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MessagesResponse {
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

impl MessagesResponse {
    /// Text of the first textual block, if the response carries one.
    pub fn first_text(&self) -> Option<&str> {
        self.content.iter().find_map(|block| match block {
            ContentBlock::Text { text } => Some(text.as_str()),
            ContentBlock::Other => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serialises_single_user_turn() {
        let req = MessagesRequest {
            model: "claude-3-5-sonnet-20241022".into(),
            max_tokens: 300,
            messages: vec![Message::user("hello")],
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "model": "claude-3-5-sonnet-20241022",
                "max_tokens": 300,
                "messages": [{ "role": "user", "content": "hello" }]
            })
        );
    }

    #[test]
    fn first_text_skips_unknown_blocks() {
        let res: MessagesResponse = serde_json::from_value(serde_json::json!({
            "id": "msg_1",
            "content": [
                { "type": "tool_use", "id": "t", "name": "x", "input": {} },
                { "type": "text", "text": "  You call that a plan?  " }
            ]
        }))
        .unwrap();
        assert_eq!(res.first_text(), Some("  You call that a plan?  "));
    }

    #[test]
    fn missing_content_has_no_text() {
        let res: MessagesResponse = serde_json::from_str(r#"{"id":"msg_2"}"#).unwrap();
        assert_eq!(res.first_text(), None);
    }
}
