//! Discord interaction wire types and option extraction.
//!
//! Interactions arrive as JSON `{type, data: {name, options: [{name,
//! value}]}}`; responses are either the fixed pong acknowledgment or a
//! type-4 channel message.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Discord's liveness check.
pub const INTERACTION_PING: u8 = 1;
/// A user invoking a slash command.
pub const INTERACTION_APPLICATION_COMMAND: u8 = 2;

const RESPONSE_PONG: u8 = 1;
const RESPONSE_CHANNEL_MESSAGE: u8 = 4;

/// Inbound interaction envelope.
#[derive(Debug, Deserialize)]
pub struct Interaction {
    #[serde(rename = "type")]
    pub kind: u8,
    pub data: Option<InteractionData>,
}

#[derive(Debug, Deserialize)]
pub struct InteractionData {
    pub name: String,
    #[serde(default)]
    pub options: Vec<CommandOption>,
}

#[derive(Debug, Deserialize)]
pub struct CommandOption {
    pub name: String,
    pub value: Value,
}

/// Outbound interaction response.
#[derive(Debug, Serialize)]
pub struct InteractionResponse {
    #[serde(rename = "type")]
    kind: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<ResponseData>,
}

#[derive(Debug, Serialize)]
struct ResponseData {
    content: String,
}

impl InteractionResponse {
    /// Fixed acknowledgment for Discord's liveness ping. No side effects.
    pub fn pong() -> Self {
        Self {
            kind: RESPONSE_PONG,
            data: None,
        }
    }

    /// Plain text channel message.
    pub fn message(content: impl Into<String>) -> Self {
        Self {
            kind: RESPONSE_CHANNEL_MESSAGE,
            data: Some(ResponseData {
                content: content.into(),
            }),
        }
    }
}

/// Collect string command options into a by-name map.
///
/// Options arrive as a list; position carries no meaning.
pub fn options_by_name(options: &[CommandOption]) -> HashMap<String, String> {
    options
        .iter()
        .filter_map(|opt| opt.value.as_str().map(|v| (opt.name.clone(), v.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_application_command() {
        let body = r#"{
            "type": 2,
            "data": {
                "name": "download",
                "options": [
                    {"name": "url", "value": "https://example.test/a.mp4"},
                    {"name": "filename", "value": "a.mp4"}
                ]
            }
        }"#;
        let interaction: Interaction = serde_json::from_str(body).unwrap();
        assert_eq!(interaction.kind, INTERACTION_APPLICATION_COMMAND);

        let data = interaction.data.unwrap();
        assert_eq!(data.name, "download");
        let options = options_by_name(&data.options);
        assert_eq!(options["url"], "https://example.test/a.mp4");
        assert_eq!(options["filename"], "a.mp4");
    }

    #[test]
    fn ping_has_no_data() {
        let interaction: Interaction = serde_json::from_str(r#"{"type":1}"#).unwrap();
        assert_eq!(interaction.kind, INTERACTION_PING);
        assert!(interaction.data.is_none());
    }

    #[test]
    fn pong_serializes_without_data() {
        let json = serde_json::to_string(&InteractionResponse::pong()).unwrap();
        assert_eq!(json, r#"{"type":1}"#);
    }

    #[test]
    fn message_serializes_content() {
        let json = serde_json::to_value(InteractionResponse::message("hi")).unwrap();
        assert_eq!(json["type"], 4);
        assert_eq!(json["data"]["content"], "hi");
    }

    #[test]
    fn non_string_options_are_skipped() {
        let options = vec![
            CommandOption {
                name: "url".into(),
                value: Value::String("https://example.test".into()),
            },
            CommandOption {
                name: "count".into(),
                value: Value::from(3),
            },
        ];
        let map = options_by_name(&options);
        assert_eq!(map.len(), 1);
        assert!(map.contains_key("url"));
    }
}
