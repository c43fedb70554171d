use chrono::{DateTime, Local};
use gloo_net::http::Request;
use log::{error, warn};
use serde::Serialize;
use serde_json::Value;

use crate::config::{self, storage_keys};
use crate::error::ChatError;
use crate::i18n::{t, Language, Text};
use crate::prefs::storage::KeyValueStore;

pub const SEND_ACTION: &str = "sendMessage";

/// Keys checked, in order, for the reply text in a webhook response object.
const REPLY_KEYS: [&str; 6] = ["output", "text", "message", "response", "reply", "answer"];

pub const APOLOGY: Text = t(
    "Entschuldigung, es ist ein Fehler aufgetreten. Bitte versuchen Sie es später erneut oder rufen Sie uns an.",
    "Sorry, something went wrong. Please try again later or give us a call.",
);

pub const GREETING: Text = t(
    "Moin! Wie können wir Ihnen bei Ihrem Transport helfen?",
    "Hello! How can we help you with your shipment?",
);

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub chat_input: String,
    pub session_id: String,
    pub action: String,
}

impl ChatRequest {
    pub fn new(chat_input: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            chat_input: chat_input.into(),
            session_id: session_id.into(),
            action: SEND_ACTION.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub text: String,
    pub from: Sender,
    pub sent_at: DateTime<Local>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            from: Sender::User,
            sent_at: Local::now(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            from: Sender::Bot,
            sent_at: Local::now(),
        }
    }
}

/// Pulls a display string out of whatever JSON the webhook returned.
pub fn extract_reply(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => non_blank(s),
        Value::Array(items) => items.first().and_then(extract_reply),
        Value::Object(map) => REPLY_KEYS
            .iter()
            .filter_map(|key| map.get(*key))
            .find_map(|v| v.as_str().and_then(non_blank)),
        _ => None,
    }
}

fn non_blank(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Reuses the stored chat session id, creating one on first use.
pub fn session_id(store: &impl KeyValueStore) -> String {
    match store.get(storage_keys::CHAT_SESSION) {
        Ok(Some(id)) if !id.trim().is_empty() => return id,
        Ok(_) => {}
        Err(e) => warn!("Could not read chat session id: {}", e),
    }
    let id = uuid::Uuid::new_v4().to_string();
    if let Err(e) = store.set(storage_keys::CHAT_SESSION, &id) {
        warn!("Could not store chat session id: {}", e);
    }
    id
}

pub async fn send_message(request: &ChatRequest) -> Result<String, ChatError> {
    let response = Request::post(config::get_chat_webhook_url())
        .json(request)
        .map_err(|e| ChatError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| ChatError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ChatError::Status(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| ChatError::Decode(e.to_string()))?;
    parse_reply(&body)
}

/// Parses a raw response body. Plain-text bodies are shown as they are.
pub fn parse_reply(body: &str) -> Result<String, ChatError> {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => extract_reply(&value).ok_or(ChatError::EmptyReply),
        Err(_) if !body.trim().is_empty() && !body.trim_start().starts_with(|c: char| c == '{' || c == '[') => {
            Ok(body.trim().to_string())
        }
        Err(e) => Err(ChatError::Decode(e.to_string())),
    }
}

/// Sends and always yields something to show: the reply or the apology.
pub async fn reply_or_apology(request: ChatRequest, lang: Language) -> String {
    match send_message(&request).await {
        Ok(reply) => reply,
        Err(e) => {
            error!("Chat request failed: {}", e);
            APOLOGY.get(lang).to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::storage::MemoryStorage;
    use serde_json::json;

    #[test]
    fn request_uses_webhook_field_names() {
        let body = serde_json::to_value(ChatRequest::new("Hallo", "abc")).unwrap();
        assert_eq!(
            body,
            json!({ "chatInput": "Hallo", "sessionId": "abc", "action": "sendMessage" })
        );
    }

    #[test]
    fn extracts_known_shapes() {
        assert_eq!(extract_reply(&json!({ "output": "Hi" })).as_deref(), Some("Hi"));
        assert_eq!(extract_reply(&json!({ "text": " Hi " })).as_deref(), Some("Hi"));
        assert_eq!(extract_reply(&json!([{ "message": "Hi" }])).as_deref(), Some("Hi"));
        assert_eq!(extract_reply(&json!("Hi")).as_deref(), Some("Hi"));
        assert_eq!(
            extract_reply(&json!({ "output": "", "response": "second" })).as_deref(),
            Some("second")
        );
    }

    #[test]
    fn unknown_shapes_yield_nothing() {
        assert_eq!(extract_reply(&json!({ "data": "Hi" })), None);
        assert_eq!(extract_reply(&json!([])), None);
        assert_eq!(extract_reply(&json!(42)), None);
        assert_eq!(extract_reply(&json!({ "output": 3 })), None);
    }

    #[test]
    fn parse_reply_handles_bodies() {
        assert_eq!(parse_reply(r#"{"output":"Gern!"}"#).unwrap(), "Gern!");
        assert_eq!(parse_reply("plain answer").unwrap(), "plain answer");
        assert!(matches!(parse_reply(r#"{"foo":1}"#), Err(ChatError::EmptyReply)));
        assert!(matches!(parse_reply("{broken"), Err(ChatError::Decode(_))));
        assert!(matches!(parse_reply(""), Err(ChatError::Decode(_))));
    }

    #[test]
    fn session_id_is_created_once() {
        let store = MemoryStorage::default();
        let first = session_id(&store);
        assert_eq!(first.len(), 36);
        assert_eq!(session_id(&store), first);
    }
}
