use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const RATE_LIMITED_MESSAGE: &str = "Too many requests. Please wait a moment and try again.";
pub const SUBSCRIPTION_FAILED: &str = "Subscription failed";
pub const UNKNOWN_ERROR: &str = "Unknown error";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionRequest {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRequest {
    pub event_title: String,
    pub event_description: String,
    /// Unix seconds; serialised as `null` when the form left it blank.
    pub event_datetime: Option<i64>,
    pub location: String,
    pub category: String,
}

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: ReplyBody,
}

impl Reply {
    pub fn new(status: u16, raw: impl Into<String>) -> Self {
        Self {
            status,
            body: ReplyBody::parse(raw),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplyBody {
    pub message: Option<String>,
    pub error: Option<String>,
    pub event_id: Option<String>,
    pub raw: String,
}

impl ReplyBody {
    /// Never fails: an empty or non-JSON body simply carries no fields.
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let mut body = ReplyBody::default();
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(map)) => {
                let field = |key: &str| {
                    map.get(key)
                        .and_then(|v| v.as_str())
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                };
                body.message = field("message");
                body.error = field("error");
                body.event_id = field("event_id");
            }
            Ok(Value::String(text)) if !text.is_empty() => body.message = Some(text),
            _ => {}
        }
        body.raw = raw;
        body
    }

    /// `message`, else the raw body text.
    pub fn display_message(&self) -> String {
        self.message.clone().unwrap_or_else(|| self.raw.trim().to_string())
    }

    /// `error`, else `message`, else `fallback`.
    pub fn error_text(&self, fallback: &str) -> String {
        self.error
            .as_deref()
            .or(self.message.as_deref())
            .unwrap_or(fallback)
            .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscribeOutcome {
    Subscribed(String),
    RateLimited,
    Failed(String),
}

impl SubscribeOutcome {
    pub fn from_reply(reply: &Reply) -> Self {
        if reply.is_success() {
            SubscribeOutcome::Subscribed(reply.body.display_message())
        } else if reply.status == 429 {
            SubscribeOutcome::RateLimited
        } else {
            SubscribeOutcome::Failed(reply.body.error_text(SUBSCRIPTION_FAILED))
        }
    }

    /// Text shown in the form's feedback area.
    pub fn text(&self) -> &str {
        match self {
            SubscribeOutcome::Subscribed(message) | SubscribeOutcome::Failed(message) => message,
            SubscribeOutcome::RateLimited => RATE_LIMITED_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    Created { event_id: Option<String> },
    Failed(String),
}

impl EventOutcome {
    pub fn from_reply(reply: &Reply) -> Self {
        if reply.is_success() {
            EventOutcome::Created {
                event_id: reply.body.event_id.clone(),
            }
        } else {
            EventOutcome::Failed(reply.body.error_text(UNKNOWN_ERROR))
        }
    }
}
