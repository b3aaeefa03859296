//! Buttons and quick replies, including the per-action payload contracts.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::components::link::Link;
use crate::error::SkillError;
use crate::serialize::{Serializable, insert_opt_str};

/// What tapping a button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum ButtonAction {
    /// Posts `message_text` (or the label) into the chat.
    #[default]
    Message,
    /// Opens `web_link_url` in a browser.
    WebLink,
    /// Opens the per-OS deep link in `os_link`.
    OsLink,
    /// Dials `phone_number`.
    Phone,
    /// Jumps to the bot block identified by `block_id`.
    Block,
    /// Opens the platform share sheet.
    Share,
    /// Connects the user to a human operator.
    Operator,
}

impl ButtonAction {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonAction::Message => "message",
            ButtonAction::WebLink => "webLink",
            ButtonAction::OsLink => "osLink",
            ButtonAction::Phone => "phone",
            ButtonAction::Block => "block",
            ButtonAction::Share => "share",
            ButtonAction::Operator => "operator",
        }
    }
}

/// Card button. Each action kind has its own payload field, checked against
/// the action at serialization time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Button {
    pub label: String,
    pub action: ButtonAction,
    pub message_text: Option<String>,
    pub web_link_url: Option<String>,
    pub os_link: Option<Link>,
    pub phone_number: Option<String>,
    pub block_id: Option<String>,
    pub extra: Option<Value>,
}

impl Button {
    pub fn message(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn web_link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::WebLink,
            web_link_url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn os_link(label: impl Into<String>, link: impl Into<Link>) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::OsLink,
            os_link: Some(link.into()),
            ..Self::default()
        }
    }

    pub fn phone(label: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::Phone,
            phone_number: Some(number.into()),
            ..Self::default()
        }
    }

    pub fn block(label: impl Into<String>, block_id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::Block,
            block_id: Some(block_id.into()),
            ..Self::default()
        }
    }

    pub fn share(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::Share,
            ..Self::default()
        }
    }

    pub fn operator(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::Operator,
            ..Self::default()
        }
    }

    pub fn message_text(mut self, text: impl Into<String>) -> Self {
        self.message_text = Some(text.into());
        self
    }

    pub fn extra(mut self, extra: Value) -> Self {
        self.extra = Some(extra);
        self
    }

    fn check_payload(&self) -> Result<(), SkillError> {
        let missing = match self.action {
            ButtonAction::WebLink if self.web_link_url.is_none() => Some("web_link_url"),
            ButtonAction::OsLink if self.os_link.is_none() => Some("os_link"),
            ButtonAction::Phone if self.phone_number.is_none() => Some("phone_number"),
            ButtonAction::Block if self.block_id.is_none() => Some("block_id"),
            _ => None,
        };
        match missing {
            Some(field) => Err(SkillError::structure(format!(
                "{field} must be specified when button action is \"{}\"",
                self.action.as_str()
            ))),
            None => Ok(()),
        }
    }
}

/// A bare string is shorthand for a message button echoing its label.
impl From<&str> for Button {
    fn from(label: &str) -> Self {
        Button::message(label).message_text(label)
    }
}

impl From<String> for Button {
    fn from(label: String) -> Self {
        let text = label.clone();
        Button::message(label).message_text(text)
    }
}

impl Serializable for Button {
    fn to_value(&self) -> Result<Value, SkillError> {
        self.check_payload()?;
        let mut out = Map::new();
        out.insert("label".to_string(), Value::String(self.label.clone()));
        out.insert(
            "action".to_string(),
            Value::String(self.action.as_str().to_string()),
        );
        insert_opt_str(&mut out, "messageText", &self.message_text);
        insert_opt_str(&mut out, "webLinkUrl", &self.web_link_url);
        if let Some(os_link) = &self.os_link {
            out.insert("osLink".to_string(), os_link.to_value()?);
        }
        insert_opt_str(&mut out, "phoneNumber", &self.phone_number);
        insert_opt_str(&mut out, "blockId", &self.block_id);
        if let Some(extra) = &self.extra {
            out.insert("extra".to_string(), extra.clone());
        }
        Ok(Value::Object(out))
    }
}

/// What tapping a quick reply does. Only message and block jumps exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum QuickReplyAction {
    #[default]
    Message,
    Block,
}

impl QuickReplyAction {
    pub fn as_str(self) -> &'static str {
        match self {
            QuickReplyAction::Message => "message",
            QuickReplyAction::Block => "block",
        }
    }
}

/// Suggested-reply chip shown alongside a response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuickReply {
    pub label: String,
    pub message_text: Option<String>,
    pub action: QuickReplyAction,
    pub block_id: Option<String>,
    pub extra: Option<Value>,
}

impl QuickReply {
    pub fn new(label: impl Into<String>, message_text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            message_text: Some(message_text.into()),
            ..Self::default()
        }
    }

    pub fn block(label: impl Into<String>, block_id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: QuickReplyAction::Block,
            block_id: Some(block_id.into()),
            ..Self::default()
        }
    }

    pub fn message_text(mut self, text: impl Into<String>) -> Self {
        self.message_text = Some(text.into());
        self
    }

    pub fn action(mut self, action: QuickReplyAction) -> Self {
        self.action = action;
        self
    }

    pub fn block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = Some(block_id.into());
        self
    }

    pub fn extra(mut self, extra: Value) -> Self {
        self.extra = Some(extra);
        self
    }
}

/// A bare string is shorthand for a message quick reply whose label doubles
/// as the message text.
impl From<&str> for QuickReply {
    fn from(label: &str) -> Self {
        QuickReply::new(label, label)
    }
}

impl From<String> for QuickReply {
    fn from(label: String) -> Self {
        let text = label.clone();
        QuickReply::new(label, text)
    }
}

impl Serializable for QuickReply {
    fn to_value(&self) -> Result<Value, SkillError> {
        if self.action == QuickReplyAction::Block && self.block_id.is_none() {
            return Err(SkillError::structure(
                "block_id must be specified when quick reply action is \"block\"",
            ));
        }
        let mut out = Map::new();
        out.insert("label".to_string(), Value::String(self.label.clone()));
        out.insert(
            "action".to_string(),
            Value::String(self.action.as_str().to_string()),
        );
        insert_opt_str(&mut out, "messageText", &self.message_text);
        insert_opt_str(&mut out, "blockId", &self.block_id);
        if let Some(extra) = &self.extra {
            out.insert("extra".to_string(), extra.clone());
        }
        Ok(Value::Object(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_coerces_to_message_button() {
        let button = Button::from("order");
        assert_eq!(
            button.to_value().unwrap(),
            json!({"label": "order", "action": "message", "messageText": "order"})
        );
    }

    #[test]
    fn web_link_button_serializes_url() {
        let button = Button::web_link("open", "https://example.com");
        assert_eq!(
            button.to_value().unwrap(),
            json!({"label": "open", "action": "webLink", "webLinkUrl": "https://example.com"})
        );
    }

    #[test]
    fn web_link_without_url_is_a_structure_error() {
        let mut button = Button::message("open");
        button.action = ButtonAction::WebLink;
        let err = button.to_value().unwrap_err();
        assert!(matches!(err, SkillError::Structure(_)));
        assert!(err.to_string().contains("web_link_url"));
    }

    #[test]
    fn phone_without_number_is_a_structure_error() {
        let mut button = Button::message("call");
        button.action = ButtonAction::Phone;
        assert!(button.to_value().is_err());
    }

    #[test]
    fn os_link_coerces_from_string() {
        let button = Button::os_link("open app", "https://example.com/app");
        let value = button.to_value().unwrap();
        assert_eq!(value["osLink"], json!({"web": "https://example.com/app"}));
    }

    #[test]
    fn share_button_needs_no_payload() {
        let button = Button::share("share this");
        assert_eq!(
            button.to_value().unwrap(),
            json!({"label": "share this", "action": "share"})
        );
    }

    #[test]
    fn block_quick_reply_requires_block_id() {
        let reply = QuickReply::new("more", "more").action(QuickReplyAction::Block);
        let err = reply.to_value().unwrap_err();
        assert!(matches!(err, SkillError::Structure(_)));

        let reply = reply.block_id("b-42");
        assert_eq!(reply.to_value().unwrap()["blockId"], "b-42");
    }

    #[test]
    fn string_coerces_to_quick_reply() {
        let reply = QuickReply::from("yes");
        assert_eq!(
            reply.to_value().unwrap(),
            json!({"label": "yes", "action": "message", "messageText": "yes"})
        );
    }
}
