//! Top-level skill response envelope.

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::components::{Component, QuickReply};
use crate::error::SkillError;
use crate::serialize::{Serializable, display_json};
use crate::template::Template;
use crate::warning::Warning;

/// Protocol version emitted by default.
pub const VERSION: &str = "2.6";

/// The document handed back to the platform: protocol version, an optional
/// [`Template`], and two opaque pass-through payloads whose shape belongs to
/// the integrating application.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub version: String,
    pub template: Option<Template>,
    pub context: Option<Value>,
    pub data: Option<Value>,
}

impl Default for Response {
    fn default() -> Self {
        Self {
            version: VERSION.to_string(),
            template: None,
            context: None,
            data: None,
        }
    }
}

impl Response {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_template(template: Template) -> Self {
        Self {
            template: Some(template),
            ..Self::default()
        }
    }

    /// Builds a response straight from outputs and quick replies, both
    /// coercible from strings. Quick replies without any output component
    /// are structurally meaningless and rejected here, at construction.
    pub fn compose(
        outputs: impl IntoIterator<Item = impl Into<Component>>,
        quick_replies: impl IntoIterator<Item = impl Into<QuickReply>>,
    ) -> Result<Self, SkillError> {
        let outputs: Vec<Component> = outputs.into_iter().map(Into::into).collect();
        let quick_replies: Vec<QuickReply> = quick_replies.into_iter().map(Into::into).collect();
        if outputs.is_empty() && !quick_replies.is_empty() {
            return Err(SkillError::structure(
                "quick replies require at least one output component",
            ));
        }
        let template = if outputs.is_empty() {
            None
        } else {
            Some(Template {
                outputs,
                quick_replies,
            })
        };
        Ok(Self {
            template,
            ..Self::default()
        })
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn template(mut self, template: Template) -> Self {
        self.template = Some(template);
        self
    }

    /// Opaque session-context payload from the integrating application.
    pub fn context(mut self, context: impl Into<Value>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Opaque free-form data payload from the integrating application.
    pub fn data(mut self, data: impl Into<Value>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Soft violations recorded anywhere in the template.
    pub fn warnings(&self) -> Vec<&Warning> {
        self.template
            .as_ref()
            .map(Template::warnings)
            .unwrap_or_default()
    }
}

impl Serializable for Response {
    fn to_value(&self) -> Result<Value, SkillError> {
        let mut out = Map::new();
        out.insert("version".to_string(), Value::String(self.version.clone()));
        if let Some(template) = &self.template {
            out.insert("template".to_string(), template.to_value()?);
        }
        if let Some(context) = &self.context {
            out.insert("context".to_string(), context.to_value()?);
        }
        if let Some(data) = &self.data {
            out.insert("data".to_string(), data.to_value()?);
        }
        Ok(Value::Object(out))
    }
}

impl Serialize for Response {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_json(self.to_value(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_response_emits_only_the_version() {
        assert_eq!(
            Response::new().to_value().unwrap(),
            json!({"version": "2.6"})
        );
    }

    #[test]
    fn quick_replies_without_outputs_fail_at_construction() {
        let err = Response::compose(Vec::<Component>::new(), ["hi"]).unwrap_err();
        assert!(matches!(err, SkillError::Structure(_)));
    }

    #[test]
    fn compose_builds_a_full_template() {
        let response = Response::compose(["Hello!"], ["More"]).unwrap();
        let value = response.to_value().unwrap();
        assert_eq!(
            value["template"]["outputs"][0],
            json!({"simpleText": {"text": "Hello!"}})
        );
        assert_eq!(value["template"]["quickReplies"][0]["label"], "More");
    }

    #[test]
    fn context_and_data_pass_through_untouched() {
        let response = Response::compose(["ok"], Vec::<QuickReply>::new())
            .unwrap()
            .context(json!({"session": {"values": [1, 2]}}))
            .data(json!({"latency_ms": 12}));
        let value = response.to_value().unwrap();
        assert_eq!(value["context"], json!({"session": {"values": [1, 2]}}));
        assert_eq!(value["data"], json!({"latency_ms": 12}));
    }

    #[test]
    fn absent_members_are_omitted() {
        let value = Response::new().to_value().unwrap();
        assert!(value.get("template").is_none());
        assert!(value.get("context").is_none());
        assert!(value.get("data").is_none());
    }

    #[test]
    fn version_override_is_emitted() {
        let response = Response::new().version("2.0");
        assert_eq!(response.to_value().unwrap()["version"], "2.0");
    }
}
