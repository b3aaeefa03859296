//! The ordered outputs plus quick replies making up one skill response.

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::components::{Component, QuickReply};
use crate::error::SkillError;
use crate::serialize::{Serializable, display_json};
use crate::warning::Warning;

/// The platform rejects templates with more output components than this.
pub const MAX_OUTPUTS: usize = 3;
/// The platform rejects templates with more quick replies than this.
pub const MAX_QUICK_REPLIES: usize = 10;

/// Ordered sequence of output components plus optional quick replies.
///
/// Components and quick replies both coerce from bare strings, so
/// `Template::new().output("Hello!").quick_reply("More")` is a complete
/// template. Cardinality contracts (at least one output, platform limits)
/// are checked at serialization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Template {
    pub outputs: Vec<Component>,
    pub quick_replies: Vec<QuickReply>,
}

impl Template {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(mut self, component: impl Into<Component>) -> Self {
        self.outputs.push(component.into());
        self
    }

    pub fn outputs(mut self, components: impl IntoIterator<Item = impl Into<Component>>) -> Self {
        self.outputs.extend(components.into_iter().map(Into::into));
        self
    }

    pub fn quick_reply(mut self, reply: impl Into<QuickReply>) -> Self {
        self.quick_replies.push(reply.into());
        self
    }

    pub fn quick_replies(
        mut self,
        replies: impl IntoIterator<Item = impl Into<QuickReply>>,
    ) -> Self {
        self.quick_replies.extend(replies.into_iter().map(Into::into));
        self
    }

    /// Soft violations recorded on any output component.
    pub fn warnings(&self) -> Vec<&Warning> {
        let mut out = Vec::new();
        for component in &self.outputs {
            component.collect_warnings(&mut out);
        }
        out
    }
}

impl Serializable for Template {
    fn to_value(&self) -> Result<Value, SkillError> {
        if self.outputs.is_empty() {
            return Err(SkillError::structure(
                "a skill template must carry at least one output component",
            ));
        }
        if self.outputs.len() > MAX_OUTPUTS {
            return Err(SkillError::structure(format!(
                "a skill template allows at most {MAX_OUTPUTS} output components ({} given)",
                self.outputs.len()
            )));
        }
        if self.quick_replies.len() > MAX_QUICK_REPLIES {
            return Err(SkillError::structure(format!(
                "a skill template allows at most {MAX_QUICK_REPLIES} quick replies ({} given)",
                self.quick_replies.len()
            )));
        }
        let mut out = Map::new();
        let outputs = self
            .outputs
            .iter()
            .map(Serializable::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        out.insert("outputs".to_string(), Value::Array(outputs));
        if !self.quick_replies.is_empty() {
            let replies = self
                .quick_replies
                .iter()
                .map(Serializable::to_value)
                .collect::<Result<Vec<_>, _>>()?;
            out.insert("quickReplies".to_string(), Value::Array(replies));
        }
        Ok(Value::Object(out))
    }
}

impl Serialize for Template {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_json(self.to_value(), f)
    }
}
