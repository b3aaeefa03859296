use serde_json::{Value, json};

use crate::error::SkillError;
use crate::serialize::{Serializable, tagged};

/// Plain text balloon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleText {
    pub text: String,
}

impl SimpleText {
    pub const TAG: &'static str = "simpleText";

    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub(crate) fn body(&self) -> Value {
        json!({"text": self.text})
    }
}

impl From<&str> for SimpleText {
    fn from(text: &str) -> Self {
        SimpleText::new(text)
    }
}

impl From<String> for SimpleText {
    fn from(text: String) -> Self {
        SimpleText::new(text)
    }
}

impl Serializable for SimpleText {
    fn to_value(&self) -> Result<Value, SkillError> {
        Ok(tagged(Self::TAG, self.body()))
    }
}

/// Single image balloon. Both the URL and the alt text are mandatory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleImage {
    pub image_url: String,
    pub alt_text: String,
}

impl SimpleImage {
    pub const TAG: &'static str = "simpleImage";

    pub fn new(image_url: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            alt_text: alt_text.into(),
        }
    }

    pub(crate) fn body(&self) -> Value {
        json!({"imageUrl": self.image_url, "altText": self.alt_text})
    }
}

impl Serializable for SimpleImage {
    fn to_value(&self) -> Result<Value, SkillError> {
        Ok(tagged(Self::TAG, self.body()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn simple_text_is_tagged() {
        assert_eq!(
            SimpleText::new("hi").to_value().unwrap(),
            json!({"simpleText": {"text": "hi"}})
        );
    }

    #[test]
    fn simple_image_carries_exactly_the_mandatory_keys() {
        assert_eq!(
            SimpleImage::new("u", "a").to_value().unwrap(),
            json!({"simpleImage": {"imageUrl": "u", "altText": "a"}})
        );
    }
}
