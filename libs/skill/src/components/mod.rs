//! Output components a skill response can contain, leaf records included.

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::SkillError;
use crate::serialize::{Serializable, display_json};
use crate::warning::Warning;

pub mod button;
pub mod card;
pub mod carousel;
pub mod link;
pub mod text;

pub use button::{Button, ButtonAction, QuickReply, QuickReplyAction};
pub use card::{BasicCard, CommerceCard, ListCard, ListItem};
pub use carousel::{Carousel, CarouselHeader, CarouselType};
pub use link::{Link, Profile, Thumbnail};
pub use text::{SimpleImage, SimpleText};

/// Closed set of output blocks a skill template can carry.
///
/// A bare string converts to a [`SimpleText`], so plain text can stand in
/// anywhere a component is expected.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    SimpleText(SimpleText),
    SimpleImage(SimpleImage),
    BasicCard(BasicCard),
    CommerceCard(CommerceCard),
    ListCard(ListCard),
    Carousel(Carousel),
}

impl Component {
    /// The platform's single-key tag for this component type.
    pub fn tag(&self) -> &'static str {
        match self {
            Component::SimpleText(_) => SimpleText::TAG,
            Component::SimpleImage(_) => SimpleImage::TAG,
            Component::BasicCard(_) => BasicCard::TAG,
            Component::CommerceCard(_) => CommerceCard::TAG,
            Component::ListCard(_) => ListCard::TAG,
            Component::Carousel(_) => Carousel::TAG,
        }
    }

    /// Soft violations recorded anywhere in this component tree.
    pub fn warnings(&self) -> Vec<&Warning> {
        let mut out = Vec::new();
        self.collect_warnings(&mut out);
        out
    }

    pub(crate) fn collect_warnings<'a>(&'a self, out: &mut Vec<&'a Warning>) {
        match self {
            Component::BasicCard(card) => out.extend(card.warnings()),
            Component::CommerceCard(card) => out.extend(card.warnings()),
            Component::Carousel(carousel) => carousel.collect_warnings(out),
            _ => {}
        }
    }

    /// The component body without its tag, as a carousel embeds it.
    pub(crate) fn body_value(&self) -> Result<Value, SkillError> {
        match self {
            Component::SimpleText(text) => Ok(text.body()),
            Component::SimpleImage(image) => Ok(image.body()),
            Component::BasicCard(card) => card.body(),
            Component::CommerceCard(card) => card.body(),
            Component::ListCard(card) => card.body(),
            Component::Carousel(carousel) => carousel.body(),
        }
    }
}

impl Serializable for Component {
    fn to_value(&self) -> Result<Value, SkillError> {
        match self {
            Component::SimpleText(text) => text.to_value(),
            Component::SimpleImage(image) => image.to_value(),
            Component::BasicCard(card) => card.to_value(),
            Component::CommerceCard(card) => card.to_value(),
            Component::ListCard(card) => card.to_value(),
            Component::Carousel(carousel) => carousel.to_value(),
        }
    }
}

impl Serialize for Component {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        display_json(self.to_value(), f)
    }
}

impl From<SimpleText> for Component {
    fn from(component: SimpleText) -> Self {
        Component::SimpleText(component)
    }
}

impl From<SimpleImage> for Component {
    fn from(component: SimpleImage) -> Self {
        Component::SimpleImage(component)
    }
}

impl From<BasicCard> for Component {
    fn from(component: BasicCard) -> Self {
        Component::BasicCard(component)
    }
}

impl From<CommerceCard> for Component {
    fn from(component: CommerceCard) -> Self {
        Component::CommerceCard(component)
    }
}

impl From<ListCard> for Component {
    fn from(component: ListCard) -> Self {
        Component::ListCard(component)
    }
}

impl From<Carousel> for Component {
    fn from(component: Carousel) -> Self {
        Component::Carousel(component)
    }
}

impl From<&str> for Component {
    fn from(text: &str) -> Self {
        Component::SimpleText(SimpleText::new(text))
    }
}

impl From<String> for Component {
    fn from(text: String) -> Self {
        Component::SimpleText(SimpleText::new(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_coerces_to_simple_text() {
        let component = Component::from("hello");
        assert_eq!(component.tag(), "simpleText");
        assert_eq!(
            component.to_value().unwrap(),
            json!({"simpleText": {"text": "hello"}})
        );
    }

    #[test]
    fn coercion_is_identity_on_components() {
        let component = Component::from("hello");
        let again = Component::from(component.clone());
        assert_eq!(component, again);
    }

    #[test]
    fn display_renders_compact_json() {
        let component = Component::from("hi");
        assert_eq!(
            component.to_string(),
            r#"{"simpleText":{"text":"hi"}}"#
        );
    }

    #[test]
    fn serde_serialize_matches_to_value() {
        let component = Component::from("hi");
        let via_serde = serde_json::to_value(&component).unwrap();
        assert_eq!(via_serde, component.to_value().unwrap());
    }
}
