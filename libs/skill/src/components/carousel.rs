//! Horizontally scrolling card carousel.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::components::Component;
use crate::components::card::{BasicCard, CommerceCard};
use crate::components::link::Thumbnail;
use crate::error::SkillError;
use crate::serialize::{Serializable, insert_opt_str, tagged};
use crate::warning::Warning;

/// The single card type a carousel is declared to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum CarouselType {
    #[default]
    BasicCard,
    CommerceCard,
}

impl CarouselType {
    pub fn as_str(self) -> &'static str {
        match self {
            CarouselType::BasicCard => BasicCard::TAG,
            CarouselType::CommerceCard => CommerceCard::TAG,
        }
    }
}

/// Optional header shown above the carousel items.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselHeader {
    pub title: String,
    pub description: Option<String>,
    pub thumbnail: Option<Thumbnail>,
}

impl CarouselHeader {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            thumbnail: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn thumbnail(mut self, thumbnail: Thumbnail) -> Self {
        self.thumbnail = Some(thumbnail);
        self
    }
}

/// A bare string is shorthand for a title-only header.
impl From<&str> for CarouselHeader {
    fn from(title: &str) -> Self {
        CarouselHeader::new(title)
    }
}

impl From<String> for CarouselHeader {
    fn from(title: String) -> Self {
        CarouselHeader::new(title)
    }
}

impl Serializable for CarouselHeader {
    fn to_value(&self) -> Result<Value, SkillError> {
        let mut out = Map::new();
        out.insert("title".to_string(), Value::String(self.title.clone()));
        insert_opt_str(&mut out, "description", &self.description);
        if let Some(thumbnail) = &self.thumbnail {
            out.insert("thumbnail".to_string(), thumbnail.to_value()?);
        }
        Ok(Value::Object(out))
    }
}

/// Ordered, homogeneous sequence of cards.
///
/// Items are checked against the declared type when they are pushed, so
/// serialization can flatten each item's body without ever hitting a
/// mismatched tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    pub kind: CarouselType,
    pub header: Option<CarouselHeader>,
    items: Vec<Component>,
}

impl Carousel {
    pub const TAG: &'static str = "carousel";

    pub fn new(kind: CarouselType) -> Self {
        Self {
            kind,
            header: None,
            items: Vec::new(),
        }
    }

    pub fn basic_cards(cards: impl IntoIterator<Item = BasicCard>) -> Self {
        let mut carousel = Self::new(CarouselType::BasicCard);
        carousel
            .items
            .extend(cards.into_iter().map(Component::BasicCard));
        carousel
    }

    pub fn commerce_cards(cards: impl IntoIterator<Item = CommerceCard>) -> Self {
        let mut carousel = Self::new(CarouselType::CommerceCard);
        carousel
            .items
            .extend(cards.into_iter().map(Component::CommerceCard));
        carousel
    }

    /// Adds a card, rejecting any component whose natural tag does not match
    /// the declared carousel type.
    pub fn push(mut self, item: impl Into<Component>) -> Result<Self, SkillError> {
        let item = item.into();
        if item.tag() != self.kind.as_str() {
            return Err(SkillError::structure(format!(
                "cannot add a {} item to a {} carousel",
                item.tag(),
                self.kind.as_str()
            )));
        }
        self.items.push(item);
        Ok(self)
    }

    pub fn header(mut self, header: impl Into<CarouselHeader>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn items(&self) -> &[Component] {
        &self.items
    }

    pub(crate) fn collect_warnings<'a>(&'a self, out: &mut Vec<&'a Warning>) {
        for item in &self.items {
            item.collect_warnings(out);
        }
    }

    pub(crate) fn body(&self) -> Result<Value, SkillError> {
        if self.items.is_empty() {
            return Err(SkillError::structure(
                "a carousel must contain at least one item",
            ));
        }
        let mut out = Map::new();
        out.insert(
            "type".to_string(),
            Value::String(self.kind.as_str().to_string()),
        );
        // items go in untagged; the carousel's declared type covers them all
        let items = self
            .items
            .iter()
            .map(Component::body_value)
            .collect::<Result<Vec<_>, _>>()?;
        out.insert("items".to_string(), Value::Array(items));
        if let Some(header) = &self.header {
            out.insert("header".to_string(), header.to_value()?);
        }
        Ok(Value::Object(out))
    }
}

impl Serializable for Carousel {
    fn to_value(&self) -> Result<Value, SkillError> {
        Ok(tagged(Self::TAG, self.body()?))
    }
}
