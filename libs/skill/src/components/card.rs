//! Card composites: basic, commerce, and list cards.

use serde_json::{Map, Value};

use crate::components::button::Button;
use crate::components::link::{Link, Profile, Thumbnail};
use crate::error::SkillError;
use crate::serialize::{IntLike, Serializable, insert_opt_int, insert_opt_str, tagged};
use crate::warning::Warning;

/// General-purpose card with an optional thumbnail and buttons.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BasicCard {
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<Thumbnail>,
    pub profile: Option<Profile>,
    pub social: Option<Value>,
    pub buttons: Vec<Button>,
    warnings: Vec<Warning>,
}

impl BasicCard {
    pub const TAG: &'static str = "basicCard";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn thumbnail(mut self, thumbnail: Thumbnail) -> Self {
        self.thumbnail = Some(thumbnail);
        self
    }

    /// Accepted and serialized, but the platform ignores it today.
    pub fn profile(mut self, profile: Profile) -> Self {
        Warning::unsupported_field("basicCard profile is not supported by the platform yet")
            .record(&mut self.warnings);
        self.profile = Some(profile);
        self
    }

    /// Accepted and serialized, but the platform ignores it today.
    pub fn social(mut self, social: Value) -> Self {
        Warning::unsupported_field("basicCard social is not supported by the platform yet")
            .record(&mut self.warnings);
        self.social = Some(social);
        self
    }

    pub fn button(mut self, button: impl Into<Button>) -> Self {
        self.buttons.push(button.into());
        self
    }

    pub fn buttons(mut self, buttons: impl IntoIterator<Item = impl Into<Button>>) -> Self {
        self.buttons.extend(buttons.into_iter().map(Into::into));
        self
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub(crate) fn body(&self) -> Result<Value, SkillError> {
        let mut out = Map::new();
        insert_opt_str(&mut out, "title", &self.title);
        insert_opt_str(&mut out, "description", &self.description);
        if let Some(thumbnail) = &self.thumbnail {
            out.insert("thumbnail".to_string(), thumbnail.to_value()?);
        }
        if let Some(profile) = &self.profile {
            out.insert("profile".to_string(), profile.to_value()?);
        }
        if let Some(social) = &self.social {
            out.insert("social".to_string(), social.clone());
        }
        if !self.buttons.is_empty() {
            let buttons = self
                .buttons
                .iter()
                .map(Serializable::to_value)
                .collect::<Result<Vec<_>, _>>()?;
            out.insert("buttons".to_string(), Value::Array(buttons));
        }
        Ok(Value::Object(out))
    }
}

impl Serializable for BasicCard {
    fn to_value(&self) -> Result<Value, SkillError> {
        Ok(tagged(Self::TAG, self.body()?))
    }
}

/// Product card with price and discount information.
#[derive(Debug, Clone, PartialEq)]
pub struct CommerceCard {
    pub description: String,
    pub price: i64,
    pub currency: String,
    pub discount: Option<i64>,
    pub discount_rate: Option<i64>,
    pub discounted_price: Option<i64>,
    pub thumbnails: Vec<Thumbnail>,
    pub profile: Option<Profile>,
    pub buttons: Vec<Button>,
    warnings: Vec<Warning>,
}

impl CommerceCard {
    pub const TAG: &'static str = "commerceCard";

    /// Thumbnail and button counts outside the platform recommendation
    /// (exactly one thumbnail, one to three buttons) are soft violations:
    /// the card is still built and all supplied values are serialized.
    pub fn new(
        description: impl Into<String>,
        price: impl Into<IntLike>,
        thumbnails: impl IntoIterator<Item = Thumbnail>,
        buttons: impl IntoIterator<Item = impl Into<Button>>,
    ) -> Result<Self, SkillError> {
        let mut warnings = Vec::new();
        let thumbnails: Vec<Thumbnail> = thumbnails.into_iter().collect();
        if thumbnails.len() != 1 {
            Warning::field_constraint(format!(
                "a commerce card should carry exactly one thumbnail ({} given)",
                thumbnails.len()
            ))
            .record(&mut warnings);
        }
        let buttons: Vec<Button> = buttons.into_iter().map(Into::into).collect();
        if !(1..=3).contains(&buttons.len()) {
            Warning::field_constraint(format!(
                "a commerce card should carry 1~3 buttons ({} given)",
                buttons.len()
            ))
            .record(&mut warnings);
        }
        Ok(Self {
            description: description.into(),
            price: price.into().into_int("CommerceCard.price")?,
            currency: "won".to_string(),
            discount: None,
            discount_rate: None,
            discounted_price: None,
            thumbnails,
            profile: None,
            buttons,
            warnings,
        })
    }

    /// Anything other than `"won"` draws a field-constraint warning; the
    /// value is kept as given.
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        let currency = currency.into();
        if currency != "won" {
            Warning::field_constraint(format!("currency should be \"won\", got \"{currency}\""))
                .record(&mut self.warnings);
        }
        self.currency = currency;
        self
    }

    pub fn discount(mut self, discount: impl Into<IntLike>) -> Result<Self, SkillError> {
        self.discount = Some(discount.into().into_int("CommerceCard.discount")?);
        Ok(self)
    }

    pub fn discount_rate(mut self, rate: impl Into<IntLike>) -> Result<Self, SkillError> {
        self.discount_rate = Some(rate.into().into_int("CommerceCard.discount_rate")?);
        Ok(self)
    }

    pub fn discounted_price(mut self, price: impl Into<IntLike>) -> Result<Self, SkillError> {
        self.discounted_price = Some(price.into().into_int("CommerceCard.discounted_price")?);
        Ok(self)
    }

    pub fn profile(mut self, profile: Profile) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub(crate) fn body(&self) -> Result<Value, SkillError> {
        if self.discount_rate.is_some() && self.discounted_price.is_none() {
            return Err(SkillError::structure(
                "discounted_price must be specified when discount_rate is specified",
            ));
        }
        let mut out = Map::new();
        out.insert(
            "description".to_string(),
            Value::String(self.description.clone()),
        );
        out.insert("price".to_string(), Value::from(self.price));
        out.insert("currency".to_string(), Value::String(self.currency.clone()));
        let thumbnails = self
            .thumbnails
            .iter()
            .map(Serializable::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        out.insert("thumbnails".to_string(), Value::Array(thumbnails));
        let buttons = self
            .buttons
            .iter()
            .map(Serializable::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        out.insert("buttons".to_string(), Value::Array(buttons));
        insert_opt_int(&mut out, "discount", self.discount);
        insert_opt_int(&mut out, "discountRate", self.discount_rate);
        insert_opt_int(&mut out, "discountedPrice", self.discounted_price);
        if let Some(profile) = &self.profile {
            out.insert("profile".to_string(), profile.to_value()?);
        }
        Ok(Value::Object(out))
    }
}

impl Serializable for CommerceCard {
    fn to_value(&self) -> Result<Value, SkillError> {
        Ok(tagged(Self::TAG, self.body()?))
    }
}

/// Entry of a [`ListCard`]; also serves as the card header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub link: Option<Link>,
}

impl ListItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            image_url: None,
            link: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn link(mut self, link: impl Into<Link>) -> Self {
        self.link = Some(link.into());
        self
    }
}

/// A bare string is shorthand for a title-only item.
impl From<&str> for ListItem {
    fn from(title: &str) -> Self {
        ListItem::new(title)
    }
}

impl From<String> for ListItem {
    fn from(title: String) -> Self {
        ListItem::new(title)
    }
}

impl Serializable for ListItem {
    fn to_value(&self) -> Result<Value, SkillError> {
        let mut out = Map::new();
        out.insert("title".to_string(), Value::String(self.title.clone()));
        insert_opt_str(&mut out, "description", &self.description);
        insert_opt_str(&mut out, "imageUrl", &self.image_url);
        if let Some(link) = &self.link {
            out.insert("link".to_string(), link.to_value()?);
        }
        Ok(Value::Object(out))
    }
}

/// Header plus an ordered list of tappable items.
#[derive(Debug, Clone, PartialEq)]
pub struct ListCard {
    pub header: ListItem,
    pub items: Vec<ListItem>,
    pub buttons: Vec<Button>,
}

impl ListCard {
    pub const TAG: &'static str = "listCard";

    pub fn new(header: impl Into<ListItem>) -> Self {
        Self {
            header: header.into(),
            items: Vec::new(),
            buttons: Vec::new(),
        }
    }

    pub fn item(mut self, item: impl Into<ListItem>) -> Self {
        self.items.push(item.into());
        self
    }

    pub fn items(mut self, items: impl IntoIterator<Item = impl Into<ListItem>>) -> Self {
        self.items.extend(items.into_iter().map(Into::into));
        self
    }

    pub fn button(mut self, button: impl Into<Button>) -> Self {
        self.buttons.push(button.into());
        self
    }

    pub fn buttons(mut self, buttons: impl IntoIterator<Item = impl Into<Button>>) -> Self {
        self.buttons.extend(buttons.into_iter().map(Into::into));
        self
    }

    pub(crate) fn body(&self) -> Result<Value, SkillError> {
        if self.items.is_empty() {
            return Err(SkillError::structure(
                "a list card must contain at least one item",
            ));
        }
        let mut out = Map::new();
        out.insert("header".to_string(), self.header.to_value()?);
        let items = self
            .items
            .iter()
            .map(Serializable::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        out.insert("items".to_string(), Value::Array(items));
        if !self.buttons.is_empty() {
            let buttons = self
                .buttons
                .iter()
                .map(Serializable::to_value)
                .collect::<Result<Vec<_>, _>>()?;
            out.insert("buttons".to_string(), Value::Array(buttons));
        }
        Ok(Value::Object(out))
    }
}

impl Serializable for ListCard {
    fn to_value(&self) -> Result<Value, SkillError> {
        Ok(tagged(Self::TAG, self.body()?))
    }
}
