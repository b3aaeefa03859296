//! Shared leaf records: deep links, merchant profiles, and thumbnails.

use serde_json::{Map, Value};

use crate::error::SkillError;
use crate::serialize::{IntLike, Serializable, insert_opt_str};

/// Per-platform deep-link targets attached to thumbnails, buttons, and list
/// items.
///
/// The platform picks the most specific target for the device the chat runs
/// on; `web` is the usual catch-all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Link {
    pub web: Option<String>,
    pub pc: Option<String>,
    pub mobile: Option<String>,
    pub win: Option<String>,
    pub mac: Option<String>,
    pub android: Option<String>,
    pub ios: Option<String>,
}

impl Link {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn web(mut self, url: impl Into<String>) -> Self {
        self.web = Some(url.into());
        self
    }

    pub fn pc(mut self, url: impl Into<String>) -> Self {
        self.pc = Some(url.into());
        self
    }

    pub fn mobile(mut self, url: impl Into<String>) -> Self {
        self.mobile = Some(url.into());
        self
    }

    pub fn win(mut self, url: impl Into<String>) -> Self {
        self.win = Some(url.into());
        self
    }

    pub fn mac(mut self, url: impl Into<String>) -> Self {
        self.mac = Some(url.into());
        self
    }

    pub fn android(mut self, url: impl Into<String>) -> Self {
        self.android = Some(url.into());
        self
    }

    pub fn ios(mut self, url: impl Into<String>) -> Self {
        self.ios = Some(url.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.web.is_none()
            && self.pc.is_none()
            && self.mobile.is_none()
            && self.win.is_none()
            && self.mac.is_none()
            && self.android.is_none()
            && self.ios.is_none()
    }
}

/// A bare string is shorthand for a web link.
impl From<&str> for Link {
    fn from(url: &str) -> Self {
        Link::new().web(url)
    }
}

impl From<String> for Link {
    fn from(url: String) -> Self {
        Link::new().web(url)
    }
}

impl Serializable for Link {
    fn to_value(&self) -> Result<Value, SkillError> {
        if self.is_empty() {
            return Err(SkillError::structure(
                "a link must carry at least one target URL",
            ));
        }
        let mut out = Map::new();
        insert_opt_str(&mut out, "web", &self.web);
        insert_opt_str(&mut out, "pc", &self.pc);
        insert_opt_str(&mut out, "mobile", &self.mobile);
        insert_opt_str(&mut out, "win", &self.win);
        insert_opt_str(&mut out, "mac", &self.mac);
        insert_opt_str(&mut out, "android", &self.android);
        insert_opt_str(&mut out, "ios", &self.ios);
        Ok(Value::Object(out))
    }
}

/// Merchant or author profile shown on cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub nickname: String,
    pub image_url: Option<String>,
}

impl Profile {
    pub fn new(nickname: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
            image_url: None,
        }
    }

    pub fn image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}

impl Serializable for Profile {
    fn to_value(&self) -> Result<Value, SkillError> {
        let mut out = Map::new();
        out.insert("nickname".to_string(), Value::String(self.nickname.clone()));
        insert_opt_str(&mut out, "imageUrl", &self.image_url);
        Ok(Value::Object(out))
    }
}

/// Card image with mandatory pixel dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub image_url: String,
    pub width: i64,
    pub height: i64,
    pub fixed_ratio: bool,
    pub link: Option<Link>,
}

impl Thumbnail {
    /// Width and height accept anything integer-like (`100`, `50.0`,
    /// `"640"`); non-numeric input fails with a conversion error.
    pub fn new(
        image_url: impl Into<String>,
        width: impl Into<IntLike>,
        height: impl Into<IntLike>,
    ) -> Result<Self, SkillError> {
        Ok(Self {
            image_url: image_url.into(),
            width: width.into().into_int("Thumbnail.width")?,
            height: height.into().into_int("Thumbnail.height")?,
            fixed_ratio: false,
            link: None,
        })
    }

    pub fn fixed_ratio(mut self, fixed_ratio: bool) -> Self {
        self.fixed_ratio = fixed_ratio;
        self
    }

    pub fn link(mut self, link: impl Into<Link>) -> Self {
        self.link = Some(link.into());
        self
    }
}

impl Serializable for Thumbnail {
    fn to_value(&self) -> Result<Value, SkillError> {
        let mut out = Map::new();
        out.insert(
            "imageUrl".to_string(),
            Value::String(self.image_url.clone()),
        );
        out.insert("width".to_string(), Value::from(self.width));
        out.insert("height".to_string(), Value::from(self.height));
        // the platform default is a free ratio; only emit the override
        if self.fixed_ratio {
            out.insert("fixedRatio".to_string(), Value::Bool(true));
        }
        if let Some(link) = &self.link {
            out.insert("link".to_string(), link.to_value()?);
        }
        Ok(Value::Object(out))
    }
}
