//! Typed builders and validation for Kakao i OpenBuilder skill response
//! payloads.
//!
//! A response is assembled from typed building blocks (text, images, cards,
//! carousels, quick replies), validated as it is composed, and serialized to
//! the platform's JSON document via [`Serializable::to_value`]. Structurally
//! invalid combinations fail with a [`SkillError`] before they reach the
//! wire; breaches of platform recommendations are reported as non-fatal
//! [`Warning`]s instead.
//!
//! ```
//! use kakao_skill::{Response, Serializable, Template};
//!
//! let template = Template::new()
//!     .output("Hello!")
//!     .quick_reply("Tell me more");
//! let response = Response::new().template(template);
//!
//! let payload = response.to_value().unwrap();
//! assert_eq!(payload["version"], "2.6");
//! assert_eq!(payload["template"]["outputs"][0]["simpleText"]["text"], "Hello!");
//! ```

pub mod components;
pub mod error;
pub mod response;
pub mod serialize;
pub mod template;
pub mod warning;

pub use components::{
    BasicCard, Button, ButtonAction, Carousel, CarouselHeader, CarouselType, CommerceCard,
    Component, Link, ListCard, ListItem, Profile, QuickReply, QuickReplyAction, SimpleImage,
    SimpleText, Thumbnail,
};
pub use error::SkillError;
pub use response::{Response, VERSION};
pub use serialize::{IntLike, Serializable, compact_json};
pub use template::{MAX_OUTPUTS, MAX_QUICK_REPLIES, Template};
pub use warning::{Warning, WarningKind};
