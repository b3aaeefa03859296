//! End-to-end payload-shape tests for assembled skill responses.

use kakao_skill::{
    BasicCard, Button, Carousel, CommerceCard, Component, ListCard, Profile, QuickReply,
    QuickReplyAction, Response, Serializable, SimpleImage, SkillError, Template, Thumbnail,
    WarningKind,
};
use serde_json::json;
use tracing_test::traced_test;

fn product_thumbnail() -> Thumbnail {
    Thumbnail::new("https://img/product.png", 720, 360).unwrap()
}

#[test]
fn full_response_document_shape() {
    let card = BasicCard::new()
        .title("Today's pick")
        .description("Fresh from the roastery")
        .thumbnail(product_thumbnail())
        .button(Button::web_link("Details", "https://example.com/pick"))
        .button("Order");

    let template = Template::new()
        .output("Good morning!")
        .output(card)
        .quick_reply("More picks")
        .quick_reply(QuickReply::block("Checkout", "checkout-block"));

    let response = Response::new()
        .template(template)
        .context(json!({"session": "s-1"}));

    assert_eq!(
        response.to_value().unwrap(),
        json!({
            "version": "2.6",
            "template": {
                "outputs": [
                    {"simpleText": {"text": "Good morning!"}},
                    {"basicCard": {
                        "title": "Today's pick",
                        "description": "Fresh from the roastery",
                        "thumbnail": {
                            "imageUrl": "https://img/product.png",
                            "width": 720,
                            "height": 360
                        },
                        "buttons": [
                            {"label": "Details", "action": "webLink",
                             "webLinkUrl": "https://example.com/pick"},
                            {"label": "Order", "action": "message",
                             "messageText": "Order"}
                        ]
                    }}
                ],
                "quickReplies": [
                    {"label": "More picks", "action": "message",
                     "messageText": "More picks"},
                    {"label": "Checkout", "action": "block",
                     "blockId": "checkout-block"}
                ]
            },
            "context": {"session": "s-1"}
        })
    );
}

#[test]
fn simple_image_emits_exactly_the_mandatory_keys() {
    let value = SimpleImage::new("u", "a").to_value().unwrap();
    assert_eq!(value, json!({"simpleImage": {"imageUrl": "u", "altText": "a"}}));
}

#[test]
fn block_quick_reply_without_id_fails_at_serialization() {
    let reply = QuickReply::new("x", "y").action(QuickReplyAction::Block);
    let template = Template::new().output("hi").quick_reply(reply);
    let err = template.to_value().unwrap_err();
    assert!(matches!(err, SkillError::Structure(_)));
}

#[test]
fn commerce_card_discount_rate_contract() {
    let card = CommerceCard::new("beans", 12000, [product_thumbnail()], ["Buy"])
        .unwrap()
        .discount_rate(10)
        .unwrap();
    assert!(matches!(
        card.to_value().unwrap_err(),
        SkillError::Structure(_)
    ));

    let card = card.discounted_price(10800).unwrap();
    let value = card.to_value().unwrap();
    assert_eq!(value["commerceCard"]["discountRate"], 10);
    assert_eq!(value["commerceCard"]["discountedPrice"], 10800);
}

#[test]
fn quick_replies_require_outputs() {
    let err = Response::compose(Vec::<Component>::new(), ["hi"]).unwrap_err();
    assert!(matches!(err, SkillError::Structure(_)));
}

#[test]
fn numeric_inputs_serialize_as_integers() {
    let thumbnail = Thumbnail::new("u", "100", 50.0).unwrap();
    let value = thumbnail.to_value().unwrap();
    assert_eq!(value["width"], json!(100));
    assert_eq!(value["height"], json!(50));
}

#[traced_test]
#[test]
fn soft_violations_warn_but_do_not_fail() {
    let card = CommerceCard::new(
        "beans",
        1000,
        [product_thumbnail(), product_thumbnail()],
        ["Buy"],
    )
    .unwrap();
    assert_eq!(card.warnings().len(), 1);
    assert_eq!(card.warnings()[0].kind, WarningKind::FieldConstraint);
    assert!(logs_contain("exactly one thumbnail"));

    let value = card.to_value().unwrap();
    assert_eq!(
        value["commerceCard"]["thumbnails"].as_array().unwrap().len(),
        2
    );
}

#[test]
fn carousel_flattens_item_bodies() {
    let carousel = Carousel::basic_cards([
        BasicCard::new().title("one"),
        BasicCard::new().title("two"),
    ]);
    let value = carousel.to_value().unwrap();
    assert_eq!(
        value,
        json!({"carousel": {
            "type": "basicCard",
            "items": [{"title": "one"}, {"title": "two"}]
        }})
    );
    // no nested tag keys survive the flattening
    assert!(value["carousel"]["items"][0].get("basicCard").is_none());
}

#[test]
fn carousel_rejects_foreign_card_types_at_push() {
    let commerce = CommerceCard::new("beans", 1000, [product_thumbnail()], ["Buy"]).unwrap();
    let err = Carousel::basic_cards([BasicCard::new().title("one")])
        .push(commerce)
        .unwrap_err();
    assert!(matches!(err, SkillError::Structure(_)));
}

#[test]
fn template_warnings_aggregate_from_nested_components() {
    let card = BasicCard::new().title("hi").profile(Profile::new("shop"));
    let carousel = Carousel::basic_cards([BasicCard::new()
        .title("inner")
        .profile(Profile::new("nested"))]);
    let template = Template::new().output(card).output(carousel);
    let warnings = template.warnings();
    assert_eq!(warnings.len(), 2);
    assert!(
        warnings
            .iter()
            .all(|w| w.kind == WarningKind::UnsupportedField)
    );
}

#[test]
fn list_card_and_response_serialize_through_serde() {
    let list = ListCard::new("Menu").item("Americano").item("Latte");
    let response = Response::with_template(Template::new().output(list));
    let via_serde = serde_json::to_value(&response).unwrap();
    assert_eq!(via_serde, response.to_value().unwrap());
    assert_eq!(
        via_serde["template"]["outputs"][0]["listCard"]["items"][1]["title"],
        "Latte"
    );
}
