use std::str::FromStr;

use jarvis::domain::{ChatMessage, ContentPart, ImageSource, MessageContent, MessageRole};

#[test]
fn given_text_constructors_when_building_then_roles_match() {
    assert_eq!(ChatMessage::system("a").role, MessageRole::System);
    assert_eq!(ChatMessage::user("b").role, MessageRole::User);
    assert_eq!(
        ChatMessage::user("b").content,
        MessageContent::Text("b".to_string())
    );
}

#[test]
fn given_multimodal_message_when_reading_text_then_skips_images() {
    let image = ImageSource::parse("anBlZw==").unwrap();
    let message = ChatMessage::user_parts(vec![
        ContentPart::Text("look".to_string()),
        ContentPart::Image(image.clone()),
    ]);

    assert_eq!(message.text(), "look");
    assert_eq!(message.images().collect::<Vec<_>>(), vec![&image]);
}

#[test]
fn given_text_message_when_listing_images_then_none() {
    assert_eq!(ChatMessage::user("plain").images().count(), 0);
}

#[test]
fn given_wire_role_names_when_parsing_then_round_trip() {
    for role in [MessageRole::System, MessageRole::User, MessageRole::Assistant] {
        assert_eq!(MessageRole::from_str(role.as_str()), Ok(role));
    }
    assert!(MessageRole::from_str("tool").is_err());
}
