mod chat_message;
mod image_source;
mod message_role;

pub use chat_message::{ChatMessage, ContentPart, MessageContent};
pub use image_source::{ImageSource, ImageSourceError};
pub use message_role::MessageRole;
