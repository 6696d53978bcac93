//! Chat transcript entities

use crate::media::ImageRef;
use chrono::{DateTime, Utc};

/// Who produced a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    User,
    Script,
}

impl Author {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Script => "script",
        }
    }
}

/// Payload of a transcript entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatContent {
    Text(String),
    Image(ImageRef),
}

/// One entry in the chat transcript, stamped at creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    pub author: Author,
    pub content: ChatContent,
    pub at: DateTime<Utc>,
}

impl ChatEntry {
    pub fn new(author: Author, content: ChatContent) -> Self {
        Self {
            author,
            content,
            at: Utc::now(),
        }
    }

    pub fn user_text(text: impl Into<String>) -> Self {
        Self::new(Author::User, ChatContent::Text(text.into()))
    }

    pub fn script_text(text: impl Into<String>) -> Self {
        Self::new(Author::Script, ChatContent::Text(text.into()))
    }

    pub fn script_image(image: ImageRef) -> Self {
        Self::new(Author::Script, ChatContent::Image(image))
    }
}
