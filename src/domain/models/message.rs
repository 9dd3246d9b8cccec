#[cfg(test)]
#[path = "message_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::Author;
use super::MessageContent;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageType {
    Normal,
    Error,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Message {
    pub author: Author,
    pub content: MessageContent,
    mtype: MessageType,
}

impl Message {
    pub fn new(author: Author, text: &str) -> Message {
        return Message {
            author,
            content: MessageContent::Text(text.to_string().replace('\t', "  ")),
            mtype: MessageType::Normal,
        };
    }

    pub fn new_with_type(author: Author, mtype: MessageType, text: &str) -> Message {
        return Message {
            author,
            content: MessageContent::Text(text.to_string().replace('\t', "  ")),
            mtype,
        };
    }

    pub fn with_content(author: Author, content: MessageContent) -> Message {
        return Message {
            author,
            content,
            mtype: MessageType::Normal,
        };
    }

    pub fn message_type(&self) -> MessageType {
        return self.mtype;
    }
}
