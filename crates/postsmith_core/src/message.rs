//! Message types for generator requests.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A single text message in a generator request.
///
/// # Examples
///
/// ```
/// use postsmith_core::{Message, Role};
///
/// let message = Message::new(Role::User, "Write three captions");
/// assert_eq!(message.role, Role::User);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// The text content of the message
    pub content: String,
}

impl Message {
    /// Create a message with the given role and text.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}
