//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Who authored a message sent to the live generator.
///
/// # Examples
///
/// ```
/// use postsmith_core::Role;
///
/// assert_ne!(Role::System, Role::User);
/// assert_eq!(format!("{}", Role::System), "System");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Role {
    /// System messages carry standing instructions
    System,
    /// User messages carry the rendered prompt
    User,
    /// Assistant messages are from the model
    Assistant,
}
