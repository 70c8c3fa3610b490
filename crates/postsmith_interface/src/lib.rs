//! Trait definitions for Postsmith generation backends.
//!
//! The generation pipeline only talks to a live text generator through
//! [`PostsmithDriver`], and only learns whether one can be used through
//! [`LiveBackend`]. Both are object safe so tests can substitute mocks.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{Availability, LiveBackend, NoLiveBackend, PostsmithDriver};
