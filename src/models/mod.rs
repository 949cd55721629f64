//! Domain models for picto-lingua.
//!
//! # Core Concepts
//!
//! - [`Theme`]: A named vocabulary domain ("cafe", "park") with a stable id.
//! - [`Image`]: Photo metadata returned by the image source for a theme.
//! - [`VocabularyItem`]: A word with its definition and example sentence,
//!   optionally carrying a Dutch translation.
//! - [`Session`]: One learner's progress on a theme/image pairing. Sessions
//!   live in memory for the lifetime of the process.
//! - [`ProgressItem`]: Per-word learning status inside a session.

mod image;
mod session;
mod theme;
mod vocabulary;

pub use image::*;
pub use session::*;
pub use theme::*;
pub use vocabulary::*;
