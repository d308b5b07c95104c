#![forbid(unsafe_code)]

//! Core domain model and business logic for the rosario praying companion.
//!
//! This crate provides:
//! - Domain types (prayer kinds, mystery sets, stages, step descriptors)
//! - The fixed 80-step sequence mapping
//! - The session cursor (advance / go back / restore)
//! - Prayer texts behind an injectable provider
//! - Saved-session persistence and configuration

pub mod types;
pub mod error;
pub mod sequence;
pub mod cursor;
pub mod texts;
pub mod schedule;
pub mod session;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use cursor::RosaryCursor;
pub use texts::{bundled_book, PrayerBook, TextProvider};
pub use schedule::suggested_mystery_for;
pub use session::SavedSession;
pub use config::Config;
