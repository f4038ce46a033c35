//! Port definitions implemented by worldclock adapters.
//!
//! Higher level crates talk to persisted preferences and the desktop color
//! scheme only through these traits, so the theme logic can be exercised
//! against in-memory doubles.

pub mod preferences;
