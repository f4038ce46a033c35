pub mod clock;
pub mod config;
pub mod platform;
pub mod preferences;
pub mod session;
pub mod style;
pub mod theme;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
