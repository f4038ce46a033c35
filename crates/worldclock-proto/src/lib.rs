//! Shared contracts for the worldclock crates: configuration schema, theme
//! mode and the ports implemented by adapters in `worldclock-core`.

pub mod config;
pub mod ports;
pub mod theme;
