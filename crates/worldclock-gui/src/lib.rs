use flexi_logger::LogSpecification;
use log::warn;

mod views;

pub mod app;

pub use app::{App, Message};

/// Parses the configured log level, honouring `RUST_LOG` when set.
pub fn get_log_spec(log_level: &str) -> LogSpecification {
    LogSpecification::env_or_parse(log_level).unwrap_or_else(|err| {
        warn!("Failed to parse log level {log_level:?}: {err}; using info");
        LogSpecification::info()
    })
}
