//! Logging setup

use log::LevelFilter;

/// Send log records to stderr as `[LEVEL] message`
pub fn setup_logging() -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| out.finish(format_args!("[{}] {}", record.level(), message)))
        .level(LevelFilter::Info)
        .level_for("client_desktop", LevelFilter::Debug)
        .level_for("pong", LevelFilter::Debug)
        .level_for("wgpu_core", LevelFilter::Warn)
        .level_for("wgpu_hal", LevelFilter::Warn)
        .chain(std::io::stderr())
        .apply()
}
