use flexi_logger::{DeferredNow, FlexiLoggerError, Logger, LoggerHandle, Record};

fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn stderr_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] {} {}: {}",
        now.format("%H:%M:%S%.3f"),
        record.level(),
        record.module_path().unwrap_or("<unnamed>"),
        record.args()
    )
}

/// Install the stderr logger. `RUST_LOG` wins over the `-v` count.
///
/// The returned handle must stay alive for as long as logging is wanted.
pub fn start_logger(verbose: u8) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(level_for(verbose))?
        .log_to_stderr()
        .format(stderr_format)
        .start()
}
