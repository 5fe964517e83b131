// Diagnostics go to stderr; stdout is reserved for the server response.

use std::io;

use chrono::Local;
use fern::Dispatch;
use log::LevelFilter;

/// `trace` or `debug` marker file next to the executable raises the level;
/// otherwise only warnings and errors are shown.
fn logging_level() -> LevelFilter {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(dir) = exe_path.parent() {
            if dir.join("trace").exists() {
                return LevelFilter::Trace;
            }
            if dir.join("debug").exists() {
                return LevelFilter::Debug;
            }
        }
    }
    LevelFilter::Warn
}

pub fn setup_logger() {
    let level_filter = logging_level();

    if let Err(e) = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{}][{}]: {}",
                Local::now().format("%b-%d-%Y %H:%M:%S.%f"),
                record.level(),
                message,
            ))
        })
        .level(level_filter)
        // keep reqwest/hyper internals out unless tracing
        .level_for("hyper", level_filter.min(LevelFilter::Info))
        .level_for("reqwest", level_filter.min(LevelFilter::Debug))
        .chain(io::stderr())
        .apply()
    {
        eprintln!("Logger initialization failed: {e}");
    }
    log::debug!("Enabled log {level_filter}.");
}
