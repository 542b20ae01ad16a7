// Conditional logging macros - only active in debug builds

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

const DEFAULT_FILTER: &str = "warn";
const LOG_FILE_NAME: &str = "mastermind.log";

/// Where log records go.
pub enum LogTarget {
    Stderr,
    /// Used while the TUI owns the terminal.
    File(PathBuf),
}

/// Default log file location under the user cache directory.
pub fn log_file_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("mastermind").join(LOG_FILE_NAME))
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global logger. Level comes from `RUST_LOG`, default `warn`.
///
/// Falls back to stderr if the log file cannot be opened.
pub fn init_logging(target: LogTarget) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_FILTER));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} [{}] {}: {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    let mut file_error = None;
    if let LogTarget::File(path) = &target {
        match open_log_file(path) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(e) => file_error = Some((path.clone(), e)),
        }
    }

    if builder.try_init().is_err() {
        return;
    }
    if let Some((path, e)) = file_error {
        log::warn!("could not open log file {}: {e}", path.display());
    }
}
