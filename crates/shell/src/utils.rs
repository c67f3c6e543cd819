//! Logging for the shell.

use std::path::{Path, PathBuf};

use ftlog::{
    appender::{FileAppender, Period},
    LevelFilter, LoggerGuard,
};

/// Configures the logger.
///
/// Logs are written to `./logs/<file_name>`, rotated daily. Warnings and errors from the appender itself go to a sibling file, see [`error_log_path`].
///
/// # Arguments
///
/// * `file_name` - The name of the log file.
/// * `verbose` - Whether to also record the per-run `debug` messages of the simulation.
///
/// # Errors
///
/// - If a logs directory could not be located/created.
/// - If the logger could not be initialized.
pub fn configure_logger(file_name: &str, verbose: bool) -> Result<(LoggerGuard, PathBuf), String> {
    let logs_dir = PathBuf::from(".")
        .canonicalize()
        .map_err(|e| format!("Failed to locate the working directory: {e}"))?
        .join("logs");
    if !logs_dir.exists() {
        std::fs::create_dir(&logs_dir).map_err(|e| format!("Failed to create {}: {e}", logs_dir.display()))?;
    }
    let log_path = logs_dir.join(file_name);
    let err_path = error_log_path(&log_path)?;

    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    let guard = ftlog::Builder::new()
        .max_log_level(level)
        .root(FileAppender::builder().path(&log_path).rotate(Period::Day).build())
        // appender warnings go to their own file
        .filter("ftlog::appender", "ftlog-appender", LevelFilter::Warn)
        .appender("ftlog-appender", FileAppender::new(err_path))
        .try_init()
        .map_err(|e| e.to_string())?;

    Ok((guard, log_path))
}

/// Returns the path of the file for the appender's own warnings: the log file's stem with an `-err` suffix, in the same directory.
///
/// # Errors
///
/// - If the log path has no file stem.
pub fn error_log_path(log_path: &Path) -> Result<PathBuf, String> {
    let stem = log_path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| format!("Log file {} has no usable stem", log_path.display()))?;
    Ok(log_path.with_file_name(format!("{stem}-err")))
}
