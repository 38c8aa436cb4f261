use std::{io, path::Path};

use tracing::Level;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};

/// Installs the global `tracing` subscriber.
///
/// `verbosity` counts `-v` flags: warnings only by default, then info, debug and trace.
/// With a `log_file` the events go to that file through a background writer, and the
/// returned guard must be kept alive until exit so buffered lines get flushed.
pub fn init(verbosity: u8, log_file: Option<&Path>) -> io::Result<Option<WorkerGuard>> {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);

    match log_file {
        Some(path) => {
            let file_name = path.file_name().ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("log file path {} has no file name", path.display()),
                )
            })?;
            let directory = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));

            let appender = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(file_name.to_string_lossy())
                .build(directory)
                .map_err(io::Error::other)?;
            let (writer, guard) = tracing_appender::non_blocking(appender);
            builder
                .with_writer(writer)
                .with_ansi(false)
                .try_init()
                .map_err(io::Error::other)?;
            Ok(Some(guard))
        }
        None => {
            builder
                .with_writer(io::stderr)
                .try_init()
                .map_err(io::Error::other)?;
            Ok(None)
        }
    }
}
