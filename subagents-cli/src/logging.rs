//! Logging setup
//!
//! Stdout carries the MCP protocol, so logs go to stderr or, when a log file
//! is configured, to that file without ANSI colors.

use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// Writer that appends to a shared log file and flushes after every write
pub struct FileWriterGuard {
    file: Arc<Mutex<std::fs::File>>,
}

impl FileWriterGuard {
    pub fn new(file: Arc<Mutex<std::fs::File>>) -> Self {
        Self { file }
    }

    fn with_file<T>(
        &self,
        f: impl FnOnce(&mut std::fs::File) -> std::io::Result<T>,
    ) -> std::io::Result<T> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| std::io::Error::other("log file mutex was poisoned"))?;
        f(&mut file)
    }
}

impl Write for FileWriterGuard {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.with_file(|file| {
            let written = file.write(buf)?;
            file.flush()?;
            Ok(written)
        })
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.with_file(|file| file.flush())
    }
}

/// Filter for `level`; `RUST_LOG` takes precedence when set
fn create_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("rmcp=warn,{level}")))
}

/// Install the global tracing subscriber
///
/// Falls back to stderr with a warning when `log_file` cannot be opened.
pub fn configure_logging(level: &str, log_file: Option<&Path>) {
    if let Some(path) = log_file {
        match std::fs::OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                let shared_file = Arc::new(Mutex::new(file));
                registry()
                    .with(create_filter(level))
                    .with(
                        fmt::layer()
                            .with_writer(move || {
                                Box::new(FileWriterGuard::new(shared_file.clone()))
                                    as Box<dyn Write>
                            })
                            .with_ansi(false),
                    )
                    .init();
                return;
            }
            Err(e) => {
                eprintln!(
                    "Warning: Could not open log file {}: {}. Falling back to stderr.",
                    path.display(),
                    e
                );
            }
        }
    }

    registry()
        .with(create_filter(level))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
