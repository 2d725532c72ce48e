//! Logging subscriber initialisation.

use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};

/// Errors raised while installing the logging subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// A global subscriber is already installed.
    #[error("failed to install logging subscriber")]
    Init(#[from] TryInitError),
}

/// Install the global subscriber at the given verbosity.
///
/// # Errors
///
/// Returns a [`LoggingError`] if a subscriber was already installed.
pub fn init_logging(level: LevelFilter) -> Result<(), LoggingError> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .without_time()
        .with_ansi(false)
        .with_target(true);

    #[cfg(target_arch = "wasm32")]
    let fmt_layer = fmt_layer.with_writer(console::MakeConsoleWriter);

    #[cfg(not(target_arch = "wasm32"))]
    let fmt_layer = fmt_layer.with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(EnvFilter::new(level.to_string()))
        .try_init()?;

    Ok(())
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;

    use tracing::{Level, Metadata};
    use tracing_subscriber::fmt::MakeWriter;

    /// Routes formatted events to the browser console.
    #[derive(Debug, Default)]
    pub(super) struct MakeConsoleWriter;

    impl<'a> MakeWriter<'a> for MakeConsoleWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter::new(Level::INFO)
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
            ConsoleWriter::new(*meta.level())
        }
    }

    /// Buffers one formatted event and emits it on drop.
    #[derive(Debug)]
    pub(super) struct ConsoleWriter {
        level: Level,
        buffer: Vec<u8>,
    }

    impl ConsoleWriter {
        fn new(level: Level) -> Self {
            Self {
                level,
                buffer: Vec::new(),
            }
        }
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(buf);

            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            if self.buffer.is_empty() {
                return;
            }

            let line = String::from_utf8_lossy(&self.buffer);
            let message = wasm_bindgen::JsValue::from_str(line.trim_end());

            if self.level == Level::ERROR {
                web_sys::console::error_1(&message);
            } else if self.level == Level::WARN {
                web_sys::console::warn_1(&message);
            } else if self.level == Level::INFO {
                web_sys::console::info_1(&message);
            } else {
                web_sys::console::debug_1(&message);
            }
        }
    }
}
