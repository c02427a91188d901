//! Routes `log` records to a logging callback owned by the embedding host.
//!
//! Nothing is installed by default: until the host calls `bn_init_logging`,
//! every `log` macro in the crate is a no-op.

use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use std::ffi::{c_char, CString};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

/// Host-side sink. `level` uses the same numbering as [`level_filter`];
/// both strings are only valid for the duration of the call.
pub type LogCallback = extern "C" fn(level: i32, target: *const c_char, msg: *const c_char);

struct HostLogger;

static LOGGER: HostLogger = HostLogger;
static HAVE_INITIALIZED: AtomicBool = AtomicBool::new(false);
static CALLBACK: RwLock<Option<LogCallback>> = RwLock::new(None);

/// Maps a host level number to a filter: 0 off, 1 error .. 5 trace.
pub fn level_filter(max_level: i32) -> LevelFilter {
    match max_level {
        0 => LevelFilter::Off,
        1 => LevelFilter::Error,
        2 => LevelFilter::Warn,
        3 => LevelFilter::Info,
        4 => LevelFilter::Debug,
        5 => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

fn level_code(lvl: Level) -> i32 {
    match lvl {
        Level::Error => 1,
        Level::Warn => 2,
        Level::Info => 3,
        Level::Debug => 4,
        Level::Trace => 5,
    }
}

fn current_callback() -> Option<LogCallback> {
    match CALLBACK.read() {
        Ok(guard) => *guard,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

/// Installs the host logger (first call only) and points it at `callback`.
/// Later calls swap the callback and adjust the level.
pub fn init_logging(callback: LogCallback, max_level: i32) -> Result<(), SetLoggerError> {
    match CALLBACK.write() {
        Ok(mut guard) => *guard = Some(callback),
        Err(poisoned) => *poisoned.into_inner() = Some(callback),
    }

    if HAVE_INITIALIZED
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_ok()
    {
        if let Err(e) = log::set_logger(&LOGGER) {
            HAVE_INITIALIZED.store(false, Ordering::SeqCst);
            return Err(e);
        }
    }
    log::set_max_level(level_filter(max_level));
    Ok(())
}

// Interior NULs would truncate the text on the C side; replace them.
fn to_c_string(text: &str) -> CString {
    CString::new(text.replace('\0', " ")).unwrap_or_default()
}

impl log::Log for HostLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level() && current_callback().is_some()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Some(callback) = current_callback() {
            let target = to_c_string(record.target());
            let msg = to_c_string(&record.args().to_string());
            callback(level_code(record.level()), target.as_ptr(), msg.as_ptr());
        }
    }

    fn flush(&self) {}
}
