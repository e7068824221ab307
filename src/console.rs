//! Console logging
//!
//! `console_log!`-style macros that write to the browser console on wasm32
//! and to stderr everywhere else. A thread-local level filters output; the
//! page config sets it once at boot.

use std::cell::Cell;
use std::fmt;
use std::str::FromStr;

use crate::error::DashboardError;

/// Log verbosity, most severe first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Error,
    Warn,
    Info,
    Debug,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warn => write!(f, "warn"),
            Level::Info => write!(f, "info"),
            Level::Debug => write!(f, "debug"),
        }
    }
}

impl FromStr for Level {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(Level::Error),
            "warn" | "warning" => Ok(Level::Warn),
            "info" => Ok(Level::Info),
            "debug" => Ok(Level::Debug),
            other => Err(DashboardError::Config(format!("unknown log level '{other}'"))),
        }
    }
}

thread_local! {
    static MAX_LEVEL: Cell<Level> = const { Cell::new(Level::Info) };
}

pub fn set_max_level(level: Level) {
    MAX_LEVEL.with(|l| l.set(level));
}

pub fn enabled(level: Level) -> bool {
    MAX_LEVEL.with(|l| level <= l.get())
}

#[doc(hidden)]
pub fn write(level: Level, message: &str) {
    if !enabled(level) {
        return;
    }

    #[cfg(target_arch = "wasm32")]
    {
        let value = wasm_bindgen::JsValue::from_str(message);
        match level {
            Level::Error => web_sys::console::error_1(&value),
            Level::Warn => web_sys::console::warn_1(&value),
            Level::Info => web_sys::console::log_1(&value),
            Level::Debug => web_sys::console::debug_1(&value),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("[{level}] {message}");
}

macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::console::write($crate::console::Level::Info, &format!($($arg)*))
    };
}

macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::console::write($crate::console::Level::Warn, &format!($($arg)*))
    };
}

macro_rules! console_error {
    ($($arg:tt)*) => {
        $crate::console::write($crate::console::Level::Error, &format!($($arg)*))
    };
}

macro_rules! console_debug {
    ($($arg:tt)*) => {
        if $crate::console::enabled($crate::console::Level::Debug) {
            $crate::console::write($crate::console::Level::Debug, &format!($($arg)*))
        }
    };
}

pub(crate) use {console_debug, console_error, console_log, console_warn};
