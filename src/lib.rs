//! Level-filtered logging for embedded targets.
//!
//! A [`Logger`] is a module name plus a severity threshold. Every record it
//! lets through becomes one line on the platform's transport:
//!
//! ```text
//! 00:01:12 | net             | WARNING  | MainTask         | retry 2 of 5
//! ```
//!
//! Time, task names and the transport itself come from a [`Platform`]. The
//! message is formatted into a stack buffer and only spills to the heap when
//! it does not fit; if that allocation fails, a fixed diagnostic is logged
//! in its place.
//!
//! Building without the `enabled` feature turns [`Logger`] into
//! [`NullLogger`], which does nothing at all.
//!
//! ```ignore
//! let log = chronolog::Logger::with_threshold("net", Hosted::new(), Severity::Info);
//! chronolog::warn!(log, "retry {} of {}", 2, 5);
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

use core::fmt;

#[cfg(all(feature = "pc", target_arch = "x86_64"))]
pub mod cmos;
pub mod colour;
pub mod format;
pub mod log;
pub mod logger;
pub mod null;
pub mod platform;
pub mod severity;
pub mod timestamp;

pub use colour::Palette;
pub use format::DEFAULT_BUFFER_LEN;
pub use logger::ChronoLogger;
pub use null::NullLogger;
pub use platform::Platform;
pub use severity::{ParseSeverityError, Severity};

/// The logger selected by the `enabled` feature.
#[cfg(feature = "enabled")]
pub type Logger<'n, P, const CAP: usize = DEFAULT_BUFFER_LEN> = ChronoLogger<'n, P, CAP>;

/// The logger selected by the `enabled` feature.
#[cfg(not(feature = "enabled"))]
pub type Logger<'n, P, const CAP: usize = DEFAULT_BUFFER_LEN> = NullLogger<'n, P, CAP>;

/// Emission interface shared by [`ChronoLogger`] and [`NullLogger`].
///
/// Code that only needs to log can take `&impl SeverityLog` and stay
/// agnostic of the platform and of whether logging is compiled in.
pub trait SeverityLog {
    fn enabled(&self, severity: Severity) -> bool;

    fn log(&self, severity: Severity, args: fmt::Arguments<'_>);

    fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Debug, args)
    }

    fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Info, args)
    }

    fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Warn, args)
    }

    fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Error, args)
    }

    fn fatal(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Fatal, args)
    }
}

impl<T: SeverityLog + ?Sized> SeverityLog for &T {
    fn enabled(&self, severity: Severity) -> bool {
        (**self).enabled(severity)
    }

    fn log(&self, severity: Severity, args: fmt::Arguments<'_>) {
        (**self).log(severity, args)
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        if $crate::SeverityLog::enabled(logger, $severity) {
            $crate::SeverityLog::log(logger, $severity, ::core::format_args!($($arg)+));
        }
    }};
}

/// Log at [`Severity::Debug`]. Arguments are only evaluated if the record
/// passes the logger's threshold.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log!($logger, $crate::Severity::Warn, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log!($logger, $crate::Severity::Error, $($arg)+)
    };
}

#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log!($logger, $crate::Severity::Fatal, $($arg)+)
    };
}
