use core::{fmt, str::FromStr};

/// Severity of a record, and the threshold a logger filters against.
///
/// Variants are ordered from least to most verbose. A logger with threshold
/// `T` emits a record of severity `S` when `T >= S`, so `None` suppresses
/// everything and `Debug` lets everything through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Severity {
    None = 0,
    Fatal = 1,
    Error = 2,
    Warn = 3,
    Info = 4,
    Debug = 5,
}

impl Severity {
    /// Threshold used when a logger is constructed without one.
    pub const DEFAULT: Severity = Severity::Debug;

    /// Every severity a record can carry, most severe first.
    pub const RECORDS: [Severity; 5] = [
        Severity::Fatal,
        Severity::Error,
        Severity::Warn,
        Severity::Info,
        Severity::Debug,
    ];

    /// Whether a logger with this threshold emits a record of `record`.
    #[inline]
    pub fn permits(self, record: Severity) -> bool {
        record != Severity::None && self as u8 >= record as u8
    }

    /// Tag printed in the severity column.
    pub fn tag(self) -> &'static str {
        match self {
            Severity::None => "NONE",
            Severity::Fatal => "FATAL",
            Severity::Error => "ERROR",
            Severity::Warn => "WARNING",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
        }
    }

    pub(crate) fn from_u8(value: u8) -> Self {
        match value {
            0 => Severity::None,
            1 => Severity::Fatal,
            2 => Severity::Error,
            3 => Severity::Warn,
            4 => Severity::Info,
            _ => Severity::Debug,
        }
    }
}

impl Default for Severity {
    fn default() -> Self {
        Severity::DEFAULT
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.tag())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseSeverityError;

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unrecognised severity, expected one of none, fatal, error, warn, info, debug")
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let matches = |name: &str| s.eq_ignore_ascii_case(name);

        if matches("none") || matches("off") || s == "0" {
            Ok(Severity::None)
        } else if matches("fatal") || s == "1" {
            Ok(Severity::Fatal)
        } else if matches("error") || s == "2" {
            Ok(Severity::Error)
        } else if matches("warn") || matches("warning") || s == "3" {
            Ok(Severity::Warn)
        } else if matches("info") || s == "4" {
            Ok(Severity::Info)
        } else if matches("debug") || s == "5" {
            Ok(Severity::Debug)
        } else {
            Err(ParseSeverityError)
        }
    }
}

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Severity::Error,
            log::Level::Warn => Severity::Warn,
            log::Level::Info => Severity::Info,
            log::Level::Debug | log::Level::Trace => Severity::Debug,
        }
    }
}

impl From<Severity> for log::LevelFilter {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::None => log::LevelFilter::Off,
            // `log` has no fatal level, fatal records travel as errors
            Severity::Fatal | Severity::Error => log::LevelFilter::Error,
            Severity::Warn => log::LevelFilter::Warn,
            Severity::Info => log::LevelFilter::Info,
            Severity::Debug => log::LevelFilter::Trace,
        }
    }
}
