use crate::Severity;

pub const RESET: &str = "\x1B[0m";

/// ANSI escape sequences wrapped around the severity tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub fatal: &'static str,
    pub error: &'static str,
    pub warn: &'static str,
    pub info: &'static str,
    pub debug: &'static str,
    pub reset: &'static str,
}

impl Palette {
    pub const ANSI: Palette = Palette {
        fatal: "\x1B[95m", // Bright magenta
        error: "\x1B[91m", // Bright red
        warn: "\x1B[93m",  // Bright yellow
        info: "\x1B[92m",  // Bright green
        debug: "\x1B[94m", // Bright blue
        reset: RESET,
    };

    /// For sinks that render escape sequences literally.
    pub const PLAIN: Palette = Palette {
        fatal: "",
        error: "",
        warn: "",
        info: "",
        debug: "",
        reset: "",
    };

    pub fn get(&self, severity: Severity) -> &'static str {
        match severity {
            Severity::None => "",
            Severity::Fatal => self.fatal,
            Severity::Error => self.error,
            Severity::Warn => self.warn,
            Severity::Info => self.info,
            Severity::Debug => self.debug,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::ANSI
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ansi_defaults() {
        let palette = Palette::default();
        assert_eq!(palette.get(Severity::Info), "\x1B[92m");
        assert_eq!(palette.get(Severity::Fatal), "\x1B[95m");
        assert_eq!(palette.reset, "\x1B[0m");
    }

    #[test]
    fn overriding_one_colour() {
        let palette = Palette {
            warn: "\x1B[1;33m",
            ..Palette::ANSI
        };
        assert_eq!(palette.get(Severity::Warn), "\x1B[1;33m");
        assert_eq!(palette.get(Severity::Error), Palette::ANSI.error);
    }

    #[test]
    fn plain_is_empty() {
        assert!(Severity::RECORDS
            .iter()
            .all(|&s| Palette::PLAIN.get(s).is_empty()));
    }
}
