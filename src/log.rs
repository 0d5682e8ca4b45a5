//! Backend for the `log` facade.
//!
//! Installing a logger here makes it the process-wide destination of
//! `log::info!` and friends. It stays installed for the rest of the program.

use log::SetLoggerError;

use crate::{platform::Platform, ChronoLogger, NullLogger, Severity};

/// Install `logger` as the `log` backend.
///
/// Fails if a backend was already installed.
pub fn init<L: log::Log>(logger: &'static L) -> Result<(), SetLoggerError> {
    log::set_logger(logger)?;
    // Filtering happens in the logger, whose threshold can change later
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

impl<P, const CAP: usize> log::Log for ChronoLogger<'static, P, CAP>
where
    P: Platform + Send + Sync,
    P::Handle: Send + Sync,
{
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        ChronoLogger::enabled(self, Severity::from(metadata.level()))
    }

    fn log(&self, record: &log::Record) {
        ChronoLogger::log(self, Severity::from(record.level()), *record.args());
    }

    fn flush(&self) {}
}

impl<P: Platform, const CAP: usize> log::Log for NullLogger<'static, P, CAP> {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        false
    }

    fn log(&self, _record: &log::Record) {}

    fn flush(&self) {}
}
