use core::{
    fmt,
    sync::atomic::{AtomicU8, Ordering},
};

use crate::{
    colour::Palette,
    format::{self, DEFAULT_BUFFER_LEN},
    platform::{Platform, FALLBACK_TASK_NAME},
    timestamp, Severity, SeverityLog,
};

const LINE_TERMINATOR: &[u8] = b"\n";

/// A named, level-filtered logger writing through a [`Platform`].
///
/// Each emitted record is one line:
///
/// ```text
/// 12:00:03 | net             | WARNING  | wifi_task        | retry 2 of 5
/// ```
///
/// The prefix, the message and the line terminator are three separate
/// transport writes. Nothing serialises them, so records from tasks logging
/// through the same logger at the same time can interleave.
pub struct ChronoLogger<'n, P: Platform, const CAP: usize = DEFAULT_BUFFER_LEN> {
    name: &'n str,
    threshold: AtomicU8,
    palette: Palette,
    handle: Option<P::Handle>,
    platform: P,
}

impl<'n, P: Platform, const CAP: usize> ChronoLogger<'n, P, CAP> {
    /// Create a logger for the module `name` that emits everything.
    pub const fn new(name: &'n str, platform: P) -> Self {
        Self::with_threshold(name, platform, Severity::DEFAULT)
    }

    pub const fn with_threshold(name: &'n str, platform: P, threshold: Severity) -> Self {
        Self {
            name,
            threshold: AtomicU8::new(threshold as u8),
            palette: Palette::ANSI,
            handle: None,
            platform,
        }
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_transport_handle(mut self, handle: P::Handle) -> Self {
        self.handle = Some(handle);
        self
    }

    /// Get the logger's module name.
    #[must_use]
    pub fn name(&self) -> &'n str {
        self.name
    }

    /// Get the logger's current threshold.
    #[must_use]
    pub fn threshold(&self) -> Severity {
        Severity::from_u8(self.threshold.load(Ordering::Relaxed))
    }

    /// Set the threshold. Takes effect from the next emission call.
    pub fn set_threshold(&self, threshold: Severity) {
        self.threshold.store(threshold as u8, Ordering::Relaxed);
    }

    /// Route subsequent records through `handle`.
    pub fn set_transport_handle(&mut self, handle: P::Handle) {
        self.handle = Some(handle);
    }

    pub fn clear_transport_handle(&mut self) -> Option<P::Handle> {
        self.handle.take()
    }

    #[must_use]
    pub fn transport_handle(&self) -> Option<&P::Handle> {
        self.handle.as_ref()
    }

    #[must_use]
    pub fn platform(&self) -> &P {
        &self.platform
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Debug, args)
    }

    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Info, args)
    }

    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Warn, args)
    }

    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Error, args)
    }

    pub fn fatal(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Fatal, args)
    }

    #[inline]
    pub fn enabled(&self, severity: Severity) -> bool {
        self.threshold().permits(severity)
    }

    /// Format and transmit one record, unless `severity` is filtered out.
    pub fn log(&self, severity: Severity, args: fmt::Arguments<'_>) {
        if !self.enabled(severity) {
            return;
        }

        let time = timestamp::render(&self.platform.read_clock());
        let task = self.platform.current_task_name();
        let task = task.as_deref().unwrap_or(FALLBACK_TASK_NAME);
        let prefix = format::compose_prefix(&time, self.name, severity, &self.palette, task);

        let message = format::format_message::<CAP>(args, |len| {
            self.platform.try_alloc_message(len)
        });

        self.transmit(prefix.as_bytes());
        self.transmit(message.as_str().as_bytes());
        self.transmit(LINE_TERMINATOR);
        // A heap message is released here, when `message` goes out of scope
    }

    fn transmit(&self, bytes: &[u8]) {
        let handle = self.handle.as_ref();
        if P::REQUIRES_HANDLE && handle.is_none() {
            return;
        }
        self.platform.transmit(handle, bytes);
    }
}

impl<P: Platform, const CAP: usize> fmt::Debug for ChronoLogger<'_, P, CAP> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChronoLogger")
            .field("name", &self.name)
            .field("threshold", &self.threshold())
            .field("has_handle", &self.handle.is_some())
            .finish()
    }
}

impl<P: Platform, const CAP: usize> SeverityLog for ChronoLogger<'_, P, CAP> {
    fn enabled(&self, severity: Severity) -> bool {
        ChronoLogger::enabled(self, severity)
    }

    fn log(&self, severity: Severity, args: fmt::Arguments<'_>) {
        ChronoLogger::log(self, severity, args)
    }
}
