//! The logger used when the `enabled` feature is off.
//!
//! It mirrors the surface of [`ChronoLogger`](crate::ChronoLogger) so call
//! sites compile unchanged, but keeps no state and does nothing: no clock
//! read, no formatting, no allocation and no transport writes.

use core::{fmt, marker::PhantomData};

use crate::{colour::Palette, format::DEFAULT_BUFFER_LEN, platform::Platform, Severity, SeverityLog};

pub struct NullLogger<'n, P: Platform, const CAP: usize = DEFAULT_BUFFER_LEN> {
    _marker: PhantomData<(&'n str, fn() -> P)>,
}

impl<'n, P: Platform, const CAP: usize> NullLogger<'n, P, CAP> {
    #[inline(always)]
    pub const fn new(_name: &'n str, platform: P) -> Self {
        // A const fn cannot run `P`'s destructor
        core::mem::forget(platform);
        Self {
            _marker: PhantomData,
        }
    }

    #[inline(always)]
    pub const fn with_threshold(name: &'n str, platform: P, _threshold: Severity) -> Self {
        Self::new(name, platform)
    }

    #[inline(always)]
    #[must_use]
    pub fn with_palette(self, _palette: Palette) -> Self {
        self
    }

    #[inline(always)]
    #[must_use]
    pub fn with_transport_handle(self, _handle: P::Handle) -> Self {
        self
    }

    #[inline(always)]
    pub fn name(&self) -> &'n str {
        ""
    }

    #[inline(always)]
    pub fn threshold(&self) -> Severity {
        Severity::None
    }

    #[inline(always)]
    pub fn set_threshold(&self, _threshold: Severity) {}

    #[inline(always)]
    pub fn set_transport_handle(&mut self, _handle: P::Handle) {}

    #[inline(always)]
    pub fn clear_transport_handle(&mut self) -> Option<P::Handle> {
        None
    }

    #[inline(always)]
    pub fn debug(&self, _args: fmt::Arguments<'_>) {}

    #[inline(always)]
    pub fn info(&self, _args: fmt::Arguments<'_>) {}

    #[inline(always)]
    pub fn warn(&self, _args: fmt::Arguments<'_>) {}

    #[inline(always)]
    pub fn error(&self, _args: fmt::Arguments<'_>) {}

    #[inline(always)]
    pub fn fatal(&self, _args: fmt::Arguments<'_>) {}

    #[inline(always)]
    pub fn enabled(&self, _severity: Severity) -> bool {
        false
    }

    #[inline(always)]
    pub fn log(&self, _severity: Severity, _args: fmt::Arguments<'_>) {}
}

impl<P: Platform, const CAP: usize> fmt::Debug for NullLogger<'_, P, CAP> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NullLogger")
    }
}

impl<P: Platform, const CAP: usize> SeverityLog for NullLogger<'_, P, CAP> {
    #[inline(always)]
    fn enabled(&self, _severity: Severity) -> bool {
        false
    }

    #[inline(always)]
    fn log(&self, _severity: Severity, _args: fmt::Arguments<'_>) {}
}
