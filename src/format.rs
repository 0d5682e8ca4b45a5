//! Formatting of the record prefix and the user message.
//!
//! The message is first rendered into a stack buffer of `CAP` bytes. Like
//! `vsnprintf`, the writer keeps counting once the buffer is full, so the
//! first pass always learns the length of the complete message. Messages
//! shorter than `CAP` are used straight from the stack; longer ones are
//! formatted a second time into a heap string sized to fit.

use core::fmt::{self, Write};

use alloc::string::String;
use arrayvec::ArrayString;

use crate::{colour::Palette, Severity};

/// Default capacity of the stack message buffer.
pub const DEFAULT_BUFFER_LEN: usize = 256;

/// Capacity of the stack buffer the prefix is composed in.
pub const PREFIX_LEN: usize = 128;

/// Sent in place of the message when the heap buffer cannot be allocated.
pub const ALLOC_FAILED_MESSAGE: &str = "[Log too long: memory error]";

pub const NAME_WIDTH: usize = 15;
pub const TAG_WIDTH: usize = 8;
pub const TASK_WIDTH: usize = 16;

/// Writes into a fixed buffer and counts everything it was asked to write.
struct Bounded<'a, const N: usize> {
    buf: &'a mut ArrayString<N>,
    required: usize,
    overflowed: bool,
}

impl<'a, const N: usize> Bounded<'a, N> {
    fn new(buf: &'a mut ArrayString<N>) -> Self {
        Self {
            buf,
            required: 0,
            overflowed: false,
        }
    }
}

impl<const N: usize> Write for Bounded<'_, N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.required += s.len();
        if self.overflowed {
            return Ok(());
        }

        if self.buf.try_push_str(s).is_err() {
            // Keep as much as fits, on a char boundary
            let mut end = self.buf.remaining_capacity().min(s.len());
            while !s.is_char_boundary(end) {
                end -= 1;
            }
            self.buf.push_str(&s[..end]);
            self.overflowed = true;
        }
        Ok(())
    }
}

/// Counts formatted bytes without storing them.
struct Measure(usize);

impl Write for Measure {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 += s.len();
        Ok(())
    }
}

/// Length of `args` once formatted.
pub fn measure(args: fmt::Arguments<'_>) -> usize {
    let mut measure = Measure(0);
    let _: Result<_, _> = measure.write_fmt(args);
    measure.0
}

/// A formatted message body.
#[derive(Debug)]
pub enum Message<const CAP: usize> {
    Bounded(ArrayString<CAP>),
    Dynamic(String),
    AllocFailed,
}

impl<const CAP: usize> Message<CAP> {
    pub fn as_str(&self) -> &str {
        match self {
            Message::Bounded(buf) => buf.as_str(),
            Message::Dynamic(buf) => buf.as_str(),
            Message::AllocFailed => ALLOC_FAILED_MESSAGE,
        }
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self, Message::Dynamic(_))
    }
}

/// Format `args`, falling back to a heap string of exactly the formatted
/// length when it does not fit in `CAP - 1` bytes.
///
/// `allocate` is asked for the heap string and may refuse, in which case the
/// result is [`Message::AllocFailed`].
pub fn format_message<const CAP: usize>(
    args: fmt::Arguments<'_>,
    allocate: impl FnOnce(usize) -> Option<String>,
) -> Message<CAP> {
    let mut buf = ArrayString::<CAP>::new();
    let mut writer = Bounded::new(&mut buf);
    // A failing Display impl leaves whatever it wrote so far
    let _: Result<_, _> = writer.write_fmt(args);
    let len = writer.required;

    if len < CAP {
        return Message::Bounded(buf);
    }

    match allocate(len) {
        Some(mut heap) => {
            let _: Result<_, _> = heap.write_fmt(args);
            Message::Dynamic(heap)
        }
        None => Message::AllocFailed,
    }
}

/// Compose `HH:MM:SS | name | TAG | task | ` into a stack buffer, cutting
/// it short if an over-long name does not fit.
pub fn compose_prefix(
    time: &str,
    name: &str,
    severity: Severity,
    palette: &Palette,
    task: &str,
) -> ArrayString<PREFIX_LEN> {
    let mut buf = ArrayString::new();
    let mut writer = Bounded::new(&mut buf);
    let _: Result<_, _> = write!(
        writer,
        "{} | {:<name_w$} | {}{:<tag_w$}{} | {:<task_w$} | ",
        time,
        name,
        palette.get(severity),
        severity.tag(),
        palette.reset,
        task,
        name_w = NAME_WIDTH,
        tag_w = TAG_WIDTH,
        task_w = TASK_WIDTH,
    );
    buf
}
