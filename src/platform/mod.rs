//! Services the logger needs from the target: a clock, the name of the
//! running task, a byte transport and a fallible heap.

#[cfg(any(test, feature = "std"))]
pub mod hosted;
#[cfg(all(feature = "pc", target_arch = "x86_64"))]
pub mod pc;

use alloc::string::String;
use arrayvec::ArrayString;

use crate::timestamp::ClockReading;

pub const TASK_NAME_LEN: usize = 32;

/// Name of the executing task, copied out of the scheduler.
pub type TaskName = ArrayString<TASK_NAME_LEN>;

/// Substituted when the platform cannot name the current task.
pub const FALLBACK_TASK_NAME: &str = "MainTask";

/// Copy `name` into a [`TaskName`], cutting it at the last char boundary
/// that fits. Empty names are treated as absent.
pub fn task_name(name: &str) -> Option<TaskName> {
    if name.is_empty() {
        return None;
    }

    let mut end = name.len().min(TASK_NAME_LEN);
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    ArrayString::from(&name[..end]).ok()
}

pub trait Platform {
    /// Handle the transport writes through. Platforms with a fixed sink use `()`.
    type Handle;

    /// When set, a logger without a handle performs no transport writes.
    const REQUIRES_HANDLE: bool = false;

    fn read_clock(&self) -> ClockReading;

    /// `None` before a scheduler runs or when the target has no task names.
    fn current_task_name(&self) -> Option<TaskName>;

    /// Send `bytes` to the sink, blocking until accepted.
    fn transmit(&self, handle: Option<&Self::Handle>, bytes: &[u8]);

    /// Allocate an empty string with room for exactly `len` bytes.
    fn try_alloc_message(&self, len: usize) -> Option<String> {
        let mut message = String::new();
        message.try_reserve_exact(len).ok()?;
        Some(message)
    }
}

impl<P: Platform> Platform for &P {
    type Handle = P::Handle;
    const REQUIRES_HANDLE: bool = P::REQUIRES_HANDLE;

    fn read_clock(&self) -> ClockReading {
        (**self).read_clock()
    }

    fn current_task_name(&self) -> Option<TaskName> {
        (**self).current_task_name()
    }

    fn transmit(&self, handle: Option<&Self::Handle>, bytes: &[u8]) {
        (**self).transmit(handle, bytes)
    }

    fn try_alloc_message(&self, len: usize) -> Option<String> {
        (**self).try_alloc_message(len)
    }
}
