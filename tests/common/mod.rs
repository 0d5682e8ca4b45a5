#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

use chronolog::{
    platform::{task_name, Platform, TaskName},
    timestamp::ClockReading,
};

/// A transport write, with the handle it went through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Write {
    pub handle: Option<u8>,
    pub text: String,
}

/// Platform that records every write and counts the services it is asked for.
///
/// With `NEEDS_HANDLE` set it behaves like a UART target: loggers must be
/// given a handle before anything is written.
pub struct Recorder<const NEEDS_HANDLE: bool = false> {
    writes: Mutex<Vec<Write>>,
    pub task: Option<&'static str>,
    pub clock_ms: u64,
    pub refuse_alloc: bool,
    pub clock_reads: AtomicUsize,
    pub allocations: AtomicUsize,
}

pub type ConsoleRecorder = Recorder<false>;
pub type UartRecorder = Recorder<true>;

impl<const NEEDS_HANDLE: bool> Recorder<NEEDS_HANDLE> {
    pub const fn new() -> Self {
        Self {
            writes: Mutex::new(Vec::new()),
            task: None,
            // 01:02:03
            clock_ms: 3_723_000,
            refuse_alloc: false,
            clock_reads: AtomicUsize::new(0),
            allocations: AtomicUsize::new(0),
        }
    }

    pub fn with_task(mut self, task: &'static str) -> Self {
        self.task = Some(task);
        self
    }

    pub fn refusing_alloc(mut self) -> Self {
        self.refuse_alloc = true;
        self
    }

    pub fn writes(&self) -> Vec<Write> {
        self.writes.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.writes().into_iter().map(|w| w.text).collect()
    }

    /// Everything written so far, concatenated.
    pub fn output(&self) -> String {
        self.texts().concat()
    }

    pub fn clear(&self) {
        self.writes.lock().unwrap().clear();
    }

    pub fn clock_reads(&self) -> usize {
        self.clock_reads.load(Ordering::SeqCst)
    }

    pub fn allocations(&self) -> usize {
        self.allocations.load(Ordering::SeqCst)
    }
}

impl<const NEEDS_HANDLE: bool> Platform for Recorder<NEEDS_HANDLE> {
    type Handle = u8;
    const REQUIRES_HANDLE: bool = NEEDS_HANDLE;

    fn read_clock(&self) -> ClockReading {
        self.clock_reads.fetch_add(1, Ordering::SeqCst);
        ClockReading::from_millis(self.clock_ms)
    }

    fn current_task_name(&self) -> Option<TaskName> {
        self.task.and_then(task_name)
    }

    fn transmit(&self, handle: Option<&u8>, bytes: &[u8]) {
        self.writes.lock().unwrap().push(Write {
            handle: handle.copied(),
            text: String::from_utf8(bytes.to_vec()).unwrap(),
        });
    }

    fn try_alloc_message(&self, len: usize) -> Option<String> {
        self.allocations.fetch_add(1, Ordering::SeqCst);
        if self.refuse_alloc {
            return None;
        }
        let mut message = String::new();
        message.try_reserve_exact(len).ok()?;
        Some(message)
    }
}

/// Split a line into its `|` separated columns, trimmed.
pub fn columns(prefix: &str) -> Vec<String> {
    prefix
        .split(" | ")
        .map(|column| column.trim().to_owned())
        .collect()
}
