//! Platform for programs running on an operating system.

use std::{
    env,
    io::{self, Write},
    thread,
    time::Instant,
};

use chrono::Local;

use super::{task_name, Platform, TaskName};
use crate::{timestamp::ClockReading, Severity};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Console {
    Stdout,
    Stderr,
}

#[derive(Debug, Clone, Copy)]
pub enum TimeSource {
    /// Time elapsed since the platform was created.
    Uptime(Instant),
    /// Local time of day from the system clock.
    WallClock,
}

/// Writes records to a console stream and names them after the current
/// thread.
#[derive(Debug, Clone, Copy)]
pub struct Hosted {
    console: Console,
    time: TimeSource,
}

impl Hosted {
    /// Stdout, with uptime timestamps starting now.
    pub fn new() -> Self {
        Self {
            console: Console::Stdout,
            time: TimeSource::Uptime(Instant::now()),
        }
    }

    #[must_use]
    pub fn with_console(mut self, console: Console) -> Self {
        self.console = console;
        self
    }

    #[must_use]
    pub fn with_wall_clock(mut self) -> Self {
        self.time = TimeSource::WallClock;
        self
    }

    /// Read a threshold from the environment variable `var`.
    ///
    /// Returns `None` when the variable is unset or does not name a severity.
    pub fn threshold_from_env(var: &str) -> Option<Severity> {
        env::var(var).ok()?.parse().ok()
    }
}

impl Default for Hosted {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for Hosted {
    type Handle = ();

    fn read_clock(&self) -> ClockReading {
        match self.time {
            TimeSource::Uptime(start) => ClockReading::Uptime(start.elapsed()),
            TimeSource::WallClock => ClockReading::WallClock(Local::now().time()),
        }
    }

    fn current_task_name(&self) -> Option<TaskName> {
        thread::current().name().and_then(task_name)
    }

    fn transmit(&self, _handle: Option<&()>, bytes: &[u8]) {
        // Nowhere to report a failed console write
        let _: Result<_, _> = match self.console {
            Console::Stdout => io::stdout().write_all(bytes),
            Console::Stderr => io::stderr().write_all(bytes),
        };
    }
}
