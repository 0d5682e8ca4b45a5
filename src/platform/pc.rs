//! Bare-metal x86_64 PC: a 16550 UART transport and the CMOS clock.
//!
//! The UART is an explicit handle. Loggers created on this platform stay
//! silent until [`ChronoLogger::set_transport_handle`] gives them one.
//!
//! [`ChronoLogger::set_transport_handle`]: crate::ChronoLogger::set_transport_handle

use spin::Mutex;
use uart_16550::SerialPort;
use x86_64::instructions::interrupts;

use super::{Platform, TaskName};
use crate::{cmos, timestamp::ClockReading};

/// Serial port shared between the loggers writing to it.
pub type Uart = Mutex<SerialPort>;

/// I/O port base of COM1.
pub const COM1: u16 = 0x3F8;

/// Create and initialise the UART at `base`.
///
/// # Safety
/// `base` must be the I/O port base of a 16550-compatible UART that nothing
/// else drives.
pub unsafe fn uart(base: u16) -> Uart {
    let mut port = SerialPort::new(base);
    port.init();
    Mutex::new(port)
}

/// Milliseconds since boot, used when no RTC has been installed.
pub type UptimeSource = fn() -> u64;

/// Name of the task the scheduler is running, `None` before it starts.
pub type TaskNameSource = fn() -> Option<TaskName>;

#[derive(Clone, Copy)]
pub struct Pc {
    uptime: Option<UptimeSource>,
    task_name: Option<TaskNameSource>,
}

impl Pc {
    pub const fn new() -> Self {
        Self {
            uptime: None,
            task_name: None,
        }
    }

    #[must_use]
    pub const fn with_uptime(mut self, uptime: UptimeSource) -> Self {
        self.uptime = Some(uptime);
        self
    }

    #[must_use]
    pub const fn with_task_names(mut self, task_name: TaskNameSource) -> Self {
        self.task_name = Some(task_name);
        self
    }
}

impl Default for Pc {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for Pc {
    type Handle = &'static Uart;
    const REQUIRES_HANDLE: bool = true;

    fn read_clock(&self) -> ClockReading {
        if let Some(time) = cmos::RTC.try_get().ok().and_then(|rtc| rtc.time()) {
            return ClockReading::WallClock(time);
        }
        ClockReading::from_millis(self.uptime.map_or(0, |uptime| uptime()))
    }

    fn current_task_name(&self) -> Option<TaskName> {
        self.task_name.and_then(|task_name| task_name())
    }

    fn transmit(&self, handle: Option<&&'static Uart>, bytes: &[u8]) {
        let Some(uart) = handle else {
            return;
        };

        // Interrupt handlers may log, keep them out while the port is locked
        interrupts::without_interrupts(|| {
            let mut port = uart.lock();
            for &byte in bytes {
                port.send(byte);
            }
        });
    }
}
