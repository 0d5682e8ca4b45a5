//! Time of day from the CMOS real-time clock.

use chrono::NaiveTime;
use conquer_once::noblock::OnceCell;
use x86_64::instructions::{interrupts, port::Port};

const CMOS_ADDR: u16 = 0x70;
const CMOS_DATA: u16 = 0x71;

const REG_RTC_SECONDS: u8 = 0x00;
const REG_RTC_MINUTES: u8 = 0x02;
const REG_RTC_HOURS: u8 = 0x04;
const REG_RTC_STATUSA: u8 = 0x0A;
const REG_RTC_STATUSB: u8 = 0x0B;

fn read(addr: u8) -> u8 {
    let mut cmos_addr: Port<u8> = Port::new(CMOS_ADDR);
    let mut cmos_data: Port<u8> = Port::new(CMOS_DATA);

    // Bit 7 keeps NMIs disabled while the register is selected
    unsafe {
        cmos_addr.write(1 << 7 | addr);
        cmos_data.read()
    }
}

pub static RTC: OnceCell<Rtc> = OnceCell::uninit();

/// Install the RTC as the wall clock for [`Pc`](crate::platform::pc::Pc)
/// loggers. Later calls are ignored.
pub fn init() {
    let _: Result<_, _> = RTC.try_init_once(Rtc::new);
}

#[derive(Debug)]
pub struct Rtc {
    _private: (),
}

impl Rtc {
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Read the current time of day.
    ///
    /// Returns `None` if the clock is mid-update or reports an invalid time.
    pub fn time(&self) -> Option<NaiveTime> {
        let (status_b, second, minute, hour) = interrupts::without_interrupts(|| {
            if read(REG_RTC_STATUSA) & 0x80 != 0 {
                return None;
            }
            Some((
                read(REG_RTC_STATUSB),
                read(REG_RTC_SECONDS),
                read(REG_RTC_MINUTES),
                read(REG_RTC_HOURS),
            ))
        })?;

        let (hour, minute, second) = decode(status_b, hour, minute, second);
        NaiveTime::from_hms_opt(hour, minute, second)
    }
}

impl Default for Rtc {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalise raw RTC registers to 24-hour binary hours, minutes, seconds.
fn decode(status_b: u8, hour: u8, minute: u8, second: u8) -> (u32, u32, u32) {
    let uses_24_hour = (status_b >> 1) & 1 == 1;
    let uses_binary = (status_b >> 2) & 1 == 1;

    let normalise = |value| {
        if uses_binary {
            value
        } else {
            bcd_to_binary(value)
        }
    };

    let pm = hour >> 7 == 1;
    let hour = normalise(hour & 0x7F);
    let hour = if uses_24_hour {
        hour
    } else if pm {
        hour % 12 + 12
    } else {
        hour % 12
    };

    (hour as u32, normalise(minute) as u32, normalise(second) as u32)
}

fn bcd_to_binary(value: u8) -> u8 {
    10 * (value >> 4) + (value & 0xf)
}
