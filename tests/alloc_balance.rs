//! Every byte the emission path allocates is freed before it returns.
//!
//! Runs without the test harness so no other thread allocates while the
//! counters are being read.

use std::{
    alloc::{GlobalAlloc, Layout, System},
    sync::atomic::{AtomicBool, AtomicIsize, AtomicUsize, Ordering},
};

use chronolog::{
    platform::{Platform, TaskName},
    timestamp::ClockReading,
    ChronoLogger,
};

struct Counting;

static LIVE_BYTES: AtomicIsize = AtomicIsize::new(0);
static ALLOCATIONS: AtomicUsize = AtomicUsize::new(0);

unsafe impl GlobalAlloc for Counting {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        ALLOCATIONS.fetch_add(1, Ordering::SeqCst);
        LIVE_BYTES.fetch_add(layout.size() as isize, Ordering::SeqCst);
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        LIVE_BYTES.fetch_sub(layout.size() as isize, Ordering::SeqCst);
        System.dealloc(ptr, layout)
    }
}

#[global_allocator]
static GLOBAL: Counting = Counting;

/// Discards output, optionally refusing heap messages.
struct Sink {
    refuse: AtomicBool,
    written: AtomicUsize,
}

impl Platform for Sink {
    type Handle = ();

    fn read_clock(&self) -> ClockReading {
        ClockReading::from_millis(0)
    }

    fn current_task_name(&self) -> Option<TaskName> {
        None
    }

    fn transmit(&self, _: Option<&()>, bytes: &[u8]) {
        self.written.fetch_add(bytes.len(), Ordering::SeqCst);
    }

    fn try_alloc_message(&self, len: usize) -> Option<String> {
        if self.refuse.load(Ordering::SeqCst) {
            return None;
        }
        let mut message = String::new();
        message.try_reserve_exact(len).ok()?;
        Some(message)
    }
}

fn check(name: &str, f: impl FnOnce()) {
    let live_before = LIVE_BYTES.load(Ordering::SeqCst);
    let allocations_before = ALLOCATIONS.load(Ordering::SeqCst);
    f();
    let live_after = LIVE_BYTES.load(Ordering::SeqCst);
    let allocations = ALLOCATIONS.load(Ordering::SeqCst) - allocations_before;
    assert_eq!(live_before, live_after, "{}: leaked bytes", name);
    println!("{} ... ok ({} allocations)", name, allocations);
}

fn main() {
    let log: ChronoLogger<_> = ChronoLogger::new(
        "alloc",
        Sink {
            refuse: AtomicBool::new(false),
            written: AtomicUsize::new(0),
        },
    );
    let long = "l".repeat(4096);

    check("short message stays on the stack", || {
        let before = ALLOCATIONS.load(Ordering::SeqCst);
        log.info(format_args!("{} {}", "short", 1));
        assert_eq!(ALLOCATIONS.load(Ordering::SeqCst), before);
    });

    check("long message frees its heap buffer", || {
        let before = ALLOCATIONS.load(Ordering::SeqCst);
        log.info(format_args!("{}", long));
        assert_eq!(ALLOCATIONS.load(Ordering::SeqCst), before + 1);
    });

    check("refused allocation leaves nothing behind", || {
        log.platform().refuse.store(true, Ordering::SeqCst);
        log.error(format_args!("{}", long));
        log.platform().refuse.store(false, Ordering::SeqCst);
    });

    check("filtered record allocates nothing", || {
        let before = ALLOCATIONS.load(Ordering::SeqCst);
        log.set_threshold(chronolog::Severity::None);
        log.fatal(format_args!("{}", long));
        assert_eq!(ALLOCATIONS.load(Ordering::SeqCst), before);
    });

    assert!(log.platform().written.load(Ordering::SeqCst) > long.len());
}
