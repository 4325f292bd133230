use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use blockfall::core::{GameSnapshot, GameState};
use blockfall::types::{Command, RunState};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn core_hot_paths_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let mut gs = GameState::new(1);
    gs.start();
    let mut snap = GameSnapshot::default();

    // Warm-up.
    let _ = gs.tick(0);
    let _ = gs.apply(Command::MoveLeft);

    let allocs = with_alloc_counting(|| {
        let mut now = 0;
        for _ in 0..200 {
            now += 16;
            let _ = gs.tick(now);
        }

        for _ in 0..50 {
            let _ = gs.apply(Command::MoveLeft);
            let _ = gs.apply(Command::MoveRight);
            let _ = gs.apply(Command::Rotate);
            let _ = gs.apply(Command::SoftDrop);
        }

        // Hard drop drives the lock, clear and spawn paths.
        for _ in 0..60 {
            let _ = gs.apply(Command::HardDrop);
            gs.snapshot_into(&mut snap);
            gs.drain_events().for_each(drop);
            if gs.run_state() == RunState::GameOver {
                let _ = gs.apply(Command::Start);
            }
        }
    });

    assert_eq!(allocs, 0);
}
