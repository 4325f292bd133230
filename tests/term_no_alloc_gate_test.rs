use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use blockfall::core::{GameSnapshot, GameState};
use blockfall::term::{encode_diff_into, FrameBuffer, GameView, Viewport};
use blockfall::types::Command;

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
fn term_render_and_diff_do_not_allocate() {
    let mut game = GameState::new(1);
    game.start();
    let view = GameView::default();
    let vp = Viewport::new(80, 24);

    // Setup (outside counting): buffers sized for the viewport.
    let mut snap = GameSnapshot::default();
    let mut prev = FrameBuffer::new(vp.width, vp.height);
    let mut next = FrameBuffer::new(vp.width, vp.height);
    let mut out: Vec<u8> = Vec::with_capacity(256 * 1024);

    // Warm-up frame.
    game.snapshot_into(&mut snap);
    view.render_into(&snap, vp, &mut prev);

    let allocs = with_alloc_counting(|| {
        for i in 0..30 {
            let command = if i % 2 == 0 {
                Command::MoveLeft
            } else {
                Command::Rotate
            };
            let _ = game.apply(command);
            game.snapshot_into(&mut snap);
            view.render_into(&snap, vp, &mut next);

            out.clear();
            let _ = encode_diff_into(&prev, &next, &mut out);
            std::mem::swap(&mut prev, &mut next);
        }
    });

    assert_eq!(allocs, 0);
}
