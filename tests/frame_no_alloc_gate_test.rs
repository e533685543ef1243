use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use matrix_rain::core::SimpleRng;
use matrix_rain::term::RainFrame;
use matrix_rain::types::{RainConfig, Viewport};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = layout;
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = (layout, new_size);
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
fn rain_frame_render_is_allocation_free_after_warmup() {
    let config = RainConfig {
        init_chance: 0.05,
        ..RainConfig::default()
    };
    let mut frame = RainFrame::new(config);
    let mut rng = SimpleRng::new(1);
    let viewport = Viewport::new(80, 24);

    // Warm-up (buffer allocation on first size).
    frame.render(viewport, &mut rng).unwrap();

    let allocs = with_alloc_counting(|| {
        for _ in 0..200 {
            let bytes = frame.render(viewport, &mut rng).unwrap();
            std::hint::black_box(bytes);
        }
    });

    assert!(allocs == 0);
}
