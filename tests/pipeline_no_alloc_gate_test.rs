use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use cube_grid::core::build_cube;
use cube_grid::engine::{AnimationDriver, RowOrder, SoftwareRasterizer};
use cube_grid::term::{FrameBuffer, GridView};
use cube_grid::types::{GRID_HEIGHT, GRID_WIDTH};

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
fn frame_pipeline_is_allocation_free_after_warmup() {
    let backend = SoftwareRasterizer::new(GRID_WIDTH, GRID_HEIGHT).unwrap();
    let mut driver = AnimationDriver::new(backend, build_cube(), RowOrder::TopDown).unwrap();
    let view = GridView::default();
    let (w, h) = view.framebuffer_size(driver.grid());
    let mut fb = FrameBuffer::new(w, h);

    // Warm-up.
    for i in 0..3 {
        driver.on_frame(f64::from(i) * 16.0).unwrap();
        view.render_into(driver.grid(), &mut fb);
    }

    // 25 frames cover two FPS refreshes (frames 10 and 20).
    let allocs = with_alloc_counting(|| {
        for i in 3..28 {
            let report = driver.on_frame(f64::from(i) * 16.0).unwrap();
            std::hint::black_box(report);
            view.render_into(driver.grid(), &mut fb);
        }
    });

    assert_eq!(allocs, 0, "expected no allocations in the frame pipeline");
}
