//! Checks that evaluating a line frees everything it allocates.
//!
//! A counting global allocator tracks the bytes held by the current thread,
//! so allocations made by the test harness on other threads do not count.

use std::{
    alloc::{GlobalAlloc, Layout, System},
    cell::Cell,
};

use bblisp::run_line;

struct Counting;

thread_local! {
    static LIVE_BYTES: Cell<isize> = const { Cell::new(0) };
}

fn record(delta: isize) {
    let _ = LIVE_BYTES.try_with(|live| live.set(live.get() + delta));
}

#[allow(clippy::cast_possible_wrap)]
unsafe impl GlobalAlloc for Counting {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        record(layout.size() as isize);
        unsafe { System.alloc(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        record(-(layout.size() as isize));
        unsafe { System.dealloc(ptr, layout) }
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        record(new_size as isize - layout.size() as isize);
        unsafe { System.realloc(ptr, layout, new_size) }
    }
}

#[global_allocator]
static ALLOCATOR: Counting = Counting;

fn live_bytes() -> isize {
    LIVE_BYTES.with(Cell::get)
}

fn assert_balanced(src: &str) {
    // Warm up once so lazily initialised statics are not counted.
    run_line(src, &mut std::io::sink()).unwrap();

    let before = live_bytes();
    run_line(src, &mut std::io::sink()).unwrap();
    let after = live_bytes();

    assert_eq!(before, after, "input `{src}` leaked {} bytes", after - before);
}

#[test]
fn evaluation_frees_every_value() {
    for src in ["(+ 1 2 3)",
                "(* 2 (+ 1 1))",
                "(min 4 2 7)",
                "()",
                "(((7)))",
                "(/ 4 0 (+ 1 1))",
                "(+ (/ 1 0) (* 2 (+ 1 -)))",
                "(1 2 3)",
                "(+ 1 99999999999999999999)",
                "(+ 1 2",
                "(+ 1 x)"]
    {
        assert_balanced(src);
    }
}
