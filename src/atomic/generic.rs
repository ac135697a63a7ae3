//! Fallback on `core::sync::atomic` for everything that is not 32-bit ARM,
//! mostly so the testsuite runs on development hosts.
//!
//! Observable semantics match the LDREX/STREX backend exactly: same return
//! conventions, same absence of ordering. Every operation is `Relaxed`; the
//! word itself is atomic and nothing else is promised. Ordering is composed
//! explicitly with [`memory_barrier`].

use core::sync::atomic::{AtomicI32, Ordering};

cfg_if::cfg_if! {
    if #[cfg(feature = "smp")] {
        pub fn memory_barrier() {
            core::sync::atomic::fence(Ordering::SeqCst);
        }
    } else if #[cfg(feature = "armv7")] {
        pub fn memory_barrier() {
            core::sync::atomic::compiler_fence(Ordering::SeqCst);
        }
    } else {
        pub fn memory_barrier() {}
    }
}

pub unsafe fn compare_and_swap(expected: i32, new: i32, ptr: *mut i32) -> i32 {
    // SAFETY: caller guarantees ptr is non-null, aligned, and valid.
    let word = unsafe { AtomicI32::from_ptr(ptr) };
    // compare_exchange only fails on a value mismatch; reservation-style
    // contention is retried internally, matching the hardware loop.
    match word.compare_exchange(expected, new, Ordering::Relaxed, Ordering::Relaxed) {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

pub unsafe fn swap(new: i32, ptr: *mut i32) -> i32 {
    // SAFETY: caller guarantees ptr is non-null, aligned, and valid.
    let word = unsafe { AtomicI32::from_ptr(ptr) };
    word.swap(new, Ordering::Relaxed)
}

pub unsafe fn decrement(ptr: *mut i32) -> i32 {
    // SAFETY: caller guarantees ptr is non-null, aligned, and valid.
    let word = unsafe { AtomicI32::from_ptr(ptr) };
    word.fetch_sub(1, Ordering::Relaxed)
}
