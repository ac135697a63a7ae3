//! Backend on the `portable-atomic` crate, for targets whose native atomic
//! support is missing or undesirable. Selected by the `portable-atomic`
//! feature on every architecture, including ARM.

use core::sync::atomic::Ordering;
use portable_atomic::AtomicI32;

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

// portable-atomic guarantees AtomicI32 has the same in-memory representation
// as i32, so viewing the caller's word through it is sound.

pub unsafe fn compare_and_swap(expected: i32, new: i32, ptr: *mut i32) -> i32 {
    // SAFETY: caller guarantees ptr is non-null, aligned, and valid.
    let word = unsafe { &*(ptr as *const AtomicI32) };
    match word.compare_exchange(expected, new, Ordering::Relaxed, Ordering::Relaxed) {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

pub unsafe fn swap(new: i32, ptr: *mut i32) -> i32 {
    // SAFETY: caller guarantees ptr is non-null, aligned, and valid.
    let word = unsafe { &*(ptr as *const AtomicI32) };
    word.swap(new, Ordering::Relaxed)
}

pub unsafe fn decrement(ptr: *mut i32) -> i32 {
    // SAFETY: caller guarantees ptr is non-null, aligned, and valid.
    let word = unsafe { &*(ptr as *const AtomicI32) };
    word.fetch_sub(1, Ordering::Relaxed)
}
