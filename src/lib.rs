//! Atomic read-modify-write primitives for 32-bit ARM, built directly on the
//! LDREX/STREX exclusive-access instructions.
//!
//! This is the bottom layer a runtime library stands on when it builds
//! mutexes, spinlocks, and reference counts: a compare-and-swap, an
//! unconditional swap, an atomic decrement, and an explicit memory barrier.
//! Each operation performs exactly one atomic transition on a caller-owned,
//! naturally-aligned 32-bit word and keeps no state of its own.
//!
//! Two conventions here differ from what `core::sync::atomic` users expect,
//! and both are deliberate:
//!
//! 1. [`compare_and_swap`] returns **0 on success and 1 on failure**, the
//!    opposite of the usual boolean convention. Callers ported from C depend
//!    on it.
//!
//! 2. **No operation implies any memory ordering.** The retry loops guarantee
//!    atomicity of the single word and nothing else. A caller that needs its
//!    other loads and stores ordered around an atomic op must bracket it with
//!    [`memory_barrier`] explicitly. Resist the urge to fold a barrier into
//!    the primitives; callers that already manage their own ordering rely on
//!    these being barrier-free.
//!
//! # Backends
//!
//! On `target_arch = "arm"` the operations are hand-written LDREX/STREX retry
//! loops with a guaranteed code shape, not compiler intrinsics. With the
//! `thumb1` feature enabled the loops additionally switch the processor to
//! the full ARM encoding for the duration of the exclusive-access sequence,
//! since Thumb-1 has no encodings for these instructions.
//!
//! Everywhere else a fallback on `core::sync::atomic` provides the same
//! observable semantics, mostly so the testsuite runs on development hosts.
//! The `portable-atomic` feature swaps in the `portable-atomic` crate
//! instead, for targets whose native atomic support is missing or
//! undesirable.
//!
//! All configuration is by cargo feature, fixed at build time; nothing is
//! runtime-visible. See the feature table in `Cargo.toml`.

#![no_std]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(all(not(feature = "portable-atomic"), target_arch = "arm"))]
#[path = "atomic/exclusive.rs"]
mod impl_mod;

#[cfg(all(not(feature = "portable-atomic"), not(target_arch = "arm")))]
#[path = "atomic/generic.rs"]
mod impl_mod;

#[cfg(feature = "portable-atomic")]
#[path = "atomic/portable_atomic.rs"]
mod impl_mod;

/// Establishes a memory-ordering point: memory operations preceding the call
/// become visible to other processors before memory operations following it.
///
/// What actually gets emitted depends on the build:
///
/// | Configuration | Effect |
/// |---|---|
/// | `smp` | hardware full barrier (`dmb ish` on ARM) |
/// | no `smp`, `armv7` | compiler-only fence, no instruction |
/// | otherwise | nothing |
///
/// A single core cannot observe reordering across its own instruction
/// stream, so the non-`smp` flavors only have to stop the *compiler* from
/// moving memory accesses across the call, and on pre-v7 builds not even
/// that.
#[inline(always)]
pub fn memory_barrier() {
    impl_mod::memory_barrier()
}

/// Atomically replaces `*ptr` with `new` if and only if it currently holds
/// `expected`. Returns **0 if the swap happened, 1 if it did not** — note the
/// inverted convention.
///
/// A value mismatch is a normal outcome, not an error, and never retries:
/// the internal loop repeats only when a store attempt lost its exclusive
/// reservation to a concurrent access. No barrier is issued.
///
/// # Safety
///
/// `ptr` must be non-null, naturally aligned, and valid for reads and writes
/// for the duration of the call. Violations are undefined behavior at the
/// hardware level and are not detected.
#[inline(always)]
pub unsafe fn compare_and_swap(expected: i32, new: i32, ptr: *mut i32) -> i32 {
    unsafe { impl_mod::compare_and_swap(expected, new, ptr) }
}

/// Atomically replaces `*ptr` with `new`, returning the value that was there
/// immediately before. No barrier is issued.
///
/// # Safety
///
/// Same requirements as [`compare_and_swap`].
#[inline(always)]
pub unsafe fn swap(new: i32, ptr: *mut i32) -> i32 {
    unsafe { impl_mod::swap(new, ptr) }
}

/// Atomically decrements `*ptr` by one, returning the value immediately
/// before the decrement. Wraps at `i32::MIN` per two's-complement
/// arithmetic; there is no overflow check. No barrier is issued.
///
/// # Safety
///
/// Same requirements as [`compare_and_swap`].
#[inline(always)]
pub unsafe fn decrement(ptr: *mut i32) -> i32 {
    unsafe { impl_mod::decrement(ptr) }
}
