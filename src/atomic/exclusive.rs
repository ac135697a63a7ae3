//! LDREX/STREX retry loops for `target_arch = "arm"`.
//!
//! Every operation is one `asm!` block containing its own exclusive-load /
//! exclusive-store sequence. The store only commits if the hardware
//! reservation taken by the load is still intact, so the loop re-reads and
//! retries whenever a concurrent access to the word stole the reservation.
//! Under sustained contention the loop is unbounded; that is the usual
//! lock-free trade-off and callers wanting bounded waiting must impose it
//! themselves.
//!
//! The asm avoids IT-conditional forms so the same template assembles in
//! both the ARM and Thumb-2 encodings.
//!
//! # Thumb-1 builds
//!
//! Thumb-1 has no encodings for LDREX/STREX (or DMB), even though the
//! processor supports the instructions. The `thumb1` feature deals with this
//! the way libatomic_ops does: compute the address of a following label with
//! ADR, BX to it with the Thumb bit clear to drop into the ARM encoding, run
//! the exclusive sequence, then mirror the ADR/BX with the label address
//! offset by one to set the Thumb bit and return. That costs two BX jumps,
//! like a normal function call, but keeps everything inlined with no
//! address load and less I-cache traffic. The ADR clobbers one scratch
//! register, which only exists on `thumb1` builds.

use core::arch::asm;

#[cfg(feature = "thumb1")]
macro_rules! to_arm {
    () => {
        concat!(
            "adr {scratch}, 8f\n",
            "bx {scratch}\n",
            ".align 2\n",
            ".arm\n",
            "8:",
        )
    };
}

// The `9f+1` keeps the Thumb bit set in the branch target.
#[cfg(feature = "thumb1")]
macro_rules! to_thumb {
    () => {
        concat!(
            "adr {scratch}, 9f+1\n",
            "bx {scratch}\n",
            ".thumb\n",
            "9:",
        )
    };
}

/// Emits an exclusive-access asm block, bracketed by the encoding switch on
/// `thumb1` builds. Only those builds declare the scratch register the
/// switch clobbers.
macro_rules! exclusive {
    ($($insn:literal,)+ $($operands:tt)*) => {{
        #[cfg(feature = "thumb1")]
        asm!(
            to_arm!(),
            $($insn,)+
            to_thumb!(),
            scratch = out(reg) _,
            $($operands)*
        );
        #[cfg(not(feature = "thumb1"))]
        asm!(
            $($insn,)+
            $($operands)*
        );
    }};
}

cfg_if::cfg_if! {
    if #[cfg(feature = "smp")] {
        pub fn memory_barrier() {
            // DMB has no Thumb-1 encoding either, but `smp` targets are
            // expected to build in ARM or Thumb-2 mode.
            unsafe {
                asm!("dmb ish", options(nostack, preserves_flags));
            }
        }
    } else if #[cfg(feature = "armv7")] {
        pub fn memory_barrier() {
            core::sync::atomic::compiler_fence(core::sync::atomic::Ordering::SeqCst);
        }
    } else {
        pub fn memory_barrier() {}
    }
}

/// CAS with the 0-success / 1-failure convention.
///
/// The mismatch path branches straight out of the loop: only a store attempt
/// that lost its reservation retries. This is retry-on-contention, not
/// retry-on-mismatch.
pub unsafe fn compare_and_swap(expected: i32, new: i32, ptr: *mut i32) -> i32 {
    let prev: i32;
    unsafe {
        exclusive!(
            "2:",
            "ldrex {prev}, [{ptr}]",
            "cmp {prev}, {expected}",
            "bne 3f",
            "strex {status}, {new}, [{ptr}]",
            "cmp {status}, #0",
            "bne 2b",
            "3:",
            prev = out(reg) prev,
            status = out(reg) _,
            ptr = in(reg) ptr,
            expected = in(reg) expected,
            new = in(reg) new,
            options(nostack)
        );
    }
    (prev != expected) as i32
}

pub unsafe fn swap(new: i32, ptr: *mut i32) -> i32 {
    let prev: i32;
    unsafe {
        exclusive!(
            "2:",
            "ldrex {prev}, [{ptr}]",
            "strex {status}, {new}, [{ptr}]",
            "cmp {status}, #0",
            "bne 2b",
            prev = out(reg) prev,
            status = out(reg) _,
            ptr = in(reg) ptr,
            new = in(reg) new,
            options(nostack)
        );
    }
    prev
}

pub unsafe fn decrement(ptr: *mut i32) -> i32 {
    let prev: i32;
    unsafe {
        exclusive!(
            "2:",
            "ldrex {prev}, [{ptr}]",
            "sub {dec}, {prev}, #1",
            "strex {status}, {dec}, [{ptr}]",
            "cmp {status}, #0",
            "bne 2b",
            prev = out(reg) prev,
            dec = out(reg) _,
            status = out(reg) _,
            ptr = in(reg) ptr,
            options(nostack)
        );
    }
    prev
}
