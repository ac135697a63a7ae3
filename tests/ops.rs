//! Single-threaded checks of each operation's contract.

use ldrex_atomics::{compare_and_swap, decrement, memory_barrier, swap};

#[test]
fn cas_succeeds_on_match() {
    let mut target = 5;
    let r = unsafe { compare_and_swap(5, 10, &mut target) };
    assert_eq!(r, 0);
    assert_eq!(target, 10);
}

#[test]
fn cas_fails_on_mismatch_and_leaves_target_alone() {
    let mut target = 10;
    let r = unsafe { compare_and_swap(5, 20, &mut target) };
    assert_eq!(r, 1);
    assert_eq!(target, 10);
}

#[test]
fn cas_scenario_back_to_back() {
    let mut target = 5;
    assert_eq!(unsafe { compare_and_swap(5, 10, &mut target) }, 0);
    assert_eq!(target, 10);
    assert_eq!(unsafe { compare_and_swap(5, 20, &mut target) }, 1);
    assert_eq!(target, 10);
}

#[test]
fn swap_returns_previous_value() {
    let mut target = 7;
    let prev = unsafe { swap(3, &mut target) };
    assert_eq!(prev, 7);
    assert_eq!(target, 3);
}

#[test]
fn swap_of_equal_value_still_reports_it() {
    let mut target = 42;
    assert_eq!(unsafe { swap(42, &mut target) }, 42);
    assert_eq!(target, 42);
}

#[test]
fn decrement_returns_previous_value() {
    let mut target = 0;
    let prev = unsafe { decrement(&mut target) };
    assert_eq!(prev, 0);
    assert_eq!(target, -1);
}

#[test]
fn decrement_wraps_at_minimum() {
    let mut target = i32::MIN;
    let prev = unsafe { decrement(&mut target) };
    assert_eq!(prev, i32::MIN);
    assert_eq!(target, i32::MAX);
}

#[test]
fn decrement_counts_down() {
    let mut target = 3;
    while unsafe { decrement(&mut target) } > 1 {}
    assert_eq!(target, 0);
}

// The barrier's emitted effect is a build-configuration matter; all that can
// be checked portably is that it is callable anywhere in a sequence.
#[test]
fn barrier_is_callable() {
    let mut target = 1;
    memory_barrier();
    assert_eq!(unsafe { swap(2, &mut target) }, 1);
    memory_barrier();
    assert_eq!(target, 2);
}
