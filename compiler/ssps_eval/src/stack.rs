//! Host stack growth for recursive procedure evaluation.
//!
//! Procedure calls and conditional bodies recurse through
//! `Interpreter::interpret`, so deep SSPS recursion means deep Rust
//! recursion. On native targets the stack is grown on demand with
//! `stacker`; wasm32 calls straight through.

/// Grow the stack when less than this remains.
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment.
const STACK_PER_RECURSION: usize = 1024 * 1024;

#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
