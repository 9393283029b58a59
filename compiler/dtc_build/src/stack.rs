//! Stack growth for tree recursion.
//!
//! Tree depth is logarithmic for real catalogs, but a catalog whose names
//! agree on length, first and last character one-by-one can drive the
//! builder to linear depth. Recursive steps run through
//! [`ensure_sufficient_stack`] so depth is bounded by memory, not by the
//! thread's stack size.
//!
//! - **Native targets**: `stacker::maybe_grow`.
//! - **WASM**: passthrough.

/// Grow when less than this remains (64KB).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 64 * 1024;

/// Size of each new stack segment (1MB).
#[cfg(not(target_arch = "wasm32"))]
const SEGMENT: usize = 1024 * 1024;

/// Run `f`, first growing the stack if fewer than [`RED_ZONE`] bytes remain.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
