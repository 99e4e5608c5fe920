// src/features.rs

/// Whether the parallel loop runtime was compiled into this build.
///
/// Set by `build.rs` from the `parallel` cargo feature and never changes
/// afterwards.
pub const PARALLEL_RUNTIME: bool = cfg!(parallel_runtime);

/// Is the parallel loop runtime compiled in?
///
/// Returns the same value on every call for the lifetime of the binary. Takes
/// no locks and does no I/O, so it is safe to call from any thread.
#[inline]
#[must_use]
pub const fn is_parallel_runtime_available() -> bool {
    PARALLEL_RUNTIME
}
