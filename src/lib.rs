//! Build capability probe for native extension modules
//!
//! Reports whether the parallel loop runtime (the `parallel` cargo feature,
//! backed by rayon) was compiled into this build. The answer is fixed at
//! compile time, so a host environment can query it through its binding
//! layer as a plain zero-argument boolean function.
//!
//! # Examples
//!
//! ```rust
//! use parallel_probe::is_parallel_runtime_available;
//!
//! let available = is_parallel_runtime_available();
//! assert_eq!(available, cfg!(feature = "parallel"));
//! ```
//!
//! Refusing to run without the runtime:
//! ```rust
//! use parallel_probe::{require_parallel_runtime, ProbeError};
//!
//! match require_parallel_runtime() {
//!     Ok(()) => println!("running in parallel"),
//!     Err(ProbeError::ParallelRuntimeUnavailable) => println!("running serially"),
//! }
//! ```

pub mod error;
pub mod features;
pub mod report;

pub use error::{require_parallel_runtime, ProbeError, Result};
pub use features::{is_parallel_runtime_available, PARALLEL_RUNTIME};
pub use report::FeatureReport;

/// Log which capabilities were compiled in
pub fn validate_features() -> Result<()> {
    log::info!(
        "Feature status - Parallel runtime: {}",
        features::is_parallel_runtime_available()
    );
    if !features::is_parallel_runtime_available() {
        log::debug!("Built without 'parallel' feature; loops run serially");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_validate_features_never_fails() {
        init_logging();
        assert!(validate_features().is_ok());
    }

    #[test]
    fn test_reexports_agree() {
        assert_eq!(is_parallel_runtime_available(), PARALLEL_RUNTIME);
        assert_eq!(
            FeatureReport::current().parallel_runtime,
            is_parallel_runtime_available()
        );
    }
}
