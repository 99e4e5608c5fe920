//! Error types for capability checks

/// Errors raised by the strict capability checks.
///
/// The probe itself cannot fail; these only come from callers asking the
/// crate to enforce a capability.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProbeError {
    #[error("parallel runtime not compiled in; rebuild with `--features parallel`")]
    ParallelRuntimeUnavailable,
}

/// Result type for capability checks
pub type Result<T> = std::result::Result<T, ProbeError>;

/// Fail unless the parallel loop runtime is compiled in.
pub fn require_parallel_runtime() -> Result<()> {
    if crate::features::is_parallel_runtime_available() {
        Ok(())
    } else {
        Err(ProbeError::ParallelRuntimeUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_agrees_with_probe() {
        assert_eq!(
            require_parallel_runtime().is_ok(),
            crate::features::is_parallel_runtime_available()
        );
    }

    #[test]
    fn test_error_message_names_feature() {
        let err = ProbeError::ParallelRuntimeUnavailable;
        assert_eq!(
            format!("{}", err),
            "parallel runtime not compiled in; rebuild with `--features parallel`"
        );
    }

    #[cfg(not(feature = "parallel"))]
    #[test]
    fn test_require_fails_without_parallel_feature() {
        assert_eq!(
            require_parallel_runtime(),
            Err(ProbeError::ParallelRuntimeUnavailable)
        );
    }
}
