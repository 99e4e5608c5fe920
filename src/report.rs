//! Serializable snapshot of what this build was compiled with.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::features;

/// Capabilities compiled into this build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureReport {
    /// Same value as [`features::is_parallel_runtime_available`]
    pub parallel_runtime: bool,
    /// Threads in the global parallel pool, `1` when running serially
    pub worker_threads: usize,
    pub crate_version: String,
}

impl FeatureReport {
    /// Snapshot the current build.
    ///
    /// With the parallel runtime this initializes rayon's global pool if
    /// nothing has yet.
    pub fn current() -> Self {
        Self {
            parallel_runtime: features::is_parallel_runtime_available(),
            worker_threads: worker_threads(),
            crate_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Render as a JSON object.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for FeatureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "parallel-probe {}: parallel runtime {}, {} worker thread(s)",
            self.crate_version,
            if self.parallel_runtime { "available" } else { "unavailable" },
            self.worker_threads
        )
    }
}

#[cfg(feature = "parallel")]
fn worker_threads() -> usize {
    rayon::current_num_threads()
}

#[cfg(not(feature = "parallel"))]
fn worker_threads() -> usize {
    1
}
