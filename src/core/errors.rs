/*!
 * Error Types
 * Centralized error handling with thiserror and serde support
 */

use crate::core::types::Pid;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scheduling errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    /// Scheduling or averaging over zero processes is undefined.
    #[error("cannot schedule an empty process set")]
    EmptyProcessSet,

    /// Metrics were requested before every process finished.
    #[error("process {0} has no completion time yet")]
    Incomplete(Pid),

    /// A process must require at least one unit of CPU time.
    #[error("process {0} has a zero burst time")]
    InvalidBurst(Pid),

    /// FCAI needs a positive per-process round-robin quantum.
    #[error("process {0} has no usable round-robin quantum")]
    InvalidQuantum(Pid),

    /// Internal inconsistency. Fatal programming error, never expected
    /// for valid input.
    #[error("scheduler invariant violated: {0}")]
    InvariantViolation(String),
}
