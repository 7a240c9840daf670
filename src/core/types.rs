/*!
 * Core Types
 * Common types used across the simulation engine
 */

/// Process ID type
pub type Pid = u32;

/// Priority level (lower value = more important)
pub type Priority = i32;

/// Simulated time in abstract integer units
pub type Time = u64;

/// Common result type for engine operations
pub type SimResult<T> = Result<T, super::errors::SchedulerError>;
