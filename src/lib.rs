/*!
 * schedsim
 * CPU scheduling simulation engine: four policies over an abstract
 * integer timeline, with a shared process arena, execution-trace
 * contract, and waiting/turnaround metrics
 */

pub mod core;
pub mod process;
pub mod scheduler;

// Re-exports
pub use crate::core::errors::SchedulerError;
pub use crate::core::types::{Pid, Priority, SimResult, Time};
pub use process::{Process, ProcessSpec, ProcessTable};
pub use scheduler::metrics::{ProcessMetrics, ScheduleMetrics};
pub use scheduler::{run, Schedule, SchedulingPolicy, Segment};
