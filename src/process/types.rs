/*!
 * Process Types
 * The simulated process entity and its admission spec
 */

use crate::core::errors::SchedulerError;
use crate::core::types::{Pid, Priority, SimResult, Time};
use serde::{Deserialize, Serialize};

/// Process admission spec, as produced by the input layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessSpec {
    pub name: String,
    pub arrival_time: Time,
    pub burst_time: Time,
    pub priority: Priority,
    /// Initial round-robin quantum; only FCAI consumes it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_quantum: Option<Time>,
}

impl ProcessSpec {
    pub fn new(
        name: impl Into<String>,
        arrival_time: Time,
        burst_time: Time,
        priority: Priority,
    ) -> Self {
        Self {
            name: name.into(),
            arrival_time,
            burst_time,
            priority,
            initial_quantum: None,
        }
    }

    pub fn with_quantum(mut self, quantum: Time) -> Self {
        self.initial_quantum = Some(quantum);
        self
    }
}

/// A simulated process: immutable admission inputs plus the mutable
/// state one engine drives for the duration of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Process {
    pub pid: Pid,
    pub name: String,
    pub arrival: Time,
    /// Original burst time; fixed at admission
    pub burst: Time,
    pub priority: Priority,
    /// Remaining burst time; monotonically non-increasing, exactly 0 once complete
    pub remaining: Time,
    /// Completion time; set exactly once when the process finishes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion: Option<Time>,
    /// Composite FCAI score; recomputed whenever ready-queue membership changes
    #[serde(skip)]
    pub fcai_factor: f64,
    /// Dynamic round-robin quantum (FCAI only), mutated after every dispatch
    pub quantum: Time,
}

impl Process {
    pub(crate) fn admit(pid: Pid, spec: ProcessSpec) -> Self {
        Self {
            pid,
            name: spec.name,
            arrival: spec.arrival_time,
            burst: spec.burst_time,
            priority: spec.priority,
            remaining: spec.burst_time,
            completion: None,
            fcai_factor: 0.0,
            quantum: spec.initial_quantum.unwrap_or(0),
        }
    }

    /// Time spent waiting as the historical starvation checks measure it:
    /// elapsed time since arrival minus the remaining burst. Can go
    /// negative, hence the signed result.
    pub fn waited(&self, now: Time) -> i64 {
        now as i64 - self.arrival as i64 - self.remaining as i64
    }

    pub fn is_complete(&self) -> bool {
        self.completion.is_some()
    }

    /// Mark the process finished at `now`. Completion is write-once;
    /// a second call is an invariant violation.
    pub(crate) fn finish(&mut self, now: Time) -> SimResult<()> {
        if self.completion.is_some() {
            return Err(SchedulerError::InvariantViolation(format!(
                "process {} completed twice",
                self.pid
            )));
        }
        self.remaining = 0;
        self.completion = Some(now);
        Ok(())
    }
}
