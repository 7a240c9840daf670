/*!
 * Schedule Metrics
 * Per-process and mean waiting/turnaround times over a finished run
 */

use crate::core::errors::SchedulerError;
use crate::core::types::{Pid, SimResult, Time};
use crate::process::ProcessTable;
use serde::{Deserialize, Serialize};

/// Waiting and turnaround for one completed process
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessMetrics {
    pub pid: Pid,
    pub name: String,
    pub completion_time: Time,
    pub turnaround_time: Time,
    pub waiting_time: i64,
}

/// Aggregate metrics for a completed schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ScheduleMetrics {
    pub per_process: Vec<ProcessMetrics>,
    pub avg_waiting_time: f64,
    pub avg_turnaround_time: f64,
}

/// Compute metrics over a fully completed table.
///
/// Turnaround is completion minus arrival; waiting is turnaround minus
/// the original burst. An empty table or a process without a completion
/// time is an error, never a 0.0 or NaN average.
pub fn compute(table: &ProcessTable) -> SimResult<ScheduleMetrics> {
    if table.is_empty() {
        return Err(SchedulerError::EmptyProcessSet);
    }

    let mut per_process = Vec::with_capacity(table.len());
    let mut total_waiting: i64 = 0;
    let mut total_turnaround: u64 = 0;

    for process in table.iter() {
        let completion = process
            .completion
            .ok_or(SchedulerError::Incomplete(process.pid))?;
        let turnaround = completion - process.arrival;
        let waiting = turnaround as i64 - process.burst as i64;

        total_turnaround += turnaround;
        total_waiting += waiting;
        per_process.push(ProcessMetrics {
            pid: process.pid,
            name: process.name.clone(),
            completion_time: completion,
            turnaround_time: turnaround,
            waiting_time: waiting,
        });
    }

    let count = table.len() as f64;
    Ok(ScheduleMetrics {
        per_process,
        avg_waiting_time: total_waiting as f64 / count,
        avg_turnaround_time: total_turnaround as f64 / count,
    })
}
