/*!
 * Scheduler Engines
 * Four policies over a shared process arena and trace contract
 */

use crate::core::errors::SchedulerError;
use crate::core::types::{SimResult, Time};
use crate::process::types::Process;
use crate::process::ProcessTable;
use log::info;

pub mod fcai;
pub mod metrics;
pub mod priority;
pub mod sjf;
pub mod srtf;
pub mod types;

pub use types::{Schedule, SchedulingPolicy, Segment};

/// Fixed starvation threshold shared by SJF and SRTF. Not configurable.
pub(crate) const MAX_WAIT: i64 = 20;

/// Starvation test: elapsed time minus remaining burst exceeds the
/// threshold. Partially-run processes trip this sooner than idle ones.
pub(crate) fn starved(process: &Process, now: Time) -> bool {
    process.remaining > 0 && process.waited(now) > MAX_WAIT
}

/// Run one engine to completion over the table, mutating process state
/// in place and returning the execution trace.
///
/// The table must be non-empty; everything else about the input is the
/// admission layer's problem.
pub fn run(
    policy: SchedulingPolicy,
    table: &mut ProcessTable,
    context_switch: Time,
) -> SimResult<Schedule> {
    if table.is_empty() {
        return Err(SchedulerError::EmptyProcessSet);
    }

    info!(
        "Running {} over {} processes (context switch cost: {})",
        policy.as_str(),
        table.len(),
        context_switch
    );

    let segments = match policy {
        SchedulingPolicy::Priority => priority::schedule(table, context_switch)?,
        SchedulingPolicy::Sjf => sjf::schedule(table, context_switch)?,
        SchedulingPolicy::Srtf => srtf::schedule(table, context_switch)?,
        SchedulingPolicy::Fcai => fcai::schedule(table, context_switch)?,
    };

    info!(
        "{} finished: {} segments emitted",
        policy.as_str(),
        segments.len()
    );

    Ok(Schedule { policy, segments })
}
