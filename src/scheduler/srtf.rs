/*!
 * Shortest Remaining Time First Scheduler
 * Preemptive unit-step execution with starvation force-runs
 */

use super::starved;
use super::types::Segment;
use crate::core::errors::SchedulerError;
use crate::core::types::{SimResult, Time};
use crate::process::table::Idx;
use crate::process::ProcessTable;
use log::{debug, warn};

/// Executes one time unit per dispatch, always picking the least
/// remaining burst, so the trace carries one unit-length segment per
/// executed unit. A starved process is instead force-run to completion
/// atomically and leaves a single unit-length marker segment whose
/// start equals its completion time.
pub(super) fn schedule(table: &mut ProcessTable, context_switch: Time) -> SimResult<Vec<Segment>> {
    let total = table.len();
    let mut ready: Vec<Idx> = Vec::new();
    let mut segments: Vec<Segment> = Vec::new();
    let mut now: Time = 0;
    let mut completed = 0usize;
    let mut last: Option<Idx> = None;

    while completed < total {
        // Admission and starvation sweep over every known process, in
        // admission order. A starvation force-run advances `now`, which
        // later processes in the same sweep observe.
        for idx in table.indices() {
            let process = table.get(idx);
            if process.remaining > 0 && process.arrival <= now && !ready.contains(&idx) {
                ready.push(idx);
            }

            if starved(table.get(idx), now) {
                now += context_switch;
                now += table.get(idx).remaining;

                let process = table.get_mut(idx);
                warn!(
                    "Process {} starved, running to completion at {}",
                    process.name, now
                );
                process.finish(now)?;
                // Degenerate marker: unit length at the completion instant
                segments.push(Segment::emit(process, now, 1));
                completed += 1;
                ready.retain(|&i| i != idx);
            }
        }

        if ready.is_empty() {
            now += 1;
            last = None;
            continue;
        }

        // Least remaining burst; (arrival, pid) fixes ties deterministically
        let pos = ready
            .iter()
            .enumerate()
            .min_by_key(|&(_, &idx)| {
                let p = table.get(idx);
                (p.remaining, p.arrival, p.pid)
            })
            .map(|(pos, _)| pos)
            .ok_or_else(|| {
                SchedulerError::InvariantViolation("ready queue emptied during selection".into())
            })?;
        let idx = ready.swap_remove(pos);

        if table.get(idx).remaining == 0 {
            return Err(SchedulerError::InvariantViolation(format!(
                "completed process {} selected for dispatch",
                table.get(idx).pid
            )));
        }

        // Switching away from a different process costs the switch time
        if last.is_some() && last != Some(idx) {
            now += context_switch;
        }

        let process = table.get_mut(idx);
        segments.push(Segment::emit(process, now, 1));
        process.remaining -= 1;
        now += 1;

        if process.remaining == 0 {
            process.finish(now)?;
            debug!("Process {} completed at {}", process.name, now);
            completed += 1;
        } else {
            ready.push(idx);
        }
        last = Some(idx);
    }

    Ok(segments)
}
