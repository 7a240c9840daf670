/*!
 * Shortest Job First Scheduler
 * Non-preemptive, with a starvation bypass for long waiters
 */

use super::starved;
use super::types::Segment;
use crate::core::types::{SimResult, Time};
use crate::process::table::Idx;
use crate::process::ProcessTable;
use log::{debug, warn};

/// Pool of not-yet-run processes, drained one full burst at a time.
///
/// The initial (arrival, burst, priority) sort does not pick the winner
/// directly, but it fixes the scan order of the starvation check: the
/// first starved process in pool order bypasses the shortest-burst rule.
pub(super) fn schedule(table: &mut ProcessTable, context_switch: Time) -> SimResult<Vec<Segment>> {
    let mut pool: Vec<Idx> = table.indices().collect();
    pool.sort_by_key(|&idx| {
        let p = table.get(idx);
        (p.arrival, p.remaining, p.priority)
    });

    let mut now: Time = 0;
    let mut segments = Vec::with_capacity(pool.len());

    while !pool.is_empty() {
        // First starved process in pool order wins outright
        let mut selected = pool.iter().position(|&idx| {
            let p = table.get(idx);
            p.arrival <= now && starved(p, now)
        });

        if let Some(pos) = selected {
            warn!(
                "Process {} starved, executing immediately",
                table.get(pool[pos]).name
            );
        } else {
            // Shortest remaining burst among the arrived, earliest
            // arrival on ties (first match in pool order)
            selected = pool
                .iter()
                .enumerate()
                .filter(|&(_, &idx)| table.get(idx).arrival <= now)
                .min_by_key(|&(_, &idx)| {
                    let p = table.get(idx);
                    (p.remaining, p.arrival)
                })
                .map(|(pos, _)| pos);
        }

        let Some(pos) = selected else {
            // Nothing has arrived yet; idle one unit
            now += 1;
            continue;
        };

        let idx = pool.remove(pos);
        let process = table.get_mut(idx);
        segments.push(Segment::emit(process, now, process.burst));
        now += process.burst;
        process.finish(now)?;
        debug!("Dispatched {}, completion {}", process.name, now);

        now += context_switch;
    }

    Ok(segments)
}
