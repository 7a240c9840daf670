/*!
 * Process Table
 * Single arena owning all mutable process state for a run
 */

use super::types::{Process, ProcessSpec};
use crate::core::errors::SchedulerError;
use crate::core::types::{Pid, SimResult};
use log::info;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Index of a process slot in the table. Schedulers track queue
/// membership with these instead of duplicating process objects, so
/// burst/quantum state never diverges between queues.
pub type Idx = usize;

/// Arena of admitted processes, indexed densely and owning all mutable
/// scheduling state. Exclusively borrowed by one engine per run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessTable {
    processes: Vec<Process>,
}

impl ProcessTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from an ordered sequence of specs.
    pub fn from_specs(specs: impl IntoIterator<Item = ProcessSpec>) -> SimResult<Self> {
        let mut table = Self::new();
        for spec in specs {
            table.admit(spec)?;
        }
        Ok(table)
    }

    /// Admit a process, assigning the next sequential PID (1-based).
    ///
    /// Invalid input is rejected here, before any engine runs: a zero
    /// burst or an explicit zero quantum never reaches a scheduler.
    pub fn admit(&mut self, spec: ProcessSpec) -> SimResult<Pid> {
        let pid = self.processes.len() as Pid + 1;
        if spec.burst_time == 0 {
            return Err(SchedulerError::InvalidBurst(pid));
        }
        if spec.initial_quantum == Some(0) {
            return Err(SchedulerError::InvalidQuantum(pid));
        }

        let process = Process::admit(pid, spec);
        info!(
            "Process {} admitted (pid {}, arrival {}, burst {}, priority {})",
            process.name, pid, process.arrival, process.burst, process.priority
        );
        self.processes.push(process);
        Ok(pid)
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// All slot indices, in admission order.
    pub fn indices(&self) -> Range<Idx> {
        0..self.processes.len()
    }

    /// Borrow a process by slot index. Indices must come from `indices()`.
    pub fn get(&self, idx: Idx) -> &Process {
        &self.processes[idx]
    }

    pub fn get_mut(&mut self, idx: Idx) -> &mut Process {
        &mut self.processes[idx]
    }

    pub fn by_pid(&self, pid: Pid) -> Option<&Process> {
        self.processes.iter().find(|p| p.pid == pid)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Process> {
        self.processes.iter()
    }
}
