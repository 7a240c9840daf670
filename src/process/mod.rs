/*!
 * Process Module
 * Process entity and the arena that owns it during a run
 */

pub mod table;
pub mod types;

pub use table::{Idx, ProcessTable};
pub use types::{Process, ProcessSpec};
