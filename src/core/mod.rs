//! Core module containing the task pipeline
//!
//! This module contains:
//! - The task lifecycle state machine
//! - The single-worker dispatch loop that claims and executes pending tasks

mod pipeline;
mod task_status;

pub use pipeline::*;
pub use task_status::*;
