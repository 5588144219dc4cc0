//! # Engine Module
//!
//! The plumbing that turns an assembled invocation into a finished launch.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Tool-wide settings (binary path, scratch location,
//!   naming, restart and cleanup flags) passed explicitly into every launch
//! - **Error Handling** ([`error`]) - The single error type surfaced by the library
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events for front ends
//! - **Execution** ([`execution`]) - Spawns the wrapped tool and forwards its output
//! - **Restart Gate** ([`restart`]) - Skips a launch whose outputs already exist
//! - **Scratch Space** ([`workspace`]) - Uniquely named per-launch directories
//! - **Log Sinks** ([`log`]) - Per-launch output and error logs

pub mod config;
pub mod error;
pub mod execution;
pub mod log;
pub mod progress;
pub mod restart;
pub mod workspace;
