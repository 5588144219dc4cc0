//! # mdwrap Core Library
//!
//! Command builders and launchers for two external molecular-dynamics analysis tools:
//! the AmberTools trajectory processor `cpptraj` and the GROMACS `gmx` driver.
//!
//! ## Architectural Philosophy
//!
//! None of the scientific work happens here. Every wrapped operation is a single shot:
//! validate the declared files and options, assemble an instruction document plus an
//! argument vector, spawn the tool, forward its exit code and clean up. The library keeps
//! these concerns in four layers.
//!
//! - **[`core`]: The Foundation.** Stateless data models: accepted file formats, validated
//!   file references, property sets with typed option resolution, instruction documents and
//!   command vectors.
//!
//! - **[`engine`]: The Plumbing.** Tool configuration, error types, progress reporting,
//!   the restart gate, per-launch scratch directories, log sinks and the execution shim
//!   that actually spawns the child process.
//!
//! - **[`tools`]: The Vocabulary.** One [`tools::Operation`] implementation per wrapped
//!   operation, each a pure function from validated inputs to an [`core::command::Invocation`].
//!
//! - **[`workflows`]: The Public API.** [`workflows::launch::run`] runs any operation end
//!   to end.

pub mod core;
pub mod engine;
pub mod tools;
pub mod workflows;
