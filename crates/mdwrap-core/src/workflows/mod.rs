//! # Workflows Module
//!
//! High-level entry points that drive an operation from validated inputs to a finished
//! launch. [`launch::run`] is the only one: it applies the restart gate, manages the
//! scratch directory and hands the assembled invocation to the execution shim.

pub mod launch;
