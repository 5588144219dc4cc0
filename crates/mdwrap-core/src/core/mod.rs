//! # Core Module
//!
//! Stateless building blocks shared by every wrapped operation.
//!
//! ## Overview
//!
//! Nothing in this module touches a subprocess. It describes *what* a launch is made of:
//!
//! - **File formats** ([`formats`]) - The extension sets each tool accepts for topologies,
//!   trajectories, structures, index files and analysis outputs
//! - **File references** ([`files`]) - Paths validated against a format, checked for
//!   existence (inputs) or for a writable parent directory (outputs)
//! - **Property sets** ([`properties`]) - The caller-supplied option table and the typed
//!   resolvers that apply defaults, allowed value sets and numeric bounds
//! - **Instruction documents** ([`instructions`]) - Write-once scripts consumed by the
//!   wrapped tool
//! - **Commands** ([`command`]) - Argument vectors and the complete invocation handed to the
//!   execution shim

pub mod command;
pub mod files;
pub mod formats;
pub mod instructions;
pub mod properties;
