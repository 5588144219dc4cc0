//! # Tools Module
//!
//! One strategy per wrapped operation.
//!
//! ## Overview
//!
//! Every wrapped operation implements [`Operation`]. Construction is where validation
//! happens: an operation value only exists once its files have been checked against their
//! formats and its options resolved to defaults or validated values. After that,
//! [`Operation::assemble`] is a pure function of the operation and an
//! [`AssemblyContext`], producing the exact instruction lines and argument vector the
//! wrapped tool expects, in the order it expects them.
//!
//! ## Architecture
//!
//! - **cpptraj** ([`cpptraj`]) - Instruction-file driven trajectory analysis and conversion
//! - **GROMACS** ([`gromacs`]) - `gmx` subcommands driven by flags, with interactive group
//!   selections fed on standard input

pub mod cpptraj;
pub mod gromacs;

use crate::core::command::Invocation;
use crate::engine::config::{self, Tool, ToolConfig};
use std::fmt;
use std::path::Path;

/// Launch-specific values an operation needs to assemble its invocation.
#[derive(Debug, Clone, Copy)]
pub struct AssemblyContext<'a> {
    /// The executable to run.
    pub binary_path: &'a str,
    /// Where the instruction document will be written.
    pub instructions_path: &'a Path,
    /// The caller's working directory; auxiliary outputs without a configured path go here.
    pub working_dir: &'a Path,
    pub prefix: Option<&'a str>,
    pub step: Option<&'a str>,
}

impl<'a> AssemblyContext<'a> {
    pub fn new(config: &'a ToolConfig, instructions_path: &'a Path) -> Self {
        Self {
            binary_path: &config.binary_path,
            instructions_path,
            working_dir: &config.working_dir,
            prefix: config.prefix.as_deref(),
            step: config.step.as_deref(),
        }
    }

    /// `<prefix>_<step>_<name>`, as [`ToolConfig::create_name`] names files.
    pub fn create_name(&self, name: &str) -> String {
        config::create_name(self.prefix, self.step, name)
    }
}

pub trait Operation {
    fn kind(&self) -> OperationKind;

    /// Files the operation is expected to produce; consulted by the restart gate.
    fn outputs(&self) -> Vec<&Path>;

    fn assemble(&self, ctx: &AssemblyContext) -> Invocation;
}

/// Every operation this crate wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    CpptrajAverage,
    CpptrajBfactor,
    CpptrajConvert,
    CpptrajDry,
    CpptrajMask,
    CpptrajRgyr,
    CpptrajRmsf,
    CpptrajSnapshot,
    GmxCluster,
    GmxEnergy,
    GmxImage,
    GmxRgyr,
    GmxTrjConvStr,
    GmxTrjConvTrj,
}

impl OperationKind {
    pub const ALL: [OperationKind; 14] = [
        OperationKind::CpptrajAverage,
        OperationKind::CpptrajBfactor,
        OperationKind::CpptrajConvert,
        OperationKind::CpptrajDry,
        OperationKind::CpptrajMask,
        OperationKind::CpptrajRgyr,
        OperationKind::CpptrajRmsf,
        OperationKind::CpptrajSnapshot,
        OperationKind::GmxCluster,
        OperationKind::GmxEnergy,
        OperationKind::GmxImage,
        OperationKind::GmxRgyr,
        OperationKind::GmxTrjConvStr,
        OperationKind::GmxTrjConvTrj,
    ];

    pub fn tool(&self) -> Tool {
        match self {
            OperationKind::CpptrajAverage
            | OperationKind::CpptrajBfactor
            | OperationKind::CpptrajConvert
            | OperationKind::CpptrajDry
            | OperationKind::CpptrajMask
            | OperationKind::CpptrajRgyr
            | OperationKind::CpptrajRmsf
            | OperationKind::CpptrajSnapshot => Tool::Cpptraj,
            _ => Tool::Gromacs,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            OperationKind::CpptrajAverage => "cpptraj-average",
            OperationKind::CpptrajBfactor => "cpptraj-bfactor",
            OperationKind::CpptrajConvert => "cpptraj-convert",
            OperationKind::CpptrajDry => "cpptraj-dry",
            OperationKind::CpptrajMask => "cpptraj-mask",
            OperationKind::CpptrajRgyr => "cpptraj-rgyr",
            OperationKind::CpptrajRmsf => "cpptraj-rmsf",
            OperationKind::CpptrajSnapshot => "cpptraj-snapshot",
            OperationKind::GmxCluster => "gmx-cluster",
            OperationKind::GmxEnergy => "gmx-energy",
            OperationKind::GmxImage => "gmx-image",
            OperationKind::GmxRgyr => "gmx-rgyr",
            OperationKind::GmxTrjConvStr => "gmx-trjconv-str",
            OperationKind::GmxTrjConvTrj => "gmx-trjconv-trj",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
