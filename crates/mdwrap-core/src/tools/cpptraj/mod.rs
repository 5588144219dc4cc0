//! AmberTools `cpptraj` operations.
//!
//! Every operation writes an instruction file that starts with `parm <topology>` and a
//! `trajin` line, and launches `cpptraj -i <instructions>`.

pub mod common;

mod average;
mod bfactor;
mod convert;
mod dry;
mod mask;
mod rgyr;
mod rmsf;
mod snapshot;

pub use average::Average;
pub use bfactor::Bfactor;
pub use common::CpptrajPaths;
pub use convert::Convert;
pub use dry::Dry;
pub use mask::MaskTrajectory;
pub use rgyr::Rgyr;
pub use rmsf::Rmsf;
pub use snapshot::Snapshot;
