//! GROMACS `gmx` operations.
//!
//! GROMACS tools ask for index groups interactively. Each operation writes its answers,
//! one per line, to the instruction file, which is then redirected into the tool's
//! standard input.

pub mod common;

mod cluster;
mod energy;
mod image;
mod rgyr;
mod trjconv_str;
mod trjconv_trj;

pub use cluster::Cluster;
pub use common::GmxPaths;
pub use energy::Energy;
pub use image::Image;
pub use rgyr::Rgyr;
pub use trjconv_str::TrjConvStr;
pub use trjconv_trj::TrjConvTrj;
