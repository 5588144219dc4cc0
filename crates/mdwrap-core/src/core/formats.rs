use phf::{OrderedSet, phf_ordered_set};
use std::fmt;
use std::path::Path;

static AMBER_TOPOLOGY: OrderedSet<&'static str> = phf_ordered_set! {
    "top", "pdb", "prmtop", "parmtop",
};

static AMBER_TRAJECTORY: OrderedSet<&'static str> = phf_ordered_set! {
    "mdcrd", "crd", "cdf", "netcdf", "restart", "ncrestart", "restartnc", "dcd", "charmm",
    "cor", "pdb", "mol2", "trr", "gro", "binpos", "xtc", "cif", "arc", "sqm", "sdf", "conflib",
};

static AMBER_TRAJECTORY_OUTPUT: OrderedSet<&'static str> = phf_ordered_set! {
    "mdcrd", "crd", "netcdf", "rst7", "ncrst", "dcd", "pdb", "mol2", "binpos", "trr", "xtc",
    "sqm",
};

static AMBER_DATA: OrderedSet<&'static str> = phf_ordered_set! {
    "dat", "agr", "xmgr", "gnu",
};

static AMBER_REFERENCE: OrderedSet<&'static str> = phf_ordered_set! {
    "pdb",
};

static GMX_STRUCTURE: OrderedSet<&'static str> = phf_ordered_set! {
    "tpr", "gro", "g96", "pdb", "brk", "ent",
};

static GMX_INDEX: OrderedSet<&'static str> = phf_ordered_set! {
    "ndx",
};

static GMX_TRAJECTORY: OrderedSet<&'static str> = phf_ordered_set! {
    "xtc", "trr", "cpt", "gro", "g96", "pdb", "tng",
};

static GMX_TRAJECTORY_OUTPUT: OrderedSet<&'static str> = phf_ordered_set! {
    "xtc", "trr", "gro", "g96", "pdb", "tng",
};

static GMX_ENERGY: OrderedSet<&'static str> = phf_ordered_set! {
    "edr",
};

static XVG: OrderedSet<&'static str> = phf_ordered_set! {
    "xvg",
};

/// A family of files a wrapped tool reads or writes, identified by extension.
///
/// Each variant owns a fixed, ordered set of accepted extensions. Matching is
/// case-insensitive: `traj.DCD` is as valid as `traj.dcd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// Amber parameter/topology files read by `parm`.
    AmberTopology,
    /// Trajectories `cpptraj` can read with `trajin`.
    AmberTrajectory,
    /// Trajectories `cpptraj` can write with `trajout`.
    AmberTrajectoryOutput,
    /// Data files produced by `cpptraj` analysis actions.
    AmberData,
    /// Experimental reference structures.
    AmberReference,
    /// GROMACS run inputs and coordinate files.
    GmxStructure,
    /// GROMACS index (group) files.
    GmxIndex,
    /// Trajectories GROMACS tools can read.
    GmxTrajectory,
    /// Trajectories `gmx trjconv` can write.
    GmxTrajectoryOutput,
    /// GROMACS energy files.
    GmxEnergy,
    /// Grace/xmgr plot files.
    Xvg,
}

impl FileFormat {
    pub fn extensions(&self) -> &'static OrderedSet<&'static str> {
        match self {
            FileFormat::AmberTopology => &AMBER_TOPOLOGY,
            FileFormat::AmberTrajectory => &AMBER_TRAJECTORY,
            FileFormat::AmberTrajectoryOutput => &AMBER_TRAJECTORY_OUTPUT,
            FileFormat::AmberData => &AMBER_DATA,
            FileFormat::AmberReference => &AMBER_REFERENCE,
            FileFormat::GmxStructure => &GMX_STRUCTURE,
            FileFormat::GmxIndex => &GMX_INDEX,
            FileFormat::GmxTrajectory => &GMX_TRAJECTORY,
            FileFormat::GmxTrajectoryOutput => &GMX_TRAJECTORY_OUTPUT,
            FileFormat::GmxEnergy => &GMX_ENERGY,
            FileFormat::Xvg => &XVG,
        }
    }

    /// Returns the accepted extensions in declaration order.
    pub fn accepted(&self) -> Vec<&'static str> {
        self.extensions().iter().copied().collect()
    }

    /// Checks whether `path` carries one of the accepted extensions.
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| self.extensions().contains(ext.to_ascii_lowercase().as_str()))
            .unwrap_or(false)
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                FileFormat::AmberTopology => "topology",
                FileFormat::AmberTrajectory => "trajectory input",
                FileFormat::AmberTrajectoryOutput => "trajectory output",
                FileFormat::AmberData => "data output",
                FileFormat::AmberReference => "experimental reference",
                FileFormat::GmxStructure => "structure",
                FileFormat::GmxIndex => "index",
                FileFormat::GmxTrajectory => "trajectory input",
                FileFormat::GmxTrajectoryOutput => "trajectory output",
                FileFormat::GmxEnergy => "energy",
                FileFormat::Xvg => "xvg",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_matching_is_case_insensitive() {
        assert!(FileFormat::AmberTrajectory.matches(Path::new("run/traj.dcd")));
        assert!(FileFormat::AmberTrajectory.matches(Path::new("run/traj.DCD")));
        assert!(FileFormat::AmberTopology.matches(Path::new("sys.PrmTop")));
    }

    #[test]
    fn unknown_or_missing_extension_does_not_match() {
        assert!(!FileFormat::GmxEnergy.matches(Path::new("ener.xvg")));
        assert!(!FileFormat::GmxEnergy.matches(Path::new("ener")));
        assert!(!FileFormat::GmxIndex.matches(Path::new(".ndx")));
    }

    #[test]
    fn output_sets_are_stricter_than_input_sets() {
        assert!(FileFormat::GmxTrajectory.matches(Path::new("state.cpt")));
        assert!(!FileFormat::GmxTrajectoryOutput.matches(Path::new("state.cpt")));
        assert!(FileFormat::AmberTrajectory.matches(Path::new("traj.cdf")));
        assert!(!FileFormat::AmberTrajectoryOutput.matches(Path::new("traj.cdf")));
    }

    #[test]
    fn accepted_preserves_declaration_order() {
        assert_eq!(
            FileFormat::AmberTopology.accepted(),
            vec!["top", "pdb", "prmtop", "parmtop"]
        );
        assert_eq!(FileFormat::Xvg.accepted(), vec!["xvg"]);
    }
}
