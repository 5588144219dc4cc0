use super::common::{self, CpptrajPaths};
use super::rmsf::Fluctuation;
use crate::core::command::Invocation;
use crate::core::properties::PropertySet;
use crate::engine::error::WrapperError;
use crate::tools::{AssemblyContext, Operation, OperationKind};
use std::path::Path;

/// Per-residue fluctuations converted to B-factors (`atomicfluct ... byres bfactor`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bfactor {
    fluctuation: Fluctuation,
}

impl Bfactor {
    pub fn new(paths: &CpptrajPaths, props: &PropertySet) -> Result<Self, WrapperError> {
        Ok(Self {
            fluctuation: Fluctuation::new(paths, props)?,
        })
    }
}

impl Operation for Bfactor {
    fn kind(&self) -> OperationKind {
        OperationKind::CpptrajBfactor
    }

    fn outputs(&self) -> Vec<&Path> {
        vec![self.fluctuation.output()]
    }

    fn assemble(&self, ctx: &AssemblyContext) -> Invocation {
        common::invocation(ctx, self.fluctuation.document(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::cpptraj::common::fixtures;

    #[test]
    fn average_reference_ends_with_bfactor_keyword() {
        let dir = tempfile::tempdir().unwrap();
        let paths = fixtures::paths(dir.path(), "bfactor.dat");
        let props = PropertySet::new()
            .with("mask", "c-alpha")
            .with("reference", "average");
        let op = Bfactor::new(&paths, &props).unwrap();
        let inv = op.assemble(&AssemblyContext {
            binary_path: "cpptraj",
            instructions_path: Path::new("instructions.in"),
            working_dir: dir.path(),
            prefix: None,
            step: None,
        });

        let out = paths.output_cpptraj_path.as_ref().unwrap().display().to_string();
        let lines = inv.instructions.lines();
        assert_eq!(
            &lines[2..],
            &[
                "strip !@CA".to_string(),
                "average crdset MyAvg".to_string(),
                "run".to_string(),
                "rms ref MyAvg @CA".to_string(),
                format!("atomicfluct out {out} byres bfactor"),
            ]
        );
        assert_eq!(op.kind(), OperationKind::CpptrajBfactor);
    }

    #[test]
    fn missing_trajectory_is_reported_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let mut paths = fixtures::paths(dir.path(), "bfactor.dat");
        paths.input_traj_path = None;
        let err = Bfactor::new(&paths, &PropertySet::new()).unwrap_err();
        assert_eq!(err.to_string(), "Missing required input file: input_traj_path");
    }
}
