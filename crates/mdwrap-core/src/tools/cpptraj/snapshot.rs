use super::common::{self, CpptrajPaths, FrameSlice, Mask, TrajectoryInput};
use crate::core::command::Invocation;
use crate::core::files::FileReference;
use crate::core::formats::FileFormat;
use crate::core::instructions::InstructionDocument;
use crate::core::properties::PropertySet;
use crate::engine::error::WrapperError;
use crate::tools::{AssemblyContext, Operation, OperationKind};
use std::path::Path;

/// Extracts a single frame (`snapshot`, 1-based) of the masked atoms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    input: TrajectoryInput,
    output: FileReference,
    frame: FrameSlice,
    mask: Mask,
    format: String,
}

impl Snapshot {
    pub fn new(paths: &CpptrajPaths, props: &PropertySet) -> Result<Self, WrapperError> {
        Ok(Self {
            input: TrajectoryInput::from_paths(paths)?,
            output: common::required_output(paths, FileFormat::AmberTrajectoryOutput)?,
            frame: FrameSlice::snapshot(props)?,
            mask: common::resolve_mask(props)?,
            format: common::resolve_format(props)?,
        })
    }
}

impl Operation for Snapshot {
    fn kind(&self) -> OperationKind {
        OperationKind::CpptrajSnapshot
    }

    fn outputs(&self) -> Vec<&Path> {
        vec![self.output.path()]
    }

    fn assemble(&self, ctx: &AssemblyContext) -> Invocation {
        let mut doc = InstructionDocument::new();
        doc.push(self.input.parm_line());
        doc.push(self.frame.trajin_line(&self.input.trajectory));
        if let Some(strip) = self.mask.strip_line() {
            doc.push(strip);
        }
        doc.push(common::write_line("trajout", &self.output, &self.format));
        common::invocation(ctx, doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::properties::OptionError;
    use crate::tools::cpptraj::common::fixtures;

    #[test]
    fn snapshot_reads_exactly_one_frame() {
        let dir = tempfile::tempdir().unwrap();
        let paths = fixtures::paths(dir.path(), "snapshot.pdb");
        let props = PropertySet::new()
            .with("snapshot", 42)
            .with("mask", "solute")
            .with("format", "pdb")
            .with("start", 5);
        let op = Snapshot::new(&paths, &props).unwrap();
        let inv = op.assemble(&AssemblyContext {
            binary_path: "cpptraj",
            instructions_path: Path::new("instructions.in"),
            working_dir: dir.path(),
            prefix: None,
            step: None,
        });

        let traj = paths.input_traj_path.as_ref().unwrap().display().to_string();
        let lines = inv.instructions.lines();
        assert_eq!(lines[1], format!("trajin {traj} 42 42 1"));
        assert_eq!(lines[2], "strip :WAT | @Na+,Cl-,K+");
        assert!(lines[3].ends_with(" pdb"));
    }

    #[test]
    fn snapshot_zero_is_out_of_range() {
        let dir = tempfile::tempdir().unwrap();
        let paths = fixtures::paths(dir.path(), "snapshot.pdb");
        let props = PropertySet::new().with("snapshot", 0);
        assert!(matches!(
            Snapshot::new(&paths, &props),
            Err(WrapperError::Option(OptionError::OutOfRange { .. }))
        ));
    }
}
