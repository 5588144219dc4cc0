use super::common::{self, CpptrajPaths, FrameSlice, MASKS, Mask, TrajectoryInput};
use crate::core::command::Invocation;
use crate::core::files::FileReference;
use crate::core::formats::FileFormat;
use crate::core::instructions::InstructionDocument;
use crate::core::properties::PropertySet;
use crate::engine::error::WrapperError;
use crate::tools::{AssemblyContext, Operation, OperationKind};
use std::path::Path;

/// Removes solvent and ions from a trajectory, then optionally narrows it to a mask.
///
/// Only the solute complement and the mask complement are stripped. A second
/// `strip !@H=` line, which would remove every heavy atom and leave the hydrogens, is
/// deliberately not emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dry {
    input: TrajectoryInput,
    output: FileReference,
    slice: FrameSlice,
    mask: Mask,
    format: String,
}

impl Dry {
    pub fn new(paths: &CpptrajPaths, props: &PropertySet) -> Result<Self, WrapperError> {
        Ok(Self {
            input: TrajectoryInput::from_paths(paths)?,
            output: common::required_output(paths, FileFormat::AmberTrajectoryOutput)?,
            slice: FrameSlice::from_properties(props)?,
            mask: common::resolve_mask(props)?,
            format: common::resolve_format(props)?,
        })
    }
}

impl Operation for Dry {
    fn kind(&self) -> OperationKind {
        OperationKind::CpptrajDry
    }

    fn outputs(&self) -> Vec<&Path> {
        vec![self.output.path()]
    }

    fn assemble(&self, ctx: &AssemblyContext) -> Invocation {
        let mut doc = InstructionDocument::new();
        doc.push(self.input.parm_line());
        doc.push(self.slice.trajin_line(&self.input.trajectory));
        if let Some(solute) = MASKS.get("solute").and_then(Mask::strip_line) {
            doc.push(solute);
        }
        if let Some(strip) = self.mask.strip_line() {
            doc.push(strip);
        }
        doc.push(common::write_line("trajout", &self.output, &self.format));
        common::invocation(ctx, doc)
    }
}
