use super::common::{self, CpptrajPaths, FrameSlice, Mask, TrajectoryInput};
use crate::core::command::Invocation;
use crate::core::files::FileReference;
use crate::core::formats::FileFormat;
use crate::core::instructions::InstructionDocument;
use crate::core::properties::PropertySet;
use crate::engine::error::WrapperError;
use crate::tools::{AssemblyContext, Operation, OperationKind};
use std::path::Path;

/// Writes the sliced trajectory keeping only the masked atoms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskTrajectory {
    input: TrajectoryInput,
    output: FileReference,
    slice: FrameSlice,
    mask: Mask,
    format: String,
}

impl MaskTrajectory {
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

impl Operation for MaskTrajectory {
    fn kind(&self) -> OperationKind {
        OperationKind::CpptrajMask
    }

    fn outputs(&self) -> Vec<&Path> {
        vec![self.output.path()]
    }

    fn assemble(&self, ctx: &AssemblyContext) -> Invocation {
        let mut doc = InstructionDocument::new();
        doc.push(self.input.parm_line());
        doc.push(self.slice.trajin_line(&self.input.trajectory));
        if let Some(strip) = self.mask.strip_line() {
            doc.push(strip);
        }
        doc.push(common::write_line("trajout", &self.output, &self.format));
        common::invocation(ctx, doc)
    }
}
