use super::common::{self, CpptrajPaths, FrameSlice, Mask, TrajectoryInput};
use crate::core::command::Invocation;
use crate::core::files::FileReference;
use crate::core::formats::FileFormat;
use crate::core::instructions::InstructionDocument;
use crate::core::properties::PropertySet;
use crate::engine::error::WrapperError;
use crate::tools::{AssemblyContext, Operation, OperationKind};
use std::path::Path;

/// Mass-weighted radius of gyration of the masked atoms, per frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rgyr {
    input: TrajectoryInput,
    output: FileReference,
    slice: FrameSlice,
    mask: Mask,
}

impl Rgyr {
    pub fn new(paths: &CpptrajPaths, props: &PropertySet) -> Result<Self, WrapperError> {
        Ok(Self {
            input: TrajectoryInput::from_paths(paths)?,
            output: common::required_output(paths, FileFormat::AmberData)?,
            slice: FrameSlice::from_properties(props)?,
            mask: common::resolve_mask(props)?,
        })
    }
}

impl Operation for Rgyr {
    fn kind(&self) -> OperationKind {
        OperationKind::CpptrajRgyr
    }

    fn outputs(&self) -> Vec<&Path> {
        vec![self.output.path()]
    }

    fn assemble(&self, ctx: &AssemblyContext) -> Invocation {
        let mut doc = InstructionDocument::new();
        doc.push(self.input.parm_line());
        doc.push(self.slice.trajin_line(&self.input.trajectory));
        let output = self.output.to_arg();
        doc.push_parts(&["radgyr", self.mask.selection, "out", &output, "mass nomax"]);
        common::invocation(ctx, doc)
    }
}
