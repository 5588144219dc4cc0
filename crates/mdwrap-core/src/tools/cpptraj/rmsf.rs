use super::common::{self, CpptrajPaths, FrameSlice, Mask, ReferenceFrame, TrajectoryInput};
use crate::core::command::Invocation;
use crate::core::files::FileReference;
use crate::core::formats::FileFormat;
use crate::core::instructions::InstructionDocument;
use crate::core::properties::PropertySet;
use crate::engine::error::WrapperError;
use crate::tools::{AssemblyContext, Operation, OperationKind};
use std::path::Path;

/// Per-residue root mean square fluctuations (`atomicfluct ... byres`).
///
/// Options: `start`, `end`, `steps`, `mask`, `reference`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rmsf {
    fluctuation: Fluctuation,
}

impl Rmsf {
    pub fn new(paths: &CpptrajPaths, props: &PropertySet) -> Result<Self, WrapperError> {
        Ok(Self {
            fluctuation: Fluctuation::new(paths, props)?,
        })
    }
}

impl Operation for Rmsf {
    fn kind(&self) -> OperationKind {
        OperationKind::CpptrajRmsf
    }

    fn outputs(&self) -> Vec<&Path> {
        vec![self.fluctuation.output()]
    }

    fn assemble(&self, ctx: &AssemblyContext) -> Invocation {
        common::invocation(ctx, self.fluctuation.document(false))
    }
}

/// State shared by the fluctuation analyses; [`super::Bfactor`] differs only in its final keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Fluctuation {
    input: TrajectoryInput,
    output: FileReference,
    slice: FrameSlice,
    mask: Mask,
    reference: ReferenceFrame,
}

impl Fluctuation {
    pub(super) fn new(paths: &CpptrajPaths, props: &PropertySet) -> Result<Self, WrapperError> {
        let input = TrajectoryInput::from_paths(paths)?;
        let output = common::required_output(paths, FileFormat::AmberData)?;
        let slice = FrameSlice::from_properties(props)?;
        let mask = common::resolve_mask(props)?;
        let reference = ReferenceFrame::resolve(props, paths)?;
        Ok(Self {
            input,
            output,
            slice,
            mask,
            reference,
        })
    }

    pub(super) fn output(&self) -> &Path {
        self.output.path()
    }

    pub(super) fn document(&self, bfactor: bool) -> InstructionDocument {
        let mut doc = InstructionDocument::new();
        doc.push(self.input.parm_line());
        doc.push(self.slice.trajin_line(&self.input.trajectory));
        if let Some(strip) = self.mask.strip_line() {
            doc.push(strip);
        }
        doc.extend(self.reference.lines(&self.mask));

        let output = self.output.to_arg();
        let keyword = if bfactor { "bfactor" } else { "" };
        doc.push_parts(&["atomicfluct out", &output, "byres", keyword]);
        doc
    }
}
