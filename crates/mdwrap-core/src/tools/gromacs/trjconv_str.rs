use super::common::{self, GmxPaths, Groups};
use crate::core::command::Invocation;
use crate::core::files::FileReference;
use crate::core::formats::FileFormat;
use crate::core::properties::PropertySet;
use crate::engine::error::WrapperError;
use crate::tools::{AssemblyContext, Operation, OperationKind};
use std::path::Path;

/// Writes a group of atoms from a trajectory as a structure file (`gmx trjconv`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrjConvStr {
    structure: FileReference,
    trajectory: FileReference,
    index: Option<FileReference>,
    output: FileReference,
    selection: String,
}

impl TrjConvStr {
    pub fn new(paths: &GmxPaths, props: &PropertySet) -> Result<Self, WrapperError> {
        let structure = paths.structure()?;
        let trajectory = paths.trajectory()?;
        let index = paths.index()?;
        let output = GmxPaths::output(
            "output_str_path",
            paths.output_str_path.as_deref(),
            FileFormat::GmxStructure,
        )?;
        let selection = Groups::load(index.as_ref())?.resolve(props, "selection")?;
        Ok(Self {
            structure,
            trajectory,
            index,
            output,
            selection,
        })
    }
}

impl Operation for TrjConvStr {
    fn kind(&self) -> OperationKind {
        OperationKind::GmxTrjConvStr
    }

    fn outputs(&self) -> Vec<&Path> {
        vec![self.output.path()]
    }

    fn assemble(&self, ctx: &AssemblyContext) -> Invocation {
        common::invocation(
            ctx,
            "trjconv",
            |cmd| {
                cmd.flag("-s", self.structure.to_arg())
                    .flag("-f", self.trajectory.to_arg())
                    .flag("-o", self.output.to_arg())
                    .flag_opt("-n", self.index.as_ref().map(FileReference::to_arg))
            },
            &[self.selection.as_str()],
        )
    }
}
