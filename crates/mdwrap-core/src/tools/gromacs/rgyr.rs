use super::common::{self, GmxPaths, Groups, XVG};
use crate::core::command::Invocation;
use crate::core::files::FileReference;
use crate::core::formats::FileFormat;
use crate::core::properties::PropertySet;
use crate::engine::error::WrapperError;
use crate::tools::{AssemblyContext, Operation, OperationKind};
use std::path::Path;

/// Radius of gyration of a group over time (`gmx gyrate`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rgyr {
    structure: FileReference,
    trajectory: FileReference,
    index: Option<FileReference>,
    output: FileReference,
    selection: String,
    xvg: String,
}

impl Rgyr {
    pub fn new(paths: &GmxPaths, props: &PropertySet) -> Result<Self, WrapperError> {
        let structure = paths.structure()?;
        let trajectory = paths.trajectory()?;
        let index = paths.index()?;
        let output = GmxPaths::output(
            "output_xvg_path",
            paths.output_xvg_path.as_deref(),
            FileFormat::Xvg,
        )?;
        let selection = Groups::load(index.as_ref())?.resolve(props, "selection")?;
        Ok(Self {
            structure,
            trajectory,
            index,
            output,
            selection,
            xvg: props.choice("xvg", &XVG, "none")?,
        })
    }
}

impl Operation for Rgyr {
    fn kind(&self) -> OperationKind {
        OperationKind::GmxRgyr
    }

    fn outputs(&self) -> Vec<&Path> {
        vec![self.output.path()]
    }

    fn assemble(&self, ctx: &AssemblyContext) -> Invocation {
        common::invocation(
            ctx,
            "gyrate",
            |cmd| {
                cmd.flag("-s", self.structure.to_arg())
                    .flag("-f", self.trajectory.to_arg())
                    .flag("-o", self.output.to_arg())
                    .flag("-xvg", self.xvg.as_str())
                    .flag_opt("-n", self.index.as_ref().map(FileReference::to_arg))
            },
            &[self.selection.as_str()],
        )
    }
}
