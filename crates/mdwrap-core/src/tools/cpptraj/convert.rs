use super::common::{self, CpptrajPaths, FrameSlice, TrajectoryInput};
use crate::core::command::Invocation;
use crate::core::files::FileReference;
use crate::core::formats::FileFormat;
use crate::core::instructions::InstructionDocument;
use crate::core::properties::PropertySet;
use crate::engine::error::WrapperError;
use crate::tools::{AssemblyContext, Operation, OperationKind};
use std::path::Path;

/// Rewrites the sliced trajectory in another format. No atoms are removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Convert {
    input: TrajectoryInput,
    output: FileReference,
    slice: FrameSlice,
    format: String,
}

impl Convert {
    pub fn new(paths: &CpptrajPaths, props: &PropertySet) -> Result<Self, WrapperError> {
        Ok(Self {
            input: TrajectoryInput::from_paths(paths)?,
            output: common::required_output(paths, FileFormat::AmberTrajectoryOutput)?,
            slice: FrameSlice::from_properties(props)?,
            format: common::resolve_format(props)?,
        })
    }
}

impl Operation for Convert {
    fn kind(&self) -> OperationKind {
        OperationKind::CpptrajConvert
    }

    fn outputs(&self) -> Vec<&Path> {
        vec![self.output.path()]
    }

    fn assemble(&self, ctx: &AssemblyContext) -> Invocation {
        let mut doc = InstructionDocument::new();
        doc.push(self.input.parm_line());
        doc.push(self.slice.trajin_line(&self.input.trajectory));
        doc.push(common::write_line("trajout", &self.output, &self.format));
        common::invocation(ctx, doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::cpptraj::common::fixtures;

    #[test]
    fn mask_option_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let paths = fixtures::paths(dir.path(), "convert.xtc");
        let props = PropertySet::new()
            .with("mask", "c-alpha")
            .with("format", "xtc");
        let op = Convert::new(&paths, &props).unwrap();
        let inv = op.assemble(&AssemblyContext {
            binary_path: "cpptraj",
            instructions_path: Path::new("instructions.in"),
            working_dir: dir.path(),
            prefix: None,
            step: None,
        });

        let out = paths.output_cpptraj_path.as_ref().unwrap().display().to_string();
        let lines = inv.instructions.lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], format!("trajout {out} xtc"));
    }

    #[test]
    fn missing_output_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut paths = fixtures::paths(dir.path(), "convert.xtc");
        paths.output_cpptraj_path = None;
        let err = Convert::new(&paths, &PropertySet::new()).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("output_cpptraj_path"));
    }
}
