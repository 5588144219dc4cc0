use super::common::{self, CpptrajPaths, FrameSlice, Mask, TrajectoryInput};
use crate::core::command::Invocation;
use crate::core::files::FileReference;
use crate::core::formats::FileFormat;
use crate::core::instructions::InstructionDocument;
use crate::core::properties::PropertySet;
use crate::engine::error::WrapperError;
use crate::tools::{AssemblyContext, Operation, OperationKind};
use std::path::Path;

/// Averages the sliced frames of the masked atoms into a single structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Average {
    input: TrajectoryInput,
    output: FileReference,
    slice: FrameSlice,
    mask: Mask,
    format: String,
}

impl Average {
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

impl Operation for Average {
    fn kind(&self) -> OperationKind {
        OperationKind::CpptrajAverage
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
        doc.push(common::write_line("average", &self.output, &self.format));
        common::invocation(ctx, doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::properties::OptionError;
    use crate::tools::cpptraj::common::fixtures;

    #[test]
    fn heavy_atoms_average_to_pdb() {
        let dir = tempfile::tempdir().unwrap();
        let paths = fixtures::paths(dir.path(), "average.pdb");
        let props = PropertySet::new()
            .with("mask", "heavy-atoms")
            .with("format", "pdb")
            .with("end", 100)
            .with("steps", 10);
        let op = Average::new(&paths, &props).unwrap();
        let inv = op.assemble(&AssemblyContext {
            binary_path: "cpptraj",
            instructions_path: Path::new("instructions.in"),
            working_dir: dir.path(),
            prefix: None,
            step: None,
        });

        let out = paths.output_cpptraj_path.as_ref().unwrap().display().to_string();
        let lines = inv.instructions.lines();
        assert!(lines[1].ends_with(" 1 100 10"));
        assert_eq!(lines[2], "strip @H=");
        assert_eq!(lines[3], format!("average {out} pdb"));
    }

    #[test]
    fn default_format_is_netcdf() {
        let dir = tempfile::tempdir().unwrap();
        let paths = fixtures::paths(dir.path(), "average.netcdf");
        let op = Average::new(&paths, &PropertySet::new()).unwrap();
        let inv = op.assemble(&AssemblyContext {
            binary_path: "cpptraj",
            instructions_path: Path::new("instructions.in"),
            working_dir: dir.path(),
            prefix: None,
            step: None,
        });
        let lines = inv.instructions.lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[2].ends_with(" netcdf"));
    }

    #[test]
    fn unsupported_format_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let paths = fixtures::paths(dir.path(), "average.pdb");
        let props = PropertySet::new().with("format", "xyz");
        assert!(matches!(
            Average::new(&paths, &props),
            Err(WrapperError::Option(OptionError::InvalidOption { .. }))
        ));
    }
}
