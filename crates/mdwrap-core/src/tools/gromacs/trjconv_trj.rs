use super::common::{self, GmxPaths, Groups};
use crate::core::command::Invocation;
use crate::core::files::FileReference;
use crate::core::formats::FileFormat;
use crate::core::properties::PropertySet;
use crate::engine::error::WrapperError;
use crate::tools::{AssemblyContext, Operation, OperationKind};
use std::path::Path;

/// Converts a trajectory between formats, optionally windowed in time and thinned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrjConvTrj {
    trajectory: FileReference,
    index: Option<FileReference>,
    output: FileReference,
    selection: String,
    start: i64,
    end: i64,
    dt: i64,
}

impl TrjConvTrj {
    pub fn new(paths: &GmxPaths, props: &PropertySet) -> Result<Self, WrapperError> {
        let trajectory = paths.trajectory()?;
        let index = paths.index()?;
        let output = GmxPaths::output(
            "output_traj_path",
            paths.output_traj_path.as_deref(),
            FileFormat::GmxTrajectoryOutput,
        )?;
        let selection = Groups::load(index.as_ref())?.resolve(props, "selection")?;
        let (start, end, dt) = common::resolve_times(props)?;
        Ok(Self {
            trajectory,
            index,
            output,
            selection,
            start,
            end,
            dt,
        })
    }
}

impl Operation for TrjConvTrj {
    fn kind(&self) -> OperationKind {
        OperationKind::GmxTrjConvTrj
    }

    fn outputs(&self) -> Vec<&Path> {
        vec![self.output.path()]
    }

    fn assemble(&self, ctx: &AssemblyContext) -> Invocation {
        common::invocation(
            ctx,
            "trjconv",
            |cmd| {
                cmd.flag("-f", self.trajectory.to_arg())
                    .flag("-b", self.start.to_string())
                    .flag("-e", self.end.to_string())
                    .flag("-dt", self.dt.to_string())
                    .flag("-o", self.output.to_arg())
                    .flag_opt("-n", self.index.as_ref().map(FileReference::to_arg))
            },
            &[self.selection.as_str()],
        )
    }
}
