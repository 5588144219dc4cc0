use crate::cli::CpptrajArgs;
use crate::config;
use crate::error::{CliError, Result};
use mdwrap::{
    core::properties::PropertySet,
    tools::{
        Operation, OperationKind,
        cpptraj::{
            Average, Bfactor, Convert, CpptrajPaths, Dry, MaskTrajectory, Rgyr, Rmsf, Snapshot,
        },
    },
    workflows::launch::LaunchOutcome,
};
use std::path::PathBuf;
use tracing::info;

pub fn run(
    kind: OperationKind,
    args: CpptrajArgs,
    input_exp_path: Option<PathBuf>,
) -> Result<LaunchOutcome> {
    let props = config::resolve_properties(&args.config)?;
    let paths = CpptrajPaths {
        input_top_path: Some(args.input_top_path),
        input_traj_path: Some(args.input_traj_path),
        input_exp_path,
        output_cpptraj_path: Some(args.output_cpptraj_path),
    };

    info!("Validating inputs for {}...", kind);
    let operation = build(kind, &paths, &props)?;
    super::launch(operation.as_ref(), &props)
}

fn build(
    kind: OperationKind,
    paths: &CpptrajPaths,
    props: &PropertySet,
) -> Result<Box<dyn Operation>> {
    let operation: Box<dyn Operation> = match kind {
        OperationKind::CpptrajAverage => Box::new(Average::new(paths, props)?),
        OperationKind::CpptrajBfactor => Box::new(Bfactor::new(paths, props)?),
        OperationKind::CpptrajConvert => Box::new(Convert::new(paths, props)?),
        OperationKind::CpptrajDry => Box::new(Dry::new(paths, props)?),
        OperationKind::CpptrajMask => Box::new(MaskTrajectory::new(paths, props)?),
        OperationKind::CpptrajRgyr => Box::new(Rgyr::new(paths, props)?),
        OperationKind::CpptrajRmsf => Box::new(Rmsf::new(paths, props)?),
        OperationKind::CpptrajSnapshot => Box::new(Snapshot::new(paths, props)?),
        other => {
            return Err(CliError::Argument(format!(
                "{} is not a cpptraj operation",
                other
            )));
        }
    };
    Ok(operation)
}
