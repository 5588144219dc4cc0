use crate::cli::{
    ConfigArgs, GmxClusterArgs, GmxEnergyArgs, GmxImageArgs, GmxRgyrArgs, GmxTrajectoryArgs,
    GmxTrjConvStrArgs, GmxTrjConvTrjArgs,
};
use crate::config;
use crate::error::{CliError, Result};
use mdwrap::{
    core::properties::PropertySet,
    tools::{
        Operation, OperationKind,
        gromacs::{Cluster, Energy, GmxPaths, Image, Rgyr, TrjConvStr, TrjConvTrj},
    },
    workflows::launch::LaunchOutcome,
};
use tracing::info;

pub fn energy(args: GmxEnergyArgs) -> Result<LaunchOutcome> {
    let paths = GmxPaths {
        input_energy_path: Some(args.input_energy_path),
        output_xvg_path: Some(args.output_xvg_path),
        ..GmxPaths::default()
    };
    run(OperationKind::GmxEnergy, &paths, &args.config)
}

pub fn cluster(args: GmxClusterArgs) -> Result<LaunchOutcome> {
    let paths = GmxPaths {
        output_pdb_path: Some(args.output_pdb_path),
        ..trajectory_paths(args.input)
    };
    run(OperationKind::GmxCluster, &paths, &args.config)
}

pub fn rgyr(args: GmxRgyrArgs) -> Result<LaunchOutcome> {
    let paths = GmxPaths {
        output_xvg_path: Some(args.output_xvg_path),
        ..trajectory_paths(args.input)
    };
    run(OperationKind::GmxRgyr, &paths, &args.config)
}

pub fn trjconv_str(args: GmxTrjConvStrArgs) -> Result<LaunchOutcome> {
    let paths = GmxPaths {
        output_str_path: Some(args.output_str_path),
        ..trajectory_paths(args.input)
    };
    run(OperationKind::GmxTrjConvStr, &paths, &args.config)
}

pub fn trjconv_trj(args: GmxTrjConvTrjArgs) -> Result<LaunchOutcome> {
    let paths = GmxPaths {
        input_traj_path: Some(args.input_traj_path),
        input_index_path: args.input_index_path,
        output_traj_path: Some(args.output_traj_path),
        ..GmxPaths::default()
    };
    run(OperationKind::GmxTrjConvTrj, &paths, &args.config)
}

pub fn image(args: GmxImageArgs) -> Result<LaunchOutcome> {
    let paths = GmxPaths {
        output_traj_path: Some(args.output_traj_path),
        ..trajectory_paths(args.input)
    };
    run(OperationKind::GmxImage, &paths, &args.config)
}

fn trajectory_paths(input: GmxTrajectoryArgs) -> GmxPaths {
    GmxPaths {
        input_structure_path: Some(input.input_structure_path),
        input_traj_path: Some(input.input_traj_path),
        input_index_path: input.input_index_path,
        ..GmxPaths::default()
    }
}

fn run(kind: OperationKind, paths: &GmxPaths, config: &ConfigArgs) -> Result<LaunchOutcome> {
    let props = config::resolve_properties(config)?;
    info!("Validating inputs for {}...", kind);
    let operation = build(kind, paths, &props)?;
    super::launch(operation.as_ref(), &props)
}

fn build(kind: OperationKind, paths: &GmxPaths, props: &PropertySet) -> Result<Box<dyn Operation>> {
    let operation: Box<dyn Operation> = match kind {
        OperationKind::GmxCluster => Box::new(Cluster::new(paths, props)?),
        OperationKind::GmxEnergy => Box::new(Energy::new(paths, props)?),
        OperationKind::GmxImage => Box::new(Image::new(paths, props)?),
        OperationKind::GmxRgyr => Box::new(Rgyr::new(paths, props)?),
        OperationKind::GmxTrjConvStr => Box::new(TrjConvStr::new(paths, props)?),
        OperationKind::GmxTrjConvTrj => Box::new(TrjConvTrj::new(paths, props)?),
        other => {
            return Err(CliError::Argument(format!(
                "{} is not a GROMACS operation",
                other
            )));
        }
    };
    Ok(operation)
}
