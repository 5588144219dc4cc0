use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "mdwrap - validated, restartable launches of cpptraj and GROMACS analysis tools.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Per-residue root mean square fluctuations with cpptraj.
    CpptrajRmsf(FluctuationArgs),
    /// Per-residue B-factors with cpptraj.
    CpptrajBfactor(FluctuationArgs),
    /// Radius of gyration with cpptraj.
    CpptrajRgyr(CpptrajArgs),
    /// Average structure of a trajectory with cpptraj.
    CpptrajAverage(CpptrajArgs),
    /// Keep only a masked set of atoms with cpptraj.
    CpptrajMask(CpptrajArgs),
    /// Remove solvent and ions from a trajectory with cpptraj.
    CpptrajDry(CpptrajArgs),
    /// Convert a trajectory to another format with cpptraj.
    CpptrajConvert(CpptrajArgs),
    /// Extract a single frame with cpptraj.
    CpptrajSnapshot(CpptrajArgs),
    /// Extract energy terms from a GROMACS energy file.
    GmxEnergy(GmxEnergyArgs),
    /// Cluster trajectory frames with GROMACS.
    GmxCluster(GmxClusterArgs),
    /// Radius of gyration with GROMACS.
    GmxRgyr(GmxRgyrArgs),
    /// Write a selection of a trajectory as a structure with GROMACS.
    GmxTrjconvStr(GmxTrjConvStrArgs),
    /// Convert or window a trajectory with GROMACS.
    GmxTrjconvTrj(GmxTrjConvTrjArgs),
    /// Correct periodicity, centre and fit a trajectory with GROMACS.
    GmxImage(GmxImageArgs),
}

/// Where the option properties for a launch come from.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to a TOML configuration file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Apply the `[system.<NAME>]` table of the configuration file.
    #[arg(long, value_name = "NAME", requires = "config")]
    pub system: Option<String>,

    /// Apply the `[<NAME>.properties]` table of the configuration file.
    #[arg(long, value_name = "NAME", requires = "config")]
    pub step: Option<String>,

    /// Set a single property, overriding the config file.
    /// Can be used multiple times. Example: -S mask=c-alpha
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

#[derive(Args, Debug)]
pub struct CpptrajArgs {
    /// Amber topology (top, pdb, prmtop, parmtop).
    #[arg(long, value_name = "PATH")]
    pub input_top_path: PathBuf,

    /// Trajectory to process.
    #[arg(long, value_name = "PATH")]
    pub input_traj_path: PathBuf,

    /// Output trajectory or data file.
    #[arg(long, value_name = "PATH")]
    pub output_cpptraj_path: PathBuf,

    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(Args, Debug)]
pub struct FluctuationArgs {
    #[command(flatten)]
    pub common: CpptrajArgs,

    /// Experimental reference structure (required when reference = experimental).
    #[arg(long, value_name = "PATH")]
    pub input_exp_path: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct GmxEnergyArgs {
    /// GROMACS energy file (edr).
    #[arg(long, value_name = "PATH")]
    pub input_energy_path: PathBuf,

    /// Output XVG table.
    #[arg(long, value_name = "PATH")]
    pub output_xvg_path: PathBuf,

    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Inputs shared by GROMACS tools that read a structure and a trajectory.
#[derive(Args, Debug)]
pub struct GmxTrajectoryArgs {
    /// Structure or run input (tpr, gro, g96, pdb, brk, ent).
    #[arg(long, value_name = "PATH")]
    pub input_structure_path: PathBuf,

    /// Trajectory to process (xtc, trr, cpt, gro, g96, pdb, tng).
    #[arg(long, value_name = "PATH")]
    pub input_traj_path: PathBuf,

    /// Index file; its groups replace the default selections.
    #[arg(long, value_name = "PATH")]
    pub input_index_path: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct GmxClusterArgs {
    #[command(flatten)]
    pub input: GmxTrajectoryArgs,

    /// Output structure holding the cluster centres.
    #[arg(long, value_name = "PATH")]
    pub output_pdb_path: PathBuf,

    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(Args, Debug)]
pub struct GmxRgyrArgs {
    #[command(flatten)]
    pub input: GmxTrajectoryArgs,

    /// Output XVG table.
    #[arg(long, value_name = "PATH")]
    pub output_xvg_path: PathBuf,

    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(Args, Debug)]
pub struct GmxTrjConvStrArgs {
    #[command(flatten)]
    pub input: GmxTrajectoryArgs,

    /// Output structure file.
    #[arg(long, value_name = "PATH")]
    pub output_str_path: PathBuf,

    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(Args, Debug)]
pub struct GmxTrjConvTrjArgs {
    /// Trajectory to convert.
    #[arg(long, value_name = "PATH")]
    pub input_traj_path: PathBuf,

    /// Index file; its groups replace the default selections.
    #[arg(long, value_name = "PATH")]
    pub input_index_path: Option<PathBuf>,

    /// Output trajectory (xtc, trr, gro, g96, pdb, tng).
    #[arg(long, value_name = "PATH")]
    pub output_traj_path: PathBuf,

    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(Args, Debug)]
pub struct GmxImageArgs {
    #[command(flatten)]
    pub input: GmxTrajectoryArgs,

    /// Output trajectory (xtc, trr, gro, g96, pdb, tng).
    #[arg(long, value_name = "PATH")]
    pub output_traj_path: PathBuf,

    #[command(flatten)]
    pub config: ConfigArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn subcommands_use_operation_names() {
        let cli = Cli::parse_from([
            "mdwrap",
            "-v",
            "gmx-trjconv-trj",
            "--input-traj-path",
            "in.trr",
            "--output-traj-path",
            "out.xtc",
            "-S",
            "start=10",
            "-S",
            "selection=Protein",
        ]);
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::GmxTrjconvTrj(args) => {
                assert_eq!(args.input_traj_path, PathBuf::from("in.trr"));
                assert_eq!(args.config.set_values, vec!["start=10", "selection=Protein"]);
                assert!(args.input_index_path.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn system_requires_a_config_file() {
        let result = Cli::try_parse_from([
            "mdwrap",
            "cpptraj-convert",
            "--input-top-path",
            "a.top",
            "--input-traj-path",
            "a.dcd",
            "--output-cpptraj-path",
            "b.netcdf",
            "--system",
            "hpc",
        ]);
        assert!(result.is_err());
    }
}
