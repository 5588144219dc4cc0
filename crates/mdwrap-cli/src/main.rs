mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod utils;

use crate::cli::{Cli, Commands};
use crate::error::{CliError, Result};
use clap::Parser;
use mdwrap::{tools::OperationKind, workflows::launch::LaunchOutcome};
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install().map_err(|e| CliError::Other(e.into()))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    info!("mdwrap CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let result = dispatch(cli.command);

    match &result {
        Ok(LaunchOutcome::Completed) => info!("Command completed successfully."),
        Ok(LaunchOutcome::Skipped) => info!("Command skipped, outputs already present."),
        Err(CliError::Wrapper(e)) if e.is_validation() => {
            error!("Validation failed, nothing was launched: {}", e)
        }
        Err(e) => error!("Command failed: {}", e),
    }

    result.map(|_| ())
}

fn dispatch(command: Commands) -> Result<LaunchOutcome> {
    match command {
        Commands::CpptrajRmsf(args) => commands::cpptraj::run(
            OperationKind::CpptrajRmsf,
            args.common,
            args.input_exp_path,
        ),
        Commands::CpptrajBfactor(args) => commands::cpptraj::run(
            OperationKind::CpptrajBfactor,
            args.common,
            args.input_exp_path,
        ),
        Commands::CpptrajRgyr(args) => {
            commands::cpptraj::run(OperationKind::CpptrajRgyr, args, None)
        }
        Commands::CpptrajAverage(args) => {
            commands::cpptraj::run(OperationKind::CpptrajAverage, args, None)
        }
        Commands::CpptrajMask(args) => {
            commands::cpptraj::run(OperationKind::CpptrajMask, args, None)
        }
        Commands::CpptrajDry(args) => commands::cpptraj::run(OperationKind::CpptrajDry, args, None),
        Commands::CpptrajConvert(args) => {
            commands::cpptraj::run(OperationKind::CpptrajConvert, args, None)
        }
        Commands::CpptrajSnapshot(args) => {
            commands::cpptraj::run(OperationKind::CpptrajSnapshot, args, None)
        }
        Commands::GmxEnergy(args) => commands::gromacs::energy(args),
        Commands::GmxCluster(args) => commands::gromacs::cluster(args),
        Commands::GmxRgyr(args) => commands::gromacs::rgyr(args),
        Commands::GmxTrjconvStr(args) => commands::gromacs::trjconv_str(args),
        Commands::GmxTrjconvTrj(args) => commands::gromacs::trjconv_trj(args),
        Commands::GmxImage(args) => commands::gromacs::image(args),
    }
}
