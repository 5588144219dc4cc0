pub mod cpptraj;
pub mod gromacs;

use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use mdwrap::{
    core::properties::PropertySet,
    engine::{config::ToolConfig, error::WrapperError, progress::ProgressReporter},
    tools::Operation,
    workflows::{self, launch::LaunchOutcome},
};
use tracing::info;

/// Runs a constructed operation with the tool-wide settings found in `props`.
fn launch(operation: &dyn Operation, props: &PropertySet) -> Result<LaunchOutcome> {
    let kind = operation.kind();
    let config = ToolConfig::from_properties(kind.tool(), props).map_err(WrapperError::from)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the launch workflow for {}...", kind);
    let outcome = workflows::launch::run(operation, &config, &reporter)?;

    match outcome {
        LaunchOutcome::Skipped => println!("{} skipped: all outputs already exist.", kind),
        LaunchOutcome::Completed => {
            for output in operation.outputs() {
                println!("{} wrote {}", kind, output.display());
            }
        }
    }
    Ok(outcome)
}
