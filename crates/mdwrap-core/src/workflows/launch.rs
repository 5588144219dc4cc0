use crate::engine::config::ToolConfig;
use crate::engine::error::WrapperError;
use crate::engine::execution;
use crate::engine::log::InvocationLog;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::restart;
use crate::engine::workspace::Workspace;
use crate::tools::{AssemblyContext, Operation};
use tracing::{info, instrument};

/// How a launch ended when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// Restart was enabled and every output was already present.
    Skipped,
    /// The wrapped tool ran and exited with status 0.
    Completed,
}

/// Runs a validated operation end to end.
///
/// The steps are fixed: open the log sinks, consult the restart gate, create a scratch
/// directory under the working directory, assemble and write the instruction document,
/// spawn the tool, then remove (or keep, with `remove_tmp = false`) the scratch directory.
/// Cleanup happens whether or not the tool succeeded, and its own failures are only
/// logged.
#[instrument(skip_all, name = "launch_workflow", fields(operation = %operation.kind()))]
pub fn run(
    operation: &dyn Operation,
    config: &ToolConfig,
    reporter: &ProgressReporter,
) -> Result<LaunchOutcome, WrapperError> {
    let mut log = InvocationLog::open(config)?;
    let kind = operation.kind();

    if config.restart && restart::outputs_complete(&operation.outputs()) {
        let reason = format!(
            "Restart is enabled, this step: {} will be skipped",
            config.step.as_deref().unwrap_or(kind.name())
        );
        log.info(&reason);
        reporter.report(Progress::Skipped { reason });
        return Ok(LaunchOutcome::Skipped);
    }

    reporter.report(Progress::PhaseStart {
        name: kind.name().to_string(),
    });

    let workspace = Workspace::create(&config.working_dir)?;
    reporter.report(Progress::Message(format!(
        "Scratch directory: {}",
        workspace.path().display()
    )));
    let result = execute(operation, config, &workspace, &mut log);

    if config.remove_tmp {
        workspace.remove(&mut log);
    } else {
        workspace.keep(&mut log);
    }

    result?;
    info!("{} finished", kind);
    reporter.report(Progress::PhaseFinish);
    Ok(LaunchOutcome::Completed)
}

fn execute(
    operation: &dyn Operation,
    config: &ToolConfig,
    workspace: &Workspace,
    log: &mut InvocationLog,
) -> Result<(), WrapperError> {
    let instructions_path = workspace.join(&config.create_name(&config.instructions_file));
    let invocation = operation.assemble(&AssemblyContext::new(config, &instructions_path));

    invocation
        .instructions
        .write_to_path(&instructions_path)
        .map_err(|e| WrapperError::io(&instructions_path, e))?;
    log.info(&format!(
        "Instructions file written to {}",
        instructions_path.display()
    ));

    execution::run(&invocation, &instructions_path, log)
}
