use super::config::ToolConfig;
use super::error::WrapperError;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, warn};

/// Output and error log sinks for a single launch.
///
/// Every message goes to `tracing`. When the configuration names a log directory the
/// same lines are also appended to `<prefix>_<step>_log.out` and `<prefix>_<step>_log.err`
/// there. Output of the wrapped tool is forwarded to the console only if
/// `can_write_console_log` is set; the log files always receive it.
#[derive(Debug)]
pub struct InvocationLog {
    out: Option<File>,
    err: Option<File>,
    console: bool,
}

impl InvocationLog {
    pub fn open(config: &ToolConfig) -> Result<Self, WrapperError> {
        let (out, err) = match &config.log_dir {
            Some(dir) => (
                Some(open_append(&dir.join(config.create_name("log.out")))?),
                Some(open_append(&dir.join(config.create_name("log.err")))?),
            ),
            None => (None, None),
        };
        Ok(Self {
            out,
            err,
            console: config.can_write_console_log,
        })
    }

    /// A log with no files attached.
    pub fn detached() -> Self {
        Self {
            out: None,
            err: None,
            console: true,
        }
    }

    pub fn info(&mut self, message: &str) {
        info!("{}", message);
        append(&mut self.out, message);
    }

    pub fn warn(&mut self, message: &str) {
        warn!("{}", message);
        append(&mut self.out, message);
    }

    pub fn child_stdout(&mut self, line: &str) {
        if self.console {
            info!(target: "mdwrap::child", stream = "stdout", "{}", line);
        }
        append(&mut self.out, line);
    }

    pub fn child_stderr(&mut self, line: &str) {
        if self.console {
            info!(target: "mdwrap::child", stream = "stderr", "{}", line);
        }
        append(&mut self.err, line);
    }
}

fn open_append(path: &Path) -> Result<File, WrapperError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| WrapperError::io(path, e))
}

fn append(sink: &mut Option<File>, line: &str) {
    if let Some(file) = sink {
        if let Err(e) = writeln!(file, "{}", line) {
            debug!("Dropping log line, write failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::{Tool, ToolConfigBuilder};

    #[test]
    fn lines_are_routed_to_out_and_err_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = ToolConfigBuilder::new(Tool::Gromacs)
            .prefix("sim")
            .step("energy")
            .log_dir(dir.path().to_path_buf())
            .can_write_console_log(false)
            .build();

        let mut log = InvocationLog::open(&config).unwrap();
        log.info("Executing: gmx energy");
        log.child_stdout("Select the terms you want");
        log.child_stderr("GROMACS reminds you");
        drop(log);

        let out = std::fs::read_to_string(dir.path().join("sim_energy_log.out")).unwrap();
        let err = std::fs::read_to_string(dir.path().join("sim_energy_log.err")).unwrap();
        assert_eq!(out, "Executing: gmx energy\nSelect the terms you want\n");
        assert_eq!(err, "GROMACS reminds you\n");
    }

    #[test]
    fn missing_log_directory_is_an_io_error() {
        let config = ToolConfigBuilder::new(Tool::Cpptraj)
            .log_dir("/nonexistent/mdwrap/logs".into())
            .build();
        assert!(matches!(
            InvocationLog::open(&config),
            Err(WrapperError::Io { .. })
        ));
    }
}
