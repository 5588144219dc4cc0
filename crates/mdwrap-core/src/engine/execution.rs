use super::error::WrapperError;
use super::log::InvocationLog;
use crate::core::command::{Delivery, Invocation};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::mpsc::{self, Sender};
use std::thread;
use tracing::instrument;

#[derive(Debug, Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

/// Spawns the invocation's command and blocks until it exits.
///
/// The instruction document must already be written at `instructions_path`. With
/// [`Delivery::Stdin`] the file is opened and becomes the child's standard input;
/// otherwise standard input is closed. Both output streams are forwarded into `log` line
/// by line while the child runs. A non-zero exit status becomes
/// [`WrapperError::SubprocessFailure`].
#[instrument(skip_all, fields(program = invocation.command.program()))]
pub fn run(
    invocation: &Invocation,
    instructions_path: &Path,
    log: &mut InvocationLog,
) -> Result<(), WrapperError> {
    let command = &invocation.command;
    let spawn_error = |source| WrapperError::Spawn {
        program: command.program().to_string(),
        source,
    };
    let stdin = match invocation.delivery {
        Delivery::Stdin => {
            let file =
                File::open(instructions_path).map_err(|e| WrapperError::io(instructions_path, e))?;
            Stdio::from(file)
        }
        Delivery::Argument => Stdio::null(),
    };

    log.info(&format!("Executing: {}", render(invocation, instructions_path)));

    let mut child = Command::new(command.program())
        .args(command.args())
        .stdin(stdin)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(spawn_error)?;

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();
    let (tx, rx) = mpsc::channel();
    thread::scope(|scope| {
        if let Some(pipe) = stdout {
            let tx = tx.clone();
            scope.spawn(move || forward_lines(pipe, Stream::Stdout, tx));
        }
        if let Some(pipe) = stderr {
            let tx = tx.clone();
            scope.spawn(move || forward_lines(pipe, Stream::Stderr, tx));
        }
        drop(tx);

        for (stream, line) in rx {
            match stream {
                Stream::Stdout => log.child_stdout(&line),
                Stream::Stderr => log.child_stderr(&line),
            }
        }
    });

    let status = child.wait().map_err(spawn_error)?;
    let code = status.code();
    log.info(&format!(
        "Exit code: {}",
        code.map(|c| c.to_string()).unwrap_or_else(|| "none".to_string())
    ));

    if status.success() {
        Ok(())
    } else {
        Err(WrapperError::SubprocessFailure {
            program: command.program().to_string(),
            code,
        })
    }
}

/// Sends each line of `pipe` until it closes. Invalid UTF-8 is replaced, not fatal.
fn forward_lines(pipe: impl Read, stream: Stream, tx: Sender<(Stream, String)>) {
    for chunk in BufReader::new(pipe).split(b'\n') {
        let Ok(bytes) = chunk else { break };
        let line = String::from_utf8_lossy(&bytes);
        if tx.send((stream, line.trim_end_matches('\r').to_string())).is_err() {
            break;
        }
    }
}

/// The command line as a shell user would type it.
pub fn render(invocation: &Invocation, instructions_path: &Path) -> String {
    match invocation.delivery {
        Delivery::Argument => invocation.command.to_string(),
        Delivery::Stdin => format!(
            "{} < {}",
            invocation.command,
            instructions_path.display()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::command::CommandVector;
    use crate::core::instructions::InstructionDocument;
    use serial_test::serial;

    #[test]
    fn stdin_delivery_is_rendered_as_redirection() {
        let invocation = Invocation {
            command: CommandVector::new("gmx")
                .arg("energy")
                .flag("-f", "ener.edr"),
            instructions: InstructionDocument::new(),
            delivery: Delivery::Stdin,
        };
        assert_eq!(
            render(&invocation, Path::new("tmp/instructions.in")),
            "gmx energy -f ener.edr < tmp/instructions.in"
        );
    }

    #[test]
    #[serial]
    fn missing_program_is_a_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let instructions = dir.path().join("instructions.in");
        std::fs::write(&instructions, "parm a.top\n").unwrap();
        let invocation = Invocation {
            command: CommandVector::new("mdwrap-definitely-not-installed")
                .flag("-i", instructions.display().to_string()),
            instructions: InstructionDocument::new(),
            delivery: Delivery::Argument,
        };

        let result = run(&invocation, &instructions, &mut InvocationLog::detached());
        assert!(matches!(result, Err(WrapperError::Spawn { .. })));
    }

    #[cfg(unix)]
    #[test]
    #[serial]
    fn child_output_reaches_the_log_files_line_by_line() {
        use crate::engine::config::{Tool, ToolConfigBuilder};
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let tool = dir.path().join("gmx");
        std::fs::write(
            &tool,
            "#!/bin/sh\necho 'Reading energy frame 0'\necho 'Note: no PBC' >&2\necho 'Reading energy frame 1'\nexit 2\n",
        )
        .unwrap();
        std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755)).unwrap();

        let config = ToolConfigBuilder::new(Tool::Gromacs)
            .log_dir(dir.path().to_path_buf())
            .can_write_console_log(false)
            .build();
        let mut log = InvocationLog::open(&config).unwrap();
        let instructions = dir.path().join("instructions.in");
        std::fs::write(&instructions, "Potential\n").unwrap();
        let invocation = Invocation {
            command: CommandVector::new(tool.display().to_string()).arg("energy"),
            instructions: InstructionDocument::new(),
            delivery: Delivery::Stdin,
        };

        let result = run(&invocation, &instructions, &mut log);
        drop(log);
        assert!(matches!(
            result,
            Err(WrapperError::SubprocessFailure { code: Some(2), .. })
        ));

        let out = std::fs::read_to_string(dir.path().join("log.out")).unwrap();
        let frames: Vec<&str> = out.lines().filter(|l| l.starts_with("Reading")).collect();
        assert_eq!(frames, ["Reading energy frame 0", "Reading energy frame 1"]);
        let err = std::fs::read_to_string(dir.path().join("log.err")).unwrap();
        assert_eq!(err, "Note: no PBC\n");
    }
}
