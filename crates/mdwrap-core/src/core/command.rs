use super::instructions::InstructionDocument;
use std::fmt;

/// An executable followed by its arguments, in the order the tool expects them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandVector {
    program: String,
    args: Vec<String>,
}

impl CommandVector {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Appends a flag and its value, e.g. `-f traj.xtc`.
    pub fn flag(self, flag: &str, value: impl Into<String>) -> Self {
        self.arg(flag).arg(value)
    }

    pub fn flag_if(self, condition: bool, flag: &str) -> Self {
        if condition { self.arg(flag) } else { self }
    }

    pub fn flag_opt(self, flag: &str, value: Option<String>) -> Self {
        match value {
            Some(v) => self.flag(flag, v),
            None => self,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for CommandVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", quote(arg))?;
        }
        Ok(())
    }
}

fn quote(token: &str) -> String {
    if !token.is_empty() && !token.contains(char::is_whitespace) {
        token.to_string()
    } else {
        format!("\"{}\"", token)
    }
}

/// How the instruction document reaches the child process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// The document path is already part of the argument vector (`cpptraj -i <file>`).
    Argument,
    /// The document is redirected into the child's standard input (`gmx energy < file`).
    Stdin,
}

/// Everything the execution shim needs for one launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: CommandVector,
    pub instructions: InstructionDocument,
    pub delivery: Delivery,
}
