use crate::core::properties::{OptionError, PropertySet};
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_INSTRUCTIONS_FILE: &str = "instructions.in";

/// The external program family an operation drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    Cpptraj,
    Gromacs,
}

impl Tool {
    pub fn default_binary(&self) -> &'static str {
        match self {
            Tool::Cpptraj => "cpptraj",
            Tool::Gromacs => "gmx",
        }
    }

    /// Older configuration files name the binary after the tool.
    fn legacy_binary_key(&self) -> &'static str {
        match self {
            Tool::Cpptraj => "cpptraj_path",
            Tool::Gromacs => "gmx_path",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Tool::Cpptraj => "cpptraj",
                Tool::Gromacs => "GROMACS",
            }
        )
    }
}

/// Tool-wide settings for one launch.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolConfig {
    pub tool: Tool,
    pub binary_path: String,
    pub instructions_file: String,
    pub working_dir: PathBuf,
    pub prefix: Option<String>,
    pub step: Option<String>,
    pub restart: bool,
    pub remove_tmp: bool,
    pub log_dir: Option<PathBuf>,
    pub can_write_console_log: bool,
}

impl ToolConfig {
    /// Reads the tool-wide keys of a property set, leaving operation keys alone.
    pub fn from_properties(tool: Tool, props: &PropertySet) -> Result<Self, OptionError> {
        let binary_path = match props.optional_string("binary_path")? {
            Some(path) => path,
            None => props.string(tool.legacy_binary_key(), tool.default_binary())?,
        };

        let mut builder = ToolConfigBuilder::new(tool)
            .binary_path(binary_path)
            .instructions_file(props.string("instructions_file", DEFAULT_INSTRUCTIONS_FILE)?)
            .working_dir(PathBuf::from(props.string("working_dir_path", ".")?))
            .restart(props.boolean("restart", false)?)
            .remove_tmp(props.boolean("remove_tmp", true)?)
            .can_write_console_log(props.boolean("can_write_console_log", true)?);

        if let Some(prefix) = props.optional_string("prefix")? {
            builder = builder.prefix(prefix);
        }
        if let Some(step) = props.optional_string("step")? {
            builder = builder.step(step);
        }
        if let Some(path) = props.optional_string("path")? {
            builder = builder.log_dir(PathBuf::from(path));
        }
        Ok(builder.build())
    }

    /// Prepends the configured prefix and step to a file name: `<prefix>_<step>_<name>`.
    pub fn create_name(&self, name: &str) -> String {
        create_name(self.prefix.as_deref(), self.step.as_deref(), name)
    }
}

pub(crate) fn create_name(prefix: Option<&str>, step: Option<&str>, name: &str) -> String {
    [prefix, step, Some(name)]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

pub struct ToolConfigBuilder {
    tool: Tool,
    binary_path: Option<String>,
    instructions_file: Option<String>,
    working_dir: Option<PathBuf>,
    prefix: Option<String>,
    step: Option<String>,
    restart: bool,
    remove_tmp: bool,
    log_dir: Option<PathBuf>,
    can_write_console_log: bool,
}

impl ToolConfigBuilder {
    pub fn new(tool: Tool) -> Self {
        Self {
            tool,
            binary_path: None,
            instructions_file: None,
            working_dir: None,
            prefix: None,
            step: None,
            restart: false,
            remove_tmp: true,
            log_dir: None,
            can_write_console_log: true,
        }
    }

    pub fn binary_path(mut self, path: impl Into<String>) -> Self {
        self.binary_path = Some(path.into());
        self
    }
    pub fn instructions_file(mut self, name: impl Into<String>) -> Self {
        self.instructions_file = Some(name.into());
        self
    }
    pub fn working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = Some(dir);
        self
    }
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }
    pub fn step(mut self, step: impl Into<String>) -> Self {
        self.step = Some(step.into());
        self
    }
    pub fn restart(mut self, restart: bool) -> Self {
        self.restart = restart;
        self
    }
    pub fn remove_tmp(mut self, remove: bool) -> Self {
        self.remove_tmp = remove;
        self
    }
    pub fn log_dir(mut self, dir: PathBuf) -> Self {
        self.log_dir = Some(dir);
        self
    }
    pub fn can_write_console_log(mut self, enabled: bool) -> Self {
        self.can_write_console_log = enabled;
        self
    }

    pub fn build(self) -> ToolConfig {
        ToolConfig {
            binary_path: self
                .binary_path
                .unwrap_or_else(|| self.tool.default_binary().to_string()),
            tool: self.tool,
            instructions_file: self
                .instructions_file
                .unwrap_or_else(|| DEFAULT_INSTRUCTIONS_FILE.to_string()),
            working_dir: self.working_dir.unwrap_or_else(|| PathBuf::from(".")),
            prefix: self.prefix,
            step: self.step,
            restart: self.restart,
            remove_tmp: self.remove_tmp,
            log_dir: self.log_dir,
            can_write_console_log: self.can_write_console_log,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_properties_give_documented_defaults() {
        let config = ToolConfig::from_properties(Tool::Cpptraj, &PropertySet::new()).unwrap();
        assert_eq!(config.binary_path, "cpptraj");
        assert_eq!(config.instructions_file, "instructions.in");
        assert_eq!(config.working_dir, PathBuf::from("."));
        assert!(!config.restart);
        assert!(config.remove_tmp);
        assert!(config.can_write_console_log);
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn binary_path_takes_precedence_over_legacy_key() {
        let props = PropertySet::new()
            .with("gmx_path", "/opt/old/gmx")
            .with("binary_path", "/opt/new/gmx");
        let config = ToolConfig::from_properties(Tool::Gromacs, &props).unwrap();
        assert_eq!(config.binary_path, "/opt/new/gmx");

        let props = PropertySet::new().with("gmx_path", "/opt/old/gmx");
        let config = ToolConfig::from_properties(Tool::Gromacs, &props).unwrap();
        assert_eq!(config.binary_path, "/opt/old/gmx");
    }

    #[test]
    fn wrong_type_for_tool_wide_key_is_rejected() {
        let props = PropertySet::new().with("restart", "yes");
        assert!(matches!(
            ToolConfig::from_properties(Tool::Cpptraj, &props),
            Err(OptionError::InvalidOptionType { .. })
        ));
    }

    #[test]
    fn create_name_joins_prefix_and_step() {
        let config = ToolConfigBuilder::new(Tool::Cpptraj)
            .prefix("run1")
            .step("rmsf")
            .build();
        assert_eq!(config.create_name("instructions.in"), "run1_rmsf_instructions.in");

        let config = ToolConfigBuilder::new(Tool::Cpptraj).step("rmsf").build();
        assert_eq!(config.create_name("log.out"), "rmsf_log.out");

        let config = ToolConfigBuilder::new(Tool::Cpptraj).build();
        assert_eq!(config.create_name("log.out"), "log.out");
    }
}
