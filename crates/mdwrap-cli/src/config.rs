use crate::cli::ConfigArgs;
use crate::error::{CliError, Result};
use mdwrap::core::properties::PropertySet;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use toml::{Table, Value};
use tracing::debug;

/// Layout of a configuration file.
///
/// ```toml
/// [properties]            # applied to every launch
/// restart = true
///
/// [system.hpc]            # selected with --system hpc
/// binary_path = "/opt/gromacs/bin/gmx"
///
/// [rmsf.properties]       # selected with --step rmsf
/// mask = "c-alpha"
/// ```
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    properties: Table,
    #[serde(default)]
    system: HashMap<String, Table>,
    /// Every other top-level key. Only the selected step's table is ever read.
    #[serde(flatten)]
    rest: Table,
}

impl FileConfig {
    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// The `[<step>.properties]` table; a step table without one contributes nothing.
    fn step_properties(&mut self, step: &str, path: &Path) -> Result<Table> {
        let mut table = match self.rest.remove(step) {
            Some(Value::Table(table)) => table,
            Some(other) => {
                return Err(CliError::Config(format!(
                    "'{}' in {} is a {}, not a step table",
                    step,
                    path.display(),
                    other.type_str()
                )));
            }
            None => {
                return Err(CliError::Config(format!(
                    "Unknown step '{}' in {}",
                    step,
                    path.display()
                )));
            }
        };
        match table.remove("properties") {
            None => Ok(Table::new()),
            Some(Value::Table(props)) => Ok(props),
            Some(other) => Err(CliError::Config(format!(
                "'{}.properties' in {} is a {}, not a table",
                step,
                path.display(),
                other.type_str()
            ))),
        }
    }
}

/// Builds the property set for one launch.
///
/// Later layers win: the file's `[properties]`, then the selected step, then the selected
/// system, then each `-S KEY=VALUE` in command-line order.
pub fn resolve_properties(args: &ConfigArgs) -> Result<PropertySet> {
    let mut props = PropertySet::new();

    if let Some(path) = &args.config {
        let mut file = FileConfig::from_file(path)?;
        props.merge(&PropertySet::from_table(std::mem::take(&mut file.properties)));

        if let Some(step) = &args.step {
            let table = file.step_properties(step, path)?;
            props.merge(&PropertySet::from_table(table));
        }

        if let Some(system) = &args.system {
            let table = file.system.remove(system).ok_or_else(|| {
                CliError::Config(format!("Unknown system '{}' in {}", system, path.display()))
            })?;
            props.merge(&PropertySet::from_table(table));
        }
    }

    apply_set_values(&mut props, &args.set_values)?;
    debug!("Resolved properties: {:?}", props.keys().collect::<Vec<_>>());
    Ok(props)
}

fn apply_set_values(props: &mut PropertySet, set_values: &[String]) -> Result<()> {
    for set_value in set_values {
        let parts: Vec<&str> = set_value.splitn(2, '=').collect();
        if parts.len() != 2 || parts[0].trim().is_empty() {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected 'key=value'.",
                set_value
            )));
        }
        props.insert(parts[0].trim(), parse_value(parts[1].trim()));
    }
    Ok(())
}

/// Reads a `-S` value as a TOML value, so `restart=true` is a boolean and
/// `terms=["Potential","Pressure"]` a list. Anything else is taken as a bare string.
fn parse_value(raw: &str) -> Value {
    toml::from_str::<Table>(&format!("value = {raw}"))
        .ok()
        .and_then(|mut table| table.remove("value"))
        .unwrap_or_else(|| Value::String(raw.to_string()))
}
