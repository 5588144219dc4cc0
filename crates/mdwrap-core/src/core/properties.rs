use phf::{OrderedMap, OrderedSet};
use std::ops::RangeInclusive;
use thiserror::Error;
use toml::{Table, Value};

#[derive(Debug, Error, PartialEq)]
pub enum OptionError {
    #[error(
        "Invalid value '{value}' for option '{option}'. Allowed values: {}",
        allowed.join(", ")
    )]
    InvalidOption {
        option: String,
        value: String,
        allowed: Vec<String>,
    },

    #[error("Option '{option}' expects {expected}, found {found}")]
    InvalidOptionType {
        option: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Value {value} for option '{option}' is out of range {bounds}")]
    OutOfRange {
        option: String,
        value: String,
        bounds: String,
    },
}

/// The caller-supplied option table for one launch.
///
/// Keys are option names, values use the TOML value model so the same table can come
/// from a configuration file, from `KEY=VALUE` overrides, or from code. No key is ever
/// required: each resolver takes the documented default when the key is absent and
/// validates the value when it is present. Keys nobody asks for are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertySet {
    table: Table,
}

impl PropertySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_table(table: Table) -> Self {
        Self { table }
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        self.table.insert(key.to_string(), value.into());
    }

    /// Overlays `other` on top of `self`; keys present in both take `other`'s value.
    pub fn merge(&mut self, other: &PropertySet) {
        for (key, value) in &other.table {
            self.table.insert(key.clone(), value.clone());
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.table.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.table.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn optional_string(&self, key: &str) -> Result<Option<String>, OptionError> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(type_error(key, "a string", other)),
        }
    }

    pub fn string(&self, key: &str, default: &str) -> Result<String, OptionError> {
        Ok(self
            .optional_string(key)?
            .unwrap_or_else(|| default.to_string()))
    }

    /// Resolves an enumerated option against a fixed value table.
    pub fn choice(
        &self,
        key: &str,
        allowed: &OrderedSet<&'static str>,
        default: &str,
    ) -> Result<String, OptionError> {
        self.choice_with(key, default, |v| allowed.contains(v), || {
            allowed.iter().map(|s| s.to_string()).collect()
        })
    }

    /// Resolves an enumerated option whose allowed values are only known at runtime.
    pub fn choice_in(
        &self,
        key: &str,
        allowed: &[String],
        default: &str,
    ) -> Result<String, OptionError> {
        self.choice_with(key, default, |v| allowed.iter().any(|a| a == v), || {
            allowed.to_vec()
        })
    }

    /// Resolves an enumerated option straight to the value it names in `table`.
    pub fn lookup<V: Copy>(
        &self,
        key: &str,
        table: &OrderedMap<&'static str, V>,
        default: &str,
    ) -> Result<V, OptionError> {
        let name = self.string(key, default)?;
        table
            .get(name.as_str())
            .copied()
            .ok_or_else(|| OptionError::InvalidOption {
                option: key.to_string(),
                value: name,
                allowed: table.keys().map(|k| k.to_string()).collect(),
            })
    }

    fn choice_with(
        &self,
        key: &str,
        default: &str,
        is_allowed: impl Fn(&str) -> bool,
        allowed: impl Fn() -> Vec<String>,
    ) -> Result<String, OptionError> {
        let value = self.string(key, default)?;
        if !is_allowed(&value) {
            return Err(OptionError::InvalidOption {
                option: key.to_string(),
                value,
                allowed: allowed(),
            });
        }
        Ok(value)
    }

    pub fn boolean(&self, key: &str, default: bool) -> Result<bool, OptionError> {
        match self.get(key) {
            None => Ok(default),
            Some(Value::Boolean(b)) => Ok(*b),
            Some(other) => Err(type_error(key, "a boolean", other)),
        }
    }

    pub fn integer(
        &self,
        key: &str,
        default: i64,
        bounds: RangeInclusive<i64>,
    ) -> Result<i64, OptionError> {
        let value = match self.get(key) {
            None => return Ok(default),
            Some(Value::Integer(i)) => *i,
            Some(other) => return Err(type_error(key, "an integer", other)),
        };
        if !bounds.contains(&value) {
            return Err(OptionError::OutOfRange {
                option: key.to_string(),
                value: value.to_string(),
                bounds: format!("[{}, {}]", bounds.start(), bounds.end()),
            });
        }
        Ok(value)
    }

    /// Resolves a strictly positive number. Integers are accepted and widened.
    pub fn positive_float(&self, key: &str, default: f64) -> Result<f64, OptionError> {
        let value = match self.get(key) {
            None => return Ok(default),
            Some(Value::Float(f)) => *f,
            Some(Value::Integer(i)) => *i as f64,
            Some(other) => return Err(type_error(key, "a number", other)),
        };
        if value.is_nan() || value <= 0.0 || value.is_infinite() {
            return Err(OptionError::OutOfRange {
                option: key.to_string(),
                value: value.to_string(),
                bounds: "(0, inf)".to_string(),
            });
        }
        Ok(value)
    }

    /// Resolves a non-empty list whose every element belongs to `allowed`.
    pub fn string_list(
        &self,
        key: &str,
        allowed: &OrderedSet<&'static str>,
        default: &[&str],
    ) -> Result<Vec<String>, OptionError> {
        let items = match self.get(key) {
            None => return Ok(default.iter().map(|s| s.to_string()).collect()),
            Some(Value::Array(items)) => items,
            Some(other) => return Err(type_error(key, "a list of strings", other)),
        };
        if items.is_empty() {
            return Err(OptionError::InvalidOption {
                option: key.to_string(),
                value: "[]".to_string(),
                allowed: allowed.iter().map(|s| s.to_string()).collect(),
            });
        }
        items
            .iter()
            .map(|item| match item {
                Value::String(s) if allowed.contains(s.as_str()) => Ok(s.clone()),
                Value::String(s) => Err(OptionError::InvalidOption {
                    option: key.to_string(),
                    value: s.clone(),
                    allowed: allowed.iter().map(|s| s.to_string()).collect(),
                }),
                other => Err(type_error(key, "a list of strings", other)),
            })
            .collect()
    }
}

impl From<Table> for PropertySet {
    fn from(table: Table) -> Self {
        Self::from_table(table)
    }
}

fn type_error(key: &str, expected: &'static str, found: &Value) -> OptionError {
    OptionError::InvalidOptionType {
        option: key.to_string(),
        expected,
        found: found.type_str(),
    }
}
