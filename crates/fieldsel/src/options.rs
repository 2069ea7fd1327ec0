//! Selection and formatting options.

use serde::{Deserialize, Serialize};

/// Default tag key holding a field's column name.
pub const DEFAULT_NAME_KEY: &str = "col";

/// Default tag key holding a field's column type (used by `Formatter::table`).
pub const DEFAULT_TYPE_KEY: &str = "sql";

/// Default separator between fields in formatted strings.
pub const DEFAULT_FIELD_SEPARATOR: &str = ", ";

/// Default bind variable placeholder.
pub const DEFAULT_BIND_VAR: &str = "?";

/// How a field set is rendered into text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Separator placed between fields.
    pub field_separator: String,
    /// Placeholder emitted once per field by `bind_vars` and `updates`.
    pub bind_var: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            field_separator: DEFAULT_FIELD_SEPARATOR.to_string(),
            bind_var: DEFAULT_BIND_VAR.to_string(),
        }
    }
}

impl FormatOptions {
    /// Create options with the defaults (`", "` and `"?"`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the separator placed between fields.
    pub fn with_field_separator(mut self, sep: impl Into<String>) -> Self {
        self.field_separator = sep.into();
        self
    }

    /// Set the bind variable placeholder.
    pub fn with_bind_var(mut self, bind_var: impl Into<String>) -> Self {
        self.bind_var = bind_var.into();
        self
    }
}

/// Configuration for a [`Selector`](crate::Selector).
///
/// Can be embedded in an application's config file:
///
/// ```toml
/// name_key = "db"
/// type_key = "ddl"
///
/// [format]
/// field_separator = ","
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectOptions {
    /// Tag key whose value overrides a field's declared name.
    pub name_key: String,
    /// Tag key whose value is the field's column type.
    pub type_key: String,
    /// Formatting options for the resulting selection.
    pub format: FormatOptions,
}

impl Default for SelectOptions {
    fn default() -> Self {
        Self {
            name_key: DEFAULT_NAME_KEY.to_string(),
            type_key: DEFAULT_TYPE_KEY.to_string(),
            format: FormatOptions::default(),
        }
    }
}

impl SelectOptions {
    /// Create options with the default tag keys and formatting.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tag key used for name resolution.
    pub fn with_name_key(mut self, key: impl Into<String>) -> Self {
        self.name_key = key.into();
        self
    }

    /// Set the tag key used for column types.
    pub fn with_type_key(mut self, key: impl Into<String>) -> Self {
        self.type_key = key.into();
        self
    }

    /// Replace the formatting options.
    pub fn with_format(mut self, format: FormatOptions) -> Self {
        self.format = format;
        self
    }
}
