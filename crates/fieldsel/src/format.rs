//! Cached string views over a field set.
//!
//! A [`Formatter`] turns a list of column names (and optional column types)
//! into the fragments a hand-written SQL statement needs:
//!
//! | method        | output for `id`, `name`          |
//! |---------------|----------------------------------|
//! | `names()`     | `id, name`                       |
//! | `bind_vars()` | `?, ?`                           |
//! | `updates()`   | `id = ?, name = ?`               |
//! | `table()`     | `id INT, name TEXT`              |
//!
//! Each view is computed on first use and cached. The formatter is
//! `Send + Sync`; concurrent first calls compute a view at most once.
//!
//! # Templates
//!
//! [`Formatter::render`] replaces these tokens in a template:
//!
//! - `$names` with [`Formatter::names`]
//! - `$bindvars` with [`Formatter::bind_vars`]
//! - `$updates` with [`Formatter::updates`]
//! - `$table` with [`Formatter::table`]
//!
//! ```ignore
//! let f = Formatter::from_names(["id", "name"], FormatOptions::default());
//! assert_eq!(
//!     f.render("INSERT INTO users ($names) VALUES ($bindvars)"),
//!     "INSERT INTO users (id, name) VALUES (?, ?)"
//! );
//! ```

use std::sync::OnceLock;

use crate::join::{join_pairs, join_with_suffix, repeat_string};
use crate::options::FormatOptions;

const TOKEN_BIND_VARS: &str = "$bindvars";
const TOKEN_NAMES: &str = "$names";
const TOKEN_UPDATES: &str = "$updates";
const TOKEN_TABLE: &str = "$table";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    BindVars,
    Names,
    Updates,
    Table,
}

impl View {
    const ALL: [(View, &'static str); 4] = [
        (View::BindVars, TOKEN_BIND_VARS),
        (View::Names, TOKEN_NAMES),
        (View::Updates, TOKEN_UPDATES),
        (View::Table, TOKEN_TABLE),
    ];

    #[cfg(feature = "tracing")]
    fn label(self) -> &'static str {
        match self {
            View::BindVars => "bind_vars",
            View::Names => "names",
            View::Updates => "updates",
            View::Table => "table",
        }
    }
}

/// Formats a field set into cached SQL fragments.
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    field_names: Vec<String>,
    field_types: Vec<String>,
    options: FormatOptions,

    bind_vars: OnceLock<String>,
    names: OnceLock<String>,
    updates: OnceLock<String>,
    table: OnceLock<String>,
}

impl Formatter {
    /// Create a formatter from column names and their parallel column types.
    ///
    /// If `field_types` is shorter than `field_names` the missing types are
    /// empty strings; extra types are dropped.
    pub fn new(
        field_names: Vec<String>,
        mut field_types: Vec<String>,
        options: FormatOptions,
    ) -> Self {
        field_types.resize(field_names.len(), String::new());
        Self {
            field_names,
            field_types,
            options,
            ..Self::default()
        }
    }

    /// Create a formatter from column names only (all types empty).
    pub fn from_names<I, S>(field_names: I, options: FormatOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = field_names.into_iter().map(Into::into).collect();
        Self::new(names, Vec::new(), options)
    }

    /// The column names, in order.
    pub fn field_names(&self) -> &[String] {
        &self.field_names
    }

    /// The column types, parallel to [`field_names`](Self::field_names).
    pub fn field_types(&self) -> &[String] {
        &self.field_types
    }

    /// The formatting options.
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.field_names.len()
    }

    /// Whether there are no fields.
    pub fn is_empty(&self) -> bool {
        self.field_names.is_empty()
    }

    /// The bind var repeated once per field: `?, ?, ?`.
    pub fn bind_vars(&self) -> &str {
        self.view(View::BindVars)
    }

    /// The field names: `id, name, email`.
    pub fn names(&self) -> &str {
        self.view(View::Names)
    }

    /// Assignment clauses: `id = ?, name = ?`.
    pub fn updates(&self) -> &str {
        self.view(View::Updates)
    }

    /// Column definitions: `id INT NOT NULL, name TEXT`.
    ///
    /// A field without a type still gets the separating space (`note `).
    pub fn table(&self) -> &str {
        self.view(View::Table)
    }

    /// Replace every `$names`, `$bindvars`, `$updates` and `$table` token in
    /// `template`.
    ///
    /// The template is scanned once from left to right; substituted text is
    /// not scanned again, and views whose token is absent are not computed.
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;
        while let Some(pos) = rest.find('$') {
            out.push_str(&rest[..pos]);
            let tail = &rest[pos..];
            match View::ALL.iter().find(|(_, token)| tail.starts_with(token)) {
                Some((view, token)) => {
                    out.push_str(self.view(*view));
                    rest = &tail[token.len()..];
                }
                None => {
                    out.push('$');
                    rest = &tail[1..];
                }
            }
        }
        out.push_str(rest);
        out
    }

    fn view(&self, view: View) -> &str {
        let cell = match view {
            View::BindVars => &self.bind_vars,
            View::Names => &self.names,
            View::Updates => &self.updates,
            View::Table => &self.table,
        };
        cell.get_or_init(|| self.compute(view))
    }

    fn compute(&self, view: View) -> String {
        let sep = self.options.field_separator.as_str();
        let out = match view {
            View::BindVars => repeat_string(&self.options.bind_var, sep, self.field_names.len()),
            View::Names => self.field_names.join(sep),
            View::Updates => {
                let suffix = format!(" = {}", self.options.bind_var);
                join_with_suffix(&self.field_names, &suffix, sep)
            }
            View::Table => join_pairs(&self.field_names, &self.field_types, " ", sep),
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "fieldsel.format",
            view = view.label(),
            fields = self.field_names.len(),
            len = out.len(),
            "computed formatter view"
        );

        out
    }
}
