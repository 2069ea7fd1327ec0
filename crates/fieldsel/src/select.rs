//! Field selection.
//!
//! A [`Selection`] is an ordered list of a record's fields, optionally narrowed
//! with an inclusion (`only`) or exclusion (`except`) list. Filter names are
//! compared case-insensitively against resolved names (the `col` tag when
//! present, the declared name otherwise), and every filter name must match
//! exactly one field.
//!
//! # Example
//!
//! ```ignore
//! use fieldsel::{Record, select_all, select_except};
//!
//! #[derive(Record)]
//! struct Pet {
//!     #[record(col = "first_name")]
//!     first_name: String,
//!     #[record(col = "last_name")]
//!     last_name: String,
//!     #[record(col = "age")]
//!     age: i32,
//! }
//!
//! let pet = Pet { first_name: "Bella".into(), last_name: "Sky".into(), age: 5 };
//!
//! let s = select_all(&pet)?;
//! assert_eq!(
//!     s.prepare("INSERT INTO pets (%fields%) VALUES (%vars%)"),
//!     "INSERT INTO pets (first_name, last_name, age) VALUES (?, ?, ?)"
//! );
//!
//! let s = select_except(&pet, &["age"])?;
//! assert_eq!(s.field_string(), "first_name, last_name");
//! # Ok::<(), fieldsel::SelectError>(())
//! ```

use crate::error::{SelectError, SelectResult};
use crate::format::Formatter;
use crate::join::{contains_ignore_case, eq_ignore_case};
use crate::options::SelectOptions;
use crate::record::{FieldValue, Record, RecordField};

const FIELDS_TOKEN: &str = "%fields%";
const VARS_TOKEN: &str = "%vars%";

/// Which fields a selection keeps.
#[derive(Debug, Clone, Copy)]
enum Filter<'n> {
    All,
    Only(&'n [&'n str]),
    Except(&'n [&'n str]),
}

impl Filter<'_> {
    fn names(&self) -> &[&str] {
        match self {
            Filter::All => &[],
            Filter::Only(names) | Filter::Except(names) => *names,
        }
    }

    fn keeps(&self, resolved: &str) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(names) => contains_ignore_case(resolved, names),
            Filter::Except(names) => !contains_ignore_case(resolved, names),
        }
    }

    /// Number of fields the filter must retain, `None` when no count can satisfy it.
    fn expected(&self, total: usize) -> Option<usize> {
        match self {
            Filter::All => Some(total),
            Filter::Only(names) => Some(names.len()),
            Filter::Except(names) => total.checked_sub(names.len()),
        }
    }

    #[cfg(feature = "tracing")]
    fn label(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Only(_) => "only",
            Filter::Except(_) => "except",
        }
    }
}

/// A selected field: resolved name, column type, and value.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor<'s, 'a> {
    /// The resolved (column) name.
    pub name: &'s str,
    /// The column type from the type tag, or `""`.
    pub ty: &'s str,
    /// The field's value.
    pub value: FieldValue<'a>,
}

/// The selected fields of a record, in declaration order.
///
/// Values are borrowed from the record, so [`Selection::args`] can be passed
/// straight to `tokio_postgres::Client::execute` and friends.
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    formatter: Formatter,
    values: Vec<FieldValue<'a>>,
}

impl<'a> Selection<'a> {
    /// Names of the selected fields.
    pub fn fields(&self) -> &[String] {
        self.formatter.field_names()
    }

    /// Column types of the selected fields (empty strings when untagged).
    pub fn types(&self) -> &[String] {
        self.formatter.field_types()
    }

    /// Values of the selected fields, in the same order as [`fields`](Self::fields).
    pub fn args(&self) -> &[FieldValue<'a>] {
        &self.values
    }

    /// [`args`](Self::args) followed by `extra`.
    ///
    /// Useful for trailing parameters such as the key of an `UPDATE ... WHERE id = ?`.
    pub fn args_and(&self, extra: &[FieldValue<'a>]) -> Vec<FieldValue<'a>> {
        let mut args = Vec::with_capacity(self.values.len() + extra.len());
        args.extend_from_slice(&self.values);
        args.extend_from_slice(extra);
        args
    }

    /// Field names joined by the field separator: `first_name, last_name`.
    pub fn field_string(&self) -> String {
        self.formatter.names().to_string()
    }

    /// The bind var repeated once per field: `?, ?`.
    pub fn bind_vars(&self) -> String {
        self.formatter.bind_vars().to_string()
    }

    /// Replace every `%fields%` with [`field_string`](Self::field_string) and
    /// every `%vars%` with [`bind_vars`](Self::bind_vars).
    pub fn prepare(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;
        while let Some(pos) = rest.find('%') {
            out.push_str(&rest[..pos]);
            let tail = &rest[pos..];
            if tail.starts_with(FIELDS_TOKEN) {
                out.push_str(self.formatter.names());
                rest = &tail[FIELDS_TOKEN.len()..];
            } else if tail.starts_with(VARS_TOKEN) {
                out.push_str(self.formatter.bind_vars());
                rest = &tail[VARS_TOKEN.len()..];
            } else {
                out.push('%');
                rest = &tail[1..];
            }
        }
        out.push_str(rest);
        out
    }

    /// The cached formatter over the selected names and types.
    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    /// Shorthand for `self.formatter().render(template)`.
    pub fn render(&self, template: &str) -> String {
        self.formatter.render(template)
    }

    /// Number of selected fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no field was selected.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over the selected fields.
    pub fn iter(&self) -> impl Iterator<Item = FieldDescriptor<'_, 'a>> + '_ {
        self.fields()
            .iter()
            .zip(self.types())
            .zip(&self.values)
            .map(|((name, ty), value)| FieldDescriptor {
                name,
                ty,
                value: *value,
            })
    }
}

/// Selects fields from records using a fixed set of [`SelectOptions`].
#[derive(Debug, Clone, Default)]
pub struct Selector {
    options: SelectOptions,
}

impl Selector {
    /// Create a selector with the default options (`col`/`sql` tags, `", "`, `"?"`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a selector with custom options.
    pub fn with_options(options: SelectOptions) -> Self {
        Self { options }
    }

    /// The options in use.
    pub fn options(&self) -> &SelectOptions {
        &self.options
    }

    /// Select every field of `record`.
    pub fn all<'a, R: Record + ?Sized>(&self, record: &'a R) -> SelectResult<Selection<'a>> {
        let fields = record.fields().ok_or(SelectError::InvalidRecordKind)?;
        self.apply(fields, Filter::All)
    }

    /// Select every field of `record` except those named in `names`.
    pub fn except<'a, R: Record + ?Sized>(
        &self,
        record: &'a R,
        names: &[&str],
    ) -> SelectResult<Selection<'a>> {
        let fields = record.fields().ok_or(SelectError::InvalidRecordKind)?;
        self.apply(fields, Filter::Except(names))
    }

    /// Select only the fields of `record` named in `names`.
    ///
    /// Fields keep their declaration order, not the order of `names`.
    pub fn only<'a, R: Record + ?Sized>(
        &self,
        record: &'a R,
        names: &[&str],
    ) -> SelectResult<Selection<'a>> {
        let fields = record.fields().ok_or(SelectError::InvalidRecordKind)?;
        self.apply(fields, Filter::Only(names))
    }

    /// Start a builder-style selection of `record`.
    pub fn select<'a, R: Record + ?Sized>(
        &self,
        record: &'a R,
    ) -> SelectResult<SelectionBuilder<'a>> {
        let fields = record.fields().ok_or(SelectError::NotAggregateKind)?;
        Ok(SelectionBuilder {
            selector: self.clone(),
            fields,
            filter: None,
        })
    }

    fn apply<'a>(&self, fields: Vec<RecordField<'a>>, filter: Filter<'_>) -> SelectResult<Selection<'a>> {
        let total = fields.len();
        let mut names = Vec::with_capacity(total);
        let mut types = Vec::with_capacity(total);
        let mut values = Vec::with_capacity(total);
        let mut resolved_all = Vec::with_capacity(total);

        for field in &fields {
            let resolved = field.resolve_name(&self.options.name_key);
            resolved_all.push(resolved);
            if !filter.keeps(resolved) {
                continue;
            }
            names.push(resolved.to_string());
            types.push(field.tag(&self.options.type_key).unwrap_or_default().to_string());
            values.push(field.value());
        }

        // Each filter name must pick out exactly one field.
        let unmatched: Vec<String> = filter
            .names()
            .iter()
            .filter(|name| resolved_all.iter().filter(|r| eq_ignore_case(r, name)).count() != 1)
            .map(|name| name.to_string())
            .collect();

        let expected = filter.expected(total);
        if !unmatched.is_empty() || expected != Some(names.len()) {
            return Err(SelectError::mismatch(
                expected.unwrap_or_default(),
                names.len(),
                unmatched,
            ));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "fieldsel.select",
            filter = filter.label(),
            total,
            selected = names.len(),
            "selected record fields"
        );

        Ok(Selection {
            formatter: Formatter::new(names, types, self.options.format.clone()),
            values,
        })
    }
}

/// Builder-style selection: pick at most one filter, then [`build`](Self::build).
///
/// ```ignore
/// let sql = Selector::new()
///     .select(&user)?
///     .exclude(&["id"])?
///     .render("UPDATE users SET $updates WHERE id = ?")?;
/// ```
#[derive(Debug, Clone)]
pub struct SelectionBuilder<'a> {
    selector: Selector,
    fields: Vec<RecordField<'a>>,
    filter: Option<FilterSpec>,
}

#[derive(Debug, Clone)]
enum FilterSpec {
    Only(Vec<String>),
    Except(Vec<String>),
}

impl<'a> SelectionBuilder<'a> {
    /// Keep only the fields named in `names`.
    ///
    /// Fails with [`SelectError::FilterAlreadyConfigured`] if a filter was set before.
    pub fn only(self, names: &[&str]) -> SelectResult<Self> {
        self.set_filter(FilterSpec::Only(owned_names(names)))
    }

    /// Drop the fields named in `names`.
    ///
    /// Fails with [`SelectError::FilterAlreadyConfigured`] if a filter was set before.
    pub fn exclude(self, names: &[&str]) -> SelectResult<Self> {
        self.set_filter(FilterSpec::Except(owned_names(names)))
    }

    /// Apply the filter and produce the selection.
    pub fn build(self) -> SelectResult<Selection<'a>> {
        match &self.filter {
            None => self.selector.apply(self.fields, Filter::All),
            Some(FilterSpec::Only(names)) => {
                let names: Vec<&str> = names.iter().map(String::as_str).collect();
                self.selector.apply(self.fields, Filter::Only(&names))
            }
            Some(FilterSpec::Except(names)) => {
                let names: Vec<&str> = names.iter().map(String::as_str).collect();
                self.selector.apply(self.fields, Filter::Except(&names))
            }
        }
    }

    /// Build the selection and render `template` with its formatter.
    pub fn render(self, template: &str) -> SelectResult<String> {
        Ok(self.build()?.render(template))
    }

    fn set_filter(mut self, filter: FilterSpec) -> SelectResult<Self> {
        if self.filter.is_some() {
            return Err(SelectError::FilterAlreadyConfigured);
        }
        self.filter = Some(filter);
        Ok(self)
    }
}

fn owned_names(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// Select every field of `record` with the default options.
pub fn select_all<R: Record + ?Sized>(record: &R) -> SelectResult<Selection<'_>> {
    Selector::new().all(record)
}

/// Select every field of `record` except `names`, with the default options.
pub fn select_except<'a, R: Record + ?Sized>(
    record: &'a R,
    names: &[&str],
) -> SelectResult<Selection<'a>> {
    Selector::new().except(record, names)
}

/// Select only the fields of `record` named in `names`, with the default options.
pub fn select_only<'a, R: Record + ?Sized>(
    record: &'a R,
    names: &[&str],
) -> SelectResult<Selection<'a>> {
    Selector::new().only(record, names)
}

/// Start a builder-style selection of `record` with the default options.
pub fn select<R: Record + ?Sized>(record: &R) -> SelectResult<SelectionBuilder<'_>> {
    Selector::new().select(record)
}
