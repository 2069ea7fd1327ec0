//! Derive macros for fieldsel
//!
//! Provides `#[derive(Record)]`.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod record;

/// Derive `Record` for a struct with named fields.
///
/// # Example
///
/// ```ignore
/// use fieldsel::Record;
///
/// #[derive(Record)]
/// #[record(rename_all = "snake_case")]
/// struct User {
///     #[record(col = "user_id", sql = "BIGINT NOT NULL")]
///     id: i64,
///     user_name: String,
///     #[record(skip)]
///     cached_avatar: Vec<u8>,
/// }
/// ```
///
/// # Attributes
///
/// - `#[record(rename_all = "...")]` - Rename declared field names (`snake_case`,
///   `camelCase`, `PascalCase`, `SCREAMING_SNAKE_CASE`, `kebab-case`, `lowercase`, `UPPERCASE`)
/// - `#[record(key = "value", ...)]` - Attach tags to a field; `col` overrides the
///   field name and `sql` supplies the column type with the default options
/// - `#[record(skip)]` - Leave the field out of the record
///
/// Every field that is not skipped must implement `ToSql + Sync`.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    record::expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
