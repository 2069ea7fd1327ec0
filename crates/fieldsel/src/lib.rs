//! # fieldsel
//!
//! Select a struct's fields by name and turn them into SQL fragments.
//!
//! ## Features
//!
//! - **Explicit SQL**: you write the statement, fieldsel fills in the column
//!   list, the bind vars and the values
//! - **Tag aliasing**: `#[record(col = "first_name")]` renames a field, `#[record(sql = "...")]`
//!   gives it a column type for `CREATE TABLE` fragments
//! - **Inclusion / exclusion**: `select_only` and `select_except` (case-insensitive),
//!   with an error when a name does not match any field
//! - **Borrowed values**: `Selection::args()` is a `&[&(dyn ToSql + Sync)]`, ready
//!   for `tokio_postgres`
//! - **Cached formatting**: `Formatter` computes each fragment at most once, also
//!   when shared between threads
//!
//! ## Example
//!
//! ```ignore
//! use fieldsel::{Record, select_all, select_except};
//!
//! #[derive(Record)]
//! struct Person {
//!     #[record(col = "nickname")]
//!     nickname: String,
//!     #[record(col = "first_name", sql = "VARCHAR(64) NOT NULL")]
//!     first_name: String,
//!     #[record(col = "age", sql = "INT")]
//!     age: i32,
//! }
//!
//! let p = Person { nickname: "jd".into(), first_name: "John".into(), age: 21 };
//!
//! let s = select_all(&p)?;
//! let insert = s.prepare("INSERT INTO persons (%fields%) VALUES (%vars%)");
//! // INSERT INTO persons (nickname, first_name, age) VALUES (?, ?, ?)
//!
//! let s = select_except(&p, &["nickname"])?;
//! let update = s.render("UPDATE persons SET $updates WHERE nickname = ?");
//! let args = s.args_and(&[&p.nickname]);
//! # Ok::<(), fieldsel::SelectError>(())
//! ```

pub mod error;
pub mod format;
mod join;
pub mod options;
pub mod record;
pub mod select;

pub use error::{SelectError, SelectResult};
pub use format::Formatter;
pub use options::{FormatOptions, SelectOptions};
pub use record::{FieldValue, Record, RecordField};
pub use select::{
    FieldDescriptor, Selection, SelectionBuilder, Selector, select, select_all, select_except,
    select_only,
};

// Re-export so callers can name the bound value type without a direct tokio-postgres import
pub use tokio_postgres::types::ToSql;

#[cfg(feature = "derive")]
pub use fieldsel_derive::Record;

pub mod prelude;
