//! Field descriptors for records.
//!
//! Rust has no runtime reflection, so a record describes its own fields
//! through the [`Record`] trait. `#[derive(Record)]` writes the implementation
//! for structs with named fields:
//!
//! ```ignore
//! use fieldsel::Record;
//!
//! #[derive(Record)]
//! struct Pet {
//!     #[record(col = "first_name", sql = "VARCHAR(64) NOT NULL")]
//!     first_name: String,
//!     #[record(col = "age")]
//!     age: i32,
//! }
//! ```
//!
//! Scalars implement `Record` too and report that they have no fields, so
//! selecting from them fails with [`SelectError::InvalidRecordKind`](crate::SelectError).
//! Pointer-like wrappers (`&T`, `Box<T>`, `Rc<T>`, `Arc<T>`) forward to the
//! value they point to.

use std::rc::Rc;
use std::sync::Arc;

use tokio_postgres::types::ToSql;

/// A field's value, borrowed from the record and ready for positional binding.
pub type FieldValue<'a> = &'a (dyn ToSql + Sync);

/// One declared field of a record.
#[derive(Debug, Clone, Copy)]
pub struct RecordField<'a> {
    name: &'static str,
    tags: &'static [(&'static str, &'static str)],
    value: FieldValue<'a>,
}

impl<'a> RecordField<'a> {
    /// Describe a field by its declared name, its tags, and its value.
    pub fn new(
        name: &'static str,
        tags: &'static [(&'static str, &'static str)],
        value: FieldValue<'a>,
    ) -> Self {
        Self { name, tags, value }
    }

    /// The declared field name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// All `key = "value"` tags attached to the field, in declaration order.
    pub fn tags(&self) -> &'static [(&'static str, &'static str)] {
        self.tags
    }

    /// Look up a tag by key. The first tag with that key wins.
    pub fn tag(&self, key: &str) -> Option<&'static str> {
        self.tags.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }

    /// The field's value.
    pub fn value(&self) -> FieldValue<'a> {
        self.value
    }

    /// The name a field is selected under: the `name_key` tag if present and
    /// non-empty, else the declared name.
    pub fn resolve_name(&self, name_key: &str) -> &'static str {
        match self.tag(name_key) {
            Some(tag) if !tag.is_empty() => tag,
            _ => self.name,
        }
    }
}

/// A value whose fields can be selected.
///
/// This trait is implemented by `#[derive(Record)]`.
pub trait Record {
    /// The record's fields in declaration order, or `None` when the value is
    /// not a struct.
    fn fields(&self) -> Option<Vec<RecordField<'_>>>;
}

impl<T: Record + ?Sized> Record for &T {
    fn fields(&self) -> Option<Vec<RecordField<'_>>> {
        (**self).fields()
    }
}

impl<T: Record + ?Sized> Record for &mut T {
    fn fields(&self) -> Option<Vec<RecordField<'_>>> {
        (**self).fields()
    }
}

impl<T: Record + ?Sized> Record for Box<T> {
    fn fields(&self) -> Option<Vec<RecordField<'_>>> {
        (**self).fields()
    }
}

impl<T: Record + ?Sized> Record for Rc<T> {
    fn fields(&self) -> Option<Vec<RecordField<'_>>> {
        (**self).fields()
    }
}

impl<T: Record + ?Sized> Record for Arc<T> {
    fn fields(&self) -> Option<Vec<RecordField<'_>>> {
        (**self).fields()
    }
}

macro_rules! impl_scalar_record {
    ($($t:ty),+ $(,)?) => {
        $(impl Record for $t {
            fn fields(&self) -> Option<Vec<RecordField<'_>>> {
                None
            }
        })+
    };
}

impl_scalar_record!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, (),
    str, String,
);
