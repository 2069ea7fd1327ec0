//! Convenient imports for typical `fieldsel` usage.
//!
//! ```ignore
//! use fieldsel::prelude::*;
//! ```

pub use crate::{
    FormatOptions, Formatter, Record, SelectError, SelectOptions, SelectResult, Selection,
    Selector, select, select_all, select_except, select_only,
};
