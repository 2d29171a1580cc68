//! Style token table.
//!
//! This module provides the core styling data:
//!
//! - [`StyleToken`]: The closed set of named markup slots
//! - [`StyleTable`]: The read-only name to class-string mapping
//! - [`UnknownTokenError`]: Error for string lookups that name no token
//!
//! Each class string is also exported as a constant (`POST_TITLE`,
//! `TOC_HEADER`, ...) for Rust code that wants the raw value.

mod error;
mod table;
mod token;

pub use error::UnknownTokenError;
pub use table::StyleTable;
pub use token::*;
