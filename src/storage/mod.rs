//! Storage Module
//!
//! Synchronizes the roster with its backing flat file.
//!
//! ## Responsibilities
//! - Encode/decode one record per line
//! - Load the whole file, skipping malformed lines
//! - Rewrite the whole file after every mutation
//!
//! ## File Format
//! ```text
//! ┌────┬───┬──────┬───┬────────────┬───┬─────────┐
//! │ id │ | │ name │ | │ department │ | │ salary  │   \n
//! └────┴───┴──────┴───┴────────────┴───┴─────────┘
//! ```
//! Fields are separated by a literal `|` with no escaping. A name or
//! department containing `|` produces a line that no longer splits into four
//! fields, and that line is skipped on the next load. Line breaks and other
//! control characters are rejected when a record is validated, so a field
//! can never span lines.
//!
//! The file is read as UTF-8; invalid bytes are replaced with U+FFFD.

mod codec;
mod file;

pub use codec::{decode_line, encode_line, FIELD_COUNT, FIELD_SEPARATOR};
pub use file::{LoadResult, RosterFile};
