//! Reading primitives for structured, human-edited input files.
//!
//! The crate covers four layers that higher-level input readers build
//! on: a filtering [`LineReader`] (comment trimming, blank/comment-line
//! skipping, line-number tracking), a quoted/bare token scanner over a
//! [`Cursor`], a typed value reader that pairs each converted value with
//! its original text, and a located multi-line [`Error`] type.
//!
//! # Quick start
//!
//! ## Read filtered lines
//!
//! ```
//! use inputfile_rs::{LineReader, StringSource};
//!
//! let text = "# species table\n\noak 120 ## years\n";
//! let mut reader = LineReader::new(StringSource::new(text));
//! reader.skip_blank_lines = true;
//! reader.skip_comment_lines = true;
//! reader.trim_end_comments = true;
//!
//! assert_eq!(reader.read_line().as_deref(), Some("oak 120 "));
//! assert_eq!(reader.read_line(), None);
//! ```
//!
//! ## Scan and convert values
//!
//! ```
//! use inputfile_rs::{Cursor, read_value};
//!
//! let mut cursor = Cursor::new(" \t -1,234 \n ");
//! let age = read_value::<i32>(&mut cursor).unwrap();
//! assert_eq!(age.value, -1234);
//! assert_eq!(age.text, "-1,234");
//! assert_eq!(age.offset, 3);
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod error;
pub mod message;
pub mod reader;
pub mod records;
pub mod scan;
pub mod source;
pub mod value;

pub use error::{Error, ErrorKind, LinePosition, Location};
pub use message::{DEFAULT_INDENT, Indent, MultiLineMessage};
pub use reader::{DEFAULT_COMMENT_LINE_MARKER, DEFAULT_END_COMMENT_MARKER, LineReader};
pub use records::{NumberedLine, read_numbered_lines};
pub use scan::{Cursor, Token, scan_token};
pub use source::{LineSource, StringSource};
pub use value::{ParsedValue, TokenValue, read_value};
