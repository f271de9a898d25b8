use std::fmt;

use crate::message::{Indent, MultiLineMessage};

/// Position of a line within a source.
///
/// `Line(0)` means nothing has been read yet; returned lines are numbered
/// from 1. `EndOfInput` is a distinguished state, not a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinePosition {
    /// A 1-based line number (0 before the first read).
    Line(u64),
    /// The source has no lines left.
    EndOfInput,
}

impl fmt::Display for LinePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line(number) => write!(f, "line {number}"),
            Self::EndOfInput => f.write_str("end"),
        }
    }
}

/// Where in an input source an error occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Human-readable name of the source (for example, a file path).
    pub source: Option<String>,
    /// The line the reader was at.
    pub line: LinePosition,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.line)?;
        if let Some(source) = &self.source {
            if !source.is_empty() {
                write!(f, " of {source}")?;
            }
        }
        Ok(())
    }
}

/// Classifies an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    /// A comment marker was set to the empty string.
    #[error("{name} cannot be an empty string")]
    EmptyMarker { name: &'static str },
    /// A comment marker was set to a string starting with whitespace.
    #[error("first character in {name} cannot be whitespace")]
    MarkerStartsWithWhitespace { name: &'static str },
    /// The message indent was set to the empty string.
    #[error("indent cannot be an empty string")]
    EmptyIndent,
    /// The scanner found only whitespace or end of input.
    #[error("expected a value but found only whitespace or end of input")]
    MissingValue,
    /// A quoted value's closing quote was never found.
    #[error("unterminated quoted value (no closing {quote})")]
    UnterminatedQuote { quote: char },
    /// A token was scanned but could not convert to the requested type.
    #[error("\"{text}\" is not a valid {target}")]
    InvalidValue { text: String, target: &'static str },
    /// A numbered-line record does not start with digits and a colon.
    #[error("line does not start with a number and colon")]
    MissingNumberPrefix,
    /// A numbered-line record declared the number 0.
    #[error("the line number must be > 0")]
    NumberIsZero,
    /// A numbered-line record's number did not increase.
    #[error(
        "line number ({number}) must be greater than the line number \
         ({previous}) on the previous line"
    )]
    NumberNotIncreasing { number: u64, previous: u64 },
    /// Free-form context added by a caller wrapping a lower-level error.
    #[error("{0}")]
    Message(String),
}

/// An error with a multi-line message and optional source context.
///
/// Every failure in this crate is one of these: a kind, an optional
/// [`Location`] (source name + line), an optional character offset within
/// the line being scanned, and an optional wrapped cause. Rendering is a
/// single operation, [`Error::message`], which nests each cause's lines
/// under its wrapper with an indent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    location: Option<Location>,
    offset: Option<usize>,
    cause: Option<Box<Error>>,
}

impl Error {
    #[must_use]
    pub const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            location: None,
            offset: None,
            cause: None,
        }
    }

    /// Attach the character offset where the failure was detected.
    #[must_use]
    pub const fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Attach the source location where the failure was detected.
    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Wrap this error in an outer context message.
    ///
    /// The rendered message shows the context first, with this error's
    /// lines nested below it.
    #[must_use]
    pub fn wrap(self, message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Message(message.into()),
            location: None,
            offset: None,
            cause: Some(Box::new(self)),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    #[must_use]
    pub const fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        self.offset
    }

    #[must_use]
    pub fn cause(&self) -> Option<&Self> {
        self.cause.as_deref()
    }

    /// Render the error as a multi-line message.
    ///
    /// The kind's text comes first; a cause's rendered lines are nested
    /// below it with the given indent (a single-line wrapper gains a
    /// trailing colon). If a location is attached, the whole message is
    /// nested under an `Error at {location}` line.
    #[must_use]
    pub fn message(&self, indent: &Indent) -> MultiLineMessage {
        let mut body = MultiLineMessage::new(self.kind.to_string());
        if let Some(cause) = &self.cause {
            body.nest(&cause.message(indent), indent);
        }
        match &self.location {
            Some(location) => {
                let mut located = MultiLineMessage::new(format!("Error at {location}"));
                located.nest(&body, indent);
                located
            }
            None => body,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message(&Indent::default()))
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}
