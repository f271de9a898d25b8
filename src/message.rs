use std::fmt;

use crate::error::{Error, ErrorKind};

/// Default indent applied to nested message lines: two spaces.
pub const DEFAULT_INDENT: &str = "  ";

/// Validated indent string used when nesting one message inside another.
///
/// An indent is never empty; it is applied verbatim to every nested line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indent(String);

impl Indent {
    /// Create an indent from the given text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is empty.
    pub fn new(text: impl Into<String>) -> Result<Self, Error> {
        let text = text.into();
        if text.is_empty() {
            return Err(Error::new(ErrorKind::EmptyIndent));
        }
        Ok(Self(text))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self(DEFAULT_INDENT.to_string())
    }
}

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A message made of one or more text lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiLineMessage {
    lines: Vec<String>,
}

impl MultiLineMessage {
    /// Create a message from text, splitting it at newlines.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
        }
    }

    /// Append one line to the message.
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Append an inner message below this one.
    ///
    /// If this message is exactly one line, a trailing colon is added to
    /// it; every inner line is then appended prefixed with the indent.
    pub fn nest(&mut self, inner: &Self, indent: &Indent) {
        if self.lines.len() == 1 {
            self.lines[0].push(':');
        }
        for line in &inner.lines {
            self.lines.push(format!("{indent}{line}"));
        }
    }

    /// The message's lines, in order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

impl fmt::Display for MultiLineMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}
