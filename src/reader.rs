use crate::error::{Error, ErrorKind, LinePosition, Location};
use crate::source::LineSource;

/// Default marker for whole-line comments.
pub const DEFAULT_COMMENT_LINE_MARKER: &str = "#";

/// Default marker for end-of-line comments.
pub const DEFAULT_END_COMMENT_MARKER: &str = "##";

/// A filtering reader of lines from a [`LineSource`].
///
/// The reader can trim end-of-line comments and skip blank and comment
/// lines; all three behaviours are off by default. It tracks the 1-based
/// line number of the line returned by the most recent
/// [`read_line`](Self::read_line) call, counting skipped lines.
///
/// # Example
///
/// ```
/// use inputfile_rs::{LineReader, StringSource};
///
/// let text = "# header\n\nwidth 100 ## in meters\n";
/// let mut reader = LineReader::new(StringSource::new(text));
/// reader.skip_blank_lines = true;
/// reader.skip_comment_lines = true;
/// reader.trim_end_comments = true;
///
/// assert_eq!(reader.read_line().as_deref(), Some("width 100 "));
/// assert_eq!(reader.read_line(), None);
/// ```
#[derive(Debug)]
pub struct LineReader<S> {
    source: S,
    position: LinePosition,
    closed: bool,
    comment_line_marker: String,
    end_comment_marker: String,
    /// Skip lines that are empty or whitespace-only.
    pub skip_blank_lines: bool,
    /// Skip lines whose first non-whitespace text is the comment marker.
    pub skip_comment_lines: bool,
    /// Truncate each line at the first end-of-line comment marker.
    pub trim_end_comments: bool,
}

impl<S: LineSource> LineReader<S> {
    /// Create a reader over the given source with all filtering off.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            position: LinePosition::Line(0),
            closed: false,
            comment_line_marker: DEFAULT_COMMENT_LINE_MARKER.to_string(),
            end_comment_marker: DEFAULT_END_COMMENT_MARKER.to_string(),
            skip_blank_lines: false,
            skip_comment_lines: false,
            trim_end_comments: false,
        }
    }

    /// The position of the line returned by the most recent
    /// [`read_line`](Self::read_line) call.
    ///
    /// `Line(0)` before the first read; `EndOfInput` once the source is
    /// exhausted.
    #[must_use]
    pub const fn position(&self) -> LinePosition {
        self.position
    }

    /// The name of the reader's source, if it has one.
    #[must_use]
    pub fn source_name(&self) -> Option<&str> {
        self.source.name()
    }

    /// Snapshot of the reader's current location, for error construction.
    #[must_use]
    pub fn location(&self) -> Location {
        Location {
            source: self.source.name().map(str::to_string),
            line: self.position,
        }
    }

    #[must_use]
    pub fn comment_line_marker(&self) -> &str {
        &self.comment_line_marker
    }

    /// Set the marker that starts a comment line.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the marker is empty or starts
    /// with whitespace.
    pub fn set_comment_line_marker(&mut self, marker: impl Into<String>) -> Result<(), Error> {
        let marker = marker.into();
        Self::validate_marker(&marker, "comment line marker")?;
        self.comment_line_marker = marker;
        Ok(())
    }

    #[must_use]
    pub fn end_comment_marker(&self) -> &str {
        &self.end_comment_marker
    }

    /// Set the marker that starts an end-of-line comment.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the marker is empty or starts
    /// with whitespace.
    pub fn set_end_comment_marker(&mut self, marker: impl Into<String>) -> Result<(), Error> {
        let marker = marker.into();
        Self::validate_marker(&marker, "end comment marker")?;
        self.end_comment_marker = marker;
        Ok(())
    }

    fn validate_marker(marker: &str, name: &'static str) -> Result<(), Error> {
        if marker.is_empty() {
            return Err(Error::new(ErrorKind::EmptyMarker { name }));
        }
        if marker.starts_with(char::is_whitespace) {
            return Err(Error::new(ErrorKind::MarkerStartsWithWhitespace { name }));
        }
        Ok(())
    }

    /// Read the next line that survives the enabled filters.
    ///
    /// The line counter advances for every raw line pulled from the
    /// source, including lines that are then skipped. End-of-line comment
    /// trimming runs before the blank test, so a line that is blank only
    /// after trimming is skipped when both modes are on. Returns `None`
    /// once the source is exhausted; every later call returns `None`
    /// without consulting the source again.
    ///
    /// # Panics
    ///
    /// Panics if the reader has been closed.
    pub fn read_line(&mut self) -> Option<String> {
        assert!(!self.closed, "read_line called on a closed LineReader");

        if self.position == LinePosition::EndOfInput {
            return None;
        }

        while let Some(mut line) = self.source.next_line() {
            if let LinePosition::Line(number) = self.position {
                self.position = LinePosition::Line(number + 1);
            }

            if self.trim_end_comments {
                if let Some(index) = line.find(&self.end_comment_marker) {
                    line.truncate(index);
                }
            }

            if self.skip_blank_lines || self.skip_comment_lines {
                let trimmed = line.trim_start();
                if self.skip_blank_lines && trimmed.is_empty() {
                    continue;
                }
                if self.skip_comment_lines && trimmed.starts_with(&self.comment_line_marker) {
                    continue;
                }
            }

            return Some(line);
        }

        self.position = LinePosition::EndOfInput;
        None
    }

    /// Close the reader and release its source.
    ///
    /// Closing twice is allowed; reading after close panics.
    pub fn close(&mut self) {
        if !self.closed {
            self.source.close();
            self.closed = true;
        }
    }

    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.closed
    }
}
