/// A producer of raw text lines.
///
/// How lines are produced is outside this crate's concern; a file-backed
/// implementation lives with the application. The crate ships
/// [`StringSource`] for in-memory text.
pub trait LineSource {
    /// The next raw line, or `None` when the source is exhausted.
    fn next_line(&mut self) -> Option<String>;

    /// Human-readable identifier for the source, used in error messages.
    fn name(&self) -> Option<&str> {
        None
    }

    /// Release any resources held by the source.
    fn close(&mut self) {}
}

/// A [`LineSource`] over an in-memory string.
#[derive(Debug, Clone)]
pub struct StringSource {
    lines: Vec<String>,
    next: usize,
    name: Option<String>,
}

impl StringSource {
    /// Create a source over the given text, split at line boundaries
    /// (`\n` or `\r\n`, neither included in the lines).
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
            next: 0,
            name: None,
        }
    }

    /// Create a named source; the name appears in error locations.
    #[must_use]
    pub fn named(text: &str, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new(text)
        }
    }
}

impl LineSource for StringSource {
    fn next_line(&mut self) -> Option<String> {
        let line = self.lines.get(self.next)?;
        self.next += 1;
        Some(line.clone())
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
