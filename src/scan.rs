use crate::error::{Error, ErrorKind};

/// A character cursor over one line's text.
///
/// Positions are zero-based character indices, not byte offsets, so
/// error reports count what a person sees in the line.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    text: &'a str,
    byte: usize,
    chars: usize,
}

impl<'a> Cursor<'a> {
    #[must_use]
    pub const fn new(text: &'a str) -> Self {
        Self {
            text,
            byte: 0,
            chars: 0,
        }
    }

    /// Zero-based character index of the next unread character.
    #[must_use]
    pub const fn pos(&self) -> usize {
        self.chars
    }

    /// The unconsumed tail of the text.
    #[must_use]
    pub fn remainder(&self) -> &'a str {
        &self.text[self.byte..]
    }

    fn peek(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    fn bump(&mut self) {
        if let Some(ch) = self.peek() {
            self.byte += ch.len_utf8();
            self.chars += 1;
        }
    }
}

/// One scanned value from a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Decoded token text: quotes stripped, quote escapes decoded.
    pub text: String,
    /// The token exactly as it appeared, including quotes and escapes.
    pub raw: String,
    /// Character index where scanning began (the opening quote for a
    /// quoted token, the first character for a bare one).
    pub offset: usize,
}

enum State {
    Leading,
    Bare,
    Quoted,
    QuotedEscape,
}

/// Scan the next token from the cursor.
///
/// Leading whitespace is skipped. A `"` or `'` opens a quoted token that
/// runs to the matching unescaped quote; `\"` and `\'` decode to the
/// quote character inside either quote style, and a backslash before any
/// other character is kept literally. Anything else starts a bare token
/// running to the next whitespace. The cursor is left just past the
/// token; trailing whitespace is not consumed.
///
/// # Errors
///
/// [`ErrorKind::MissingValue`] if only whitespace remains, and
/// [`ErrorKind::UnterminatedQuote`] if the closing quote is never found
/// (reported at the opening quote's offset). `""` and `''` are valid
/// empty tokens, not errors.
pub fn scan_token(cursor: &mut Cursor<'_>) -> Result<Token, Error> {
    let mut state = State::Leading;
    let mut text = String::new();
    let mut start_byte = cursor.byte;
    let mut start = cursor.pos();
    let mut quote = '"';

    loop {
        match state {
            State::Leading => match cursor.peek() {
                None => {
                    return Err(Error::new(ErrorKind::MissingValue).with_offset(cursor.pos()));
                }
                Some(ch) if ch.is_whitespace() => cursor.bump(),
                Some(ch @ ('"' | '\'')) => {
                    start = cursor.pos();
                    start_byte = cursor.byte;
                    quote = ch;
                    cursor.bump();
                    state = State::Quoted;
                }
                Some(_) => {
                    start = cursor.pos();
                    start_byte = cursor.byte;
                    state = State::Bare;
                }
            },
            State::Bare => match cursor.peek() {
                None => break,
                Some(ch) if ch.is_whitespace() => break,
                Some(ch) => {
                    text.push(ch);
                    cursor.bump();
                }
            },
            State::Quoted => match cursor.peek() {
                None => {
                    return Err(
                        Error::new(ErrorKind::UnterminatedQuote { quote }).with_offset(start)
                    );
                }
                Some('\\') => {
                    cursor.bump();
                    state = State::QuotedEscape;
                }
                Some(ch) if ch == quote => {
                    cursor.bump();
                    break;
                }
                Some(ch) => {
                    text.push(ch);
                    cursor.bump();
                }
            },
            State::QuotedEscape => match cursor.peek() {
                None => {
                    return Err(
                        Error::new(ErrorKind::UnterminatedQuote { quote }).with_offset(start)
                    );
                }
                Some(ch @ ('"' | '\'')) => {
                    text.push(ch);
                    cursor.bump();
                    state = State::Quoted;
                }
                Some(ch) => {
                    // A backslash escapes only quote characters; before
                    // anything else it is kept literally.
                    text.push('\\');
                    text.push(ch);
                    cursor.bump();
                    state = State::Quoted;
                }
            },
        }
    }

    Ok(Token {
        text,
        raw: cursor.text[start_byte..cursor.byte].to_string(),
        offset: start,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(text: &str) -> Token {
        scan_token(&mut Cursor::new(text)).expect("should scan")
    }

    #[test]
    fn bare_word() {
        let token = scan("ABCs");
        assert_eq!(token.text, "ABCs");
        assert_eq!(token.raw, "ABCs");
        assert_eq!(token.offset, 0);
    }

    #[test]
    fn leading_whitespace_sets_offset() {
        let token = scan("   \t 987");
        assert_eq!(token.text, "987");
        assert_eq!(token.offset, 5);
    }

    #[test]
    fn word_stops_at_whitespace() {
        let mut cursor = Cursor::new("hello\nworld");
        let token = scan_token(&mut cursor).expect("should scan");
        assert_eq!(token.text, "hello");
        assert_eq!(cursor.remainder(), "\nworld");
    }

    #[test]
    fn empty_input_fails() {
        let error = scan_token(&mut Cursor::new("")).unwrap_err();
        assert!(matches!(error.kind(), ErrorKind::MissingValue));
    }

    #[test]
    fn whitespace_only_fails() {
        let error = scan_token(&mut Cursor::new("\t \n\r")).unwrap_err();
        assert!(matches!(error.kind(), ErrorKind::MissingValue));
    }

    #[test]
    fn empty_double_quotes() {
        let token = scan("\"\"");
        assert_eq!(token.text, "");
        assert_eq!(token.raw, "\"\"");
    }

    #[test]
    fn empty_single_quotes() {
        let token = scan("''");
        assert_eq!(token.text, "");
        assert_eq!(token.raw, "''");
    }

    #[test]
    fn quoted_keeps_whitespace() {
        let token = scan("\"Hello world!\"");
        assert_eq!(token.text, "Hello world!");
    }

    #[test]
    fn escaped_same_quote() {
        let token = scan(" \t \"It went \\\"Boom!\\\"\" ");
        assert_eq!(token.text, "It went \"Boom!\"");
        assert_eq!(token.offset, 3);
    }

    #[test]
    fn escaped_opposite_quote() {
        let token = scan("'It went \\\"Boom!\\\"'");
        assert_eq!(token.text, "It went \"Boom!\"");
    }

    #[test]
    fn unescaped_opposite_quote() {
        let token = scan("\"It went 'Boom!'\"");
        assert_eq!(token.text, "It went 'Boom!'");
    }

    #[test]
    fn lone_backslash_is_kept() {
        let token = scan("\"a\\bc\"");
        assert_eq!(token.text, "a\\bc");
    }

    #[test]
    fn unterminated_double_quote() {
        let error = scan_token(&mut Cursor::new("  \"Four score and ")).unwrap_err();
        assert!(matches!(
            error.kind(),
            ErrorKind::UnterminatedQuote { quote: '"' }
        ));
        assert_eq!(error.offset(), Some(2));
    }

    #[test]
    fn unterminated_single_quote() {
        let error = scan_token(&mut Cursor::new("'")).unwrap_err();
        assert!(matches!(
            error.kind(),
            ErrorKind::UnterminatedQuote { quote: '\'' }
        ));
    }

    #[test]
    fn trailing_backslash_in_quote_is_unterminated() {
        let error = scan_token(&mut Cursor::new("\"abc\\")).unwrap_err();
        assert!(matches!(
            error.kind(),
            ErrorKind::UnterminatedQuote { quote: '"' }
        ));
    }

    #[test]
    fn cursor_stops_after_closing_quote() {
        let mut cursor = Cursor::new("\"\"\n ");
        let token = scan_token(&mut cursor).expect("should scan");
        assert_eq!(token.text, "");
        assert_eq!(cursor.remainder(), "\n ");
    }

    #[test]
    fn successive_tokens() {
        let words = ["987.01", ".'.", "x-y*z^2", "C:\\some\\Path\\to\\a\\file.ext"];
        let line = words.join(" ");
        let mut cursor = Cursor::new(&line);
        for word in words {
            let token = scan_token(&mut cursor).expect("should scan");
            assert_eq!(token.text, word);
            assert_eq!(cursor.pos(), token.offset + word.len());
        }
        assert_eq!(cursor.remainder(), "");
    }
}
