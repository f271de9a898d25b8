use crate::error::{Error, ErrorKind};
use crate::scan::{Cursor, scan_token};

/// A converted value paired with its original source text.
///
/// The text is the token exactly as it appeared in the input, including
/// any sign, grouping separators, or quotes; it is preserved verbatim for
/// diagnostics, never reconstructed from the value.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedValue<T> {
    /// The converted value.
    pub value: T,
    /// The original token text.
    pub text: String,
    /// Character index where the token's scan began.
    pub offset: usize,
}

/// A type that can be converted from a scanned token.
pub trait TokenValue: Sized {
    /// Name used in conversion error messages, e.g. `integer`.
    fn type_name() -> &'static str;

    /// Convert decoded token text, or `None` if it is not valid.
    fn parse_token(text: &str) -> Option<Self>;
}

/// Read the next token from the cursor and convert it.
///
/// # Errors
///
/// Propagates scan errors, and returns [`ErrorKind::InvalidValue`] with
/// the token's raw text and offset when conversion fails.
pub fn read_value<T: TokenValue>(cursor: &mut Cursor<'_>) -> Result<ParsedValue<T>, Error> {
    let token = scan_token(cursor)?;
    let Some(value) = T::parse_token(&token.text) else {
        return Err(Error::new(ErrorKind::InvalidValue {
            text: token.raw,
            target: T::type_name(),
        })
        .with_offset(token.offset));
    };
    Ok(ParsedValue {
        value,
        text: token.raw,
        offset: token.offset,
    })
}

/// Reduce integer text to something `str::parse` accepts: keep one
/// leading sign, drop commas that sit strictly between digits, reject
/// everything else.
fn strip_group_separators(text: &str) -> Option<String> {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    if unsigned.is_empty() {
        return None;
    }

    let mut digits = String::with_capacity(text.len());
    if unsigned.len() != text.len() {
        digits.push_str(&text[..1]);
    }

    let mut chars = unsigned.chars().peekable();
    let mut after_digit = false;
    while let Some(ch) = chars.next() {
        if ch.is_ascii_digit() {
            digits.push(ch);
            after_digit = true;
        } else if ch == ',' {
            // A separator must have a digit on both sides.
            if !after_digit || !chars.peek().is_some_and(char::is_ascii_digit) {
                return None;
            }
            after_digit = false;
        } else {
            return None;
        }
    }
    Some(digits)
}

macro_rules! integer_token_value {
    ($($int:ty),* $(,)?) => {
        $(
            impl TokenValue for $int {
                fn type_name() -> &'static str {
                    "integer"
                }

                fn parse_token(text: &str) -> Option<Self> {
                    strip_group_separators(text)?.parse().ok()
                }
            }
        )*
    };
}

integer_token_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_token_value {
    ($($float:ty),* $(,)?) => {
        $(
            impl TokenValue for $float {
                fn type_name() -> &'static str {
                    "number"
                }

                fn parse_token(text: &str) -> Option<Self> {
                    text.parse().ok()
                }
            }
        )*
    };
}

float_token_value!(f32, f64);

impl TokenValue for String {
    fn type_name() -> &'static str {
        "string"
    }

    fn parse_token(text: &str) -> Option<Self> {
        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read<T: TokenValue>(text: &str) -> ParsedValue<T> {
        read_value(&mut Cursor::new(text)).expect("should read")
    }

    #[test]
    fn just_digits() {
        let value = read::<i32>("1234");
        assert_eq!(value.value, 1234);
        assert_eq!(value.text, "1234");
        assert_eq!(value.offset, 0);
    }

    #[test]
    fn plus_sign_and_separator() {
        let value = read::<i32>("+1,234");
        assert_eq!(value.value, 1234);
        assert_eq!(value.text, "+1,234");
    }

    #[test]
    fn minus_sign() {
        let value = read::<i32>("-1234");
        assert_eq!(value.value, -1234);
        assert_eq!(value.text, "-1234");
    }

    #[test]
    fn whitespace_around_number() {
        let value = read::<i32>(" \t -1,234 \n ");
        assert_eq!(value.value, -1234);
        assert_eq!(value.text, "-1,234");
        assert_eq!(value.offset, 3);
    }

    #[test]
    fn separators_anywhere_between_digits() {
        let value = read::<u64>("1,23,4");
        assert_eq!(value.value, 1234);
        assert_eq!(value.text, "1,23,4");
    }

    #[test]
    fn sign_alone_is_invalid() {
        let error = read_value::<i32>(&mut Cursor::new("+")).unwrap_err();
        assert!(matches!(error.kind(), ErrorKind::InvalidValue { .. }));
    }

    #[test]
    fn leading_separator_is_invalid() {
        assert!(read_value::<i32>(&mut Cursor::new(",123")).is_err());
        assert!(read_value::<i32>(&mut Cursor::new("+,123")).is_err());
    }

    #[test]
    fn trailing_separator_is_invalid() {
        assert!(read_value::<i32>(&mut Cursor::new("123,")).is_err());
    }

    #[test]
    fn doubled_separator_is_invalid() {
        assert!(read_value::<i32>(&mut Cursor::new("1,,234")).is_err());
    }

    #[test]
    fn letters_are_invalid() {
        let error = read_value::<i32>(&mut Cursor::new("12ab")).unwrap_err();
        match error.kind() {
            ErrorKind::InvalidValue { text, target } => {
                assert_eq!(text, "12ab");
                assert_eq!(*target, "integer");
            }
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    #[test]
    fn overflow_is_invalid() {
        assert!(read_value::<u8>(&mut Cursor::new("256")).is_err());
        assert!(read_value::<u32>(&mut Cursor::new("-1")).is_err());
    }

    #[test]
    fn sequence_of_integers() {
        let mut cursor = Cursor::new("-4 78900 0 555");
        for expected in [-4, 78_900, 0, 555] {
            let value = read_value::<i64>(&mut cursor).expect("should read");
            assert_eq!(value.value, expected);
        }
    }

    #[test]
    fn float_plain_and_scientific() {
        let value = read::<f64>("987.01");
        assert!((value.value - 987.01).abs() < f64::EPSILON);
        let value = read::<f64>("-1.5e3");
        assert!((value.value + 1500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn float_rejects_grouping() {
        let error = read_value::<f64>(&mut Cursor::new("1,234.5")).unwrap_err();
        match error.kind() {
            ErrorKind::InvalidValue { target, .. } => assert_eq!(*target, "number"),
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    #[test]
    fn string_keeps_decoded_text_and_raw() {
        let value = read::<String>(" \"a b\\\"c\" ");
        assert_eq!(value.value, "a b\"c");
        assert_eq!(value.text, "\"a b\\\"c\"");
        assert_eq!(value.offset, 1);
    }

    #[test]
    fn scan_failure_propagates() {
        let error = read_value::<i32>(&mut Cursor::new("  ")).unwrap_err();
        assert!(matches!(error.kind(), ErrorKind::MissingValue));
    }
}
