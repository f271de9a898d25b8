use crate::error::{Error, ErrorKind};
use crate::reader::LineReader;
use crate::source::LineSource;

/// One numbered record: a caller-supplied label and its trailing text.
///
/// Labels come from the input (`{number}:{text}`) and need not match the
/// physical line numbers, but they must strictly increase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedLine {
    pub number: u64,
    pub text: String,
}

/// Parse every remaining line of the reader as a `{number}:{text}` record.
///
/// Records are returned in file order; the text after the colon is kept
/// verbatim, including leading whitespace and emptiness. The reader is
/// left at end of input on success.
///
/// # Errors
///
/// Each failure carries the reader's location at the offending physical
/// line: a line without a leading digits-and-colon prefix
/// ([`ErrorKind::MissingNumberPrefix`]), a number too large to represent
/// ([`ErrorKind::InvalidValue`]), a zero number
/// ([`ErrorKind::NumberIsZero`]), or a number less than or equal to the
/// previous record's ([`ErrorKind::NumberNotIncreasing`]).
pub fn read_numbered_lines<S: LineSource>(
    reader: &mut LineReader<S>,
) -> Result<Vec<NumberedLine>, Error> {
    let mut lines = Vec::new();
    let mut previous: u64 = 0;

    while let Some(line) = reader.read_line() {
        let digits_end = line
            .find(|ch: char| !ch.is_ascii_digit())
            .unwrap_or(line.len());
        let (digits, rest) = line.split_at(digits_end);

        if digits.is_empty() || !rest.starts_with(':') {
            return Err(Error::new(ErrorKind::MissingNumberPrefix).with_location(reader.location()));
        }

        let number: u64 = digits.parse().map_err(|_| {
            Error::new(ErrorKind::InvalidValue {
                text: digits.to_string(),
                target: "line number",
            })
            .with_location(reader.location())
        })?;

        if number == 0 {
            return Err(Error::new(ErrorKind::NumberIsZero).with_location(reader.location()));
        }
        if previous > 0 && number <= previous {
            return Err(
                Error::new(ErrorKind::NumberNotIncreasing { number, previous })
                    .with_location(reader.location()),
            );
        }

        lines.push(NumberedLine {
            number,
            text: rest[1..].to_string(),
        });
        previous = number;
    }

    Ok(lines)
}
