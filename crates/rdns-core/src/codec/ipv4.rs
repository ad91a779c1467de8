use super::error::ParseError;
use super::layout;
use super::reader::TextReader;
use super::{LeadingZeros, ParseOptions};

/// Dotted-decimal grammar: four groups of 1-3 digits, each at most 255.
pub(crate) fn parse(text: &[u8], options: &ParseOptions) -> Result<[u8; layout::V4_LEN], ParseError> {
    if !(layout::V4_MIN_TEXT_LEN..=layout::V4_MAX_TEXT_LEN).contains(&text.len()) {
        return Err(ParseError::v4("length outside 7..=15"));
    }

    let mut reader = TextReader::new(text);
    let mut octets = [0u8; layout::V4_LEN];
    for (index, octet) in octets.iter_mut().enumerate() {
        if index > 0 && !reader.eat(layout::V4_SEPARATOR) {
            return Err(ParseError::v4("expected '.' between octets"));
        }
        *octet = read_octet(&mut reader, options)?;
    }

    if !reader.is_at_end() {
        return Err(ParseError::v4("unexpected text after fourth octet"));
    }
    Ok(octets)
}

fn read_octet(reader: &mut TextReader<'_>, options: &ParseOptions) -> Result<u8, ParseError> {
    let digits = reader.read_decimal_digits();
    if digits.is_empty() {
        return Err(ParseError::v4("empty octet"));
    }
    if digits.len() > layout::V4_GROUP_MAX_DIGITS {
        return Err(ParseError::v4("octet longer than 3 digits"));
    }
    if digits.len() > 1 && digits[0] == b'0' && options.leading_zeros == LeadingZeros::Reject {
        return Err(ParseError::v4("octet has a leading zero"));
    }

    // At most three digits, so this cannot overflow u16.
    let value = digits
        .iter()
        .fold(0u16, |acc, digit| acc * 10 + u16::from(digit - b'0'));
    if value > layout::V4_GROUP_MAX_VALUE {
        return Err(ParseError::v4("octet value above 255"));
    }
    Ok(value as u8)
}
