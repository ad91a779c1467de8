//! Textual IP address codec.
//!
//! Text is bounds-checked once on entry, its family is guessed from the
//! first `.` or `:`, and the matching grammar turns it into a fixed-width
//! [`AddressValue`]. Serialization is the inverse and always produces the
//! canonical form (dotted decimal, RFC 5952 for IPv6).
//!
//! Parsing is a pure function of its input and options: no state is kept
//! between calls and nothing is printed. Rejected input is reported through
//! [`ParseError`] and traced at `trace` level.
//!
//! Layout follows the rest of the crate: `layout` holds length bounds and
//! separators, `reader` the cursor over the input, `ipv4`/`ipv6` the
//! grammars and `format` the serializer.

pub mod error;
pub mod layout;
pub(crate) mod reader;

mod format;
mod ipv4;
mod ipv6;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::address::{AddressValue, Family};
use error::ParseError;

pub(crate) use format::{write_v4, write_v6};

/// How dotted-decimal groups with leading zeros (`"016"`) are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadingZeros {
    /// Reject the group, avoiding any octal reading of `"010"`.
    #[default]
    Reject,
    /// Accept the group and read it as decimal.
    Accept,
}

/// Parser configuration.
///
/// # Examples
/// ```
/// use rdns_core::{LeadingZeros, ParseOptions, parse_with};
///
/// let options: ParseOptions = serde_json::from_str(r#"{"leading_zeros":"accept"}"#)?;
/// assert_eq!(options.leading_zeros, LeadingZeros::Accept);
/// assert!(parse_with("010.0.0.1", &options).is_ok());
/// assert!(parse_with("010.0.0.1", &ParseOptions::default()).is_err());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub leading_zeros: LeadingZeros,
}

/// Guesses the family from the first `.` or `:` in `text`.
///
/// Only the separator is looked at; the rest of the text is not validated.
///
/// # Examples
/// ```
/// use rdns_core::{Family, detect_family};
///
/// assert_eq!(detect_family("10.0.0.1"), Some(Family::V4));
/// assert_eq!(detect_family("::1"), Some(Family::V6));
/// assert_eq!(detect_family("not-an-ip"), None);
/// ```
pub fn detect_family(text: impl AsRef<[u8]>) -> Option<Family> {
    text.as_ref().iter().find_map(|byte| match *byte {
        layout::V4_SEPARATOR => Some(Family::V4),
        layout::V6_SEPARATOR => Some(Family::V6),
        _ => None,
    })
}

/// Parses an IPv4 or IPv6 address with default options.
///
/// # Examples
/// ```
/// use rdns_core::{AddressValue, parse};
///
/// let addr = parse("2001:0db8:0000:0000:0000:0000:0000:0001")?;
/// assert_eq!(addr.to_string(), "2001:db8::1");
/// assert_eq!(parse("127.0.0.1")?, AddressValue::V4([127, 0, 0, 1]));
/// # Ok::<(), rdns_core::ParseError>(())
/// ```
pub fn parse(text: impl AsRef<[u8]>) -> Result<AddressValue, ParseError> {
    parse_with(text, &ParseOptions::default())
}

/// Like [`parse`], with caller-supplied options.
pub fn parse_with(text: impl AsRef<[u8]>, options: &ParseOptions) -> Result<AddressValue, ParseError> {
    let text = text.as_ref();
    let result = parse_bounded(text, options);
    if let Err(err) = &result {
        tracing::trace!(input = %text.escape_ascii(), %err, "rejected address text");
    }
    result
}

fn parse_bounded(text: &[u8], options: &ParseOptions) -> Result<AddressValue, ParseError> {
    check_bounds(text)?;
    match detect_family(text).ok_or(ParseError::UnknownFamily)? {
        Family::V4 => ipv4::parse(text, options).map(AddressValue::V4),
        Family::V6 => ipv6::parse(text, options).map(AddressValue::V6),
    }
}

fn check_bounds(text: &[u8]) -> Result<(), ParseError> {
    if text.is_empty() {
        return Err(ParseError::Empty);
    }
    if text.len() >= layout::MAX_TEXT_LEN {
        return Err(ParseError::InputTooLong {
            length: text.len(),
            limit: layout::MAX_TEXT_LEN,
        });
    }
    Ok(())
}

/// Parses dotted-decimal text into four network-order bytes.
pub fn parse_v4(text: impl AsRef<[u8]>) -> Result<[u8; layout::V4_LEN], ParseError> {
    parse_v4_with(text, &ParseOptions::default())
}

/// Like [`parse_v4`], with caller-supplied options.
///
/// # Examples
/// ```
/// use rdns_core::{LeadingZeros, ParseOptions, parse_v4_with};
///
/// let options = ParseOptions { leading_zeros: LeadingZeros::Accept };
/// assert_eq!(parse_v4_with("192.168.001.010", &options)?, [192, 168, 1, 10]);
/// # Ok::<(), rdns_core::ParseError>(())
/// ```
pub fn parse_v4_with(
    text: impl AsRef<[u8]>,
    options: &ParseOptions,
) -> Result<[u8; layout::V4_LEN], ParseError> {
    let text = text.as_ref();
    check_bounds(text)?;
    ipv4::parse(text, options)
}

/// Parses RFC 4291 text (with `::` and an optional dotted tail) into
/// sixteen network-order bytes.
pub fn parse_v6(text: impl AsRef<[u8]>) -> Result<[u8; layout::V6_LEN], ParseError> {
    parse_v6_with(text, &ParseOptions::default())
}

/// Like [`parse_v6`], with caller-supplied options.
///
/// The options also govern an embedded dotted tail.
///
/// # Examples
/// ```
/// use rdns_core::{LeadingZeros, ParseOptions, parse_v6, parse_v6_with};
///
/// let options = ParseOptions { leading_zeros: LeadingZeros::Accept };
/// let bytes = parse_v6_with("::ffff:010.0.0.1", &options)?;
/// assert_eq!(&bytes[12..], &[10, 0, 0, 1]);
/// assert!(parse_v6("::ffff:010.0.0.1").is_err());
/// # Ok::<(), rdns_core::ParseError>(())
/// ```
pub fn parse_v6_with(
    text: impl AsRef<[u8]>,
    options: &ParseOptions,
) -> Result<[u8; layout::V6_LEN], ParseError> {
    let text = text.as_ref();
    check_bounds(text)?;
    ipv6::parse(text, options)
}

/// Canonical text for `addr`; same as its `Display` output.
pub fn serialize(addr: &AddressValue) -> String {
    addr.to_string()
}

/// Big-endian unsigned comparison of two addresses of the same family.
pub fn compare(a: &AddressValue, b: &AddressValue) -> Result<Ordering, ParseError> {
    if a.family() != b.family() {
        return Err(ParseError::FamilyMismatch {
            left: a.family(),
            right: b.family(),
        });
    }
    Ok(a.as_bytes().cmp(b.as_bytes()))
}
