use thiserror::Error;

use crate::address::Family;

/// Errors returned by address parsing, comparison and stepping.
///
/// Every failure is deterministic: the same input always fails the same
/// way, so none of these are worth retrying.
///
/// # Examples
/// ```
/// use rdns_core::{ParseError, parse};
///
/// let err = parse("not-an-ip").unwrap_err();
/// assert_eq!(err, ParseError::UnknownFamily);
/// assert_eq!(err.kind(), "unknown_family");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("address text is empty")]
    Empty,
    #[error("address text too long: {length} bytes, limit is {limit}")]
    InputTooLong { length: usize, limit: usize },
    #[error("unknown address family: no '.' or ':' found")]
    UnknownFamily,
    #[error("malformed IPv4 address: {reason}")]
    MalformedV4 { reason: &'static str },
    #[error("malformed IPv6 address: {reason}")]
    MalformedV6 { reason: &'static str },
    #[error("address family mismatch: {left} vs {right}")]
    FamilyMismatch { left: Family, right: Family },
    #[error("{family} address out of range")]
    RangeOverflow { family: Family },
    #[error("range start is ordered after range end")]
    ReversedRange,
}

impl ParseError {
    /// Stable snake_case identifier, used in golden fixtures.
    pub fn kind(&self) -> &'static str {
        match self {
            ParseError::Empty => "empty",
            ParseError::InputTooLong { .. } => "input_too_long",
            ParseError::UnknownFamily => "unknown_family",
            ParseError::MalformedV4 { .. } => "malformed_v4",
            ParseError::MalformedV6 { .. } => "malformed_v6",
            ParseError::FamilyMismatch { .. } => "family_mismatch",
            ParseError::RangeOverflow { .. } => "range_overflow",
            ParseError::ReversedRange => "reversed_range",
        }
    }

    pub(crate) fn v4(reason: &'static str) -> Self {
        ParseError::MalformedV4 { reason }
    }

    pub(crate) fn v6(reason: &'static str) -> Self {
        ParseError::MalformedV6 { reason }
    }
}

#[cfg(test)]
mod tests {
    use super::ParseError;
    use crate::address::Family;

    #[test]
    fn messages_carry_context() {
        let err = ParseError::InputTooLong {
            length: 50,
            limit: 46,
        };
        assert_eq!(
            err.to_string(),
            "address text too long: 50 bytes, limit is 46"
        );

        let err = ParseError::FamilyMismatch {
            left: Family::V4,
            right: Family::V6,
        };
        assert_eq!(err.to_string(), "address family mismatch: IPv4 vs IPv6");
    }

    #[test]
    fn malformed_reason_is_reported() {
        let err = ParseError::v4("octet value above 255");
        assert!(err.to_string().contains("octet value above 255"));
        assert_eq!(err.kind(), "malformed_v4");
    }
}
