//! rdns core library: textual IP address codec.
//!
//! The range-to-hostname tool built on this crate only needs to turn
//! address text into fixed-width binary values, walk between them, and
//! print them back. Everything byte-level lives here: bounds checks,
//! separator placement, octet overflow and the `::` notation. Resolution,
//! argument handling and output stay outside.
//!
//! Invariants:
//! - Input longer than [`MAX_TEXT_LEN`] - 1 bytes is rejected before any
//!   indexing.
//! - A failed parse yields only an error, never a partial value.
//! - `parse(serialize(v)) == v` for every value.
//! - Stepping past either end of a family's address space is an error.
//!
//! References (normative):
//! - RFC 4291 section 2.2 (text representation of IPv6 addresses)
//! - RFC 5952 (canonical IPv6 text)
//!
//! # Examples
//! ```
//! use rdns_core::{AddressRange, parse};
//!
//! let addr = parse("::ffff:127.0.0.1")?;
//! assert_eq!(&addr.as_bytes()[12..], &[127, 0, 0, 1]);
//!
//! let last = AddressRange::parse("255.255.255.254", Some("255.255.255.255"))?
//!     .last()
//!     .map(|addr| addr.to_string());
//! assert_eq!(last.as_deref(), Some("255.255.255.255"));
//! # Ok::<(), rdns_core::ParseError>(())
//! ```

use serde::{Deserialize, Serialize};

mod address;
pub mod codec;
mod range;

pub use address::{AddressValue, Family};
pub use codec::error::ParseError;
pub use codec::layout::MAX_TEXT_LEN;
pub use codec::{
    LeadingZeros, ParseOptions, compare, detect_family, parse, parse_v4, parse_v4_with, parse_v6,
    parse_v6_with, parse_with, serialize,
};
pub use range::AddressRange;

/// Summary of one parse attempt, as stored in golden fixtures.
///
/// # Examples
/// ```
/// use rdns_core::{ParseOptions, describe};
///
/// let outcome = describe("2001:DB8::0:1", &ParseOptions::default());
/// assert_eq!(outcome.canonical.as_deref(), Some("2001:db8::1"));
/// assert!(outcome.error.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOutcome {
    /// Input text as given.
    pub input: String,
    /// Family of the parsed value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<Family>,
    /// Canonical text of the parsed value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    /// [`ParseError::kind`] when parsing failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn describe(input: &str, options: &ParseOptions) -> ParseOutcome {
    match parse_with(input, options) {
        Ok(addr) => ParseOutcome {
            input: input.to_string(),
            family: Some(addr.family()),
            canonical: Some(addr.to_string()),
            error: None,
        },
        Err(err) => ParseOutcome {
            input: input.to_string(),
            family: None,
            canonical: None,
            error: Some(err.kind().to_string()),
        },
    }
}

/// Inputs of one golden fixture set (`cases.json`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoldenCases {
    /// Options every input is parsed with.
    #[serde(default)]
    pub options: ParseOptions,
    pub inputs: Vec<String>,
}

impl GoldenCases {
    /// Outcomes in input order, as stored in `expected.json`.
    pub fn outcomes(&self) -> Vec<ParseOutcome> {
        self.inputs
            .iter()
            .map(|text| describe(text, &self.options))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_omits_absent_fields() {
        let ok = serde_json::to_value(describe("10.0.0.1", &ParseOptions::default()))
            .expect("outcome json");
        assert_eq!(ok["family"], "v4");
        assert_eq!(ok["canonical"], "10.0.0.1");
        assert!(ok.get("error").is_none());

        let err = serde_json::to_value(describe("10.0.0", &ParseOptions::default()))
            .expect("outcome json");
        assert_eq!(err["error"], "malformed_v4");
        assert!(err.get("family").is_none());
        assert!(err.get("canonical").is_none());
    }

    #[test]
    fn golden_cases_apply_their_options() {
        let cases: GoldenCases = serde_json::from_str(
            r#"{"options":{"leading_zeros":"accept"},"inputs":["010.0.0.1","::1.2"]}"#,
        )
        .expect("cases json");
        let outcomes = cases.outcomes();
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].canonical.as_deref(), Some("10.0.0.1"));
        assert_eq!(outcomes[1].error.as_deref(), Some("malformed_v6"));
    }

    #[test]
    fn golden_cases_default_options_when_missing() {
        let cases: GoldenCases =
            serde_json::from_str(r#"{"inputs":["010.0.0.1"]}"#).expect("cases json");
        assert_eq!(cases.options, ParseOptions::default());
        assert_eq!(cases.outcomes()[0].error.as_deref(), Some("malformed_v4"));
    }
}
