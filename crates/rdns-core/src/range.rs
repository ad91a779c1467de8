//! Inclusive walks over consecutive addresses.
//!
//! A range is validated once (same family, start not after end) and then
//! yields every address from start to end. The walk stops after `end`
//! even when `end` is the last address of its family, so it never wraps.

use std::cmp::Ordering;
use std::iter::FusedIterator;

use crate::address::AddressValue;
use crate::codec::{self, error::ParseError};

/// Iterator over `start..=end`.
///
/// # Examples
/// ```
/// use rdns_core::AddressRange;
///
/// let range = AddressRange::parse("10.0.0.254", Some("10.0.1.1"))?;
/// let texts: Vec<String> = range.map(|addr| addr.to_string()).collect();
/// assert_eq!(texts, ["10.0.0.254", "10.0.0.255", "10.0.1.0", "10.0.1.1"]);
/// # Ok::<(), rdns_core::ParseError>(())
/// ```
#[derive(Debug, Clone)]
pub struct AddressRange {
    next: Option<AddressValue>,
    start: AddressValue,
    end: AddressValue,
}

impl AddressRange {
    /// Fails with `FamilyMismatch` across families and `ReversedRange`
    /// when `start` is after `end`.
    pub fn new(start: AddressValue, end: AddressValue) -> Result<Self, ParseError> {
        if codec::compare(&start, &end)? == Ordering::Greater {
            tracing::debug!(%start, %end, "range start is after range end");
            return Err(ParseError::ReversedRange);
        }
        Ok(Self {
            next: Some(start),
            start,
            end,
        })
    }

    /// Parses both ends; a missing end means the range holds only `start`.
    pub fn parse(start: &str, end: Option<&str>) -> Result<Self, ParseError> {
        let start = codec::parse(start)?;
        let end = match end {
            Some(end) => codec::parse(end)?,
            None => start,
        };
        Self::new(start, end)
    }

    pub fn start(&self) -> AddressValue {
        self.start
    }

    pub fn end(&self) -> AddressValue {
        self.end
    }

    /// Addresses not yet yielded, or `None` if the count needs 129 bits.
    pub fn remaining(&self) -> Option<u128> {
        match self.next {
            Some(next) => (self.end.to_bits() - next.to_bits()).checked_add(1),
            None => Some(0),
        }
    }
}

impl Iterator for AddressRange {
    type Item = AddressValue;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = if current == self.end {
            None
        } else {
            current.increment().ok()
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining().map(usize::try_from) {
            Some(Ok(len)) => (len, Some(len)),
            _ => (usize::MAX, None),
        }
    }
}

impl FusedIterator for AddressRange {}
