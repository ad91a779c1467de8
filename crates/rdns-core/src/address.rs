//! Binary address values produced by the codec.
//!
//! An [`AddressValue`] is a family tag fused with its payload, so a V4
//! value can never carry sixteen bytes. Values are immutable; stepping
//! returns a new value and reports exhaustion instead of wrapping.

use std::cmp::Ordering;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec::{self, error::ParseError, layout};

/// Address family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    V4,
    V6,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::V4 => f.write_str("IPv4"),
            Family::V6 => f.write_str("IPv6"),
        }
    }
}

/// IPv4 or IPv6 address in network byte order.
///
/// # Examples
/// ```
/// use rdns_core::{AddressValue, Family};
///
/// let addr: AddressValue = "192.0.2.255".parse()?;
/// assert_eq!(addr.family(), Family::V4);
/// assert_eq!(addr.increment()?.to_string(), "192.0.3.0");
/// # Ok::<(), rdns_core::ParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressValue {
    V4([u8; layout::V4_LEN]),
    V6([u8; layout::V6_LEN]),
}

impl AddressValue {
    pub const fn from_v4_bytes(bytes: [u8; layout::V4_LEN]) -> Self {
        AddressValue::V4(bytes)
    }

    pub const fn from_v6_bytes(bytes: [u8; layout::V6_LEN]) -> Self {
        AddressValue::V6(bytes)
    }

    pub const fn family(&self) -> Family {
        match self {
            AddressValue::V4(_) => Family::V4,
            AddressValue::V6(_) => Family::V6,
        }
    }

    /// Raw bytes, most significant first.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            AddressValue::V4(bytes) => bytes,
            AddressValue::V6(bytes) => bytes,
        }
    }

    /// The address as an unsigned integer of its family's width.
    pub fn to_bits(&self) -> u128 {
        match self {
            AddressValue::V4(bytes) => u128::from(u32::from_be_bytes(*bytes)),
            AddressValue::V6(bytes) => u128::from_be_bytes(*bytes),
        }
    }

    /// See [`codec::compare`].
    pub fn compare(&self, other: &AddressValue) -> Result<Ordering, ParseError> {
        codec::compare(self, other)
    }

    /// The next address, or `RangeOverflow` past the all-ones address.
    pub fn increment(&self) -> Result<AddressValue, ParseError> {
        self.step(step_up)
    }

    /// The previous address, or `RangeOverflow` below the all-zero address.
    pub fn decrement(&self) -> Result<AddressValue, ParseError> {
        self.step(step_down)
    }

    fn step(&self, apply: fn(&mut [u8]) -> bool) -> Result<AddressValue, ParseError> {
        let mut next = *self;
        let in_range = match &mut next {
            AddressValue::V4(bytes) => apply(bytes),
            AddressValue::V6(bytes) => apply(bytes),
        };
        if !in_range {
            return Err(ParseError::RangeOverflow {
                family: self.family(),
            });
        }
        Ok(next)
    }
}

/// Adds one with carry from the last byte; false when every byte overflowed.
fn step_up(bytes: &mut [u8]) -> bool {
    for byte in bytes.iter_mut().rev() {
        let (value, carry) = byte.overflowing_add(1);
        *byte = value;
        if !carry {
            return true;
        }
    }
    false
}

fn step_down(bytes: &mut [u8]) -> bool {
    for byte in bytes.iter_mut().rev() {
        let (value, borrow) = byte.overflowing_sub(1);
        *byte = value;
        if !borrow {
            return true;
        }
    }
    false
}

impl PartialOrd for AddressValue {
    /// `None` across families.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        codec::compare(self, other).ok()
    }
}

impl fmt::Display for AddressValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressValue::V4(bytes) => codec::write_v4(f, bytes),
            AddressValue::V6(bytes) => codec::write_v6(f, bytes),
        }
    }
}

impl FromStr for AddressValue {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        codec::parse(s)
    }
}

impl From<Ipv4Addr> for AddressValue {
    fn from(addr: Ipv4Addr) -> Self {
        AddressValue::V4(addr.octets())
    }
}

impl From<Ipv6Addr> for AddressValue {
    fn from(addr: Ipv6Addr) -> Self {
        AddressValue::V6(addr.octets())
    }
}

impl From<IpAddr> for AddressValue {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(addr) => addr.into(),
            IpAddr::V6(addr) => addr.into(),
        }
    }
}

impl From<AddressValue> for IpAddr {
    fn from(addr: AddressValue) -> Self {
        match addr {
            AddressValue::V4(bytes) => IpAddr::V4(Ipv4Addr::from(bytes)),
            AddressValue::V6(bytes) => IpAddr::V6(Ipv6Addr::from(bytes)),
        }
    }
}

impl Serialize for AddressValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AddressValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        codec::parse(&text).map_err(serde::de::Error::custom)
    }
}
