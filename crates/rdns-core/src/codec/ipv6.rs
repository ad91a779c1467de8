use super::error::ParseError;
use super::layout;
use super::reader::TextReader;
use super::{ParseOptions, ipv4};

/// Hextet grammar with optional `::` elision and embedded IPv4 tail.
pub(crate) fn parse(text: &[u8], options: &ParseOptions) -> Result<[u8; layout::V6_LEN], ParseError> {
    if !(layout::V6_MIN_TEXT_LEN..=layout::V6_MAX_TEXT_LEN).contains(&text.len()) {
        return Err(ParseError::v6("length outside 2..=45"));
    }

    let mut reader = TextReader::new(text);
    let mut groups = Groups::default();

    if reader.eat(layout::V6_SEPARATOR) {
        if !reader.eat(layout::V6_SEPARATOR) {
            return Err(ParseError::v6("address starts with a single ':'"));
        }
        groups.elide()?;
        if reader.is_at_end() {
            return groups.expand();
        }
    }

    loop {
        let group_text = reader.rest();
        let digits = reader.read_hex_digits();

        if reader.peek() == Some(layout::V4_SEPARATOR) {
            let octets = ipv4::parse(group_text, options)
                .map_err(|_| ParseError::v6("invalid embedded IPv4 tail"))?;
            groups.push(u16::from_be_bytes([octets[0], octets[1]]))?;
            groups.push(u16::from_be_bytes([octets[2], octets[3]]))?;
            break;
        }

        if digits.is_empty() {
            return Err(ParseError::v6("empty group"));
        }
        if digits.len() > layout::V6_GROUP_MAX_DIGITS {
            return Err(ParseError::v6("group longer than 4 hex digits"));
        }
        groups.push(hex_value(digits))?;

        if reader.is_at_end() {
            break;
        }
        if !reader.eat(layout::V6_SEPARATOR) {
            return Err(ParseError::v6("unexpected character"));
        }
        if reader.eat(layout::V6_SEPARATOR) {
            groups.elide()?;
            if reader.is_at_end() {
                break;
            }
        } else if reader.is_at_end() {
            return Err(ParseError::v6("address ends with a single ':'"));
        }
    }

    groups.expand()
}

fn hex_value(digits: &[u8]) -> u16 {
    digits
        .iter()
        .fold(0u16, |acc, digit| (acc << 4) | u16::from(nibble(*digit)))
}

fn nibble(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        _ => 0,
    }
}

/// Groups seen before and after the `::`, kept apart until expansion.
#[derive(Default)]
struct Groups {
    head: [u16; layout::V6_GROUPS],
    head_len: usize,
    tail: [u16; layout::V6_GROUPS],
    tail_len: usize,
    elided: bool,
}

impl Groups {
    fn count(&self) -> usize {
        self.head_len + self.tail_len
    }

    fn push(&mut self, group: u16) -> Result<(), ParseError> {
        if self.count() >= layout::V6_GROUPS {
            return Err(ParseError::v6("more than 8 groups"));
        }
        if self.elided {
            self.tail[self.tail_len] = group;
            self.tail_len += 1;
        } else {
            self.head[self.head_len] = group;
            self.head_len += 1;
        }
        Ok(())
    }

    fn elide(&mut self) -> Result<(), ParseError> {
        if self.elided {
            return Err(ParseError::v6("more than one '::'"));
        }
        self.elided = true;
        Ok(())
    }

    fn expand(&self) -> Result<[u8; layout::V6_LEN], ParseError> {
        let count = self.count();
        if self.elided && count >= layout::V6_GROUPS {
            return Err(ParseError::v6("'::' must stand for at least one group"));
        }
        if !self.elided && count != layout::V6_GROUPS {
            return Err(ParseError::v6("expected 8 groups"));
        }

        let mut bytes = [0u8; layout::V6_LEN];
        let tail_start = layout::V6_GROUPS - self.tail_len;
        let placed = self.head[..self.head_len]
            .iter()
            .enumerate()
            .chain(
                self.tail[..self.tail_len]
                    .iter()
                    .enumerate()
                    .map(|(i, group)| (tail_start + i, group)),
            );
        for (slot, group) in placed {
            bytes[slot * 2..slot * 2 + 2].copy_from_slice(&group.to_be_bytes());
        }
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::parse;
    use crate::codec::error::ParseError;
    use crate::codec::{LeadingZeros, ParseOptions};

    fn v6(text: &str) -> Result<[u8; 16], ParseError> {
        parse(text.as_bytes(), &ParseOptions::default())
    }

    fn malformed(text: &str) -> bool {
        matches!(v6(text), Err(ParseError::MalformedV6 { .. }))
    }

    #[test]
    fn parse_full_form() {
        let bytes = v6("2001:0db8:0000:0000:0000:0000:0000:0001").unwrap();
        assert_eq!(
            bytes,
            [0x20, 0x01, 0x0d, 0xb8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x01]
        );
    }

    #[test]
    fn parse_all_zero_and_loopback() {
        assert_eq!(v6("::").unwrap(), [0u8; 16]);
        let mut loopback = [0u8; 16];
        loopback[15] = 1;
        assert_eq!(v6("::1").unwrap(), loopback);
    }

    #[test]
    fn elision_at_each_position() {
        let leading = v6("::2:3:4:5:6:7:8").unwrap();
        assert_eq!(&leading[..4], &[0, 0, 0, 2]);

        let trailing = v6("1:2:3:4:5:6:7::").unwrap();
        assert_eq!(&trailing[12..], &[0, 7, 0, 0]);

        let middle = v6("fe80::1:2").unwrap();
        assert_eq!(&middle[..2], &[0xfe, 0x80]);
        assert_eq!(&middle[12..], &[0, 1, 0, 2]);
    }

    #[test]
    fn hex_is_case_insensitive() {
        assert_eq!(v6("2001:DB8::aBcD").unwrap(), v6("2001:db8::abcd").unwrap());
    }

    #[test]
    fn embedded_ipv4_fills_last_four_bytes() {
        let bytes = v6("::ffff:127.0.0.1").unwrap();
        assert_eq!(&bytes[10..12], &[0xff, 0xff]);
        assert_eq!(&bytes[12..], &[127, 0, 0, 1]);

        let full = v6("1:2:3:4:5:6:10.0.0.1").unwrap();
        assert_eq!(&full[12..], &[10, 0, 0, 1]);
    }

    #[test]
    fn embedded_ipv4_follows_leading_zero_policy() {
        assert!(malformed("::ffff:127.0.0.01"));
        let options = ParseOptions {
            leading_zeros: LeadingZeros::Accept,
        };
        let bytes = parse(b"::ffff:127.0.0.01", &options).unwrap();
        assert_eq!(&bytes[12..], &[127, 0, 0, 1]);
    }

    #[test]
    fn reject_bad_embedded_ipv4() {
        assert!(malformed("::ffff:1.2.3"));
        assert!(malformed("::ffff:1.2.3.256"));
        assert!(malformed("::1.2.3.4:5"));
        assert!(malformed("1:2:3:4:5:6:7:1.2.3.4"));
    }

    #[test]
    fn reject_double_elision() {
        assert_eq!(v6("1::2::3").unwrap_err(), ParseError::v6("more than one '::'"));
        assert!(malformed("::1::"));
    }

    #[test]
    fn reject_group_count() {
        assert!(malformed("1:2:3:4:5:6:7"));
        assert!(malformed("1:2:3:4:5:6:7:8:9"));
        assert!(malformed("1:2:3:4:5:6:7:8::"));
        assert!(malformed("::1:2:3:4:5:6:7:8"));
    }

    #[test]
    fn reject_long_or_empty_groups() {
        assert_eq!(
            v6("12345::").unwrap_err(),
            ParseError::v6("group longer than 4 hex digits")
        );
        assert!(malformed(":::"));
        assert!(malformed("1:::2"));
        assert!(malformed(":1::2"));
        assert!(malformed("1::2:"));
    }

    #[test]
    fn reject_extraneous_characters() {
        assert!(malformed("1::g"));
        assert!(malformed("::1 "));
        assert!(malformed("fe80::1%eth0"));
        assert!(malformed("::-1"));
    }
}
