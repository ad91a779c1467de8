use std::fmt::{self, Write};

use super::layout;

pub(crate) fn write_v4(out: &mut impl Write, octets: &[u8; layout::V4_LEN]) -> fmt::Result {
    write!(out, "{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3])
}

/// RFC 5952 text: lowercase, no leading zeros, leftmost longest zero run
/// (two groups or more) written as `::`.
pub(crate) fn write_v6(out: &mut impl Write, bytes: &[u8; layout::V6_LEN]) -> fmt::Result {
    let groups = to_groups(bytes);
    let elided = longest_zero_run(&groups);

    let mut index = 0;
    let mut needs_separator = false;
    while index < layout::V6_GROUPS {
        if let Some((start, len)) = elided {
            if index == start {
                out.write_str("::")?;
                index += len;
                needs_separator = false;
                continue;
            }
        }
        if needs_separator {
            out.write_char(':')?;
        }
        write!(out, "{:x}", groups[index])?;
        needs_separator = true;
        index += 1;
    }
    Ok(())
}

fn to_groups(bytes: &[u8; layout::V6_LEN]) -> [u16; layout::V6_GROUPS] {
    let mut groups = [0u16; layout::V6_GROUPS];
    for (group, pair) in groups.iter_mut().zip(bytes.chunks_exact(2)) {
        *group = u16::from_be_bytes([pair[0], pair[1]]);
    }
    groups
}

/// Start and length of the leftmost longest run of at least two zero groups.
fn longest_zero_run(groups: &[u16; layout::V6_GROUPS]) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    let mut index = 0;
    while index < groups.len() {
        if groups[index] != 0 {
            index += 1;
            continue;
        }
        let start = index;
        while index < groups.len() && groups[index] == 0 {
            index += 1;
        }
        let len = index - start;
        if len >= 2 && best.is_none_or(|(_, best_len)| len > best_len) {
            best = Some((start, len));
        }
    }
    best
}
