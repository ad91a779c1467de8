/// Longest accepted text plus one reserved terminator slot (INET6_ADDRSTRLEN).
pub const MAX_TEXT_LEN: usize = 46;

pub const V4_LEN: usize = 4;
pub const V6_LEN: usize = 16;

pub const V4_MIN_TEXT_LEN: usize = 7; // "0.0.0.0"
pub const V4_MAX_TEXT_LEN: usize = 15; // "255.255.255.255"
pub const V6_MIN_TEXT_LEN: usize = 2; // "::"
pub const V6_MAX_TEXT_LEN: usize = 45; // "ffff:ffff:ffff:ffff:ffff:ffff:255.255.255.255"

pub const V4_GROUP_MAX_DIGITS: usize = 3;
pub const V4_GROUP_MAX_VALUE: u16 = 255;

pub const V6_GROUPS: usize = 8;
pub const V6_GROUP_MAX_DIGITS: usize = 4;

pub const V4_SEPARATOR: u8 = b'.';
pub const V6_SEPARATOR: u8 = b':';
