//! On-disk schema for a single credit record.
//!
//! The file layout is declared exactly once, as [`CreditLayout`], and encoded
//! with bincode's fixed-int little-endian format. Fixed-size arrays carry no
//! length prefix, so the encoding is a plain concatenation of the fields:
//!
//! ```text
//! offset  width  field
//!      0      4  account_number   i32 LE
//!      4     16  last_name        UTF-8, NUL-padded
//!     20      4  padding          zero on write, ignored on read
//!     24      8  balance          f64 LE
//! ```
//!
//! The padding keeps `balance` on an 8-byte boundary, matching what a C
//! compiler produces for `{ int; char[16]; double; }`.
use crate::error::{NameError, StoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum length of a last name, in bytes.
pub const NAME_CAPACITY: usize = 16;

pub const ACCOUNT_OFFSET: usize = 0;
pub const NAME_OFFSET: usize = ACCOUNT_OFFSET + 4;
pub const PADDING_OFFSET: usize = NAME_OFFSET + NAME_CAPACITY;
pub const PADDING_LEN: usize = 4;
pub const BALANCE_OFFSET: usize = PADDING_OFFSET + PADDING_LEN;

/// Encoded size of one [`Credit`].
pub const RECORD_SIZE: usize = BALANCE_OFFSET + 8;

#[derive(Debug, Serialize, Deserialize)]
struct CreditLayout {
    account_number: i32,
    last_name: [u8; NAME_CAPACITY],
    padding: [u8; PADDING_LEN],
    balance: f64,
}

/// A last name frozen into a fixed-capacity buffer.
///
/// Holds at most [`NAME_CAPACITY`] bytes of UTF-8 with no NUL bytes. Longer
/// names are rejected, never truncated.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LastName {
    bytes: [u8; NAME_CAPACITY],
    len: usize,
}

impl LastName {
    pub fn new(name: &str) -> Result<Self, NameError> {
        let raw = name.as_bytes();
        if raw.len() > NAME_CAPACITY {
            return Err(NameError::TooLong { len: raw.len(), capacity: NAME_CAPACITY });
        }
        if raw.contains(&0) {
            return Err(NameError::ContainsNul);
        }
        let mut bytes = [0u8; NAME_CAPACITY];
        bytes[..raw.len()].copy_from_slice(raw);
        Ok(Self { bytes, len: raw.len() })
    }

    pub fn as_str(&self) -> &str {
        // only ever built from a &str or a checked field
        std::str::from_utf8(&self.bytes[..self.len]).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Parse the raw name field: text runs to the first NUL or the end of the field.
    fn from_field(field: [u8; NAME_CAPACITY]) -> Result<Self, NameError> {
        let len = field.iter().position(|&b| b == 0).unwrap_or(NAME_CAPACITY);
        std::str::from_utf8(&field[..len]).map_err(|_| NameError::NotUtf8)?;
        let mut bytes = [0u8; NAME_CAPACITY];
        bytes[..len].copy_from_slice(&field[..len]);
        Ok(Self { bytes, len })
    }
}

impl FromStr for LastName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for LastName {
    type Error = NameError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl fmt::Debug for LastName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LastName").field(&self.as_str()).finish()
    }
}

impl fmt::Display for LastName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Credit {
    pub account_number: i32,
    pub last_name: LastName,
    pub balance: f64,
}

impl Credit {
    pub fn new(account_number: i32, last_name: &str, balance: f64) -> Result<Self, NameError> {
        Ok(Self { account_number, last_name: LastName::new(last_name)?, balance })
    }

    /// Encode into the fixed on-disk layout.
    pub fn encode(&self) -> StoreResult<[u8; RECORD_SIZE]> {
        let layout = CreditLayout {
            account_number: self.account_number,
            last_name: self.last_name.bytes,
            padding: [0u8; PADDING_LEN],
            balance: self.balance,
        };
        let mut out = [0u8; RECORD_SIZE];
        bincode::serialize_into(&mut out[..], &layout)?;
        Ok(out)
    }

    /// Decode one record from its fixed on-disk layout. Padding bytes are ignored.
    pub fn decode(bytes: &[u8; RECORD_SIZE]) -> StoreResult<Self> {
        let layout: CreditLayout = bincode::deserialize(&bytes[..])?;
        Ok(Self {
            account_number: layout.account_number,
            last_name: LastName::from_field(layout.last_name)?,
            balance: layout.balance,
        })
    }
}

impl fmt::Display for Credit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.account_number, self.last_name, self.balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;

    fn make_bytes(account: i32, name: &[u8], padding: [u8; PADDING_LEN], balance: f64) -> [u8; RECORD_SIZE] {
        let mut bytes = [0u8; RECORD_SIZE];
        bytes[ACCOUNT_OFFSET..NAME_OFFSET].copy_from_slice(&account.to_le_bytes());
        bytes[NAME_OFFSET..NAME_OFFSET + name.len()].copy_from_slice(name);
        bytes[PADDING_OFFSET..BALANCE_OFFSET].copy_from_slice(&padding);
        bytes[BALANCE_OFFSET..].copy_from_slice(&balance.to_le_bytes());
        bytes
    }

    #[test]
    fn layout_size_is_pinned() {
        assert_eq!(RECORD_SIZE, 32);
        assert_eq!(BALANCE_OFFSET % 8, 0);
        let layout = CreditLayout {
            account_number: 0,
            last_name: [0u8; NAME_CAPACITY],
            padding: [0u8; PADDING_LEN],
            balance: 0.0,
        };
        assert_eq!(bincode::serialized_size(&layout).unwrap(), RECORD_SIZE as u64);
    }

    #[test]
    fn encode_matches_offset_table() {
        let c = Credit::new(255, "Dow", 1000.10).unwrap();
        let bytes = c.encode().unwrap();
        assert_eq!(bytes, make_bytes(255, b"Dow", [0u8; PADDING_LEN], 1000.10));
    }

    #[test]
    fn decode_ignores_padding() {
        let bytes = make_bytes(-7, b"Smith", [0xAA; PADDING_LEN], -3.5);
        let c = Credit::decode(&bytes).unwrap();
        assert_eq!(c.account_number, -7);
        assert_eq!(c.last_name.as_str(), "Smith");
        assert_eq!(c.balance, -3.5);
    }

    #[test]
    fn name_at_capacity_keeps_every_byte() {
        let name = "ABCDEFGHIJKLMNOP";
        assert_eq!(name.len(), NAME_CAPACITY);
        let c = Credit::new(1, name, 0.0).unwrap();
        let bytes = c.encode().unwrap();
        // no terminator inside the field
        assert!(!bytes[NAME_OFFSET..PADDING_OFFSET].contains(&0));
        let back = Credit::decode(&bytes).unwrap();
        assert_eq!(back.last_name.as_str(), name);
        assert_eq!(back, c);
    }

    #[test]
    fn name_over_capacity_rejected() {
        let err = LastName::new("ABCDEFGHIJKLMNOPQ").unwrap_err();
        assert_eq!(err, NameError::TooLong { len: 17, capacity: NAME_CAPACITY });
    }

    #[test]
    fn capacity_counts_bytes_not_chars() {
        // 8 chars, 16 bytes
        assert!(LastName::new("ÄÖÜÄÖÜÄÖ").is_ok());
        // 9 chars, 18 bytes
        assert!(matches!(LastName::new("ÄÖÜÄÖÜÄÖÜ"), Err(NameError::TooLong { len: 18, .. })));
    }

    #[test]
    fn nul_in_name_rejected() {
        assert_eq!(LastName::new("Do\0w").unwrap_err(), NameError::ContainsNul);
    }

    #[test]
    fn invalid_utf8_field_fails_decode() {
        let bytes = make_bytes(1, &[0xFF, 0xFE, b'x'], [0u8; PADDING_LEN], 1.0);
        match Credit::decode(&bytes) {
            Err(StoreError::Name(NameError::NotUtf8)) => {}
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn bytes_after_terminator_are_dropped() {
        let bytes = make_bytes(2, b"Lee\0junk", [0u8; PADDING_LEN], 2.0);
        let c = Credit::decode(&bytes).unwrap();
        assert_eq!(c.last_name, LastName::new("Lee").unwrap());
    }

    #[test]
    fn display_matches_reader_output() {
        let c = Credit::new(255, "Dow", 1000.10).unwrap();
        assert_eq!(c.to_string(), "255, Dow, 1000.1");
        assert_eq!(format!("{:?}", c.last_name), "LastName(\"Dow\")");
    }

    #[test]
    fn empty_name_is_allowed() {
        let c = Credit::new(0, "", 0.0).unwrap();
        assert!(c.last_name.is_empty());
        assert_eq!(Credit::decode(&c.encode().unwrap()).unwrap(), c);
    }
}
