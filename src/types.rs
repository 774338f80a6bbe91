//! Protocol primitives shared across the catalog: hashes, amounts, sequence
//! numbers and length-bounded containers, plus the [`Coerce`] conversions
//! used by operation builders.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::codec::Validate;
use crate::error::{Error, Result};

/// Conversion applied by builder setters.
///
/// Every type coerces from itself; catalog types add the textual and raw
/// forms callers commonly hold (`"10"` for an amount, a `G...` address for an
/// account). A failed conversion is [`Error::InvalidInput`].
pub trait Coerce<T> {
    fn coerce(self) -> Result<T>;
}

impl<T> Coerce<T> for T {
    fn coerce(self) -> Result<T> {
        Ok(self)
    }
}

/// XDR `Hash`: 32 opaque bytes. Displayed as lowercase hex.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Hash(#[serde(with = "crate::fixed_opaque")] pub [u8; 32]);

/// XDR `uint256`, the raw form of ed25519 keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Uint256(#[serde(with = "crate::fixed_opaque")] pub [u8; 32]);

/// Liquidity pool identifier.
pub type PoolId = Hash;

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl FromStr for Hash {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut out = [0u8; 32];
        hex::decode_to_slice(s, &mut out)
            .map_err(|err| Error::invalid_input(format!("`{s}` is not a 32-byte hex hash: {err}")))?;
        Ok(Hash(out))
    }
}

impl From<[u8; 32]> for Hash {
    fn from(bytes: [u8; 32]) -> Self {
        Hash(bytes)
    }
}

impl From<[u8; 32]> for Uint256 {
    fn from(bytes: [u8; 32]) -> Self {
        Uint256(bytes)
    }
}

impl Coerce<Hash> for &str {
    fn coerce(self) -> Result<Hash> {
        self.parse()
    }
}

impl Coerce<Hash> for [u8; 32] {
    fn coerce(self) -> Result<Hash> {
        Ok(Hash(self))
    }
}

impl Coerce<Uint256> for [u8; 32] {
    fn coerce(self) -> Result<Uint256> {
        Ok(Uint256(self))
    }
}

/// Account sequence number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SequenceNumber(pub i64);

impl SequenceNumber {
    pub fn new(value: i64) -> Self {
        SequenceNumber(value)
    }
}

impl Coerce<SequenceNumber> for i64 {
    fn coerce(self) -> Result<SequenceNumber> {
        Ok(SequenceNumber(self))
    }
}

/// Stroops per lumen (and per unit of any asset).
pub const STROOPS_PER_UNIT: i64 = 10_000_000;

/// An `int64` amount in stroops.
///
/// Parses from and displays as a decimal with up to seven fractional digits,
/// so `"10"` is `100_000_000` stroops.
///
/// ```rust
/// use stellar_xdr_model::types::Amount;
///
/// let amount: Amount = "12.5".parse()?;
/// assert_eq!(amount.stroops(), 125_000_000);
/// assert_eq!(amount.to_string(), "12.5");
/// # Ok::<(), stellar_xdr_model::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    pub const MAX: Amount = Amount(i64::MAX);

    pub fn from_stroops(stroops: i64) -> Self {
        Amount(stroops)
    }

    pub fn stroops(self) -> i64 {
        self.0
    }
}

impl FromStr for Amount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::invalid_input(format!("`{s}` is not a valid amount"));
        let (whole, frac) = match s.split_once('.') {
            Some((_, "")) => return Err(invalid()),
            Some(parts) => parts,
            None => (s, ""),
        };
        let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty() || frac.len() > 7 || !digits(whole) || !digits(frac) {
            return Err(invalid());
        }
        let whole: i64 = whole.parse().map_err(|_| invalid())?;
        let frac: i64 = if frac.is_empty() {
            0
        } else {
            format!("{frac:0<7}").parse().map_err(|_| invalid())?
        };
        whole
            .checked_mul(STROOPS_PER_UNIT)
            .and_then(|v| v.checked_add(frac))
            .map(Amount)
            .ok_or_else(invalid)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let unit = STROOPS_PER_UNIT.unsigned_abs();
        let frac = abs % unit;
        if frac == 0 {
            return write!(f, "{sign}{}", abs / unit);
        }
        let frac = format!("{frac:07}");
        write!(f, "{sign}{}.{}", abs / unit, frac.trim_end_matches('0'))
    }
}

impl Coerce<Amount> for &str {
    fn coerce(self) -> Result<Amount> {
        self.parse()
    }
}

impl Coerce<Amount> for String {
    fn coerce(self) -> Result<Amount> {
        self.parse()
    }
}

/// XDR `string<MAX>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoundedString<const MAX: usize>(String);

/// `string32`, e.g. a home domain.
pub type String32 = BoundedString<32>;
/// `string64`, e.g. a data entry name.
pub type String64 = BoundedString<64>;

impl<const MAX: usize> BoundedString<MAX> {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.len() > MAX {
            return Err(Error::invalid_input(format!(
                "string of {} bytes exceeds the {MAX}-byte limit",
                value.len()
            )));
        }
        Ok(BoundedString(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl<const MAX: usize> fmt::Display for BoundedString<MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<const MAX: usize> Coerce<BoundedString<MAX>> for &str {
    fn coerce(self) -> Result<BoundedString<MAX>> {
        BoundedString::new(self)
    }
}

impl<const MAX: usize> Coerce<BoundedString<MAX>> for String {
    fn coerce(self) -> Result<BoundedString<MAX>> {
        BoundedString::new(self)
    }
}

impl<const MAX: usize> Serialize for BoundedString<MAX> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de, const MAX: usize> Deserialize<'de> for BoundedString<MAX> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        if value.len() > MAX {
            return Err(de::Error::invalid_length(
                value.len(),
                &format!("at most {MAX} bytes").as_str(),
            ));
        }
        Ok(BoundedString(value))
    }
}

impl<const MAX: usize> Validate for BoundedString<MAX> {}

/// XDR `opaque<MAX>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BoundedBytes<const MAX: usize>(Vec<u8>);

/// `DataValue`, the value of a data entry.
pub type DataValue = BoundedBytes<64>;

impl<const MAX: usize> BoundedBytes<MAX> {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = bytes.into();
        if bytes.len() > MAX {
            return Err(Error::invalid_input(format!(
                "{} bytes exceed the {MAX}-byte limit",
                bytes.len()
            )));
        }
        Ok(BoundedBytes(bytes))
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

impl<const MAX: usize> Coerce<BoundedBytes<MAX>> for &[u8] {
    fn coerce(self) -> Result<BoundedBytes<MAX>> {
        BoundedBytes::new(self)
    }
}

impl<const MAX: usize> Coerce<BoundedBytes<MAX>> for Vec<u8> {
    fn coerce(self) -> Result<BoundedBytes<MAX>> {
        BoundedBytes::new(self)
    }
}

impl<const MAX: usize> Coerce<BoundedBytes<MAX>> for &str {
    fn coerce(self) -> Result<BoundedBytes<MAX>> {
        BoundedBytes::new(self.as_bytes())
    }
}

impl<const MAX: usize> Serialize for BoundedBytes<MAX> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.0)
    }
}

struct BytesVisitor<const MAX: usize>;

impl<'de, const MAX: usize> Visitor<'de> for BytesVisitor<MAX> {
    type Value = BoundedBytes<MAX>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at most {MAX} opaque bytes")
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> std::result::Result<Self::Value, E> {
        if v.len() > MAX {
            return Err(E::invalid_length(v.len(), &self));
        }
        Ok(BoundedBytes(v.to_vec()))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error> {
        let mut bytes = Vec::new();
        while let Some(b) = seq.next_element::<u8>()? {
            bytes.push(b);
        }
        self.visit_bytes(&bytes)
    }
}

impl<'de, const MAX: usize> Deserialize<'de> for BoundedBytes<MAX> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_byte_buf(BytesVisitor::<MAX>)
    }
}

impl<const MAX: usize> Validate for BoundedBytes<MAX> {}

/// XDR `T<MAX>`: a variable-length array with an upper bound.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoundedVec<T, const MAX: usize>(Vec<T>);

impl<T, const MAX: usize> Default for BoundedVec<T, MAX> {
    fn default() -> Self {
        BoundedVec(Vec::new())
    }
}

impl<T, const MAX: usize> BoundedVec<T, MAX> {
    pub fn new(items: Vec<T>) -> Result<Self> {
        if items.len() > MAX {
            return Err(Error::invalid_input(format!(
                "{} elements exceed the limit of {MAX}",
                items.len()
            )));
        }
        Ok(BoundedVec(items))
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T, const MAX: usize> Coerce<BoundedVec<T, MAX>> for Vec<T> {
    fn coerce(self) -> Result<BoundedVec<T, MAX>> {
        BoundedVec::new(self)
    }
}

impl<T: Serialize, const MAX: usize> Serialize for BoundedVec<T, MAX> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>, const MAX: usize> Deserialize<'de> for BoundedVec<T, MAX> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        if items.len() > MAX {
            return Err(de::Error::invalid_length(
                items.len(),
                &format!("at most {MAX} elements").as_str(),
            ));
        }
        Ok(BoundedVec(items))
    }
}

impl<T: Validate, const MAX: usize> Validate for BoundedVec<T, MAX> {
    fn validate(&self) -> Result<()> {
        self.0.validate()
    }
}

impl_validate!(Hash, Uint256, SequenceNumber, Amount);
