//! Serde `with` module for XDR fixed-length opaque data (`opaque name[N]`).
//!
//! Fixed-length opaque is written as the raw bytes followed by 0–3 zero
//! padding bytes, with no length prefix. Stellar uses it for keys and hashes
//! (`uint256`, `Hash`) and for asset codes (`AssetCode4`, `AssetCode12`).
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use stellar_xdr_model::{from_bytes, to_bytes};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct Code {
//!     #[serde(with = "stellar_xdr_model::fixed_opaque")]
//!     code: [u8; 4],
//! }
//!
//! let bytes = to_bytes(&Code { code: *b"USD\0" }).unwrap();
//! assert_eq!(bytes, b"USD\0");
//! assert_eq!(from_bytes::<Code>(&bytes).unwrap(), Code { code: *b"USD\0" });
//! ```
//!
//! Without this module serde would write `[u8; 4]` as four XDR unsigned
//! ints, sixteen bytes in total.
//!
//! Both directions wrap the array in a reserved newtype name. The XDR codec
//! recognises it and reads or writes the bytes bare; other formats ignore it.

use std::fmt;

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};

pub fn serialize<const N: usize, S: Serializer>(
    value: &[u8; N],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_newtype_struct(crate::FIXED_OPAQUE_TOKEN, &Raw(value))
}

pub fn deserialize<'de, const N: usize, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<[u8; N], D::Error> {
    deserializer.deserialize_newtype_struct(crate::FIXED_OPAQUE_TOKEN, Exact::<N>)
}

struct Raw<'a>(&'a [u8]);

impl Serialize for Raw<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(self.0)
    }
}

struct Exact<const N: usize>;

impl<'de, const N: usize> Visitor<'de> for Exact<N> {
    type Value = [u8; N];

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{N} bytes of fixed-length opaque")
    }

    fn visit_newtype_struct<D: Deserializer<'de>>(self, inner: D) -> Result<[u8; N], D::Error> {
        inner.deserialize_tuple(N, self)
    }

    // Formats that keep byte strings hand them over whole.
    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<[u8; N], E> {
        v.try_into()
            .map_err(|_| E::invalid_length(v.len(), &self))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<[u8; N], A::Error> {
        let mut out = [0u8; N];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(i, &self))?;
        }
        Ok(out)
    }
}
