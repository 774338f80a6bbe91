//! XDR deserializer.
//!
//! XDR is not self-describing: every `deserialize_*` call states what it
//! expects and the [`Deserializer`] reads exactly that many bytes. Unions are
//! read through `deserialize_tuple`, which lets the union's visitor pull the
//! discriminant and then only the payload its arm calls for.
//!
//! Every compound value (option, array, tuple, struct, union) counts towards
//! [`DecodeOptions::max_depth`], which bounds recursive types such as claim
//! predicates.

use serde::de::{
    self, Deserialize, DeserializeOwned, DeserializeSeed, EnumAccess, SeqAccess, VariantAccess,
    Visitor,
};

use crate::codec::DecodeOptions;
use crate::error::{Error, Result};

/// Decode a value with the default [`DecodeOptions`], leaving any trailing
/// bytes unread. [`crate::XdrCodec::from_xdr`] rejects them instead.
pub fn from_bytes<T: DeserializeOwned>(input: &[u8]) -> Result<T> {
    T::deserialize(&mut Deserializer::new(input))
}

/// Decode a value and hand back whatever follows it.
pub fn from_bytes_partial<'de, T: Deserialize<'de>>(input: &'de [u8]) -> Result<(T, &'de [u8])> {
    let mut de = Deserializer::new(input);
    let value = T::deserialize(&mut de)?;
    Ok((value, de.remaining()))
}

/// The XDR deserializer: a cursor over a borrowed buffer.
pub struct Deserializer<'de> {
    input: &'de [u8],
    options: DecodeOptions,
    depth: u32,
    // Set by the fixed-opaque newtype; the next tuple is read as raw bytes.
    fixed_opaque: bool,
}

macro_rules! take_be {
    ($($method:ident -> $ty:ty;)*) => {
        $(
            fn $method(&mut self) -> Result<$ty> {
                let bytes = self.take(std::mem::size_of::<$ty>())?;
                let mut raw = [0u8; std::mem::size_of::<$ty>()];
                raw.copy_from_slice(bytes);
                Ok(<$ty>::from_be_bytes(raw))
            }
        )*
    };
}

impl<'de> Deserializer<'de> {
    pub fn new(input: &'de [u8]) -> Self {
        Self::with_options(input, DecodeOptions::default())
    }

    pub fn with_options(input: &'de [u8], options: DecodeOptions) -> Self {
        Deserializer {
            input,
            options,
            depth: 0,
            fixed_opaque: false,
        }
    }

    /// The bytes not read yet.
    pub fn remaining(&self) -> &'de [u8] {
        self.input
    }

    fn take(&mut self, n: usize) -> Result<&'de [u8]> {
        if n > self.input.len() {
            return Err(Error::UnexpectedEof);
        }
        let (head, rest) = self.input.split_at(n);
        self.input = rest;
        Ok(head)
    }

    take_be! {
        int -> i32;
        uint -> u32;
        hyper -> i64;
        uhyper -> u64;
    }

    /// A length or count prefix that cannot claim more than `unit`-sized
    /// items of what is left.
    fn count(&mut self, unit: usize) -> Result<usize> {
        let n = self.uint()? as usize;
        if n > self.input.len() / unit {
            return Err(Error::UnexpectedEof);
        }
        Ok(n)
    }

    /// `n` data bytes, then their padding to a 4-byte boundary.
    fn padded(&mut self, n: usize) -> Result<&'de [u8]> {
        let data = self.take(n)?;
        let pad = self.take((4 - n % 4) % 4)?;
        if self.options.strict_padding && pad.iter().any(|&b| b != 0) {
            return Err(Error::InvalidPadding);
        }
        Ok(data)
    }

    fn opaque(&mut self) -> Result<&'de [u8]> {
        let n = self.count(1)?;
        self.padded(n)
    }

    fn nested<T>(&mut self, read: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= self.options.max_depth {
            return Err(Error::DepthLimitExceeded(self.options.max_depth));
        }
        self.depth += 1;
        let out = read(self);
        self.depth -= 1;
        out
    }
}

impl<'de> de::Deserializer<'de> for &mut Deserializer<'de> {
    type Error = Error;

    fn deserialize_any<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        Err(Error::Unsupported("deserialize_any (XDR is not self-describing)"))
    }

    fn deserialize_bool<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        match self.uint()? {
            0 => visitor.visit_bool(false),
            1 => visitor.visit_bool(true),
            v => Err(Error::InvalidBool(v)),
        }
    }

    // Narrow integers travel as full XDR ints; the visitor range-checks them.
    fn deserialize_i8<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        self.deserialize_i32(visitor)
    }

    fn deserialize_i16<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        self.deserialize_i32(visitor)
    }

    fn deserialize_i32<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_i32(self.int()?)
    }

    fn deserialize_i64<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_i64(self.hyper()?)
    }

    fn deserialize_u8<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        self.deserialize_u32(visitor)
    }

    fn deserialize_u16<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        self.deserialize_u32(visitor)
    }

    fn deserialize_u32<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_u32(self.uint()?)
    }

    fn deserialize_u64<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_u64(self.uhyper()?)
    }

    fn deserialize_f32<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        Err(Error::Unsupported("f32"))
    }

    fn deserialize_f64<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        Err(Error::Unsupported("f64"))
    }

    fn deserialize_char<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        let c = char::from_u32(self.uint()?).ok_or(Error::InvalidString)?;
        visitor.visit_char(c)
    }

    fn deserialize_str<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        let s = std::str::from_utf8(self.opaque()?).map_err(|_| Error::InvalidString)?;
        visitor.visit_borrowed_str(s)
    }

    fn deserialize_string<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        self.deserialize_str(visitor)
    }

    fn deserialize_bytes<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_borrowed_bytes(self.opaque()?)
    }

    fn deserialize_byte_buf<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        self.deserialize_bytes(visitor)
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        match self.uint()? {
            0 => visitor.visit_none(),
            1 => self.nested(|de| visitor.visit_some(de)),
            v => Err(Error::InvalidOption(v)),
        }
    }

    fn deserialize_unit<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_unit()
    }

    fn deserialize_unit_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value> {
        visitor.visit_unit()
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        name: &'static str,
        visitor: V,
    ) -> Result<V::Value> {
        self.fixed_opaque = name == crate::FIXED_OPAQUE_TOKEN;
        let out = visitor.visit_newtype_struct(&mut *self);
        self.fixed_opaque = false;
        out
    }

    fn deserialize_seq<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        // No element is shorter than four bytes.
        let count = self.count(4)?;
        self.nested(|de| visitor.visit_seq(Elements { de, left: count }))
    }

    fn deserialize_tuple<V: Visitor<'de>>(self, len: usize, visitor: V) -> Result<V::Value> {
        if std::mem::take(&mut self.fixed_opaque) {
            let bytes = self.padded(len)?;
            return visitor.visit_seq(de::value::SeqDeserializer::<_, Error>::new(
                bytes.iter().copied(),
            ));
        }
        self.nested(|de| visitor.visit_seq(Elements { de, left: len }))
    }

    fn deserialize_tuple_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        len: usize,
        visitor: V,
    ) -> Result<V::Value> {
        self.deserialize_tuple(len, visitor)
    }

    fn deserialize_map<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        Err(Error::Unsupported("map"))
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value> {
        self.deserialize_tuple(fields.len(), visitor)
    }

    fn deserialize_enum<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value> {
        self.nested(|de| visitor.visit_enum(Variant { de }))
    }

    fn deserialize_identifier<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_u32(self.uint()?)
    }

    fn deserialize_ignored_any<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        Err(Error::Unsupported("deserialize_ignored_any (XDR is not self-describing)"))
    }

    fn is_human_readable(&self) -> bool {
        false
    }
}

/// Arrays, tuples and struct fields: `left` more values back to back.
struct Elements<'a, 'de> {
    de: &'a mut Deserializer<'de>,
    left: usize,
}

impl<'de> SeqAccess<'de> for Elements<'_, 'de> {
    type Error = Error;

    fn next_element_seed<T: DeserializeSeed<'de>>(&mut self, seed: T) -> Result<Option<T::Value>> {
        if self.left == 0 {
            return Ok(None);
        }
        self.left -= 1;
        seed.deserialize(&mut *self.de).map(Some)
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.left)
    }
}

/// Plain serde enums: a 4-byte variant index, then the variant's fields.
struct Variant<'a, 'de> {
    de: &'a mut Deserializer<'de>,
}

impl<'de> EnumAccess<'de> for Variant<'_, 'de> {
    type Error = Error;
    type Variant = Self;

    fn variant_seed<V: DeserializeSeed<'de>>(self, seed: V) -> Result<(V::Value, Self)> {
        let index = self.de.uint()?;
        let value = seed.deserialize(de::value::U32Deserializer::<Error>::new(index))?;
        Ok((value, self))
    }
}

impl<'de> VariantAccess<'de> for Variant<'_, 'de> {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        Ok(())
    }

    fn newtype_variant_seed<T: DeserializeSeed<'de>>(self, seed: T) -> Result<T::Value> {
        seed.deserialize(self.de)
    }

    fn tuple_variant<V: Visitor<'de>>(self, len: usize, visitor: V) -> Result<V::Value> {
        visitor.visit_seq(Elements { de: self.de, left: len })
    }

    fn struct_variant<V: Visitor<'de>>(
        self,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value> {
        visitor.visit_seq(Elements {
            de: self.de,
            left: fields.len(),
        })
    }
}
