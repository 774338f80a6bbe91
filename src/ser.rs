//! XDR serializer.
//!
//! The [`Serializer`] writes Stellar's flavour of RFC 4506 into any
//! `W: std::io::Write`: every item is big-endian and padded to a multiple of
//! four bytes. Stellar's `.x` files never use floating point or maps, so those
//! parts of the serde data model are rejected with [`Error::Unsupported`].
//!
//! | serde call                 | bytes on the wire                          |
//! |----------------------------|--------------------------------------------|
//! | `bool`                     | 4-byte `0` / `1`                           |
//! | `i8`..`i32`, `u8`..`u32`   | 4-byte int                                 |
//! | `i64`, `u64`               | 8-byte hyper                               |
//! | `str`, `bytes`             | 4-byte length + data + zero padding        |
//! | `none` / `some(v)`         | 4-byte `0` / 4-byte `1` + `v`              |
//! | `unit`                     | nothing (XDR `void`)                       |
//! | seq                        | 4-byte count + elements                    |
//! | tuple, struct              | elements back to back                      |
//! | enum variant (serde index) | 4-byte index + fields                      |
//!
//! Catalog unions serialize as a tuple of discriminant and payload, so they
//! take the tuple row.

use std::io::Write;

use serde::ser::{self, Serialize};

use crate::error::{Error, Result};

/// Encode `value` into a new buffer.
pub fn to_bytes<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut ser = Serializer::new(Vec::new());
    value.serialize(&mut ser)?;
    Ok(ser.into_inner())
}

/// Encode `value` straight into `writer`.
pub fn to_writer<W: Write, T: Serialize + ?Sized>(writer: W, value: &T) -> Result<()> {
    value.serialize(&mut Serializer::new(writer))
}

/// The XDR serializer.
///
/// ```rust
/// use stellar_xdr_model::ser::Serializer;
/// use serde::Serialize;
///
/// let mut buf = Vec::new();
/// (-1i32).serialize(&mut Serializer::new(&mut buf)).unwrap();
/// assert_eq!(buf, [0xFF, 0xFF, 0xFF, 0xFF]);
/// ```
pub struct Serializer<W: Write> {
    out: W,
    written: usize,
    marker: Marker,
}

/// Set by a reserved newtype name, consumed by the value inside it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Marker {
    #[default]
    None,
    /// The next `serialize_bytes` skips the length prefix.
    FixedOpaque,
    /// The next unit variant names a required field that was never set.
    UnsetField,
}

/// Written in place of a builder's unset required field. The XDR serializer
/// fails on it with [`Error::MissingField`].
pub(crate) struct UnsetField {
    pub(crate) ty: &'static str,
    pub(crate) field: &'static str,
}

impl Serialize for UnsetField {
    fn serialize<S: ser::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        struct Name(&'static str, &'static str);

        impl Serialize for Name {
            fn serialize<S: ser::Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_unit_variant(self.0, 0, self.1)
            }
        }

        serializer.serialize_newtype_struct(crate::UNSET_FIELD_TOKEN, &Name(self.ty, self.field))
    }
}

impl<W: Write> Serializer<W> {
    pub fn new(out: W) -> Self {
        Serializer {
            out,
            written: 0,
            marker: Marker::None,
        }
    }

    /// Bytes emitted so far.
    pub fn bytes_written(&self) -> usize {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn put(&mut self, bytes: &[u8]) -> Result<()> {
        self.out
            .write_all(bytes)
            .map_err(|err| Error::Io(err.to_string()))?;
        self.written += bytes.len();
        Ok(())
    }

    fn put_uint(&mut self, v: u32) -> Result<()> {
        self.put(&v.to_be_bytes())
    }

    fn put_count(&mut self, len: usize) -> Result<()> {
        match u32::try_from(len) {
            Ok(len) => self.put_uint(len),
            Err(_) => Err(Error::LengthOverflow {
                max: u32::MAX,
                got: len,
            }),
        }
    }

    /// `bytes`, then zeros up to the next 4-byte boundary.
    fn put_padded(&mut self, bytes: &[u8]) -> Result<()> {
        self.put(bytes)?;
        let pad = (4 - bytes.len() % 4) % 4;
        self.put(&[0; 3][..pad])
    }
}

// Integers narrower than 32 bits widen to an XDR int.
macro_rules! put_int {
    ($($method:ident($ty:ty) as $wide:ty;)*) => {
        $(
            fn $method(self, v: $ty) -> Result<()> {
                self.put(&<$wide>::from(v).to_be_bytes())
            }
        )*
    };
}

impl<W: Write> ser::Serializer for &mut Serializer<W> {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = Self;
    type SerializeTuple = Self;
    type SerializeTupleStruct = Self;
    type SerializeTupleVariant = Self;
    type SerializeMap = ser::Impossible<(), Error>;
    type SerializeStruct = Self;
    type SerializeStructVariant = Self;

    put_int! {
        serialize_i8(i8) as i32;
        serialize_i16(i16) as i32;
        serialize_i32(i32) as i32;
        serialize_i64(i64) as i64;
        serialize_u8(u8) as u32;
        serialize_u16(u16) as u32;
        serialize_u32(u32) as u32;
        serialize_u64(u64) as u64;
    }

    fn serialize_bool(self, v: bool) -> Result<()> {
        self.put_uint(u32::from(v))
    }

    fn serialize_f32(self, _v: f32) -> Result<()> {
        Err(Error::Unsupported("f32"))
    }

    fn serialize_f64(self, _v: f64) -> Result<()> {
        Err(Error::Unsupported("f64"))
    }

    fn serialize_char(self, v: char) -> Result<()> {
        self.put_uint(u32::from(v))
    }

    fn serialize_str(self, v: &str) -> Result<()> {
        self.serialize_bytes(v.as_bytes())
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<()> {
        if std::mem::take(&mut self.marker) != Marker::FixedOpaque {
            self.put_count(v.len())?;
        }
        self.put_padded(v)
    }

    fn serialize_none(self) -> Result<()> {
        self.put_uint(0)
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<()> {
        self.put_uint(1)?;
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<()> {
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<()> {
        Ok(())
    }

    fn serialize_unit_variant(
        self,
        name: &'static str,
        index: u32,
        variant: &'static str,
    ) -> Result<()> {
        if std::mem::take(&mut self.marker) == Marker::UnsetField {
            return Err(Error::MissingField {
                ty: name,
                field: variant,
            });
        }
        self.put_uint(index)
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        name: &'static str,
        value: &T,
    ) -> Result<()> {
        self.marker = match name {
            crate::FIXED_OPAQUE_TOKEN => Marker::FixedOpaque,
            crate::UNSET_FIELD_TOKEN => Marker::UnsetField,
            _ => Marker::None,
        };
        let out = value.serialize(&mut *self);
        self.marker = Marker::None;
        out
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        index: u32,
        _variant: &'static str,
        value: &T,
    ) -> Result<()> {
        self.put_uint(index)?;
        value.serialize(self)
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<Self> {
        self.put_count(len.ok_or(Error::LengthRequired)?)?;
        Ok(self)
    }

    // Fixed arrays, union bodies and structs carry no prefix.
    fn serialize_tuple(self, _len: usize) -> Result<Self> {
        Ok(self)
    }

    fn serialize_tuple_struct(self, _name: &'static str, _len: usize) -> Result<Self> {
        Ok(self)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self> {
        self.put_uint(index)?;
        Ok(self)
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(Error::Unsupported("map"))
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self> {
        Ok(self)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self> {
        self.put_uint(index)?;
        Ok(self)
    }
}

macro_rules! compound {
    ($($t:ident :: $method:ident $(($key:ident))?),* $(,)?) => {
        $(
            impl<W: Write> ser::$t for &mut Serializer<W> {
                type Ok = ();
                type Error = Error;

                fn $method<T: Serialize + ?Sized>(
                    &mut self,
                    $($key: &'static str,)?
                    value: &T,
                ) -> Result<()> {
                    value.serialize(&mut **self)
                }

                fn end(self) -> Result<()> {
                    Ok(())
                }
            }
        )*
    };
}

compound! {
    SerializeSeq::serialize_element,
    SerializeTuple::serialize_element,
    SerializeTupleStruct::serialize_field,
    SerializeTupleVariant::serialize_field,
    SerializeStruct::serialize_field(_key),
    SerializeStructVariant::serialize_field(_key),
}

