//! # stellar-xdr-model
//!
//! A typed object model of the Stellar network's XDR protocol (operations,
//! operation results, assets and ledger keys) together with the RFC 4506
//! codec it is written in, built on top of `serde`.
//!
//! ## Layers
//!
//! - [`ser`], [`de`], [`fixed_opaque`]: a serde `Serializer`/`Deserializer`
//!   pair for big-endian, 4-byte aligned XDR.
//! - [`union`]: discriminant enums and discriminated unions. A union is a
//!   Rust enum whose variants are the arms of the XDR union; its discriminant
//!   is written first and the arm's payload, if any, follows.
//! - [`catalog`]: the protocol types themselves.
//! - [`XdrCodec`]: `to_xdr` / `from_xdr` (and base64 forms) for any catalog
//!   value.
//!
//! ## Example
//!
//! ```rust
//! use stellar_xdr_model::XdrCodec;
//! use stellar_xdr_model::catalog::CreateAccountOp;
//!
//! let op = CreateAccountOp::new()
//!     .with_destination("GAKUGUH6HKSOJRMK2IVFLJD5HZPF6RYCJ4Q3EJDHCU3F7WZPFM4YX6AN")?
//!     .with_starting_balance("10")?;
//! assert_eq!(
//!     op.to_xdr_base64()?,
//!     "AAAAABVDUP46pOTFitIqVaR9Pl5fRwJPIbIkZxU2X9svKzmLAAAAAAX14QA="
//! );
//! # Ok::<(), stellar_xdr_model::Error>(())
//! ```

#[macro_use]
mod macros;

pub mod catalog;
pub mod codec;
pub mod de;
pub mod error;
pub mod fixed_opaque;
pub mod ser;
pub mod types;
pub mod union;

pub use codec::{DecodeOptions, Validate, XdrCodec};
pub use de::{Deserializer, from_bytes, from_bytes_partial};
pub use error::{Error, Result};
pub use ser::{Serializer, to_bytes, to_writer};
pub use union::{Arm, ResultCode, XdrEnum, XdrResult, XdrUnion};

pub use serde::{Deserialize, Serialize};

/// Newtype-struct name that tells the codec to treat the inner bytes as
/// fixed-length opaque (no length prefix).
pub(crate) const FIXED_OPAQUE_TOKEN: &str = "$stellar_xdr_model::FixedOpaque";

/// Newtype-struct name of a builder's unset required field.
pub(crate) const UNSET_FIELD_TOKEN: &str = "$stellar_xdr_model::UnsetField";
