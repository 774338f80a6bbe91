//! Top-level encode/decode entry points for catalog values.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::de::Deserializer;
use crate::error::{Error, Result};
use crate::ser::to_bytes;

/// Decoder configuration.
///
/// ```rust
/// use stellar_xdr_model::DecodeOptions;
///
/// let lenient = DecodeOptions::default()
///     .strict_padding(false)
///     .allow_trailing_bytes(true);
/// assert!(!lenient.is_strict_padding());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    pub(crate) strict_padding: bool,
    pub(crate) allow_trailing_bytes: bool,
    pub(crate) max_depth: u32,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            strict_padding: true,
            allow_trailing_bytes: false,
            max_depth: 512,
        }
    }
}

impl DecodeOptions {
    /// Reject non-zero padding bytes.
    pub fn strict_padding(mut self, strict: bool) -> Self {
        self.strict_padding = strict;
        self
    }

    /// Accept input that continues after the decoded value.
    pub fn allow_trailing_bytes(mut self, allow: bool) -> Self {
        self.allow_trailing_bytes = allow;
        self
    }

    /// Maximum nesting of unions, structs, arrays and optionals.
    pub fn max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn is_strict_padding(&self) -> bool {
        self.strict_padding
    }

    pub fn allows_trailing_bytes(&self) -> bool {
        self.allow_trailing_bytes
    }

    pub fn depth_limit(&self) -> u32 {
        self.max_depth
    }
}

/// Pre-encode checks for values whose fields may be unset.
///
/// Builders report their first missing required field; unions and containers
/// forward to what they hold. Plain data has nothing to check.
pub trait Validate {
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

impl_validate!(bool, i32, u32, i64, u64, String, ());

impl<const N: usize> Validate for [u8; N] {}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self) -> Result<()> {
        match self {
            Some(v) => v.validate(),
            None => Ok(()),
        }
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<()> {
        self.iter().try_for_each(Validate::validate)
    }
}

impl<T: Validate> Validate for Box<T> {
    fn validate(&self) -> Result<()> {
        (**self).validate()
    }
}

/// Encode/decode helpers shared by every catalog type.
pub trait XdrCodec: Serialize + DeserializeOwned + Validate {
    /// Validate, then encode to XDR bytes.
    fn to_xdr(&self) -> Result<Vec<u8>> {
        self.validate()?;
        let bytes = to_bytes(self)?;
        tracing::trace!(
            ty = std::any::type_name::<Self>(),
            len = bytes.len(),
            "encoded xdr"
        );
        Ok(bytes)
    }

    fn to_xdr_base64(&self) -> Result<String> {
        Ok(STANDARD.encode(self.to_xdr()?))
    }

    /// Decode exactly one value, rejecting trailing bytes.
    fn from_xdr(bytes: &[u8]) -> Result<Self> {
        Self::from_xdr_with(bytes, DecodeOptions::default())
    }

    fn from_xdr_with(bytes: &[u8], options: DecodeOptions) -> Result<Self> {
        let mut de = Deserializer::with_options(bytes, options);
        let value = Self::deserialize(&mut de).map_err(|err| {
            tracing::debug!(
                ty = std::any::type_name::<Self>(),
                len = bytes.len(),
                error = %err,
                "xdr decode failed"
            );
            err
        })?;
        let rest = de.remaining().len();
        if rest != 0 && !options.allow_trailing_bytes {
            return Err(Error::TrailingBytes(rest));
        }
        tracing::trace!(
            ty = std::any::type_name::<Self>(),
            len = bytes.len(),
            "decoded xdr"
        );
        Ok(value)
    }

    fn from_xdr_base64(text: &str) -> Result<Self> {
        let bytes = STANDARD.decode(text.trim())?;
        Self::from_xdr(&bytes)
    }
}

impl<T: Serialize + DeserializeOwned + Validate> XdrCodec for T {}
