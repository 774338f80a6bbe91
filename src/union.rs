//! Discriminant enums and discriminated unions.
//!
//! An XDR union is a discriminant followed by the payload of the arm that
//! discriminant selects. Here every union is a Rust enum with one variant per
//! arm, generated by `xdr_union!`: the generated `match`es over the
//! discriminant enum are exhaustive, so an arm table that misses a code does
//! not compile.
//!
//! Result unions (keyed by a [`ResultCode`] whose success code is `0`) also
//! implement [`XdrResult`].

use std::any::Any;
use std::fmt;

use crate::error::{Error, Result};

/// A closed set of named `i32` codes.
pub trait XdrEnum: Copy + Eq + fmt::Debug + 'static {
    /// Type name, used in errors and by [`XdrUnion::discriminant_type`].
    const NAME: &'static str;

    /// Every value, in protocol-declared order.
    const VARIANTS: &'static [Self];

    fn code(self) -> i32;

    /// Protocol name of this value, e.g. `MALFORMED`.
    fn name(self) -> &'static str;

    fn from_code(code: i32) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|v| v.code() == code)
    }

    /// Like [`XdrEnum::from_code`], for caller-supplied codes.
    fn try_from_code(code: i32) -> Result<Self> {
        Self::from_code(code)
            .ok_or_else(|| Error::invalid_input(format!("{code} is not a valid {}", Self::NAME)))
    }

    /// The `(code, name)` table.
    fn options() -> Vec<(i32, &'static str)> {
        Self::VARIANTS.iter().map(|v| (v.code(), v.name())).collect()
    }
}

/// What an arm carries after the discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arm {
    Void,
    /// Name of the payload type as written in the arm declaration.
    Payload(&'static str),
}

impl Arm {
    pub fn is_void(self) -> bool {
        matches!(self, Arm::Void)
    }
}

/// A discriminated union.
pub trait XdrUnion: Sized + 'static {
    type Discriminant: XdrEnum;

    /// The active discriminant.
    fn discriminant(&self) -> Self::Discriminant;

    /// The arm declared for `d`; `None` when this union has no arm for it.
    fn arm(d: Self::Discriminant) -> Option<Arm>;

    /// The value for `d` if its arm is void.
    fn from_void(d: Self::Discriminant) -> Option<Self>;

    /// The stored payload, or `None` for a void arm.
    fn payload(&self) -> Option<&dyn Any>;

    fn discriminant_type() -> &'static str {
        Self::Discriminant::NAME
    }

    /// `(code, arm)` for every discriminant that has an arm.
    fn arms() -> Vec<(i32, Arm)> {
        Self::Discriminant::VARIANTS
            .iter()
            .filter_map(|&d| Self::arm(d).map(|arm| (d.code(), arm)))
            .collect()
    }

    /// True when every discriminant has an arm.
    fn is_total() -> bool {
        Self::Discriminant::VARIANTS
            .iter()
            .all(|&d| Self::arm(d).is_some())
    }
}

/// A result-code enum: one success code, a message for every other code.
pub trait ResultCode: XdrEnum {
    const SUCCESS: Self;

    /// Prefix of [`ResultCode::error_code`], e.g. `account_merge`.
    const ERROR_PREFIX: &'static str;

    /// Human-readable description; `None` for the success code.
    fn message(self) -> Option<&'static str>;

    fn is_success(self) -> bool {
        self == Self::SUCCESS
    }

    /// Stable snake_case identifier; `None` for the success code.
    fn error_code(self) -> Option<String> {
        if self.is_success() {
            return None;
        }
        Some(format!(
            "{}_{}",
            Self::ERROR_PREFIX,
            self.name().to_ascii_lowercase()
        ))
    }
}

/// A union keyed by a [`ResultCode`].
pub trait XdrResult: XdrUnion<Discriminant: ResultCode> {
    fn code(&self) -> Self::Discriminant {
        self.discriminant()
    }

    /// The success value, when the success arm carries no payload.
    fn success() -> Result<Self> {
        Self::from_void(Self::Discriminant::SUCCESS).ok_or_else(|| {
            Error::invalid_input(format!(
                "the success arm of {} carries a payload",
                std::any::type_name::<Self>()
            ))
        })
    }

    /// The failed result for a code whose arm carries a payload, filled with
    /// a stand-in value. Unions with such error arms override this.
    fn placeholder_failure(_code: Self::Discriminant) -> Option<Self> {
        None
    }

    /// Builds the failed result for `code` without running any protocol
    /// logic, so callers can exercise their error paths.
    fn simulate(code: Self::Discriminant) -> Result<Self> {
        if code.is_success() {
            return Err(Error::invalid_input(format!(
                "cannot simulate the success code of {}",
                Self::discriminant_type()
            )));
        }
        tracing::debug!(code = code.name(), ty = Self::discriminant_type(), "simulating failed result");
        Self::from_void(code)
            .or_else(|| Self::placeholder_failure(code))
            .ok_or_else(|| {
                Error::invalid_input(format!(
                    "{} {} has no simulated value",
                    Self::discriminant_type(),
                    code.name()
                ))
            })
    }

    fn was_successful(&self) -> bool {
        self.code().is_success()
    }

    fn was_not_successful(&self) -> bool {
        !self.was_successful()
    }

    fn error_code(&self) -> Option<String> {
        self.code().error_code()
    }

    fn error_message(&self) -> Option<&'static str> {
        self.code().message()
    }
}
