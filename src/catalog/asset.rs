//! Assets, asset codes, liquidity pool parameters and prices.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::keys::AccountId;
use crate::error::{Error, Result};
use crate::types::{Coerce, PoolId};

xdr_enum! {
    pub enum AssetType {
        Native = 0 => "ASSET_TYPE_NATIVE",
        CreditAlphanum4 = 1 => "ASSET_TYPE_CREDIT_ALPHANUM4",
        CreditAlphanum12 = 2 => "ASSET_TYPE_CREDIT_ALPHANUM12",
        PoolShare = 3 => "ASSET_TYPE_POOL_SHARE",
    }
}

xdr_enum! {
    pub enum LiquidityPoolType {
        ConstantProduct = 0 => "LIQUIDITY_POOL_CONSTANT_PRODUCT",
    }
}

/// 1 to 4 character asset code, zero-padded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetCode4(#[serde(with = "crate::fixed_opaque")] pub [u8; 4]);

/// 5 to 12 character asset code, zero-padded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetCode12(#[serde(with = "crate::fixed_opaque")] pub [u8; 12]);

fn pad_code<const N: usize>(code: &str, min: usize) -> Result<[u8; N]> {
    if code.len() < min || code.len() > N || !code.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(Error::invalid_input(format!(
            "`{code}` is not a {min} to {N} character alphanumeric asset code"
        )));
    }
    let mut out = [0u8; N];
    out[..code.len()].copy_from_slice(code.as_bytes());
    Ok(out)
}

fn trim_code(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}

impl AssetCode4 {
    pub fn new(code: &str) -> Result<Self> {
        pad_code(code, 1).map(AssetCode4)
    }
}

impl AssetCode12 {
    pub fn new(code: &str) -> Result<Self> {
        pad_code(code, 5).map(AssetCode12)
    }
}

impl fmt::Display for AssetCode4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&trim_code(&self.0))
    }
}

impl fmt::Display for AssetCode12 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&trim_code(&self.0))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlphaNum4 {
    pub asset_code: AssetCode4,
    pub issuer: AccountId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlphaNum12 {
    pub asset_code: AssetCode12,
    pub issuer: AccountId,
}

xdr_union! {
    /// An asset held in an account: lumens or a credit issued by an account.
    pub enum Asset : AssetType, partial {
        CreditAlphanum4(AlphaNum4) = CreditAlphanum4,
        CreditAlphanum12(AlphaNum12) = CreditAlphanum12,
        Native = Native,
    }
}

impl Asset {
    /// A credit asset; the code length picks the 4 or 12 byte form.
    pub fn credit(code: &str, issuer: impl Coerce<AccountId>) -> Result<Self> {
        let issuer = issuer.coerce()?;
        if code.len() <= 4 {
            Ok(Asset::CreditAlphanum4(AlphaNum4 {
                asset_code: AssetCode4::new(code)?,
                issuer,
            }))
        } else {
            Ok(Asset::CreditAlphanum12(AlphaNum12 {
                asset_code: AssetCode12::new(code)?,
                issuer,
            }))
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Asset::Native)
    }

    pub fn code(&self) -> Option<String> {
        match self {
            Asset::CreditAlphanum4(a) => Some(a.asset_code.to_string()),
            Asset::CreditAlphanum12(a) => Some(a.asset_code.to_string()),
            Asset::Native => None,
        }
    }

    pub fn issuer(&self) -> Option<&AccountId> {
        match self {
            Asset::CreditAlphanum4(a) => Some(&a.issuer),
            Asset::CreditAlphanum12(a) => Some(&a.issuer),
            Asset::Native => None,
        }
    }
}

/// `native` or `CODE:ISSUER`.
impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Asset::CreditAlphanum4(a) => write!(f, "{}:{}", a.asset_code, a.issuer),
            Asset::CreditAlphanum12(a) => write!(f, "{}:{}", a.asset_code, a.issuer),
            Asset::Native => f.write_str("native"),
        }
    }
}

impl FromStr for Asset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s == "native" {
            return Ok(Asset::Native);
        }
        match s.split_once(':') {
            Some((code, issuer)) => Asset::credit(code, issuer),
            None => Err(Error::invalid_input(format!(
                "`{s}` is neither `native` nor `CODE:ISSUER`"
            ))),
        }
    }
}

impl Coerce<Asset> for &str {
    fn coerce(self) -> Result<Asset> {
        self.parse()
    }
}

xdr_union! {
    /// The code half of a credit asset, as used by `AllowTrustOp`.
    pub enum AssetCode : AssetType, partial {
        CreditAlphanum4(AssetCode4) = CreditAlphanum4,
        CreditAlphanum12(AssetCode12) = CreditAlphanum12,
    }
}

impl FromStr for AssetCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.len() <= 4 {
            AssetCode4::new(s).map(AssetCode::CreditAlphanum4)
        } else {
            AssetCode12::new(s).map(AssetCode::CreditAlphanum12)
        }
    }
}

impl fmt::Display for AssetCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetCode::CreditAlphanum4(code) => fmt::Display::fmt(code, f),
            AssetCode::CreditAlphanum12(code) => fmt::Display::fmt(code, f),
        }
    }
}

impl Coerce<AssetCode> for &str {
    fn coerce(self) -> Result<AssetCode> {
        self.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiquidityPoolConstantProductParameters {
    pub asset_a: Asset,
    pub asset_b: Asset,
    /// Fee in basis points.
    pub fee: i32,
}

/// Default pool fee, in basis points.
pub const LIQUIDITY_POOL_FEE_V18: i32 = 30;

xdr_union! {
    pub enum LiquidityPoolParameters : LiquidityPoolType {
        ConstantProduct(LiquidityPoolConstantProductParameters) = ConstantProduct,
    }
}

xdr_union! {
    /// The asset side of a trust line.
    pub enum TrustLineAsset : AssetType {
        CreditAlphanum4(AlphaNum4) = CreditAlphanum4,
        CreditAlphanum12(AlphaNum12) = CreditAlphanum12,
        PoolShare(PoolId) = PoolShare,
        Native = Native,
    }
}

xdr_union! {
    /// What `ChangeTrustOp` establishes a trust line to.
    pub enum ChangeTrustAsset : AssetType {
        CreditAlphanum4(AlphaNum4) = CreditAlphanum4,
        CreditAlphanum12(AlphaNum12) = CreditAlphanum12,
        PoolShare(LiquidityPoolParameters) = PoolShare,
        Native = Native,
    }
}

impl From<Asset> for TrustLineAsset {
    fn from(asset: Asset) -> Self {
        match asset {
            Asset::CreditAlphanum4(a) => TrustLineAsset::CreditAlphanum4(a),
            Asset::CreditAlphanum12(a) => TrustLineAsset::CreditAlphanum12(a),
            Asset::Native => TrustLineAsset::Native,
        }
    }
}

impl From<Asset> for ChangeTrustAsset {
    fn from(asset: Asset) -> Self {
        match asset {
            Asset::CreditAlphanum4(a) => ChangeTrustAsset::CreditAlphanum4(a),
            Asset::CreditAlphanum12(a) => ChangeTrustAsset::CreditAlphanum12(a),
            Asset::Native => ChangeTrustAsset::Native,
        }
    }
}

impl Coerce<TrustLineAsset> for Asset {
    fn coerce(self) -> Result<TrustLineAsset> {
        Ok(self.into())
    }
}

impl Coerce<ChangeTrustAsset> for Asset {
    fn coerce(self) -> Result<ChangeTrustAsset> {
        Ok(self.into())
    }
}

impl Coerce<ChangeTrustAsset> for &str {
    fn coerce(self) -> Result<ChangeTrustAsset> {
        self.parse::<Asset>().map(ChangeTrustAsset::from)
    }
}

/// A price as the fraction `n / d`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Price {
    pub n: i32,
    pub d: i32,
}

impl Price {
    pub fn new(n: i32, d: i32) -> Result<Self> {
        if n < 0 || d <= 0 {
            return Err(Error::invalid_input(format!("{n}/{d} is not a valid price")));
        }
        Ok(Price { n, d })
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.n, self.d)
    }
}

impl Coerce<Price> for (i32, i32) {
    fn coerce(self) -> Result<Price> {
        Price::new(self.0, self.1)
    }
}

impl_validate!(
    AssetCode4,
    AssetCode12,
    AlphaNum4,
    AlphaNum12,
    LiquidityPoolConstantProductParameters,
    Price,
);
