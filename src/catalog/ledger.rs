//! Ledger keys and the ledger data that operations and results refer to.

use serde::{Deserialize, Serialize};

use super::asset::{Asset, Price, TrustLineAsset};
use super::keys::AccountId;
use crate::types::{BoundedVec, Hash, PoolId, String64};

xdr_enum! {
    pub enum LedgerEntryType {
        Account = 0 => "ACCOUNT",
        Trustline = 1 => "TRUSTLINE",
        Offer = 2 => "OFFER",
        Data = 3 => "DATA",
        ClaimableBalance = 4 => "CLAIMABLE_BALANCE",
        LiquidityPool = 5 => "LIQUIDITY_POOL",
    }
}

xdr_enum! {
    /// Flags set on an account by its issuer role.
    pub enum AccountFlags {
        AuthRequired = 0x1 => "AUTH_REQUIRED_FLAG",
        AuthRevocable = 0x2 => "AUTH_REVOCABLE_FLAG",
        AuthImmutable = 0x4 => "AUTH_IMMUTABLE_FLAG",
        AuthClawbackEnabled = 0x8 => "AUTH_CLAWBACK_ENABLED_FLAG",
    }
}

xdr_enum! {
    pub enum TrustLineFlags {
        Authorized = 1 => "AUTHORIZED_FLAG",
        AuthorizedToMaintainLiabilities = 2 => "AUTHORIZED_TO_MAINTAIN_LIABILITIES_FLAG",
        TrustlineClawbackEnabled = 4 => "TRUSTLINE_CLAWBACK_ENABLED_FLAG",
    }
}

xdr_enum! {
    pub enum OfferEntryFlags {
        Passive = 1 => "PASSIVE_FLAG",
    }
}

xdr_enum! {
    /// Version tag of an empty `ext` union.
    pub enum ExtensionPoint {
        V0 = 0 => "V0",
    }
}

impl Default for ExtensionPoint {
    fn default() -> Self {
        ExtensionPoint::V0
    }
}

/// An offer as it sits on the order book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferEntry {
    pub seller_id: AccountId,
    pub offer_id: i64,
    pub selling: Asset,
    pub buying: Asset,
    pub amount: i64,
    pub price: Price,
    /// Bitmask of [`OfferEntryFlags`].
    pub flags: u32,
    pub ext: ExtensionPoint,
}

xdr_enum! {
    pub enum ClaimPredicateType {
        Unconditional = 0 => "CLAIM_PREDICATE_UNCONDITIONAL",
        And = 1 => "CLAIM_PREDICATE_AND",
        Or = 2 => "CLAIM_PREDICATE_OR",
        Not = 3 => "CLAIM_PREDICATE_NOT",
        BeforeAbsoluteTime = 4 => "CLAIM_PREDICATE_BEFORE_ABSOLUTE_TIME",
        BeforeRelativeTime = 5 => "CLAIM_PREDICATE_BEFORE_RELATIVE_TIME",
    }
}

xdr_union! {
    /// Condition under which a claimant may claim a balance.
    ///
    /// Absolute times are unix seconds; relative times count seconds from
    /// the balance's creation. Predicates nest; decoding depth is bounded by
    /// [`DecodeOptions::max_depth`](crate::DecodeOptions::max_depth).
    pub enum ClaimPredicate : ClaimPredicateType {
        And(BoundedVec<ClaimPredicate, 2>) = And,
        Or(BoundedVec<ClaimPredicate, 2>) = Or,
        Not(Option<Box<ClaimPredicate>>) = Not,
        BeforeAbsoluteTime(i64) = BeforeAbsoluteTime,
        BeforeRelativeTime(i64) = BeforeRelativeTime,
        Unconditional = Unconditional,
    }
}

xdr_enum! {
    pub enum ClaimantType {
        V0 = 0 => "CLAIMANT_TYPE_V0",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimantV0 {
    pub destination: AccountId,
    pub predicate: ClaimPredicate,
}

xdr_union! {
    pub enum Claimant : ClaimantType {
        V0(ClaimantV0) = V0,
    }
}

impl Claimant {
    pub fn new(destination: AccountId, predicate: ClaimPredicate) -> Self {
        Claimant::V0(ClaimantV0 {
            destination,
            predicate,
        })
    }
}

xdr_enum! {
    pub enum ClaimableBalanceIdType {
        V0 = 0 => "CLAIMABLE_BALANCE_ID_TYPE_V0",
    }
}

xdr_union! {
    pub enum ClaimableBalanceId : ClaimableBalanceIdType {
        V0(Hash) = V0,
    }
}

impl crate::types::Coerce<ClaimableBalanceId> for &str {
    fn coerce(self) -> crate::Result<ClaimableBalanceId> {
        self.parse().map(ClaimableBalanceId::V0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerKeyAccount {
    pub account_id: AccountId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerKeyTrustLine {
    pub account_id: AccountId,
    pub asset: TrustLineAsset,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerKeyOffer {
    pub seller_id: AccountId,
    pub offer_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerKeyData {
    pub account_id: AccountId,
    pub data_name: String64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerKeyClaimableBalance {
    pub balance_id: ClaimableBalanceId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerKeyLiquidityPool {
    pub liquidity_pool_id: PoolId,
}

xdr_union! {
    /// Identifies one ledger entry.
    pub enum LedgerKey : LedgerEntryType {
        Account(LedgerKeyAccount) = Account,
        Trustline(LedgerKeyTrustLine) = Trustline,
        Offer(LedgerKeyOffer) = Offer,
        Data(LedgerKeyData) = Data,
        ClaimableBalance(LedgerKeyClaimableBalance) = ClaimableBalance,
        LiquidityPool(LedgerKeyLiquidityPool) = LiquidityPool,
    }
}

impl_validate!(
    OfferEntry,
    ClaimantV0,
    LedgerKeyAccount,
    LedgerKeyTrustLine,
    LedgerKeyOffer,
    LedgerKeyData,
    LedgerKeyClaimableBalance,
    LedgerKeyLiquidityPool,
);
