//! Operation results.
//!
//! Each operation kind has a result-code enum (`SUCCESS` is `0`, failures
//! are negative) and a result union keyed by it. Most arms are void; the
//! success arm carries data for operations that produce some, e.g. the
//! offers crossed by a path payment.
//!
//! ```rust
//! use stellar_xdr_model::XdrResult;
//! use stellar_xdr_model::catalog::{AccountMergeResult, AccountMergeResultCode};
//!
//! let failed = AccountMergeResult::simulate(AccountMergeResultCode::Malformed)?;
//! assert!(failed.was_not_successful());
//! assert_eq!(failed.error_code().as_deref(), Some("account_merge_malformed"));
//! # Ok::<(), stellar_xdr_model::Error>(())
//! ```

use serde::{Deserialize, Serialize};

use super::asset::Asset;
use super::keys::AccountId;
use super::ledger::{ClaimableBalanceId, OfferEntry};
use super::operations::OperationType;
use crate::types::{PoolId, Uint256};
use crate::union::{XdrResult, XdrUnion};

xdr_enum! {
    pub enum ClaimAtomType {
        V0 = 0 => "CLAIM_ATOM_TYPE_V0",
        OrderBook = 1 => "CLAIM_ATOM_TYPE_ORDER_BOOK",
        LiquidityPool = 2 => "CLAIM_ATOM_TYPE_LIQUIDITY_POOL",
    }
}

/// An offer crossed before protocol 18, identified by the seller's raw key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimOfferAtomV0 {
    pub seller_ed25519: Uint256,
    pub offer_id: i64,
    pub asset_sold: Asset,
    pub amount_sold: i64,
    pub asset_bought: Asset,
    pub amount_bought: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimOfferAtom {
    pub seller_id: AccountId,
    pub offer_id: i64,
    pub asset_sold: Asset,
    pub amount_sold: i64,
    pub asset_bought: Asset,
    pub amount_bought: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimLiquidityAtom {
    pub liquidity_pool_id: PoolId,
    pub asset_sold: Asset,
    pub amount_sold: i64,
    pub asset_bought: Asset,
    pub amount_bought: i64,
}

xdr_union! {
    /// One trade executed while crossing the order book or a pool.
    pub enum ClaimAtom : ClaimAtomType {
        V0(ClaimOfferAtomV0) = V0,
        OrderBook(ClaimOfferAtom) = OrderBook,
        LiquidityPool(ClaimLiquidityAtom) = LiquidityPool,
    }
}

/// What reached the destination at the end of a path payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplePaymentResult {
    pub destination: AccountId,
    pub asset: Asset,
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathPaymentStrictReceiveResultSuccess {
    pub offers: Vec<ClaimAtom>,
    pub last: SimplePaymentResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathPaymentStrictSendResultSuccess {
    pub offers: Vec<ClaimAtom>,
    pub last: SimplePaymentResult,
}

xdr_enum! {
    pub enum ManageOfferEffect {
        Created = 0 => "MANAGE_OFFER_CREATED",
        Updated = 1 => "MANAGE_OFFER_UPDATED",
        Deleted = 2 => "MANAGE_OFFER_DELETED",
    }
}

xdr_union! {
    /// The offer left on the book, if any.
    pub enum ManageOfferSuccessResultOffer : ManageOfferEffect {
        Created(OfferEntry) = Created,
        Updated(OfferEntry) = Updated,
        Deleted = Deleted,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManageOfferSuccessResult {
    pub offers_claimed: Vec<ClaimAtom>,
    pub offer: ManageOfferSuccessResultOffer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InflationPayout {
    pub destination: AccountId,
    pub amount: i64,
}

impl_validate!(
    ClaimOfferAtomV0,
    ClaimOfferAtom,
    ClaimLiquidityAtom,
    SimplePaymentResult,
    PathPaymentStrictReceiveResultSuccess,
    PathPaymentStrictSendResultSuccess,
    ManageOfferSuccessResult,
    InflationPayout,
);

result_code! {
    pub enum CreateAccountResultCode ("create_account") {
        Success = 0 => "SUCCESS";
        Malformed = -1 => "MALFORMED" : "invalid destination",
        Underfunded = -2 => "UNDERFUNDED" : "not enough funds in source account",
        LowReserve = -3 => "LOW_RESERVE" : "would create an account below the min reserve",
        AlreadyExist = -4 => "ALREADY_EXIST" : "account already exists",
    }
}

xdr_union! {
    pub enum CreateAccountResult : CreateAccountResultCode {
        Success = Success,
        Malformed = Malformed,
        Underfunded = Underfunded,
        LowReserve = LowReserve,
        AlreadyExist = AlreadyExist,
    }
}

result_code! {
    pub enum PaymentResultCode ("payment") {
        Success = 0 => "SUCCESS";
        Malformed = -1 => "MALFORMED" : "bad input",
        Underfunded = -2 => "UNDERFUNDED" : "not enough funds in source account",
        SrcNoTrust = -3 => "SRC_NO_TRUST" : "no trust line on source account",
        SrcNotAuthorized = -4 => "SRC_NOT_AUTHORIZED" : "source not authorized to transfer",
        NoDestination = -5 => "NO_DESTINATION" : "destination account does not exist",
        NoTrust = -6 => "NO_TRUST" : "destination missing a trust line for asset",
        NotAuthorized = -7 => "NOT_AUTHORIZED" : "destination not authorized to hold asset",
        LineFull = -8 => "LINE_FULL" : "destination would go above their limit",
        NoIssuer = -9 => "NO_ISSUER" : "missing issuer on asset",
    }
}

xdr_union! {
    pub enum PaymentResult : PaymentResultCode {
        Success = Success,
        Malformed = Malformed,
        Underfunded = Underfunded,
        SrcNoTrust = SrcNoTrust,
        SrcNotAuthorized = SrcNotAuthorized,
        NoDestination = NoDestination,
        NoTrust = NoTrust,
        NotAuthorized = NotAuthorized,
        LineFull = LineFull,
        NoIssuer = NoIssuer,
    }
}

result_code! {
    pub enum PathPaymentStrictReceiveResultCode ("path_payment_strict_receive") {
        Success = 0 => "SUCCESS";
        Malformed = -1 => "MALFORMED" : "bad input",
        Underfunded = -2 => "UNDERFUNDED" : "not enough funds in source account",
        SrcNoTrust = -3 => "SRC_NO_TRUST" : "no trust line on source account",
        SrcNotAuthorized = -4 => "SRC_NOT_AUTHORIZED" : "source not authorized to transfer",
        NoDestination = -5 => "NO_DESTINATION" : "destination account does not exist",
        NoTrust = -6 => "NO_TRUST" : "destination missing a trust line for asset",
        NotAuthorized = -7 => "NOT_AUTHORIZED" : "destination not authorized to hold asset",
        LineFull = -8 => "LINE_FULL" : "destination would go above their limit",
        NoIssuer = -9 => "NO_ISSUER" : "missing issuer on one asset",
        TooFewOffers = -10 => "TOO_FEW_OFFERS" : "not enough offers to satisfy path",
        OfferCrossSelf = -11 => "OFFER_CROSS_SELF" : "would cross one of its own offers",
        OverSendmax = -12 => "OVER_SENDMAX" : "could not satisfy sendmax",
    }
}

xdr_union! {
    pub enum PathPaymentStrictReceiveResult : PathPaymentStrictReceiveResultCode {
        Success(PathPaymentStrictReceiveResultSuccess) = Success,
        NoIssuer(Asset) = NoIssuer,
        Malformed = Malformed,
        Underfunded = Underfunded,
        SrcNoTrust = SrcNoTrust,
        SrcNotAuthorized = SrcNotAuthorized,
        NoDestination = NoDestination,
        NoTrust = NoTrust,
        NotAuthorized = NotAuthorized,
        LineFull = LineFull,
        TooFewOffers = TooFewOffers,
        OfferCrossSelf = OfferCrossSelf,
        OverSendmax = OverSendmax,
    }
}

result_code! {
    pub enum PathPaymentStrictSendResultCode ("path_payment_strict_send") {
        Success = 0 => "SUCCESS";
        Malformed = -1 => "MALFORMED" : "bad input",
        Underfunded = -2 => "UNDERFUNDED" : "not enough funds in source account",
        SrcNoTrust = -3 => "SRC_NO_TRUST" : "no trust line on source account",
        SrcNotAuthorized = -4 => "SRC_NOT_AUTHORIZED" : "source not authorized to transfer",
        NoDestination = -5 => "NO_DESTINATION" : "destination account does not exist",
        NoTrust = -6 => "NO_TRUST" : "destination missing a trust line for asset",
        NotAuthorized = -7 => "NOT_AUTHORIZED" : "destination not authorized to hold asset",
        LineFull = -8 => "LINE_FULL" : "destination would go above their limit",
        NoIssuer = -9 => "NO_ISSUER" : "missing issuer on one asset",
        TooFewOffers = -10 => "TOO_FEW_OFFERS" : "not enough offers to satisfy path",
        OfferCrossSelf = -11 => "OFFER_CROSS_SELF" : "would cross one of its own offers",
        UnderDestmin = -12 => "UNDER_DESTMIN" : "could not satisfy destMin",
    }
}

xdr_union! {
    pub enum PathPaymentStrictSendResult : PathPaymentStrictSendResultCode {
        Success(PathPaymentStrictSendResultSuccess) = Success,
        NoIssuer(Asset) = NoIssuer,
        Malformed = Malformed,
        Underfunded = Underfunded,
        SrcNoTrust = SrcNoTrust,
        SrcNotAuthorized = SrcNotAuthorized,
        NoDestination = NoDestination,
        NoTrust = NoTrust,
        NotAuthorized = NotAuthorized,
        LineFull = LineFull,
        TooFewOffers = TooFewOffers,
        OfferCrossSelf = OfferCrossSelf,
        UnderDestmin = UnderDestmin,
    }
}

result_code! {
    /// Also the result of `CREATE_PASSIVE_SELL_OFFER`.
    pub enum ManageSellOfferResultCode ("manage_sell_offer") {
        Success = 0 => "SUCCESS";
        Malformed = -1 => "MALFORMED" : "generated offer would be invalid",
        SellNoTrust = -2 => "SELL_NO_TRUST" : "no trust line for what we're selling",
        BuyNoTrust = -3 => "BUY_NO_TRUST" : "no trust line for what we're buying",
        SellNotAuthorized = -4 => "SELL_NOT_AUTHORIZED" : "not authorized to sell",
        BuyNotAuthorized = -5 => "BUY_NOT_AUTHORIZED" : "not authorized to buy",
        LineFull = -6 => "LINE_FULL" : "can't receive more of what it's buying",
        Underfunded = -7 => "UNDERFUNDED" : "doesn't hold what it's trying to sell",
        CrossSelf = -8 => "CROSS_SELF" : "would cross an offer from the same user",
        SellNoIssuer = -9 => "SELL_NO_ISSUER" : "no issuer for what we're selling",
        BuyNoIssuer = -10 => "BUY_NO_ISSUER" : "no issuer for what we're buying",
        NotFound = -11 => "NOT_FOUND" : "offer id does not match an existing offer",
        LowReserve = -12 => "LOW_RESERVE" : "not enough funds to create a new offer",
    }
}

xdr_union! {
    /// Also the result of `CREATE_PASSIVE_SELL_OFFER`.
    pub enum ManageSellOfferResult : ManageSellOfferResultCode {
        Success(ManageOfferSuccessResult) = Success,
        Malformed = Malformed,
        SellNoTrust = SellNoTrust,
        BuyNoTrust = BuyNoTrust,
        SellNotAuthorized = SellNotAuthorized,
        BuyNotAuthorized = BuyNotAuthorized,
        LineFull = LineFull,
        Underfunded = Underfunded,
        CrossSelf = CrossSelf,
        SellNoIssuer = SellNoIssuer,
        BuyNoIssuer = BuyNoIssuer,
        NotFound = NotFound,
        LowReserve = LowReserve,
    }
}

result_code! {
    pub enum ManageBuyOfferResultCode ("manage_buy_offer") {
        Success = 0 => "SUCCESS";
        Malformed = -1 => "MALFORMED" : "generated offer would be invalid",
        SellNoTrust = -2 => "SELL_NO_TRUST" : "no trust line for what we're selling",
        BuyNoTrust = -3 => "BUY_NO_TRUST" : "no trust line for what we're buying",
        SellNotAuthorized = -4 => "SELL_NOT_AUTHORIZED" : "not authorized to sell",
        BuyNotAuthorized = -5 => "BUY_NOT_AUTHORIZED" : "not authorized to buy",
        LineFull = -6 => "LINE_FULL" : "can't receive more of what it's buying",
        Underfunded = -7 => "UNDERFUNDED" : "doesn't hold what it's trying to sell",
        CrossSelf = -8 => "CROSS_SELF" : "would cross an offer from the same user",
        SellNoIssuer = -9 => "SELL_NO_ISSUER" : "no issuer for what we're selling",
        BuyNoIssuer = -10 => "BUY_NO_ISSUER" : "no issuer for what we're buying",
        NotFound = -11 => "NOT_FOUND" : "offer id does not match an existing offer",
        LowReserve = -12 => "LOW_RESERVE" : "not enough funds to create a new offer",
    }
}

xdr_union! {
    pub enum ManageBuyOfferResult : ManageBuyOfferResultCode {
        Success(ManageOfferSuccessResult) = Success,
        Malformed = Malformed,
        SellNoTrust = SellNoTrust,
        BuyNoTrust = BuyNoTrust,
        SellNotAuthorized = SellNotAuthorized,
        BuyNotAuthorized = BuyNotAuthorized,
        LineFull = LineFull,
        Underfunded = Underfunded,
        CrossSelf = CrossSelf,
        SellNoIssuer = SellNoIssuer,
        BuyNoIssuer = BuyNoIssuer,
        NotFound = NotFound,
        LowReserve = LowReserve,
    }
}

result_code! {
    pub enum SetOptionsResultCode ("set_options") {
        Success = 0 => "SUCCESS";
        LowReserve = -1 => "LOW_RESERVE" : "not enough funds to add a signer",
        TooManySigners = -2 => "TOO_MANY_SIGNERS" : "max number of signers already reached",
        BadFlags = -3 => "BAD_FLAGS" : "invalid combination of clear/set flags",
        InvalidInflation = -4 => "INVALID_INFLATION" : "inflation account does not exist",
        CantChange = -5 => "CANT_CHANGE" : "can no longer change this option",
        UnknownFlag = -6 => "UNKNOWN_FLAG" : "can't set an unknown flag",
        ThresholdOutOfRange = -7 => "THRESHOLD_OUT_OF_RANGE" : "bad value for weight/threshold",
        BadSigner = -8 => "BAD_SIGNER" : "signer cannot be masterkey",
        InvalidHomeDomain = -9 => "INVALID_HOME_DOMAIN" : "malformed home domain",
        AuthRevocableRequired = -10 => "AUTH_REVOCABLE_REQUIRED" : "auth revocable is required for clawback",
    }
}

xdr_union! {
    pub enum SetOptionsResult : SetOptionsResultCode {
        Success = Success,
        LowReserve = LowReserve,
        TooManySigners = TooManySigners,
        BadFlags = BadFlags,
        InvalidInflation = InvalidInflation,
        CantChange = CantChange,
        UnknownFlag = UnknownFlag,
        ThresholdOutOfRange = ThresholdOutOfRange,
        BadSigner = BadSigner,
        InvalidHomeDomain = InvalidHomeDomain,
        AuthRevocableRequired = AuthRevocableRequired,
    }
}

result_code! {
    pub enum ChangeTrustResultCode ("change_trust") {
        Success = 0 => "SUCCESS";
        Malformed = -1 => "MALFORMED" : "bad input",
        NoIssuer = -2 => "NO_ISSUER" : "could not find issuer",
        InvalidLimit = -3 => "INVALID_LIMIT" : "cannot drop limit below balance",
        LowReserve = -4 => "LOW_RESERVE" : "not enough funds to create a new trust line",
        SelfNotAllowed = -5 => "SELF_NOT_ALLOWED" : "trusting self is not allowed",
        TrustLineMissing = -6 => "TRUST_LINE_MISSING" : "asset trust line is missing for pool",
        CannotDelete = -7 => "CANNOT_DELETE" : "asset trust line is still referenced in a pool",
        NotAuthMaintainLiabilities = -8 => "NOT_AUTH_MAINTAIN_LIABILITIES" : "asset trust line is deauthorized",
    }
}

xdr_union! {
    pub enum ChangeTrustResult : ChangeTrustResultCode {
        Success = Success,
        Malformed = Malformed,
        NoIssuer = NoIssuer,
        InvalidLimit = InvalidLimit,
        LowReserve = LowReserve,
        SelfNotAllowed = SelfNotAllowed,
        TrustLineMissing = TrustLineMissing,
        CannotDelete = CannotDelete,
        NotAuthMaintainLiabilities = NotAuthMaintainLiabilities,
    }
}

result_code! {
    pub enum AllowTrustResultCode ("allow_trust") {
        Success = 0 => "SUCCESS";
        Malformed = -1 => "MALFORMED" : "asset is not a credit asset",
        NoTrustLine = -2 => "NO_TRUST_LINE" : "trustor does not have a trust line",
        TrustNotRequired = -3 => "TRUST_NOT_REQUIRED" : "source account does not require trust",
        CantRevoke = -4 => "CANT_REVOKE" : "source account can't revoke trust",
        SelfNotAllowed = -5 => "SELF_NOT_ALLOWED" : "trusting self is not allowed",
        LowReserve = -6 => "LOW_RESERVE" : "claimable balances can't be created on revoke due to low reserves",
    }
}

xdr_union! {
    pub enum AllowTrustResult : AllowTrustResultCode {
        Success = Success,
        Malformed = Malformed,
        NoTrustLine = NoTrustLine,
        TrustNotRequired = TrustNotRequired,
        CantRevoke = CantRevoke,
        SelfNotAllowed = SelfNotAllowed,
        LowReserve = LowReserve,
    }
}

result_code! {
    pub enum AccountMergeResultCode ("account_merge") {
        Success = 0 => "SUCCESS";
        Malformed = -1 => "MALFORMED" : "can't merge onto itself",
        NoAccount = -2 => "NO_ACCOUNT" : "destination does not exist",
        ImmutableSet = -3 => "IMMUTABLE_SET" : "source account has AUTH_IMMUTABLE set",
        HasSubEntries = -4 => "HAS_SUB_ENTRIES" : "account has trust lines or offers",
        SeqnumTooFar = -5 => "SEQNUM_TOO_FAR" : "sequence number is over max allowed",
        DestFull = -6 => "DEST_FULL" : "can't add source balance to destination balance",
        IsSponsor = -7 => "IS_SPONSOR" : "can't merge account that is a sponsor",
    }
}

xdr_union! {
    pub enum AccountMergeResult : AccountMergeResultCode {
        Success(i64) = Success,
        Malformed = Malformed,
        NoAccount = NoAccount,
        ImmutableSet = ImmutableSet,
        HasSubEntries = HasSubEntries,
        SeqnumTooFar = SeqnumTooFar,
        DestFull = DestFull,
        IsSponsor = IsSponsor,
    }
}

result_code! {
    pub enum InflationResultCode ("inflation") {
        Success = 0 => "SUCCESS";
        NotTime = -1 => "NOT_TIME" : "inflation is not due yet",
    }
}

xdr_union! {
    pub enum InflationResult : InflationResultCode {
        Success(Vec<InflationPayout>) = Success,
        NotTime = NotTime,
    }
}

result_code! {
    pub enum ManageDataResultCode ("manage_data") {
        Success = 0 => "SUCCESS";
        NotSupportedYet = -1 => "NOT_SUPPORTED_YET" : "the network hasn't moved to this protocol change yet",
        NameNotFound = -2 => "NAME_NOT_FOUND" : "trying to remove a data entry that isn't there",
        LowReserve = -3 => "LOW_RESERVE" : "not enough funds to create a new data entry",
        InvalidName = -4 => "INVALID_NAME" : "name not a valid string",
    }
}

xdr_union! {
    pub enum ManageDataResult : ManageDataResultCode {
        Success = Success,
        NotSupportedYet = NotSupportedYet,
        NameNotFound = NameNotFound,
        LowReserve = LowReserve,
        InvalidName = InvalidName,
    }
}

result_code! {
    pub enum BumpSequenceResultCode ("bump_sequence") {
        Success = 0 => "SUCCESS";
        BadSeq = -1 => "BAD_SEQ" : "bump_to is not within the valid range",
    }
}

xdr_union! {
    pub enum BumpSequenceResult : BumpSequenceResultCode {
        Success = Success,
        BadSeq = BadSeq,
    }
}

result_code! {
    pub enum CreateClaimableBalanceResultCode ("create_claimable_balance") {
        Success = 0 => "SUCCESS";
        Malformed = -1 => "MALFORMED" : "invalid claimants or amount",
        LowReserve = -2 => "LOW_RESERVE" : "not enough funds to create a claimable balance",
        NoTrust = -3 => "NO_TRUST" : "source missing a trust line for asset",
        NotAuthorized = -4 => "NOT_AUTHORIZED" : "source not authorized to transfer",
        Underfunded = -5 => "UNDERFUNDED" : "not enough funds in source account",
    }
}

xdr_union! {
    pub enum CreateClaimableBalanceResult : CreateClaimableBalanceResultCode {
        Success(ClaimableBalanceId) = Success,
        Malformed = Malformed,
        LowReserve = LowReserve,
        NoTrust = NoTrust,
        NotAuthorized = NotAuthorized,
        Underfunded = Underfunded,
    }
}

result_code! {
    pub enum ClaimClaimableBalanceResultCode ("claim_claimable_balance") {
        Success = 0 => "SUCCESS";
        DoesNotExist = -1 => "DOES_NOT_EXIST" : "claimable balance does not exist",
        CannotClaim = -2 => "CANNOT_CLAIM" : "not a claimant or predicate not satisfied",
        LineFull = -3 => "LINE_FULL" : "claimant would go above their limit",
        NoTrust = -4 => "NO_TRUST" : "claimant missing a trust line for asset",
        NotAuthorized = -5 => "NOT_AUTHORIZED" : "claimant not authorized to hold asset",
    }
}

xdr_union! {
    pub enum ClaimClaimableBalanceResult : ClaimClaimableBalanceResultCode {
        Success = Success,
        DoesNotExist = DoesNotExist,
        CannotClaim = CannotClaim,
        LineFull = LineFull,
        NoTrust = NoTrust,
        NotAuthorized = NotAuthorized,
    }
}

result_code! {
    pub enum BeginSponsoringFutureReservesResultCode ("begin_sponsoring_future_reserves") {
        Success = 0 => "SUCCESS";
        Malformed = -1 => "MALFORMED" : "can't sponsor self",
        AlreadySponsored = -2 => "ALREADY_SPONSORED" : "sponsored account is already sponsored",
        Recursive = -3 => "RECURSIVE" : "sponsorship would be recursive",
    }
}

xdr_union! {
    pub enum BeginSponsoringFutureReservesResult : BeginSponsoringFutureReservesResultCode {
        Success = Success,
        Malformed = Malformed,
        AlreadySponsored = AlreadySponsored,
        Recursive = Recursive,
    }
}

result_code! {
    pub enum EndSponsoringFutureReservesResultCode ("end_sponsoring_future_reserves") {
        Success = 0 => "SUCCESS";
        NotSponsored = -1 => "NOT_SPONSORED" : "source account is not sponsored",
    }
}

xdr_union! {
    pub enum EndSponsoringFutureReservesResult : EndSponsoringFutureReservesResultCode {
        Success = Success,
        NotSponsored = NotSponsored,
    }
}

result_code! {
    pub enum RevokeSponsorshipResultCode ("revoke_sponsorship") {
        Success = 0 => "SUCCESS";
        DoesNotExist = -1 => "DOES_NOT_EXIST" : "ledger entry or signer does not exist",
        NotSponsor = -2 => "NOT_SPONSOR" : "source account is not the sponsor",
        LowReserve = -3 => "LOW_RESERVE" : "owner can't afford the reserve",
        OnlyTransferable = -4 => "ONLY_TRANSFERABLE" : "sponsorship can only be transferred",
        Malformed = -5 => "MALFORMED" : "bad input",
    }
}

xdr_union! {
    pub enum RevokeSponsorshipResult : RevokeSponsorshipResultCode {
        Success = Success,
        DoesNotExist = DoesNotExist,
        NotSponsor = NotSponsor,
        LowReserve = LowReserve,
        OnlyTransferable = OnlyTransferable,
        Malformed = Malformed,
    }
}

result_code! {
    pub enum ClawbackResultCode ("clawback") {
        Success = 0 => "SUCCESS";
        Malformed = -1 => "MALFORMED" : "bad input",
        NotClawbackEnabled = -2 => "NOT_CLAWBACK_ENABLED" : "trust line does not have clawback enabled",
        NoTrust = -3 => "NO_TRUST" : "account has no trust line for asset",
        Underfunded = -4 => "UNDERFUNDED" : "not enough funds to claw back",
    }
}

xdr_union! {
    pub enum ClawbackResult : ClawbackResultCode {
        Success = Success,
        Malformed = Malformed,
        NotClawbackEnabled = NotClawbackEnabled,
        NoTrust = NoTrust,
        Underfunded = Underfunded,
    }
}

result_code! {
    pub enum ClawbackClaimableBalanceResultCode ("clawback_claimable_balance") {
        Success = 0 => "SUCCESS";
        DoesNotExist = -1 => "DOES_NOT_EXIST" : "claimable balance does not exist",
        NotIssuer = -2 => "NOT_ISSUER" : "source account is not the asset issuer",
        NotClawbackEnabled = -3 => "NOT_CLAWBACK_ENABLED" : "claimable balance does not have clawback enabled",
    }
}

xdr_union! {
    pub enum ClawbackClaimableBalanceResult : ClawbackClaimableBalanceResultCode {
        Success = Success,
        DoesNotExist = DoesNotExist,
        NotIssuer = NotIssuer,
        NotClawbackEnabled = NotClawbackEnabled,
    }
}

result_code! {
    pub enum SetTrustLineFlagsResultCode ("set_trust_line_flags") {
        Success = 0 => "SUCCESS";
        Malformed = -1 => "MALFORMED" : "bad input",
        NoTrustLine = -2 => "NO_TRUST_LINE" : "trustor does not have a trust line",
        CantRevoke = -3 => "CANT_REVOKE" : "source account can't revoke authorization",
        InvalidState = -4 => "INVALID_STATE" : "requested flags are not a valid combination",
        LowReserve = -5 => "LOW_RESERVE" : "claimable balances can't be created on revoke due to low reserves",
    }
}

xdr_union! {
    pub enum SetTrustLineFlagsResult : SetTrustLineFlagsResultCode {
        Success = Success,
        Malformed = Malformed,
        NoTrustLine = NoTrustLine,
        CantRevoke = CantRevoke,
        InvalidState = InvalidState,
        LowReserve = LowReserve,
    }
}

result_code! {
    pub enum LiquidityPoolDepositResultCode ("liquidity_pool_deposit") {
        Success = 0 => "SUCCESS";
        Malformed = -1 => "MALFORMED" : "bad input",
        NoTrust = -2 => "NO_TRUST" : "no trust line for one of the assets",
        NotAuthorized = -3 => "NOT_AUTHORIZED" : "not authorized for one of the assets",
        Underfunded = -4 => "UNDERFUNDED" : "not enough balance for one of the assets",
        LineFull = -5 => "LINE_FULL" : "pool share trust line would go above its limit",
        BadPrice = -6 => "BAD_PRICE" : "deposit price outside bounds",
        PoolFull = -7 => "POOL_FULL" : "pool reserves are full",
    }
}

xdr_union! {
    pub enum LiquidityPoolDepositResult : LiquidityPoolDepositResultCode {
        Success = Success,
        Malformed = Malformed,
        NoTrust = NoTrust,
        NotAuthorized = NotAuthorized,
        Underfunded = Underfunded,
        LineFull = LineFull,
        BadPrice = BadPrice,
        PoolFull = PoolFull,
    }
}

result_code! {
    pub enum LiquidityPoolWithdrawResultCode ("liquidity_pool_withdraw") {
        Success = 0 => "SUCCESS";
        Malformed = -1 => "MALFORMED" : "bad input",
        NoTrust = -2 => "NO_TRUST" : "no trust line for one of the assets",
        Underfunded = -3 => "UNDERFUNDED" : "not enough pool shares",
        LineFull = -4 => "LINE_FULL" : "would go above the limit for one of the assets",
        UnderMinimum = -5 => "UNDER_MINIMUM" : "did not withdraw enough of one of the assets",
    }
}

xdr_union! {
    pub enum LiquidityPoolWithdrawResult : LiquidityPoolWithdrawResultCode {
        Success = Success,
        Malformed = Malformed,
        NoTrust = NoTrust,
        Underfunded = Underfunded,
        LineFull = LineFull,
        UnderMinimum = UnderMinimum,
    }
}

// NO_ISSUER names the asset without an issuer; simulated failures name the
// native asset.
impl XdrResult for PathPaymentStrictReceiveResult {
    fn placeholder_failure(code: PathPaymentStrictReceiveResultCode) -> Option<Self> {
        (code == PathPaymentStrictReceiveResultCode::NoIssuer).then_some(Self::NoIssuer(Asset::Native))
    }
}

impl XdrResult for PathPaymentStrictSendResult {
    fn placeholder_failure(code: PathPaymentStrictSendResultCode) -> Option<Self> {
        (code == PathPaymentStrictSendResultCode::NoIssuer).then_some(Self::NoIssuer(Asset::Native))
    }
}

impl_xdr_result!(
    CreateAccountResult,
    PaymentResult,
    ManageSellOfferResult,
    ManageBuyOfferResult,
    SetOptionsResult,
    ChangeTrustResult,
    AllowTrustResult,
    AccountMergeResult,
    InflationResult,
    ManageDataResult,
    BumpSequenceResult,
    CreateClaimableBalanceResult,
    ClaimClaimableBalanceResult,
    BeginSponsoringFutureReservesResult,
    EndSponsoringFutureReservesResult,
    RevokeSponsorshipResult,
    ClawbackResult,
    ClawbackClaimableBalanceResult,
    SetTrustLineFlagsResult,
    LiquidityPoolDepositResult,
    LiquidityPoolWithdrawResult,
);
xdr_union! {
    /// The result of one operation, keyed by [`OperationType`].
    ///
    /// Every kind has a result, including the ones whose body takes no
    /// parameters.
    pub enum OperationResultTr : OperationType {
        CreateAccount(CreateAccountResult) = CreateAccount,
        Payment(PaymentResult) = Payment,
        PathPaymentStrictReceive(PathPaymentStrictReceiveResult) = PathPaymentStrictReceive,
        ManageSellOffer(ManageSellOfferResult) = ManageSellOffer,
        CreatePassiveSellOffer(ManageSellOfferResult) = CreatePassiveSellOffer,
        SetOptions(SetOptionsResult) = SetOptions,
        ChangeTrust(ChangeTrustResult) = ChangeTrust,
        AllowTrust(AllowTrustResult) = AllowTrust,
        AccountMerge(AccountMergeResult) = AccountMerge,
        Inflation(InflationResult) = Inflation,
        ManageData(ManageDataResult) = ManageData,
        BumpSequence(BumpSequenceResult) = BumpSequence,
        ManageBuyOffer(ManageBuyOfferResult) = ManageBuyOffer,
        PathPaymentStrictSend(PathPaymentStrictSendResult) = PathPaymentStrictSend,
        CreateClaimableBalance(CreateClaimableBalanceResult) = CreateClaimableBalance,
        ClaimClaimableBalance(ClaimClaimableBalanceResult) = ClaimClaimableBalance,
        BeginSponsoringFutureReserves(BeginSponsoringFutureReservesResult) = BeginSponsoringFutureReserves,
        EndSponsoringFutureReserves(EndSponsoringFutureReservesResult) = EndSponsoringFutureReserves,
        RevokeSponsorship(RevokeSponsorshipResult) = RevokeSponsorship,
        Clawback(ClawbackResult) = Clawback,
        ClawbackClaimableBalance(ClawbackClaimableBalanceResult) = ClawbackClaimableBalance,
        SetTrustLineFlags(SetTrustLineFlagsResult) = SetTrustLineFlags,
        LiquidityPoolDeposit(LiquidityPoolDepositResult) = LiquidityPoolDeposit,
        LiquidityPoolWithdraw(LiquidityPoolWithdrawResult) = LiquidityPoolWithdraw,
    }
}

macro_rules! with_inner_result {
    ($value:expr, $r:ident => $body:expr) => {
        match $value {
            OperationResultTr::CreateAccount($r) => $body,
            OperationResultTr::Payment($r) => $body,
            OperationResultTr::PathPaymentStrictReceive($r) => $body,
            OperationResultTr::ManageSellOffer($r) => $body,
            OperationResultTr::CreatePassiveSellOffer($r) => $body,
            OperationResultTr::SetOptions($r) => $body,
            OperationResultTr::ChangeTrust($r) => $body,
            OperationResultTr::AllowTrust($r) => $body,
            OperationResultTr::AccountMerge($r) => $body,
            OperationResultTr::Inflation($r) => $body,
            OperationResultTr::ManageData($r) => $body,
            OperationResultTr::BumpSequence($r) => $body,
            OperationResultTr::ManageBuyOffer($r) => $body,
            OperationResultTr::PathPaymentStrictSend($r) => $body,
            OperationResultTr::CreateClaimableBalance($r) => $body,
            OperationResultTr::ClaimClaimableBalance($r) => $body,
            OperationResultTr::BeginSponsoringFutureReserves($r) => $body,
            OperationResultTr::EndSponsoringFutureReserves($r) => $body,
            OperationResultTr::RevokeSponsorship($r) => $body,
            OperationResultTr::Clawback($r) => $body,
            OperationResultTr::ClawbackClaimableBalance($r) => $body,
            OperationResultTr::SetTrustLineFlags($r) => $body,
            OperationResultTr::LiquidityPoolDeposit($r) => $body,
            OperationResultTr::LiquidityPoolWithdraw($r) => $body,
        }
    };
}

impl OperationResultTr {
    pub fn operation_type(&self) -> OperationType {
        self.discriminant()
    }

    /// Whether the inner result reports success.
    pub fn was_successful(&self) -> bool {
        with_inner_result!(self, r => r.was_successful())
    }

    pub fn was_not_successful(&self) -> bool {
        !self.was_successful()
    }

    pub fn error_code(&self) -> Option<String> {
        with_inner_result!(self, r => r.error_code())
    }

    pub fn error_message(&self) -> Option<&'static str> {
        with_inner_result!(self, r => r.error_message())
    }
}

result_code! {
    /// Outcome of applying an operation at all; `INNER` means the operation
    /// ran and its own result follows.
    pub enum OperationResultCode ("op") {
        Inner = 0 => "INNER";
        BadAuth = -1 => "BAD_AUTH" : "too few valid signatures or wrong network",
        NoAccount = -2 => "NO_ACCOUNT" : "source account was not found",
        NotSupported = -3 => "NOT_SUPPORTED" : "operation not supported at this time",
        TooManySubentries = -4 => "TOO_MANY_SUBENTRIES" : "max number of subentries already reached",
        ExceededWorkLimit = -5 => "EXCEEDED_WORK_LIMIT" : "operation did too much work",
        TooManySponsoring = -6 => "TOO_MANY_SPONSORING" : "account is sponsoring too many entries",
    }
}

xdr_union! {
    pub enum OperationResult : OperationResultCode {
        Inner(OperationResultTr) = Inner,
        BadAuth = BadAuth,
        NoAccount = NoAccount,
        NotSupported = NotSupported,
        TooManySubentries = TooManySubentries,
        ExceededWorkLimit = ExceededWorkLimit,
        TooManySponsoring = TooManySponsoring,
    }
}

impl_xdr_result!(OperationResult);

impl OperationResult {
    pub fn inner(&self) -> Option<&OperationResultTr> {
        match self {
            OperationResult::Inner(tr) => Some(tr),
            _ => None,
        }
    }

    /// True when the operation was applied and its own result is a success.
    /// [`XdrResult::was_successful`] only reports that it was applied.
    pub fn is_applied_successfully(&self) -> bool {
        self.inner().is_some_and(OperationResultTr::was_successful)
    }
}
