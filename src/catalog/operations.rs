//! Operation parameters and the operation envelope.
//!
//! Each `...Op` is a builder: fields start unset, `with_*` setters accept the
//! field type or anything that [`Coerce`]s into it, and encoding fails with
//! [`Error::MissingField`] while a required field is unset.
//!
//! ```rust
//! use stellar_xdr_model::{Error, XdrCodec};
//! use stellar_xdr_model::catalog::BumpSequenceOp;
//!
//! let unset = BumpSequenceOp::new();
//! assert!(matches!(unset.to_xdr(), Err(Error::MissingField { field: "bump_to", .. })));
//!
//! let op = BumpSequenceOp::new().with_bump_to(1)?;
//! assert_eq!(op.to_xdr_base64()?, "AAAAAAAAAAE=");
//! # Ok::<(), Error>(())
//! ```

use serde::{Deserialize, Serialize};

use super::asset::{Asset, AssetCode, ChangeTrustAsset, Price};
use super::keys::{AccountId, MuxedAccount, Signer, SignerKey};
use super::ledger::{ClaimableBalanceId, Claimant, LedgerKey, TrustLineFlags};
use crate::codec::Validate;
use crate::error::{Error, Result};
use crate::types::{Amount, BoundedVec, Coerce, DataValue, PoolId, SequenceNumber, String32, String64};
use crate::union::{XdrEnum, XdrUnion};

xdr_enum! {
    /// Kind of an operation; keys both [`OperationBody`] and
    /// [`OperationResultTr`](super::OperationResultTr).
    pub enum OperationType {
        CreateAccount = 0 => "CREATE_ACCOUNT",
        Payment = 1 => "PAYMENT",
        PathPaymentStrictReceive = 2 => "PATH_PAYMENT_STRICT_RECEIVE",
        ManageSellOffer = 3 => "MANAGE_SELL_OFFER",
        CreatePassiveSellOffer = 4 => "CREATE_PASSIVE_SELL_OFFER",
        SetOptions = 5 => "SET_OPTIONS",
        ChangeTrust = 6 => "CHANGE_TRUST",
        AllowTrust = 7 => "ALLOW_TRUST",
        AccountMerge = 8 => "ACCOUNT_MERGE",
        Inflation = 9 => "INFLATION",
        ManageData = 10 => "MANAGE_DATA",
        BumpSequence = 11 => "BUMP_SEQUENCE",
        ManageBuyOffer = 12 => "MANAGE_BUY_OFFER",
        PathPaymentStrictSend = 13 => "PATH_PAYMENT_STRICT_SEND",
        CreateClaimableBalance = 14 => "CREATE_CLAIMABLE_BALANCE",
        ClaimClaimableBalance = 15 => "CLAIM_CLAIMABLE_BALANCE",
        BeginSponsoringFutureReserves = 16 => "BEGIN_SPONSORING_FUTURE_RESERVES",
        EndSponsoringFutureReserves = 17 => "END_SPONSORING_FUTURE_RESERVES",
        RevokeSponsorship = 18 => "REVOKE_SPONSORSHIP",
        Clawback = 19 => "CLAWBACK",
        ClawbackClaimableBalance = 20 => "CLAWBACK_CLAIMABLE_BALANCE",
        SetTrustLineFlags = 21 => "SET_TRUST_LINE_FLAGS",
        LiquidityPoolDeposit = 22 => "LIQUIDITY_POOL_DEPOSIT",
        LiquidityPoolWithdraw = 23 => "LIQUIDITY_POOL_WITHDRAW",
    }
}

xdr_struct! {
    /// Creates and funds a new account.
    pub struct CreateAccountOp {
        required destination: AccountId => with_destination,
        required starting_balance: Amount => with_starting_balance,
    }
}

xdr_struct! {
    pub struct PaymentOp {
        required destination: MuxedAccount => with_destination,
        required asset: Asset => with_asset,
        required amount: Amount => with_amount,
    }
}

xdr_struct! {
    /// Pays `dest_amount` of `dest_asset`, spending at most `send_max`.
    /// An unset `path` encodes as the empty path.
    pub struct PathPaymentStrictReceiveOp {
        required send_asset: Asset => with_send_asset,
        required send_max: Amount => with_send_max,
        required destination: MuxedAccount => with_destination,
        required dest_asset: Asset => with_dest_asset,
        required dest_amount: Amount => with_dest_amount,
        default path: BoundedVec<Asset, 5> => with_path,
    }
}

xdr_struct! {
    /// Sends exactly `send_amount`, requiring at least `dest_min` delivered.
    pub struct PathPaymentStrictSendOp {
        required send_asset: Asset => with_send_asset,
        required send_amount: Amount => with_send_amount,
        required destination: MuxedAccount => with_destination,
        required dest_asset: Asset => with_dest_asset,
        required dest_min: Amount => with_dest_min,
        default path: BoundedVec<Asset, 5> => with_path,
    }
}

xdr_struct! {
    /// Creates, updates or deletes a sell offer. An unset `offer_id` (zero)
    /// creates a new offer; an `amount` of zero deletes one.
    pub struct ManageSellOfferOp {
        required selling: Asset => with_selling,
        required buying: Asset => with_buying,
        required amount: Amount => with_amount,
        required price: Price => with_price,
        default offer_id: i64 => with_offer_id,
    }
}

xdr_struct! {
    pub struct ManageBuyOfferOp {
        required selling: Asset => with_selling,
        required buying: Asset => with_buying,
        required buy_amount: Amount => with_buy_amount,
        required price: Price => with_price,
        default offer_id: i64 => with_offer_id,
    }
}

xdr_struct! {
    pub struct CreatePassiveSellOfferOp {
        required selling: Asset => with_selling,
        required buying: Asset => with_buying,
        required amount: Amount => with_amount,
        required price: Price => with_price,
    }
}

xdr_struct! {
    /// Every field is optional; only the ones set are changed.
    pub struct SetOptionsOp {
        optional inflation_dest: AccountId => with_inflation_dest,
        optional clear_flags: u32 => with_clear_flags,
        optional set_flags: u32 => with_set_flags,
        optional master_weight: u32 => with_master_weight,
        optional low_threshold: u32 => with_low_threshold,
        optional med_threshold: u32 => with_med_threshold,
        optional high_threshold: u32 => with_high_threshold,
        optional home_domain: String32 => with_home_domain,
        optional signer: Signer => with_signer,
    }
}

xdr_struct! {
    pub struct ChangeTrustOp {
        required line: ChangeTrustAsset => with_line,
        required limit: Amount => with_limit,
    }
}

xdr_struct! {
    /// Superseded by `SetTrustLineFlagsOp`; kept for older ledgers.
    pub struct AllowTrustOp {
        required trustor: AccountId => with_trustor,
        required asset: AssetCode => with_asset,
        required authorize: TrustAuthorization => with_authorize,
    }
}

/// The `authorize` value of [`AllowTrustOp`]: `0` revokes, `1` is
/// [`TrustLineFlags::Authorized`] and `2` is
/// [`TrustLineFlags::AuthorizedToMaintainLiabilities`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TrustAuthorization(u32);

impl TrustAuthorization {
    pub const REVOKED: Self = TrustAuthorization(0);
    pub const AUTHORIZED: Self = TrustAuthorization(1);
    pub const MAINTAIN_LIABILITIES: Self = TrustAuthorization(2);

    pub fn new(value: u32) -> Result<Self> {
        if value > Self::MAINTAIN_LIABILITIES.0 {
            return Err(Error::invalid_input(format!(
                "{value} is not an AllowTrust authorization (0, 1 or 2)"
            )));
        }
        Ok(TrustAuthorization(value))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Coerce<TrustAuthorization> for u32 {
    fn coerce(self) -> Result<TrustAuthorization> {
        TrustAuthorization::new(self)
    }
}

impl Coerce<TrustAuthorization> for TrustLineFlags {
    fn coerce(self) -> Result<TrustAuthorization> {
        TrustAuthorization::new(self.code().unsigned_abs())
    }
}

impl<'de> Deserialize<'de> for TrustAuthorization {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let value = u32::deserialize(deserializer)?;
        TrustAuthorization::new(value).map_err(|_| {
            serde::de::Error::invalid_value(
                serde::de::Unexpected::Unsigned(u64::from(value)),
                &"an AllowTrust authorization (0, 1 or 2)",
            )
        })
    }
}

xdr_struct! {
    /// Sets, modifies or (with `data_value` unset) deletes a data entry.
    pub struct ManageDataOp {
        required data_name: String64 => with_data_name,
        optional data_value: DataValue => with_data_value,
    }
}

xdr_struct! {
    pub struct BumpSequenceOp {
        required bump_to: SequenceNumber => with_bump_to,
    }
}

xdr_struct! {
    pub struct CreateClaimableBalanceOp {
        required asset: Asset => with_asset,
        required amount: Amount => with_amount,
        required claimants: BoundedVec<Claimant, 10> => with_claimants,
    }
}

xdr_struct! {
    pub struct ClaimClaimableBalanceOp {
        required balance_id: ClaimableBalanceId => with_balance_id,
    }
}

xdr_struct! {
    pub struct BeginSponsoringFutureReservesOp {
        required sponsored_id: AccountId => with_sponsored_id,
    }
}

xdr_enum! {
    pub enum RevokeSponsorshipType {
        LedgerEntry = 0 => "REVOKE_SPONSORSHIP_LEDGER_ENTRY",
        Signer = 1 => "REVOKE_SPONSORSHIP_SIGNER",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevokeSponsorshipOpSigner {
    pub account_id: AccountId,
    pub signer_key: SignerKey,
}

xdr_union! {
    pub enum RevokeSponsorshipOp : RevokeSponsorshipType {
        LedgerEntry(LedgerKey) = LedgerEntry,
        Signer(RevokeSponsorshipOpSigner) = Signer,
    }
}

xdr_struct! {
    pub struct ClawbackOp {
        required asset: Asset => with_asset,
        required from: MuxedAccount => with_from,
        required amount: Amount => with_amount,
    }
}

xdr_struct! {
    pub struct ClawbackClaimableBalanceOp {
        required balance_id: ClaimableBalanceId => with_balance_id,
    }
}

xdr_struct! {
    /// `clear_flags` and `set_flags` are bitmasks of
    /// [`TrustLineFlags`](super::TrustLineFlags).
    pub struct SetTrustLineFlagsOp {
        required trustor: AccountId => with_trustor,
        required asset: Asset => with_asset,
        required clear_flags: u32 => with_clear_flags,
        required set_flags: u32 => with_set_flags,
    }
}

xdr_struct! {
    pub struct LiquidityPoolDepositOp {
        required liquidity_pool_id: PoolId => with_liquidity_pool_id,
        required max_amount_a: Amount => with_max_amount_a,
        required max_amount_b: Amount => with_max_amount_b,
        required min_price: Price => with_min_price,
        required max_price: Price => with_max_price,
    }
}

xdr_struct! {
    pub struct LiquidityPoolWithdrawOp {
        required liquidity_pool_id: PoolId => with_liquidity_pool_id,
        required amount: Amount => with_amount,
        required min_amount_a: Amount => with_min_amount_a,
        required min_amount_b: Amount => with_min_amount_b,
    }
}

xdr_union! {
    /// The parameters of one operation, keyed by [`OperationType`].
    ///
    /// `INFLATION` and `END_SPONSORING_FUTURE_RESERVES` take no parameters;
    /// `ACCOUNT_MERGE` takes the destination account directly.
    pub enum OperationBody : OperationType {
        CreateAccount(CreateAccountOp) = CreateAccount,
        Payment(PaymentOp) = Payment,
        PathPaymentStrictReceive(PathPaymentStrictReceiveOp) = PathPaymentStrictReceive,
        ManageSellOffer(ManageSellOfferOp) = ManageSellOffer,
        CreatePassiveSellOffer(CreatePassiveSellOfferOp) = CreatePassiveSellOffer,
        SetOptions(SetOptionsOp) = SetOptions,
        ChangeTrust(ChangeTrustOp) = ChangeTrust,
        AllowTrust(AllowTrustOp) = AllowTrust,
        AccountMerge(MuxedAccount) = AccountMerge,
        Inflation = Inflation,
        ManageData(ManageDataOp) = ManageData,
        BumpSequence(BumpSequenceOp) = BumpSequence,
        ManageBuyOffer(ManageBuyOfferOp) = ManageBuyOffer,
        PathPaymentStrictSend(PathPaymentStrictSendOp) = PathPaymentStrictSend,
        CreateClaimableBalance(CreateClaimableBalanceOp) = CreateClaimableBalance,
        ClaimClaimableBalance(ClaimClaimableBalanceOp) = ClaimClaimableBalance,
        BeginSponsoringFutureReserves(BeginSponsoringFutureReservesOp) = BeginSponsoringFutureReserves,
        EndSponsoringFutureReserves = EndSponsoringFutureReserves,
        RevokeSponsorship(RevokeSponsorshipOp) = RevokeSponsorship,
        Clawback(ClawbackOp) = Clawback,
        ClawbackClaimableBalance(ClawbackClaimableBalanceOp) = ClawbackClaimableBalance,
        SetTrustLineFlags(SetTrustLineFlagsOp) = SetTrustLineFlags,
        LiquidityPoolDeposit(LiquidityPoolDepositOp) = LiquidityPoolDeposit,
        LiquidityPoolWithdraw(LiquidityPoolWithdrawOp) = LiquidityPoolWithdraw,
    }
}

impl OperationBody {
    /// The body for a parameterless operation kind (`INFLATION`,
    /// `END_SPONSORING_FUTURE_RESERVES`). Other kinds are built from their
    /// parameters through the matching variant, or with
    /// [`OperationBody::make_with`] when the code comes from the caller.
    pub fn make(code: i32) -> Result<Self> {
        let ty = OperationType::try_from_code(code)?;
        Self::from_void(ty).ok_or_else(|| {
            Error::invalid_input(format!("{ty} takes parameters; build its body from them"))
        })
    }

    /// `body`, once checked to be the arm for `code`.
    pub fn make_with(code: i32, body: OperationBody) -> Result<Self> {
        let ty = OperationType::try_from_code(code)?;
        let actual = body.operation_type();
        if actual != ty {
            return Err(Error::invalid_input(format!("{ty} cannot carry a {actual} body")));
        }
        Ok(body)
    }

    pub fn operation_type(&self) -> OperationType {
        self.discriminant()
    }
}

/// One operation of a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// Defaults to the transaction's source account when unset.
    pub source_account: Option<MuxedAccount>,
    pub body: OperationBody,
}

impl Operation {
    pub fn new(body: OperationBody) -> Self {
        Operation {
            source_account: None,
            body,
        }
    }

    pub fn with_source_account(mut self, account: impl Coerce<MuxedAccount>) -> Result<Self> {
        self.source_account = Some(account.coerce()?);
        Ok(self)
    }

    pub fn operation_type(&self) -> OperationType {
        self.body.operation_type()
    }
}

impl From<OperationBody> for Operation {
    fn from(body: OperationBody) -> Self {
        Operation::new(body)
    }
}

impl Validate for Operation {
    fn validate(&self) -> Result<()> {
        self.source_account.validate()?;
        self.body.validate()
    }
}

impl_validate!(RevokeSponsorshipOpSigner, TrustAuthorization);
