use stellar_xdr_model::catalog::*;
use stellar_xdr_model::{Arm, Error, ResultCode, XdrCodec, XdrEnum, XdrResult, XdrUnion};

/// Checks classification and error metadata for every code of `R`.
fn check_result_union<R>(prefix: &str)
where
    R: XdrResult + XdrCodec + PartialEq + std::fmt::Debug,
{
    assert!(R::is_total(), "{} must cover every code", R::discriminant_type());
    assert_eq!(R::Discriminant::ERROR_PREFIX, prefix);
    assert_eq!(R::Discriminant::SUCCESS.code(), 0);

    for &code in R::Discriminant::VARIANTS {
        let name = code.name();
        if code.is_success() {
            assert_eq!(code.error_code(), None);
            assert_eq!(code.message(), None);
            assert!(R::simulate(code).unwrap_err().is_invalid_input());
            continue;
        }

        assert!(code.code() < 0, "{name} should be negative");
        assert_eq!(
            code.error_code(),
            Some(format!("{prefix}_{}", name.to_ascii_lowercase()))
        );
        let message = code.message().unwrap_or_default();
        assert!(!message.is_empty(), "{name} has no message");

        assert!(R::arm(code).is_some(), "{name} has no arm");
        let failed = R::simulate(code).unwrap();
        assert_eq!(failed.code(), code);
        assert!(!failed.was_successful());
        assert!(failed.was_not_successful());
        assert_eq!(failed.error_code(), code.error_code());
        assert_eq!(failed.error_message(), Some(message));
        assert_eq!(R::from_xdr(&failed.to_xdr().unwrap()).unwrap(), failed);
    }
}

#[test]
fn test_every_result_union() {
    check_result_union::<CreateAccountResult>("create_account");
    check_result_union::<PaymentResult>("payment");
    check_result_union::<PathPaymentStrictReceiveResult>("path_payment_strict_receive");
    check_result_union::<PathPaymentStrictSendResult>("path_payment_strict_send");
    check_result_union::<ManageSellOfferResult>("manage_sell_offer");
    check_result_union::<ManageBuyOfferResult>("manage_buy_offer");
    check_result_union::<SetOptionsResult>("set_options");
    check_result_union::<ChangeTrustResult>("change_trust");
    check_result_union::<AllowTrustResult>("allow_trust");
    check_result_union::<AccountMergeResult>("account_merge");
    check_result_union::<InflationResult>("inflation");
    check_result_union::<ManageDataResult>("manage_data");
    check_result_union::<BumpSequenceResult>("bump_sequence");
    check_result_union::<CreateClaimableBalanceResult>("create_claimable_balance");
    check_result_union::<ClaimClaimableBalanceResult>("claim_claimable_balance");
    check_result_union::<BeginSponsoringFutureReservesResult>("begin_sponsoring_future_reserves");
    check_result_union::<EndSponsoringFutureReservesResult>("end_sponsoring_future_reserves");
    check_result_union::<RevokeSponsorshipResult>("revoke_sponsorship");
    check_result_union::<ClawbackResult>("clawback");
    check_result_union::<ClawbackClaimableBalanceResult>("clawback_claimable_balance");
    check_result_union::<SetTrustLineFlagsResult>("set_trust_line_flags");
    check_result_union::<LiquidityPoolDepositResult>("liquidity_pool_deposit");
    check_result_union::<LiquidityPoolWithdrawResult>("liquidity_pool_withdraw");
    check_result_union::<OperationResult>("op");
}

#[test]
fn test_account_merge_options() {
    assert_eq!(
        AccountMergeResultCode::options(),
        vec![
            (0, "SUCCESS"),
            (-1, "MALFORMED"),
            (-2, "NO_ACCOUNT"),
            (-3, "IMMUTABLE_SET"),
            (-4, "HAS_SUB_ENTRIES"),
            (-5, "SEQNUM_TOO_FAR"),
            (-6, "DEST_FULL"),
            (-7, "IS_SPONSOR"),
        ]
    );
}

#[test]
fn test_account_merge_simulate_malformed() {
    let result = AccountMergeResult::simulate(AccountMergeResultCode::Malformed).unwrap();
    assert_eq!(result.error_code().as_deref(), Some("account_merge_malformed"));
    assert!(!result.was_successful());
    assert_eq!(result.error_message(), Some("can't merge onto itself"));
}

#[test]
fn test_simulate_error_arm_with_payload() {
    assert_eq!(
        PathPaymentStrictReceiveResult::arm(PathPaymentStrictReceiveResultCode::NoIssuer),
        Some(Arm::Payload("Asset"))
    );
    let failed =
        PathPaymentStrictReceiveResult::simulate(PathPaymentStrictReceiveResultCode::NoIssuer)
            .unwrap();
    assert_eq!(failed, PathPaymentStrictReceiveResult::NoIssuer(Asset::Native));
    assert_eq!(
        failed.error_code().as_deref(),
        Some("path_payment_strict_receive_no_issuer")
    );
    assert_eq!(failed.to_xdr().unwrap(), [0xFF, 0xFF, 0xFF, 0xF7, 0, 0, 0, 0]);

    let failed =
        PathPaymentStrictSendResult::simulate(PathPaymentStrictSendResultCode::NoIssuer).unwrap();
    assert_eq!(failed, PathPaymentStrictSendResult::NoIssuer(Asset::Native));
    assert!(failed.was_not_successful());
}

#[test]
fn test_success_with_payload() {
    let merged = AccountMergeResult::Success(1_000_000);
    assert!(merged.was_successful());
    assert!(!merged.was_not_successful());
    assert_eq!(merged.error_code(), None);
    assert_eq!(merged.error_message(), None);
    assert_eq!(merged.to_xdr_base64().unwrap(), "AAAAAAAAAAAAD0JA");

    // The success arm carries the source balance, so there is no bare success.
    assert!(matches!(AccountMergeResult::success(), Err(Error::InvalidInput(_))));
}

#[test]
fn test_void_success() {
    let ok = BumpSequenceResult::success().unwrap();
    assert_eq!(ok, BumpSequenceResult::Success);
    assert!(ok.was_successful());
    assert_eq!(ok.to_xdr().unwrap(), [0, 0, 0, 0]);
}

#[test]
fn test_operation_result_tr_delegates() {
    let tr = OperationResultTr::AccountMerge(AccountMergeResult::Malformed);
    assert_eq!(tr.operation_type(), OperationType::AccountMerge);
    assert!(tr.was_not_successful());
    assert_eq!(tr.error_code().as_deref(), Some("account_merge_malformed"));

    let tr = OperationResultTr::CreatePassiveSellOffer(ManageSellOfferResult::CrossSelf);
    assert_eq!(tr.error_code().as_deref(), Some("manage_sell_offer_cross_self"));

    let tr = OperationResultTr::Inflation(InflationResult::Success(vec![]));
    assert!(tr.was_successful());
    assert_eq!(tr.error_message(), None);
}

#[test]
fn test_operation_result_envelope() {
    let applied = OperationResult::Inner(OperationResultTr::AccountMerge(
        AccountMergeResult::Malformed,
    ));
    assert_eq!(applied.to_xdr_base64().unwrap(), "AAAAAAAAAAj/////");
    assert!(applied.was_successful());
    assert!(!applied.is_applied_successfully());
    assert_eq!(
        OperationResult::from_xdr_base64("AAAAAAAAAAj/////").unwrap(),
        applied
    );

    let rejected = OperationResult::simulate(OperationResultCode::BadAuth).unwrap();
    assert_eq!(rejected.error_code().as_deref(), Some("op_bad_auth"));
    assert!(rejected.inner().is_none());
    assert_eq!(rejected.to_xdr().unwrap(), [0xFF, 0xFF, 0xFF, 0xFF]);
}

#[test]
fn test_manage_offer_success_round_trip() {
    let seller: AccountId = "GCSCPHVOI6VKOQL5UYSDI6K2AEOMWDWIOD37KZSG2GA3KUAKREVJUSIR"
        .parse()
        .unwrap();
    let usd = Asset::credit("USD", seller.clone()).unwrap();
    let result = ManageSellOfferResult::Success(ManageOfferSuccessResult {
        offers_claimed: vec![
            ClaimAtom::OrderBook(ClaimOfferAtom {
                seller_id: seller.clone(),
                offer_id: 7,
                asset_sold: usd.clone(),
                amount_sold: 10,
                asset_bought: Asset::Native,
                amount_bought: 20,
            }),
            ClaimAtom::LiquidityPool(ClaimLiquidityAtom {
                liquidity_pool_id: [9u8; 32].into(),
                asset_sold: Asset::Native,
                amount_sold: 5,
                asset_bought: usd,
                amount_bought: 3,
            }),
        ],
        offer: ManageOfferSuccessResultOffer::Deleted,
    });
    let bytes = result.to_xdr().unwrap();
    assert_eq!(ManageSellOfferResult::from_xdr(&bytes).unwrap(), result);
}
