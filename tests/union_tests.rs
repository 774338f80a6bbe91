use stellar_xdr_model::catalog::{
    AccountMergeResult, AccountMergeResultCode, Asset, AssetCode, AssetType, ClaimPredicate,
    ManageOfferEffect, ManageOfferSuccessResultOffer, MuxedAccount, OfferEntry, OperationBody,
    OperationResultTr, OperationType, PathPaymentStrictReceiveResult, PublicKey,
};
use stellar_xdr_model::{Arm, DecodeOptions, Error, XdrCodec, XdrEnum, XdrUnion, to_bytes};

const ACCOUNT: &str = "GAKUGUH6HKSOJRMK2IVFLJD5HZPF6RYCJ4Q3EJDHCU3F7WZPFM4YX6AN";

fn offer() -> OfferEntry {
    OfferEntry {
        seller_id: ACCOUNT.parse().unwrap(),
        offer_id: 42,
        selling: Asset::Native,
        buying: Asset::credit("USD", ACCOUNT).unwrap(),
        amount: 1_000,
        price: stellar_xdr_model::catalog::Price { n: 1, d: 2 },
        flags: 0,
        ext: Default::default(),
    }
}

#[test]
fn test_enum_options_in_declared_order() {
    assert_eq!(
        ManageOfferEffect::options(),
        vec![
            (0, "MANAGE_OFFER_CREATED"),
            (1, "MANAGE_OFFER_UPDATED"),
            (2, "MANAGE_OFFER_DELETED"),
        ]
    );
}

#[test]
fn test_enum_try_from_unknown_code() {
    assert_eq!(OperationType::try_from(11).unwrap(), OperationType::BumpSequence);
    let err = OperationType::try_from(24).unwrap_err();
    assert!(err.is_invalid_input(), "{err}");
}

#[test]
fn test_enum_decode_unknown_code() {
    let bytes = to_bytes(&99i32).unwrap();
    assert_eq!(
        OperationType::from_xdr(&bytes),
        Err(Error::InvalidDiscriminant {
            ty: "OperationType".into(),
            code: 99
        })
    );
}

#[test]
fn test_negative_codes_on_the_wire() {
    let bytes = AccountMergeResultCode::IsSponsor.to_xdr().unwrap();
    assert_eq!(bytes, [0xFF, 0xFF, 0xFF, 0xF9]);
    assert_eq!(
        AccountMergeResultCode::from_xdr(&bytes).unwrap(),
        AccountMergeResultCode::IsSponsor
    );
}

#[test]
fn test_discriminant_type() {
    assert_eq!(OperationBody::discriminant_type(), "OperationType");
    assert_eq!(OperationResultTr::discriminant_type(), "OperationType");
    assert_eq!(AccountMergeResult::discriminant_type(), "AccountMergeResultCode");
    assert_eq!(ManageOfferSuccessResultOffer::discriminant_type(), "ManageOfferEffect");
}

#[test]
fn test_total_unions_cover_every_code() {
    assert!(OperationBody::is_total());
    assert!(OperationResultTr::is_total());
    assert!(AccountMergeResult::is_total());
    assert!(ClaimPredicate::is_total());
    assert!(PublicKey::is_total());
    assert_eq!(
        ManageOfferSuccessResultOffer::arms(),
        vec![
            (0, Arm::Payload("OfferEntry")),
            (1, Arm::Payload("OfferEntry")),
            (2, Arm::Void),
        ]
    );
}

#[test]
fn test_partial_unions_declare_their_arms() {
    assert!(!Asset::is_total());
    assert_eq!(Asset::arm(AssetType::PoolShare), None);
    assert_eq!(Asset::arm(AssetType::Native), Some(Arm::Void));
    assert_eq!(Asset::arms().len(), 3);

    assert!(!AssetCode::is_total());
    assert_eq!(AssetCode::arm(AssetType::Native), None);

    assert!(!MuxedAccount::is_total());
    assert_eq!(MuxedAccount::arms().len(), 2);
}

#[test]
fn test_partial_union_rejects_undeclared_discriminant() {
    // ASSET_TYPE_POOL_SHARE is a valid AssetType but not an Asset arm.
    let bytes = to_bytes(&AssetType::PoolShare).unwrap();
    assert_eq!(
        Asset::from_xdr(&bytes),
        Err(Error::InvalidDiscriminant {
            ty: "Asset".into(),
            code: 3
        })
    );
}

#[test]
fn test_union_rejects_unknown_discriminant() {
    let bytes = to_bytes(&-8i32).unwrap();
    let err = AccountMergeResult::from_xdr(&bytes).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidDiscriminant {
            ty: "AccountMergeResultCode".into(),
            code: -8
        }
    );
    assert!(err.is_decode_error());
}

#[test]
fn test_void_arm_writes_only_the_discriminant() {
    assert_eq!(Asset::Native.to_xdr().unwrap(), [0, 0, 0, 0]);
    assert_eq!(
        AccountMergeResult::Malformed.to_xdr().unwrap(),
        [0xFF, 0xFF, 0xFF, 0xFF]
    );
    assert_eq!(OperationBody::Inflation.to_xdr().unwrap(), [0, 0, 0, 9]);
}

#[test]
fn test_same_payload_type_distinct_discriminants() {
    let created = ManageOfferSuccessResultOffer::Created(offer());
    let updated = ManageOfferSuccessResultOffer::Updated(offer());
    assert_eq!(created.discriminant(), ManageOfferEffect::Created);
    assert_eq!(updated.discriminant(), ManageOfferEffect::Updated);

    let created_bytes = created.to_xdr().unwrap();
    let updated_bytes = updated.to_xdr().unwrap();
    assert_eq!(&created_bytes[..4], [0, 0, 0, 0]);
    assert_eq!(&updated_bytes[..4], [0, 0, 0, 1]);
    assert_eq!(created_bytes[4..], updated_bytes[4..]);

    assert_eq!(ManageOfferSuccessResultOffer::from_xdr(&updated_bytes).unwrap(), updated);
}

#[test]
fn test_payload_access() {
    let merged = AccountMergeResult::Success(5_000);
    let payload = merged.payload().and_then(|p| p.downcast_ref::<i64>());
    assert_eq!(payload, Some(&5_000));
    assert!(AccountMergeResult::Malformed.payload().is_none());

    let body = OperationBody::AccountMerge(ACCOUNT.parse().unwrap());
    assert!(body.payload().unwrap().is::<MuxedAccount>());
}

#[test]
fn test_from_void() {
    assert_eq!(
        OperationBody::from_void(OperationType::EndSponsoringFutureReserves),
        Some(OperationBody::EndSponsoringFutureReserves)
    );
    assert_eq!(OperationBody::from_void(OperationType::Payment), None);
    assert_eq!(OperationResultTr::from_void(OperationType::Inflation), None);
}

#[test]
fn test_decode_reads_only_the_arm_payload() {
    // PATH_PAYMENT_STRICT_RECEIVE_NO_ISSUER carries the missing asset.
    let result = PathPaymentStrictReceiveResult::NoIssuer(Asset::credit("EUR", ACCOUNT).unwrap());
    let bytes = result.to_xdr().unwrap();
    assert_eq!(&bytes[..4], [0xFF, 0xFF, 0xFF, 0xF7]);
    assert_eq!(PathPaymentStrictReceiveResult::from_xdr(&bytes).unwrap(), result);

    // A void error arm followed by junk leaves the junk unread.
    let mut bytes = PathPaymentStrictReceiveResult::TooFewOffers.to_xdr().unwrap();
    bytes.extend([1, 2, 3, 4]);
    assert_eq!(
        PathPaymentStrictReceiveResult::from_xdr(&bytes),
        Err(Error::TrailingBytes(4))
    );
}

#[test]
fn test_recursive_predicate_depth() {
    let mut predicate = ClaimPredicate::BeforeRelativeTime(3_600);
    for _ in 0..10 {
        predicate = ClaimPredicate::Not(Some(Box::new(predicate)));
    }
    let bytes = predicate.to_xdr().unwrap();
    assert_eq!(ClaimPredicate::from_xdr(&bytes).unwrap(), predicate);

    let shallow = DecodeOptions::default().max_depth(8);
    assert!(matches!(
        ClaimPredicate::from_xdr_with(&bytes, shallow),
        Err(Error::DepthLimitExceeded(8))
    ));
}

#[test]
fn test_bounded_array_limit_on_decode() {
    let three = vec![
        ClaimPredicate::Unconditional,
        ClaimPredicate::Unconditional,
        ClaimPredicate::Unconditional,
    ];
    // CLAIM_PREDICATE_AND, count 3, three void predicates
    let mut bytes = to_bytes(&1i32).unwrap();
    bytes.extend(to_bytes(&three).unwrap());
    assert!(matches!(
        ClaimPredicate::from_xdr(&bytes),
        Err(Error::InvalidLength { got: 3, .. })
    ));
}
