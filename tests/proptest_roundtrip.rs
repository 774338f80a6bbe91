use proptest::prelude::*;

use stellar_xdr_model::catalog::*;
use stellar_xdr_model::types::{Amount, BoundedVec, Uint256};
use stellar_xdr_model::{XdrCodec, XdrEnum};

fn arb_account() -> impl Strategy<Value = AccountId> {
    any::<[u8; 32]>().prop_map(PublicKey::from_ed25519)
}

fn arb_muxed() -> impl Strategy<Value = MuxedAccount> {
    (any::<[u8; 32]>(), any::<Option<u64>>()).prop_map(|(key, id)| match id {
        Some(id) => MuxedAccount::MuxedEd25519(MuxedAccountMed25519 {
            id,
            ed25519: Uint256(key),
        }),
        None => MuxedAccount::Ed25519(Uint256(key)),
    })
}

fn arb_asset() -> impl Strategy<Value = Asset> {
    prop_oneof![
        Just(Asset::Native),
        ("[A-Z0-9]{1,12}", arb_account())
            .prop_map(|(code, issuer)| Asset::credit(&code, issuer).expect("valid code")),
    ]
}

fn arb_amount() -> impl Strategy<Value = Amount> {
    (0..=i64::MAX).prop_map(Amount::from_stroops)
}

fn arb_predicate() -> impl Strategy<Value = ClaimPredicate> {
    let leaf = prop_oneof![
        Just(ClaimPredicate::Unconditional),
        any::<i64>().prop_map(ClaimPredicate::BeforeAbsoluteTime),
        any::<i64>().prop_map(ClaimPredicate::BeforeRelativeTime),
    ];
    leaf.prop_recursive(4, 16, 2, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..=2)
                .prop_map(|v| ClaimPredicate::And(BoundedVec::new(v).expect("at most two"))),
            prop::collection::vec(inner.clone(), 0..=2)
                .prop_map(|v| ClaimPredicate::Or(BoundedVec::new(v).expect("at most two"))),
            prop::option::of(inner).prop_map(|p| ClaimPredicate::Not(p.map(Box::new))),
        ]
    })
}

proptest! {
    #[test]
    fn prop_amount_text_round_trip(amount in arb_amount()) {
        let text = amount.to_string();
        prop_assert_eq!(text.parse::<Amount>().unwrap(), amount);
    }

    #[test]
    fn prop_account_strkey_round_trip(account in arb_account()) {
        let text = account.to_string();
        prop_assert!(text.starts_with('G'));
        prop_assert_eq!(text.parse::<AccountId>().unwrap(), account);
    }

    #[test]
    fn prop_muxed_strkey_round_trip(muxed in arb_muxed()) {
        let text = muxed.to_string();
        prop_assert_eq!(text.starts_with('M'), muxed.id().is_some());
        prop_assert_eq!(text.parse::<MuxedAccount>().unwrap(), muxed);
    }

    #[test]
    fn prop_asset_text_round_trip(asset in arb_asset()) {
        prop_assert_eq!(asset.to_string().parse::<Asset>().unwrap(), asset);
    }

    #[test]
    fn prop_payment_operation_round_trip(
        source in prop::option::of(arb_muxed()),
        destination in arb_muxed(),
        asset in arb_asset(),
        amount in arb_amount(),
    ) {
        let payment = PaymentOp::new()
            .with_destination(destination)
            .unwrap()
            .with_asset(asset)
            .unwrap()
            .with_amount(amount)
            .unwrap();
        let op = Operation {
            source_account: source,
            body: OperationBody::Payment(payment),
        };
        let encoded = op.to_xdr_base64().unwrap();
        prop_assert_eq!(Operation::from_xdr_base64(&encoded).unwrap(), op);
    }

    #[test]
    fn prop_claimant_round_trip(destination in arb_account(), predicate in arb_predicate()) {
        let claimant = Claimant::new(destination, predicate);
        let bytes = claimant.to_xdr().unwrap();
        prop_assert_eq!(bytes.len() % 4, 0);
        prop_assert_eq!(Claimant::from_xdr(&bytes).unwrap(), claimant);
    }

    #[test]
    fn prop_result_code_round_trip(code in prop::sample::select(ManageSellOfferResultCode::VARIANTS)) {
        let bytes = code.to_xdr().unwrap();
        prop_assert_eq!(i32::from_be_bytes(bytes[..].try_into().unwrap()), code.code());
        prop_assert_eq!(ManageSellOfferResultCode::from_xdr(&bytes).unwrap(), code);
    }

    #[test]
    fn prop_decoding_arbitrary_bytes_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let _ = Operation::from_xdr(&bytes);
        let _ = OperationResult::from_xdr(&bytes);
        let _ = ClaimPredicate::from_xdr(&bytes);
    }
}
