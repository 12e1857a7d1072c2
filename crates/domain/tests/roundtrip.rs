//! Wire round-trip and canonical-string properties across all entities.

use bazaar_domain::enums::{
    AuthTokenType, DisputeState, EvaluationMethod, ExchangeState, GatingType, TokenType,
};
use bazaar_domain::{
    AuthToken, Canonical, Condition, Dispute, Exchange, Funds, FundsList, MetaTxExchangeDetails,
    OfferFees, Receipt, Resolution, TwinReceipt, Validity, Voucher,
};
use bazaar_wire::Wire;

fn offer_fees() -> OfferFees {
    OfferFees {
        protocol_fee: "7500000000000000".to_owned(),
        agent_fee: "20000".to_owned(),
    }
}

fn twin_receipt() -> TwinReceipt {
    TwinReceipt {
        twin_id: "3".to_owned(),
        token_id: "1200".to_owned(),
        amount: "1".to_owned(),
        token_address: "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB".to_owned(),
        token_type: TokenType::MultiToken.code(),
    }
}

fn receipt() -> Receipt {
    Receipt {
        exchange_id: "126".to_owned(),
        offer_id: "17".to_owned(),
        buyer_id: "9".to_owned(),
        seller_id: "2".to_owned(),
        price: "1500000000000000000".to_owned(),
        seller_deposit: "100000000000000000".to_owned(),
        buyer_cancel_penalty: "50000000000000000".to_owned(),
        offer_fees: offer_fees(),
        agent_id: "12".to_owned(),
        exchange_token: "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed".to_owned(),
        finalized_date: "1675620001".to_owned(),
        condition: Condition {
            method: EvaluationMethod::Threshold.code(),
            token_type: TokenType::FungibleToken.code(),
            token_address: "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb".to_owned(),
            gating_type: GatingType::PerAddress.code(),
            threshold: "20".to_owned(),
            max_commits: "3".to_owned(),
            ..Condition::default()
        },
        committed_date: "1674930001".to_owned(),
        redeemed_date: "1675000000".to_owned(),
        voucher_expired: false,
        dispute_resolver_id: "5".to_owned(),
        disputed_date: "1675100000".to_owned(),
        escalated_date: "0".to_owned(),
        dispute_state: DisputeState::Retracted.code(),
        twin_receipts: vec![twin_receipt()],
    }
}

fn assert_roundtrip<T>(entity: T)
where
    T: Wire + Canonical + Validity + Clone + PartialEq + std::fmt::Debug,
{
    assert!(entity.is_valid());

    let back = T::from_wire(entity.to_wire().unwrap()).unwrap();
    assert!(back.is_valid());
    assert_eq!(back, entity);
    assert_eq!(
        back.to_canonical_string().unwrap(),
        entity.to_canonical_string().unwrap()
    );

    // plain-object round trip through canonical JSON
    let replica = T::from_plain(entity.to_plain().unwrap()).unwrap();
    assert_eq!(replica, entity);
}

#[test]
fn test_auth_token_roundtrip() {
    assert_roundtrip(AuthToken {
        token_id: "1".to_owned(),
        token_type: AuthTokenType::Lens.code(),
    });
}

#[test]
fn test_resolution_roundtrip() {
    assert_roundtrip(Resolution {
        buyer_percent: "10000".to_owned(),
    });
}

#[test]
fn test_dispute_roundtrip() {
    assert_roundtrip(Dispute {
        exchange_id: "100".to_owned(),
        disputed_date: "1674930001".to_owned(),
        finalized_date: "1675620001".to_owned(),
        complaint: "item not as described".to_owned(),
        state: DisputeState::Decided.code(),
        resolution: Resolution {
            buyer_percent: "21".to_owned(),
        },
    });
}

#[test]
fn test_voucher_roundtrip() {
    assert_roundtrip(Voucher {
        committed_date: Some("1674930001".to_owned()),
        valid_until_date: Some("1675620001".to_owned()),
        redeemed_date: None,
        expired: false,
    });
}

#[test]
fn test_exchange_roundtrip() {
    assert_roundtrip(Exchange {
        id: "126".to_owned(),
        offer_id: "17".to_owned(),
        buyer_id: "9".to_owned(),
        finalized_date: Some("1675620001".to_owned()),
        voucher: Some(Voucher {
            committed_date: Some("1674930001".to_owned()),
            valid_until_date: Some("1675620001".to_owned()),
            redeemed_date: Some("1675000000".to_owned()),
            expired: true,
        }),
        state: ExchangeState::Completed.code(),
    });
}

#[test]
fn test_funds_list_roundtrip() {
    assert_roundtrip(FundsList {
        funds: vec![
            Funds {
                token_address: "0x0000000000000000000000000000000000000000".to_owned(),
                token_name: "Native currency".to_owned(),
                available_amount: "100000000000000000000".to_owned(),
            },
            Funds {
                token_address: "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359".to_owned(),
                token_name: "External token".to_owned(),
                available_amount: "0".to_owned(),
            },
        ],
    });
}

#[test]
fn test_meta_tx_exchange_details_roundtrip() {
    assert_roundtrip(MetaTxExchangeDetails {
        exchange_id: "42".to_owned(),
    });
}

#[test]
fn test_offer_fees_roundtrip() {
    assert_roundtrip(offer_fees());
}

#[test]
fn test_twin_receipt_roundtrip() {
    assert_roundtrip(twin_receipt());
}

#[test]
fn test_condition_roundtrip() {
    assert_roundtrip(Condition::default());
}

#[test]
fn test_receipt_roundtrip() {
    assert_roundtrip(receipt());
}

#[test]
fn test_uint256_scale_values_survive_the_wire() {
    let max = "115792089237316195423570985008687907853269984665640564039457584007913129639935";
    let fees = OfferFees {
        protocol_fee: max.to_owned(),
        agent_fee: "0".to_owned(),
    };
    let back = OfferFees::from_wire(fees.to_wire().unwrap()).unwrap();
    assert_eq!(back.protocol_fee, max);
}

#[test]
fn test_clone_independence() {
    let original = receipt();
    let mut copy = original.clone();

    copy.twin_receipts[0].amount = "999".to_owned();
    copy.offer_fees.agent_fee = "1".to_owned();
    copy.exchange_id = "127".to_owned();

    assert_eq!(original.twin_receipts[0].amount, "1");
    assert_eq!(original.offer_fees.agent_fee, "20000");
    assert_eq!(original.exchange_id, "126");
    assert_ne!(
        copy.to_canonical_string().unwrap(),
        original.to_canonical_string().unwrap()
    );
}

#[test]
fn test_canonical_string_keys_are_camel_case() {
    let token = AuthToken {
        token_id: "1".to_owned(),
        token_type: 1,
    };
    assert_eq!(
        token.to_canonical_string().unwrap(),
        r#"{"tokenId":"1","tokenType":1}"#
    );
}
