//! Field-level validity scenarios across entities.

use bazaar_domain::enums::{AuthTokenType, ExchangeState};
use bazaar_domain::{
    AuthToken, Exchange, Funds, FundsList, Resolution, Validity, MAX_BUYER_PERCENT,
};

#[test]
fn test_auth_token_mutate_and_restore() {
    let mut token = AuthToken {
        token_id: "1".to_owned(),
        token_type: AuthTokenType::Lens.code(),
    };
    assert!(token.is_valid());

    token.token_id = "zedzdeadbaby".to_owned();
    assert!(!token.token_id_is_valid());
    assert!(!token.is_valid());

    token.token_id = "0".to_owned();
    assert!(token.token_id_is_valid());
    assert!(token.is_valid());
}

#[test]
fn test_resolution_basis_point_bounds() {
    assert_eq!(MAX_BUYER_PERCENT, 10_000);

    let valid = ["0", "21", "10000"];
    for v in valid {
        let r = Resolution {
            buyer_percent: v.to_owned(),
        };
        assert!(r.is_valid(), "{v} must be valid");
    }

    let invalid = ["10001", "12000", "", "12.0", "percent"];
    for v in invalid {
        let r = Resolution {
            buyer_percent: v.to_owned(),
        };
        assert!(!r.is_valid(), "{v} must be invalid");
    }
}

#[test]
fn test_exchange_nonzero_identifiers() {
    let mut exchange = Exchange {
        id: "126".to_owned(),
        offer_id: "17".to_owned(),
        buyer_id: "9".to_owned(),
        finalized_date: None,
        voucher: None,
        state: ExchangeState::Committed.code(),
    };
    assert!(exchange.is_valid());

    exchange.id = "0".to_owned();
    assert!(!exchange.id_is_valid());
    assert!(!exchange.is_valid());

    exchange.id = "126".to_owned();
    assert!(exchange.id_is_valid());
    assert!(exchange.is_valid());
}

#[test]
fn test_exchange_optional_finalized_date() {
    let mut exchange = Exchange {
        id: "1".to_owned(),
        offer_id: "1".to_owned(),
        buyer_id: "1".to_owned(),
        finalized_date: None,
        voucher: None,
        state: ExchangeState::Redeemed.code(),
    };
    assert!(exchange.is_valid());

    exchange.finalized_date = Some("1675620001".to_owned());
    assert!(exchange.is_valid());

    exchange.finalized_date = Some("2023-02-05T18:20:01Z".to_owned());
    assert!(!exchange.finalized_date_is_valid());
    assert!(!exchange.is_valid());
}

#[test]
fn test_funds_address_checks() {
    let mut funds = Funds {
        token_address: "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed".to_owned(),
        token_name: "External token".to_owned(),
        available_amount: "200".to_owned(),
    };
    assert!(funds.is_valid());

    for bad in ["0xASFADF", "definitely not an address", ""] {
        funds.token_address = bad.to_owned();
        assert!(!funds.token_address_is_valid(), "{bad:?} must be invalid");
        assert!(!funds.is_valid());
    }
}

#[test]
fn test_funds_list_propagation() {
    let good = Funds {
        token_address: "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359".to_owned(),
        token_name: "External token".to_owned(),
        available_amount: "200".to_owned(),
    };
    let bad = Funds {
        available_amount: "a lot".to_owned(),
        ..good.clone()
    };

    assert!(FundsList { funds: vec![] }.is_valid());
    assert!(FundsList {
        funds: vec![good.clone(), good.clone()]
    }
    .is_valid());
    assert!(!FundsList {
        funds: vec![good, bad]
    }
    .is_valid());
}
