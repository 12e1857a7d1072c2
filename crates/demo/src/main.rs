use anyhow::{ensure, Context, Result};
use tracing::info;

use bazaar_domain::enums::{DisputeState, ExchangeState, TokenType};
use bazaar_domain::{
    Canonical, Condition, Dispute, Exchange, OfferFees, Receipt, Resolution, TwinReceipt,
    Validity, Voucher,
};
use bazaar_wire::Wire;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let exchange = Exchange {
        id: "126".to_owned(),
        offer_id: "17".to_owned(),
        buyer_id: "9".to_owned(),
        finalized_date: Some("1675620001".to_owned()),
        voucher: Some(Voucher {
            committed_date: Some("1674930001".to_owned()),
            valid_until_date: Some("1675620001".to_owned()),
            redeemed_date: Some("1675000000".to_owned()),
            expired: false,
        }),
        state: ExchangeState::Completed.code(),
    };
    ensure!(exchange.is_valid(), "exchange failed validation");
    info!(exchange = %exchange.to_canonical_string()?, "built exchange");

    let dispute = Dispute {
        exchange_id: exchange.id.clone(),
        disputed_date: "1675100000".to_owned(),
        finalized_date: "1675200000".to_owned(),
        complaint: "item not as described".to_owned(),
        state: DisputeState::Resolved.code(),
        resolution: Resolution {
            buyer_percent: "5000".to_owned(),
        },
    };
    ensure!(dispute.is_valid(), "dispute failed validation");
    info!(dispute = %dispute.to_canonical_string()?, "built dispute");

    let receipt = Receipt {
        exchange_id: exchange.id.clone(),
        offer_id: exchange.offer_id.clone(),
        buyer_id: exchange.buyer_id.clone(),
        seller_id: "2".to_owned(),
        price: "1500000000000000000".to_owned(),
        seller_deposit: "100000000000000000".to_owned(),
        buyer_cancel_penalty: "50000000000000000".to_owned(),
        offer_fees: OfferFees {
            protocol_fee: "7500000000000000".to_owned(),
            agent_fee: "0".to_owned(),
        },
        exchange_token: "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed".to_owned(),
        finalized_date: "1675620001".to_owned(),
        condition: Condition::default(),
        committed_date: "1674930001".to_owned(),
        redeemed_date: "1675000000".to_owned(),
        voucher_expired: false,
        dispute_resolver_id: "5".to_owned(),
        disputed_date: dispute.disputed_date.clone(),
        escalated_date: "0".to_owned(),
        dispute_state: dispute.state,
        twin_receipts: vec![TwinReceipt {
            twin_id: "3".to_owned(),
            token_id: "1200".to_owned(),
            amount: "1".to_owned(),
            token_address: "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB".to_owned(),
            token_type: TokenType::NonFungibleToken.code(),
        }],
        ..Receipt::default()
    };
    ensure!(receipt.is_valid(), "receipt failed validation");

    // out to the contract boundary and back
    let wired = receipt.to_wire().context("encoding receipt")?;
    let returned = Receipt::from_wire(wired).context("decoding receipt")?;
    ensure!(returned == receipt, "wire round trip altered the receipt");
    info!(
        receipt = %returned.to_canonical_string()?,
        "receipt survived the wire round trip"
    );

    Ok(())
}
