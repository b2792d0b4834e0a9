//! Tests for the sandbox payment gateway

use shared::{ChargeStatus, CreditCard};

use crate::error::StorefrontError;
use crate::services::payment::RealPaymentCharger;
use crate::traits::PaymentCharger;

fn card(number: u64) -> CreditCard {
    CreditCard {
        credit_card_number: number,
    }
}

#[tokio::test]
async fn ordinary_card_settles_successfully() {
    let gateway = RealPaymentCharger::new();

    let result = gateway.charge(&card(4242), 25.0).await.unwrap();

    assert_eq!(result.status, ChargeStatus::Success);
    assert!(result.reference.is_some());
}

#[tokio::test]
async fn test_cards_always_decline() {
    let gateway = RealPaymentCharger::new();

    for &number in RealPaymentCharger::DECLINE_CARDS {
        let result = gateway.charge(&card(number), 25.0).await.unwrap();
        assert_eq!(result.status, ChargeStatus::Failed);
        assert!(result.reference.is_none());
    }
}

#[tokio::test]
async fn custom_decline_list_is_honored() {
    let gateway = RealPaymentCharger::with_declined_cards(vec![1234]);

    let declined = gateway.charge(&card(1234), 25.0).await.unwrap();
    let settled = gateway.charge(&card(5678), 25.0).await.unwrap();

    assert_eq!(declined.status, ChargeStatus::Failed);
    assert_eq!(settled.status, ChargeStatus::Success);
}

#[tokio::test]
async fn non_positive_amount_is_a_gateway_fault() {
    let gateway = RealPaymentCharger::new();

    for amount in [0.0, -5.0] {
        let result = gateway.charge(&card(4242), amount).await;
        assert!(matches!(
            result,
            Err(StorefrontError::InvalidChargeAmount { .. })
        ));
    }
}
