//! Payment validation behavior at the checkout seam.

#![allow(clippy::unwrap_used)]

use mapleshop_cart::{CartError, PaymentError, payment};
use mapleshop_integration_tests::{pid, seeded_store};

#[test]
fn validation_matrix() {
    assert!(payment::validate_payment("1234567890123456", "12/25", "123").is_ok());
    assert_eq!(
        payment::validate_payment("123", "12/25", "123"),
        Err(PaymentError::CardNumber)
    );
    assert_eq!(
        payment::validate_payment("1234567890123456", "13/25", "123"),
        Err(PaymentError::Expiry)
    );
    assert_eq!(
        payment::validate_payment("1234567890123456", "12/25", "12"),
        Err(PaymentError::Cvv)
    );
}

#[test]
fn failed_validation_blocks_checkout_and_keeps_cart() {
    let mut store = seeded_store();
    store.add_to_cart(pid(1));
    store.add_to_cart(pid(2));

    for (card, expiry, cvv) in [
        ("123", "12/25", "123"),
        ("1234567890123456", "1/25", "123"),
        ("1234567890123456", "12/25", "12ab"),
    ] {
        let err = store.checkout_with_payment(card, expiry, cvv).unwrap_err();
        assert!(matches!(err, CartError::Validation(_)));
        assert_eq!(store.cart_lines().len(), 2, "cart must be untouched");
    }

    // And the messages shown inline are the fixed user-facing strings
    assert_eq!(
        PaymentError::CardNumber.to_string(),
        "Invalid Card Number"
    );
    assert_eq!(
        PaymentError::Expiry.to_string(),
        "Invalid Expiry Date (MM/YY)"
    );
    assert_eq!(PaymentError::Cvv.to_string(), "Invalid CVV");
}

#[test]
fn successful_checkout_after_a_failure() {
    let mut store = seeded_store();
    store.add_to_cart(pid(1));

    assert!(
        store
            .checkout_with_payment("1234567890123456", "00/25", "123")
            .is_err()
    );
    let confirmation = store
        .checkout_with_payment("1234567890123456", "01/27", "456")
        .unwrap();
    assert!(confirmation.is_some());
    assert!(store.cart_lines().is_empty());
}
