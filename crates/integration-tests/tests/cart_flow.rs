//! End-to-end cart flows: every step reopens the store from disk, the way
//! consecutive storefront invocations do.

#![allow(clippy::unwrap_used)]

use corner_shop_integration_tests::TestShop;
use corner_shop_store::StoreError;

#[test]
fn demo_scenario_survives_reopening() {
    let shop = TestShop::new();

    let mut cart = shop.open_cart("cart_v1");
    cart.add_line(TestShop::id(1), 2).unwrap();
    drop(cart);

    let mut cart = shop.open_cart("cart_v1");
    cart.add_line(TestShop::id(2), 1).unwrap();
    assert_eq!(cart.item_count(), 3);
    assert_eq!(cart.total(shop.catalog()).to_string(), "$198.98");
    drop(cart);

    let mut cart = shop.open_cart("cart_v1");
    cart.remove_line(TestShop::id(1)).unwrap();
    assert_eq!(cart.item_count(), 1);
    assert_eq!(cart.total(shop.catalog()).to_string(), "$79.00");
    drop(cart);

    let mut cart = shop.open_cart("cart_v1");
    cart.checkout().unwrap();
    drop(cart);

    let cart = shop.open_cart("cart_v1");
    assert_eq!(cart.item_count(), 0);
    assert_eq!(cart.total(shop.catalog()).to_string(), "$0.00");
}

#[test]
fn repeated_adds_accumulate_across_sessions() {
    let shop = TestShop::new();

    shop.open_cart("cart_v1")
        .add_line(TestShop::id(1), 1)
        .unwrap();
    shop.open_cart("cart_v1")
        .add_line(TestShop::id(1), 2)
        .unwrap();

    let cart = shop.open_cart("cart_v1");
    assert_eq!(cart.state().quantity(TestShop::id(1)), Some(3));
}

#[test]
fn set_quantity_zero_matches_remove() {
    let shop = TestShop::new();

    let mut cart = shop.open_cart("removed");
    cart.add_line(TestShop::id(1), 2).unwrap();
    cart.add_line(TestShop::id(2), 1).unwrap();
    cart.remove_line(TestShop::id(1)).unwrap();
    drop(cart);

    let mut cart = shop.open_cart("zeroed");
    cart.add_line(TestShop::id(1), 2).unwrap();
    cart.add_line(TestShop::id(2), 1).unwrap();
    cart.set_quantity(TestShop::id(1), 0).unwrap();
    drop(cart);

    assert_eq!(
        shop.open_cart("removed").state(),
        shop.open_cart("zeroed").state()
    );
    assert_eq!(shop.raw_blob("removed"), shop.raw_blob("zeroed"));
}

#[test]
fn checkout_on_empty_cart_is_rejected_and_changes_nothing() {
    let shop = TestShop::new();

    let mut cart = shop.open_cart("cart_v1");
    assert!(matches!(cart.checkout(), Err(StoreError::EmptyCart)));
    assert!(cart.state().is_empty());
}

#[test]
fn unknown_product_contributes_nothing_to_total() {
    let shop = TestShop::new();

    let mut cart = shop.open_cart("cart_v1");
    cart.add_line(TestShop::id(99), 2).unwrap();
    assert_eq!(cart.item_count(), 2);
    assert_eq!(cart.total(shop.catalog()).to_string(), "$0.00");
}

#[test]
fn carts_under_different_keys_are_independent() {
    let shop = TestShop::new();

    shop.open_cart("cart_v1")
        .add_line(TestShop::id(1), 1)
        .unwrap();
    shop.open_cart("cart_v2")
        .add_line(TestShop::id(2), 5)
        .unwrap();

    assert_eq!(
        shop.open_cart("cart_v1").state().quantity(TestShop::id(1)),
        Some(1)
    );
    assert_eq!(
        shop.open_cart("cart_v1").state().quantity(TestShop::id(2)),
        None
    );
    assert_eq!(
        shop.open_cart("cart_v2").state().quantity(TestShop::id(2)),
        Some(5)
    );
}
