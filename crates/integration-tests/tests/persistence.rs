//! Persisted blob layout and recovery from malformed slots.

#![allow(clippy::unwrap_used)]

use corner_shop_integration_tests::TestShop;

#[test]
fn blob_layout_is_id_keyed_json_object() {
    let shop = TestShop::new();

    let mut cart = shop.open_cart("cart_v1");
    cart.add_line(TestShop::id(1), 2).unwrap();
    cart.add_line(TestShop::id(2), 1).unwrap();

    assert_eq!(shop.raw_blob("cart_v1").unwrap(), r#"{"1":2,"2":1}"#);
}

#[test]
fn well_formed_blob_round_trips() {
    let shop = TestShop::new();
    shop.write_blob("cart_v1", r#"{"1":2,"2":1}"#);

    let mut cart = shop.open_cart("cart_v1");
    assert_eq!(cart.state().quantity(TestShop::id(1)), Some(2));
    assert_eq!(cart.state().quantity(TestShop::id(2)), Some(1));

    // persist then reload: identical state
    cart.persist().unwrap();
    let reloaded = shop.open_cart("cart_v1");
    assert_eq!(reloaded.state(), cart.state());
}

#[test]
fn malformed_blobs_degrade_to_empty() {
    for blob in [
        "",
        "not json",
        "[1,2,3]",
        r#"{"1":"two"}"#,
        r#"{"zero":1}"#,
        r#"{"-4":1}"#,
        r#"{"1":-2}"#,
    ] {
        let shop = TestShop::new();
        shop.write_blob("cart_v1", blob);

        let cart = shop.open_cart("cart_v1");
        assert!(cart.state().is_empty(), "blob {blob:?} should load empty");
    }
}

#[test]
fn zero_quantity_lines_are_dropped_on_load() {
    let shop = TestShop::new();
    shop.write_blob("cart_v1", r#"{"1":0,"2":3}"#);

    let cart = shop.open_cart("cart_v1");
    assert_eq!(cart.state().quantity(TestShop::id(1)), None);
    assert_eq!(cart.state().quantity(TestShop::id(2)), Some(3));
}

#[test]
fn absent_slot_loads_empty_and_first_write_creates_it() {
    let shop = TestShop::new();
    assert!(shop.raw_blob("cart_v1").is_none());

    let mut cart = shop.open_cart("cart_v1");
    assert!(cart.state().is_empty());

    cart.add_line(TestShop::id(1), 1).unwrap();
    assert_eq!(shop.raw_blob("cart_v1").unwrap(), r#"{"1":1}"#);
}
