#![allow(clippy::unwrap_used, clippy::expect_used)]

use masking::{CardNumber, ExposeInterface, ExposeOptionInterface, PeekInterface, Secret, WithoutType};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Merchant {
    merchant_code: String,
    password: Secret<String>,
}

#[test]
fn password_is_masked_in_debug_output() {
    let merchant = Merchant {
        merchant_code: "999008881".to_string(),
        password: Secret::new("secret".to_string()),
    };

    let got = format!("{merchant:?}");
    assert_eq!(
        got,
        "Merchant { merchant_code: \"999008881\", password: *** alloc::string::String *** }"
    );
    assert!(!got.contains("\"secret\""));
}

#[test]
fn secret_is_deserialized_from_plain_value() {
    let merchant: Merchant =
        serde_json::from_str(r#"{"merchant_code":"999008881","password":"secret"}"#).unwrap();

    assert_eq!(merchant.merchant_code, "999008881");
    assert_eq!(merchant.password.peek(), "secret");
    assert_eq!(merchant.password.expose(), "secret");
}

#[test]
fn card_number_keeps_last_four_digits() {
    let pan: Secret<String, CardNumber> = Secret::new("4539232076648253".to_string());
    assert_eq!(format!("{pan:?}"), "************8253");

    let short: Secret<String, CardNumber> = Secret::new("123".to_string());
    assert_eq!(format!("{short:?}"), "*** ***");
}

#[test]
fn map_keeps_value_hidden() {
    let token: Secret<String, WithoutType> = Secret::new(" tok en ".to_string());
    let trimmed = token.map(|value| value.replace(' ', ""));

    assert_eq!(format!("{trimmed:?}"), "*** ***");
    assert_eq!(trimmed.peek(), "token");
}

#[test]
fn optional_secret_exposes_inner_value() {
    let jet_id: Option<Secret<String>> = Some(Secret::new("jet".to_string()));
    assert_eq!(jet_id.expose_option().as_deref(), Some("jet"));

    let absent: Option<Secret<String>> = None;
    assert_eq!(absent.expose_option(), None);
}
