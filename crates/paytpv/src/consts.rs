//! Fixed values of the BankStore wire protocol.

/// Error identifier reported when the gateway could not be reached.
pub const TRANSPORT_ERROR_CODE: &str = "1011";

/// Error identifier for every failure that is neither a transport failure nor a gateway code.
pub const GENERIC_ERROR_CODE: &str = "1002";

/// Language of the hosted pages when the caller does not choose one.
pub const DEFAULT_LANGUAGE: &str = "ES";

/// Seconds the probe waits for the hosted page before giving up.
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 30;

/// Key under which redirect builders return the composed URL.
pub const URL_REDIRECT: &str = "URL_REDIRECT";

/// Marker the hosted page prints in front of a gateway error code.
pub const PROBE_ERROR_PATTERN: &str = r"Error: (\d+)";

/// Environment variable prefix for configuration overrides, `PAYTPV__GATEWAY__REDIRECT_URL`.
pub const ENV_PREFIX: &str = "PAYTPV";

/// Redirect query keys.
pub mod query {
    pub const MERCHANT_CODE: &str = "MERCHANT_MERCHANTCODE";
    pub const TERMINAL: &str = "MERCHANT_TERMINAL";
    pub const OPERATION: &str = "OPERATION";
    pub const LANGUAGE: &str = "LANGUAGE";
    pub const SIGNATURE: &str = "MERCHANT_MERCHANTSIGNATURE";
    pub const URL_OK: &str = "URLOK";
    pub const URL_KO: &str = "URLKO";
    pub const ORDER: &str = "MERCHANT_ORDER";
    pub const SECURE_3D: &str = "3DSECURE";
    pub const AMOUNT: &str = "MERCHANT_AMOUNT";
    pub const CURRENCY: &str = "MERCHANT_CURRENCY";
    pub const PRODUCT_DESCRIPTION: &str = "MERCHANT_PRODUCTDESCRIPTION";
    pub const SCORING: &str = "MERCHANT_SCORING";
    pub const ID_USER: &str = "IDUSER";
    pub const TOKEN_USER: &str = "TOKEN_USER";
    pub const SUBSCRIPTION_START_DATE: &str = "SUBSCRIPTION_STARTDATE";
    pub const SUBSCRIPTION_END_DATE: &str = "SUBSCRIPTION_ENDDATE";
    pub const SUBSCRIPTION_PERIODICITY: &str = "SUBSCRIPTION_PERIODICITY";
    pub const VHASH: &str = "VHASH";
}

/// Parameter and result names of the direct operations.
///
/// The gateway echoes several request parameters back under the same name, so one set of
/// names serves both directions.
pub mod ds {
    pub const MERCHANT_CODE: &str = "DS_MERCHANT_MERCHANTCODE";
    pub const TERMINAL: &str = "DS_MERCHANT_TERMINAL";
    pub const SIGNATURE: &str = "DS_MERCHANT_MERCHANTSIGNATURE";
    pub const ORIGINAL_IP: &str = "DS_ORIGINAL_IP";
    pub const PAN: &str = "DS_MERCHANT_PAN";
    pub const EXPIRY_DATE: &str = "DS_MERCHANT_EXPIRYDATE";
    pub const CVV2: &str = "DS_MERCHANT_CVV2";
    pub const ID_USER: &str = "DS_IDUSER";
    pub const TOKEN_USER: &str = "DS_TOKEN_USER";
    pub const AMOUNT: &str = "DS_MERCHANT_AMOUNT";
    pub const ORDER: &str = "DS_MERCHANT_ORDER";
    pub const CURRENCY: &str = "DS_MERCHANT_CURRENCY";
    pub const PRODUCT_DESCRIPTION: &str = "DS_MERCHANT_PRODUCTDESCRIPTION";
    pub const OWNER: &str = "DS_MERCHANT_OWNER";
    pub const SCORING: &str = "DS_MERCHANT_SCORING";
    pub const AUTH_CODE: &str = "DS_MERCHANT_AUTHCODE";
    pub const CARD_COUNTRY: &str = "DS_MERCHANT_CARDCOUNTRY";
    pub const RESPONSE: &str = "DS_RESPONSE";
    pub const CARD_BRAND: &str = "DS_CARD_BRAND";
    pub const CARD_TYPE: &str = "DS_CARD_TYPE";
    pub const CARD_COUNTRY_ISO3: &str = "DS_CARD_I_COUNTRY_ISO3";
    pub const CARD_EXPIRY_DATE: &str = "DS_EXPIRYDATE";
    pub const DCC_SESSION: &str = "DS_MERCHANT_DCC_SESSION";
    pub const DCC_CURRENCY: &str = "DS_MERCHANT_DCC_CURRENCY";
    pub const DCC_CURRENCY_ISO3: &str = "DS_MERCHANT_DCC_CURRENCYISO3";
    pub const DCC_CURRENCY_NAME: &str = "DS_MERCHANT_DCC_CURRENCYNAME";
    pub const DCC_EXCHANGE: &str = "DS_MERCHANT_DCC_EXCHANGE";
    pub const DCC_AMOUNT: &str = "DS_MERCHANT_DCC_AMOUNT";
    pub const DCC_MARKUP: &str = "DS_MERCHANT_DCC_MARKUP";
    pub const DCC_CARD_COUNTRY: &str = "DS_MERCHANT_DCC_CARDCOUNTRY";
    pub const SUBSCRIPTION_START_DATE: &str = "DS_SUBSCRIPTION_STARTDATE";
    pub const SUBSCRIPTION_END_DATE: &str = "DS_SUBSCRIPTION_ENDDATE";
    pub const SUBSCRIPTION_PERIODICITY: &str = "DS_SUBSCRIPTION_PERIODICITY";
    pub const SUBSCRIPTION_AMOUNT: &str = "DS_SUBSCRIPTION_AMOUNT";
    pub const SUBSCRIPTION_ORDER: &str = "DS_SUBSCRIPTION_ORDER";
    pub const SUBSCRIPTION_CURRENCY: &str = "DS_SUBSCRIPTION_CURRENCY";
    pub const EXECUTE: &str = "DS_EXECUTE";
    pub const JET_TOKEN: &str = "DS_MERCHANT_JETTOKEN";
    pub const JET_ID: &str = "DS_MERCHANT_JETID";
    pub const REFERENCE_TOKEN: &str = "DS_MERCHANT_REFERENCE";
}
