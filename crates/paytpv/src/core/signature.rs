//! Authentication hashes the gateway re-derives on its side.

use common_utils::crypto::{self, GenerateDigest};
use masking::{PeekInterface, Secret};

use crate::{
    core::errors::BankstoreResult,
    types::{MerchantCredentials, OperationDescriptor, OperationType},
};

/// Signature of a redirect operation.
///
/// `md5(merchant_code + identity + terminal + code + reference + signed + md5(password))`, every
/// digest as lowercase hex. Which descriptor fields fill `identity` and `signed` is fixed by the
/// operation's recipe.
pub fn redirect_signature(
    descriptor: &OperationDescriptor,
    operation: OperationType,
    credentials: &MerchantCredentials,
) -> BankstoreResult<String> {
    let recipe = operation.recipe();
    let reference = descriptor.required_reference()?;

    let mut message = String::from(credentials.merchant_code());
    for field in recipe.identity_fields {
        message.push_str(&descriptor.required_field(*field)?);
    }
    message.push_str(credentials.terminal());
    message.push_str(&recipe.code.to_string());
    message.push_str(reference);
    for field in recipe.signed_fields {
        message.push_str(&descriptor.required_field(*field)?);
    }
    message.push_str(&md5_hex(credentials.password().peek()));

    Ok(md5_hex(&message))
}

/// Signature of a direct operation: `sha1(parts... + password)` as lowercase hex.
pub fn direct_signature(parts: &[&str], password: &Secret<String>) -> String {
    let mut message = parts.concat();
    message.push_str(password.peek());
    crypto::Sha1.generate_hex_digest(message.as_bytes())
}

/// Integrity hash over an already serialized query: `sha512(md5(serialized + md5(password)))`.
pub fn query_hash(serialized: &str, password: &Secret<String>) -> String {
    let digest = md5_hex(&format!("{serialized}{}", md5_hex(password.peek())));
    crypto::Sha512.generate_hex_digest(digest.as_bytes())
}

fn md5_hex(message: &str) -> String {
    crypto::Md5.generate_hex_digest(message.as_bytes())
}
