//! Digest algorithms used by the gateway signature schemes

/// Trait for generating a digest
pub trait GenerateDigest {
    /// takes a message and creates a digest for it
    fn generate_digest(&self, message: &[u8]) -> Vec<u8>;

    /// takes a message and renders its digest as lowercase hex, the form the gateway compares
    fn generate_hex_digest(&self, message: &[u8]) -> String {
        hex::encode(self.generate_digest(message))
    }
}

/// MD5 hash function
#[derive(Debug)]
pub struct Md5;

impl GenerateDigest for Md5 {
    fn generate_digest(&self, message: &[u8]) -> Vec<u8> {
        let digest = md5::compute(message);
        digest.as_ref().to_vec()
    }
}

/// Secure Hash Algorithm 1
///
/// Only used for the legacy direct-API signatures which the gateway still expects.
#[derive(Debug)]
pub struct Sha1;

impl GenerateDigest for Sha1 {
    fn generate_digest(&self, message: &[u8]) -> Vec<u8> {
        let digest = ring::digest::digest(&ring::digest::SHA1_FOR_LEGACY_USE_ONLY, message);
        digest.as_ref().to_vec()
    }
}

/// Secure Hash Algorithm 512
#[derive(Debug)]
pub struct Sha512;

impl GenerateDigest for Sha512 {
    fn generate_digest(&self, message: &[u8]) -> Vec<u8> {
        let digest = ring::digest::digest(&ring::digest::SHA512, message);
        digest.as_ref().to_vec()
    }
}
