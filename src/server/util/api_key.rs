use rand::RngCore;

/// Number of random bytes in an API key.
const API_KEY_BYTES: usize = 16;

/// Generates a new API key: 16 random bytes rendered as 32 lowercase hex characters.
pub fn generate_api_key() -> String {
    let mut bytes = [0u8; API_KEY_BYTES];
    rand::rng().fill_bytes(&mut bytes);

    hex::encode(bytes)
}
