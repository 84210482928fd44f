use rand::RngCore;

/// Account id width in bytes (24 hex chars).
const ID_BYTES: usize = 12;

/// Session token width in bytes (64 hex chars).
const TOKEN_BYTES: usize = 32;

fn random_hex(len: usize) -> String {
    let mut bytes = vec![0u8; len];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Opaque unique account id.
pub fn generate_id() -> String {
    random_hex(ID_BYTES)
}

/// Opaque session token.
pub fn generate_token() -> String {
    random_hex(TOKEN_BYTES)
}
