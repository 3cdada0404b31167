//! Random entity identifiers.

use rand::RngCore;

/// Number of random bytes in an id (160 bits).
pub const ID_BYTES: usize = 20;

/// Generate a new random id: 40 lowercase hex characters.
pub fn create_id() -> String {
    let mut bytes = [0u8; ID_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
