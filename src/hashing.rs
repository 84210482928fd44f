//! Best-effort password hashing with two explicit strategies.
//!
//! The primary strategy is SHA-256. The fallback is the classic 32-bit
//! `h*31 + c` rolling checksum, kept for compatibility with account records
//! written by environments where no cryptographic digest was available (the
//! original front-ends ran in non-secure browser contexts where
//! `crypto.subtle` is absent). Both strategies emit lowercase hex of the
//! same fixed width, so stored hashes stay comparable after a strategy
//! change without rehashing.
//!
//! The checksum strategy is NOT collision-resistant and must never be
//! treated as secure. It exists only to keep the demo flows working.

use sha2::{Digest, Sha256};

/// Width of every emitted hash, in hex characters (SHA-256 digest width).
/// The checksum path zero-pads to match.
pub const HASH_HEX_LEN: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashStrategy {
    /// SHA-256 over the password's UTF-8 bytes.
    Sha256,
    /// 32-bit rolling checksum over the password's UTF-16 code units.
    Checksum,
}

impl HashStrategy {
    /// Capability probe for the digest primitive. The digest is linked into
    /// this crate, so the probe always resolves to [`HashStrategy::Sha256`];
    /// tests and embedders can still force the checksum path explicitly.
    pub fn detect() -> Self {
        HashStrategy::Sha256
    }
}

/// Deterministic password hasher. `hash` never fails; a strategy that
/// cannot run degrades to the checksum rather than returning an error.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    strategy: HashStrategy,
}

impl PasswordHasher {
    /// Hasher using the detected (primary) strategy.
    pub fn new() -> Self {
        Self {
            strategy: HashStrategy::detect(),
        }
    }

    /// Hasher pinned to a specific strategy.
    pub fn with_strategy(strategy: HashStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> HashStrategy {
        self.strategy
    }

    /// Hash a password to a fixed-width lowercase hex string.
    pub fn hash(&self, password: &str) -> String {
        match self.strategy {
            HashStrategy::Sha256 => sha256_hex(password),
            HashStrategy::Checksum => checksum_hex(password),
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

fn sha256_hex(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// The JS `(h << 5) - h + c` rolling hash with wrapping 32-bit signed
/// arithmetic, iterated over UTF-16 code units to match what the original
/// stores contain. The magnitude is rendered as hex and left-padded to the
/// digest width.
fn checksum_hex(password: &str) -> String {
    let mut h: i32 = 0;
    for unit in password.encode_utf16() {
        h = h.wrapping_shl(5).wrapping_sub(h).wrapping_add(i32::from(unit));
    }
    format!("{:0>width$x}", h.unsigned_abs(), width = HASH_HEX_LEN)
}
