//! Game key generation.
//!
//! Keys are short human-shareable strings over an uppercase ASCII alphabet,
//! spoken aloud and typed on phones. Uniqueness is probed against storage
//! with a bounded retry budget; a crowded length falls back to a longer key
//! instead of spinning forever.

use std::future::Future;

use rand::Rng;
use tracing::warn;

use crate::errors::{GameError, GameResult};

/// Alphabet of game keys: uppercase letters and digits.
pub const KEY_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Random key candidates tried per length before giving the key one more
/// character.
const ATTEMPTS_PER_LENGTH: u32 = 32;

/// How many times the key may grow past the configured length.
const MAX_EXTENSIONS: usize = 3;

/// Generate one random key candidate of the given length.
///
/// ```
/// use backend::utils::join_code::{generate_key, KEY_CHARSET};
///
/// let key = generate_key(&mut rand::rng(), 5);
/// assert_eq!(key.len(), 5);
/// assert!(key.bytes().all(|b| KEY_CHARSET.contains(&b)));
/// ```
pub fn generate_key<R: Rng>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| KEY_CHARSET[rng.random_range(0..KEY_CHARSET.len())] as char)
        .collect()
}

/// Find a key the `exists` probe does not know yet.
///
/// Tries a bounded number of candidates at the configured length, then at
/// each of a bounded number of longer lengths, and fails with
/// `KEY_SPACE_EXHAUSTED` when the budget runs out. Storage still enforces
/// uniqueness on insert; this probe only keeps collisions rare.
pub async fn unique_key<R, F, Fut>(rng: &mut R, length: usize, mut exists: F) -> GameResult<String>
where
    R: Rng,
    F: FnMut(String) -> Fut,
    Fut: Future<Output = GameResult<bool>>,
{
    let mut len = length;
    loop {
        for _ in 0..ATTEMPTS_PER_LENGTH {
            let key = generate_key(rng, len);
            if !exists(key.clone()).await? {
                return Ok(key);
            }
        }
        if len >= length + MAX_EXTENSIONS {
            return Err(GameError::key_space_exhausted(len));
        }
        warn!(length = len, "no unused game key at this length, extending");
        len += 1;
    }
}
