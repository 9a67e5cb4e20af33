//! One-way password hashing

use sha2::{Digest, Sha256};
use starter_core::{StarterError, StarterResult};

pub trait PasswordHasher {
    fn hash(&self, password: &str) -> StarterResult<String>;

    fn verify(&self, password: &str, hash: &str) -> bool;
}

/// Salted, iterated SHA-256
///
/// Encoded as `sha256$<rounds>$<salt hex>$<digest hex>`.
#[derive(Debug, Clone)]
pub struct Sha256Hasher {
    rounds: u32,
}

const SCHEME: &str = "sha256";
const DEFAULT_ROUNDS: u32 = 10_000;

impl Default for Sha256Hasher {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
        }
    }
}

impl Sha256Hasher {
    pub fn with_rounds(rounds: u32) -> Self {
        Self {
            rounds: rounds.max(1),
        }
    }

    fn digest(&self, salt: &[u8], password: &str, rounds: u32) -> Vec<u8> {
        let mut hasher = Sha256::new();
        hasher.update(salt);
        hasher.update(password.as_bytes());
        let mut out = hasher.finalize();

        for _ in 1..rounds {
            let mut hasher = Sha256::new();
            hasher.update(salt);
            hasher.update(out);
            out = hasher.finalize();
        }

        out.to_vec()
    }
}

impl PasswordHasher for Sha256Hasher {
    fn hash(&self, password: &str) -> StarterResult<String> {
        if password.is_empty() {
            return Err(StarterError::InvalidInput("Cannot hash an empty password".to_string()));
        }

        let salt: [u8; 16] = rand::random();
        let digest = self.digest(&salt, password, self.rounds);

        Ok(format!(
            "{}${}${}${}",
            SCHEME,
            self.rounds,
            hex::encode(salt),
            hex::encode(digest)
        ))
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        let parts: Vec<&str> = hash.split('$').collect();
        let [scheme, rounds, salt, expected] = parts.as_slice() else {
            return false;
        };
        if *scheme != SCHEME {
            return false;
        }

        let (Ok(rounds), Ok(salt), Ok(expected)) =
            (rounds.parse::<u32>(), hex::decode(salt), hex::decode(expected))
        else {
            return false;
        };

        self.digest(&salt, password, rounds.max(1)) == expected
    }
}
