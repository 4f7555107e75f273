use std::collections::HashMap;

use anyhow::{bail, Result};

/// Checks a scorer's identity and secret. Swap implementations without touching callers.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, identity: &str, secret: &str) -> bool;
}

/// Scorers configured up front, each with a bcrypt hash of their password.
#[derive(Clone, Debug, Default)]
pub struct StaticCredentialVerifier {
    hashes: HashMap<String, String>,
}

impl StaticCredentialVerifier {
    pub fn new(hashes: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            hashes: hashes
                .into_iter()
                .map(|(email, hash)| (normalize(&email), hash))
                .collect(),
        }
    }

    /// Parse `email=hash;email=hash`. Blank entries are skipped.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut hashes = Vec::new();
        for entry in raw.split(';').map(str::trim).filter(|e| !e.is_empty()) {
            let Some((email, hash)) = entry.split_once('=') else {
                bail!("SCORER_CREDENTIALS entry '{entry}' must look like email=bcrypt_hash");
            };
            if email.trim().is_empty() || hash.trim().is_empty() {
                bail!("SCORER_CREDENTIALS entry '{entry}' has an empty email or hash");
            }
            hashes.push((email.to_string(), hash.trim().to_string()));
        }
        Ok(Self::new(hashes))
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }
}

impl CredentialVerifier for StaticCredentialVerifier {
    fn verify(&self, identity: &str, secret: &str) -> bool {
        match self.hashes.get(&normalize(identity)) {
            Some(hash) => bcrypt::verify(secret, hash).unwrap_or(false),
            None => false,
        }
    }
}

fn normalize(email: &str) -> String {
    email.trim().to_lowercase()
}
