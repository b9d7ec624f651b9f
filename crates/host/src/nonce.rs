//! Session-scoped upload nonces.
//!
//! A nonce is a keyed SHA-256 digest of `tick|action|user_id`, base64url,
//! truncated to 10 characters. Time is split into ticks of half the
//! configured lifetime and verification accepts the current and the previous
//! tick, so a token stays valid for at least half a lifetime and at most a
//! full one.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::Utc;
use once_cell::sync::Lazy;
use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::config::{self, NonceConfig};

/// Action string bound into upload nonces.
pub const UPLOAD_ACTION: &str = "chatbot_upload_pdf";

const TOKEN_LEN: usize = 10;

pub struct NonceKeeper {
    secret: Vec<u8>,
    lifetime_secs: i64,
}

impl NonceKeeper {
    pub fn from_config(cfg: &NonceConfig) -> Self {
        let secret = match &cfg.secret {
            Some(secret) if !secret.is_empty() => secret.clone().into_bytes(),
            _ => {
                tracing::warn!("no nonce secret configured, generating an ephemeral one");
                let mut bytes = [0u8; 32];
                rand::thread_rng().fill_bytes(&mut bytes);
                bytes.to_vec()
            }
        };
        Self {
            secret,
            lifetime_secs: cfg.lifetime_secs,
        }
    }

    fn tick(&self, now_secs: i64) -> i64 {
        now_secs / (self.lifetime_secs / 2).max(1)
    }

    fn token_at(&self, tick: i64, action: &str, user_id: i64) -> String {
        let mut hasher = Sha256::new();
        hasher.update(&self.secret);
        hasher.update(format!("{}|{}|{}", tick, action, user_id).as_bytes());
        let mut token = URL_SAFE_NO_PAD.encode(hasher.finalize());
        token.truncate(TOKEN_LEN);
        token
    }

    pub fn mint(&self, action: &str, user_id: i64) -> String {
        self.mint_at(action, user_id, Utc::now().timestamp())
    }

    pub fn verify(&self, token: &str, action: &str, user_id: i64) -> bool {
        self.verify_at(token, action, user_id, Utc::now().timestamp())
    }

    fn mint_at(&self, action: &str, user_id: i64, now_secs: i64) -> String {
        self.token_at(self.tick(now_secs), action, user_id)
    }

    fn verify_at(&self, token: &str, action: &str, user_id: i64, now_secs: i64) -> bool {
        let tick = self.tick(now_secs);
        token == self.token_at(tick, action, user_id)
            || token == self.token_at(tick - 1, action, user_id)
    }
}

static KEEPER: Lazy<NonceKeeper> = Lazy::new(|| NonceKeeper::from_config(&config::get().nonce));

/// Process-wide keeper built from the loaded configuration.
pub fn keeper() -> &'static NonceKeeper {
    &KEEPER
}
