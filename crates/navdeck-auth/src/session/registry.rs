//! Token to session mapping with absolute expiry.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use tracing::{debug, info};

use navdeck_core::config::SessionConfig;
use navdeck_core::result::AppResult;
use navdeck_core::traits::Clock;

/// Bytes of randomness per token.
const TOKEN_BYTES: usize = 32;

/// Metadata kept for each issued token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionEntry {
    /// When the token was issued. Expiry is measured from here.
    pub created_at: DateTime<Utc>,
    /// Last successful validation.
    pub last_used_at: DateTime<Utc>,
}

/// Process-local session store.
///
/// Sessions live only in memory; restarting the process logs everyone out.
/// All methods take `&self` and are safe to call from concurrent requests
/// and the sweeper task.
#[derive(Debug)]
pub struct SessionRegistry {
    entries: DashMap<String, SessionEntry>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl SessionRegistry {
    /// Creates an empty registry.
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
            clock,
        }
    }

    /// Creates an empty registry using the configured TTL.
    pub fn from_config(config: &SessionConfig, clock: Arc<dyn Clock>) -> AppResult<Self> {
        Ok(Self::new(config.ttl()?, clock))
    }

    /// Issues a fresh random token.
    pub fn issue(&self) -> String {
        let now = self.clock.now();
        let token = generate_token();
        self.entries.insert(
            token.clone(),
            SessionEntry {
                created_at: now,
                last_used_at: now,
            },
        );
        debug!(prefix = token_prefix(&token), "Session issued");
        token
    }

    /// Returns `true` if `token` is known and younger than the TTL.
    ///
    /// A valid token has its `last_used_at` refreshed. An expired one is
    /// removed.
    pub fn validate(&self, token: &str) -> bool {
        let now = self.clock.now();

        match self.entries.get_mut(token) {
            None => return false,
            Some(mut entry) => {
                if !self.is_expired(&entry, now) {
                    entry.last_used_at = now;
                    return true;
                }
            }
        }

        self.entries.remove_if(token, |_, entry| self.is_expired(entry, now));
        debug!(prefix = token_prefix(token), "Expired session removed");
        false
    }

    /// Looks up an entry without touching it.
    pub fn get(&self, token: &str) -> Option<SessionEntry> {
        self.entries.get(token).map(|entry| *entry)
    }

    /// Removes every expired entry. Returns how many were removed.
    pub fn sweep(&self) -> usize {
        let now = self.clock.now();
        let mut removed = 0;
        self.entries.retain(|_, entry| {
            let keep = !self.is_expired(entry, now);
            if !keep {
                removed += 1;
            }
            keep
        });
        removed
    }

    /// Removes a single token. Returns `true` if it existed.
    pub fn revoke(&self, token: &str) -> bool {
        self.entries.remove(token).is_some()
    }

    /// Number of tracked sessions, expired or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no sessions are tracked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every session. Returns how many were removed.
    pub fn revoke_all(&self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        count
    }

    /// Drops every session at process exit.
    pub fn shutdown(&self) {
        let count = self.revoke_all();
        info!(count, "Session registry shut down");
    }

    fn is_expired(&self, entry: &SessionEntry, now: DateTime<Utc>) -> bool {
        now - entry.created_at > self.ttl
    }
}

fn generate_token() -> String {
    let bytes: [u8; TOKEN_BYTES] = rand::random();
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn token_prefix(token: &str) -> &str {
    token.get(..8).unwrap_or(token)
}
