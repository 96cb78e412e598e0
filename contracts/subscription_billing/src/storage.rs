//! TTL housekeeping for instance and persistent entries.

use crate::types::DataKey;
use soroban_sdk::Env;

/// Instance TTL threshold in ledgers (~1 day at 5 s/ledger).
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = 17_280;
/// Instance TTL after a bump (~5 days).
pub const INSTANCE_BUMP_AMOUNT: u32 = 86_400;
/// Persistent TTL threshold (~7 days).
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = 120_960;
/// Persistent TTL after a bump (~30 days). Extended on every write.
pub const PERSISTENT_BUMP_AMOUNT: u32 = 518_400;

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}
