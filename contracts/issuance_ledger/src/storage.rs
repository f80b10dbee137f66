//! # Storage
//!
//! Provides typed helpers over Soroban's two storage tiers used by the ledger:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key             | Type             | Description                          |
//! |-----------------|------------------|--------------------------------------|
//! | `Issuer`        | `Address`        | The single privileged identity       |
//! | `Config`        | `IssuanceConfig` | Name, symbol, price, supply cap      |
//! | `Phase`         | `Phase`          | Current lifecycle phase              |
//! | `Window`        | `SaleWindow`     | Written once at the `Sale` transition|
//! | `TotalIssued`   | `u64`            | Next unit id / issued count          |
//! | `AllowListSize` | `u32`            | Number of allow-listed accounts      |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                   | Type      | Description                      |
//! |-----------------------|-----------|----------------------------------|
//! | `AllowListed(addr)`   | `bool`    | Allow-list membership            |
//! | `Balance(addr)`       | `u64`     | Units held by `addr`             |
//! | `UnitOwner(id)`       | `Address` | Owner of unit `id`               |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.

use soroban_sdk::{contracttype, Address, Env};

use crate::types::{IssuanceConfig, Phase, SaleWindow};

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Issuer address (Instance).
    Issuer,
    /// Immutable offering configuration (Instance).
    Config,
    /// Current phase (Instance).
    Phase,
    /// Sale parameters, present once `Sale` starts (Instance).
    Window,
    /// Number of units issued so far (Instance).
    TotalIssued,
    /// Number of allow-listed accounts (Instance).
    AllowListSize,
    /// Allow-list membership flag (Persistent).
    AllowListed(Address),
    /// Per-holder unit count (Persistent).
    Balance(Address),
    /// Owner of a single unit (Persistent).
    UnitOwner(u64),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Write the issuer and configuration and reset all counters.
/// Called once from the constructor.
pub fn init_ledger(env: &Env, issuer: &Address, config: &IssuanceConfig) {
    let instance = env.storage().instance();
    instance.set(&DataKey::Issuer, issuer);
    instance.set(&DataKey::Config, config);
    instance.set(&DataKey::Phase, &Phase::Init);
    instance.set(&DataKey::TotalIssued, &0u64);
    instance.set(&DataKey::AllowListSize, &0u32);
    bump_instance(env);
}

pub fn get_issuer(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Issuer)
        .expect("ledger not initialised")
}

pub fn get_config(env: &Env) -> IssuanceConfig {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .expect("ledger not initialised")
}

pub fn get_phase(env: &Env) -> Phase {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Phase)
        .unwrap_or(Phase::Init)
}

pub fn set_phase(env: &Env, phase: Phase) {
    env.storage().instance().set(&DataKey::Phase, &phase);
    bump_instance(env);
}

/// `None` until `start_sale` has run.
pub fn get_sale_window(env: &Env) -> Option<SaleWindow> {
    bump_instance(env);
    env.storage().instance().get(&DataKey::Window)
}

pub fn set_sale_window(env: &Env, window: &SaleWindow) {
    env.storage().instance().set(&DataKey::Window, window);
    bump_instance(env);
}

// ─────────────────────────────────────────────────────────
// Supply counter
// ─────────────────────────────────────────────────────────

pub fn get_total_issued(env: &Env) -> u64 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::TotalIssued)
        .unwrap_or(0)
}

fn set_total_issued(env: &Env, total: u64) {
    env.storage().instance().set(&DataKey::TotalIssued, &total);
}

pub fn get_allow_list_size(env: &Env) -> u32 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::AllowListSize)
        .unwrap_or(0)
}

pub fn set_allow_list_size(env: &Env, size: u32) {
    env.storage().instance().set(&DataKey::AllowListSize, &size);
    bump_instance(env);
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Extend the TTL for a persistent storage key.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn is_allow_listed(env: &Env, account: &Address) -> bool {
    let key = DataKey::AllowListed(account.clone());
    let listed = env.storage().persistent().has(&key);
    if listed {
        bump_persistent(env, &key);
    }
    listed
}

pub fn mark_allow_listed(env: &Env, account: &Address) {
    let key = DataKey::AllowListed(account.clone());
    env.storage().persistent().set(&key, &true);
    bump_persistent(env, &key);
}

/// Units held by `holder`; zero for unknown holders.
pub fn get_balance(env: &Env, holder: &Address) -> u64 {
    let key = DataKey::Balance(holder.clone());
    match env.storage().persistent().get(&key) {
        Some(balance) => {
            bump_persistent(env, &key);
            balance
        }
        None => 0,
    }
}

pub fn get_unit_owner(env: &Env, unit_id: u64) -> Option<Address> {
    let key = DataKey::UnitOwner(unit_id);
    let owner: Option<Address> = env.storage().persistent().get(&key);
    if owner.is_some() {
        bump_persistent(env, &key);
    }
    owner
}

/// Append `quantity` freshly numbered units to `holder`.
///
/// Assigns ids `[first, first + quantity)`, raises the holder's balance and
/// advances the supply counter. The caller has already checked the supply
/// cap. Returns the first id of the batch.
pub fn issue_units(env: &Env, holder: &Address, quantity: u64) -> u64 {
    let first = get_total_issued(env);
    for unit_id in first..first + quantity {
        let key = DataKey::UnitOwner(unit_id);
        env.storage().persistent().set(&key, holder);
        bump_persistent(env, &key);
    }

    let balance_key = DataKey::Balance(holder.clone());
    let balance = get_balance(env, holder) + quantity;
    env.storage().persistent().set(&balance_key, &balance);
    bump_persistent(env, &balance_key);

    set_total_issued(env, first + quantity);
    first
}
