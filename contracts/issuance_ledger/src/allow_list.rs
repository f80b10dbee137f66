//! # Allow-list
//!
//! A grow-only set of accounts entitled to claim during the restricted
//! window that opens with the `Sale` phase.
//!
//! Membership is one persistent flag per account plus an instance counter
//! holding the set size, so `contains` and `size` never iterate.
//! There is no removal path.

use soroban_sdk::{Address, Env, Vec};

use crate::{storage, Error};

/// Maximum number of addresses accepted by a single `add_to_allow_list` call.
pub const MAX_ALLOW_LIST_BATCH: u32 = 100;

/// Outcome of a batch insert.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InsertOutcome {
    /// Net-new accounts written by this batch.
    pub added: u32,
    /// Set size after the batch.
    pub size: u32,
}

/// Insert every address of `accounts` that is not yet a member.
///
/// Duplicates, whether against the stored set or inside the batch itself,
/// are absorbed silently. The issuer is skipped: it bypasses every allow-list
/// check anyway.
pub fn insert_batch(env: &Env, accounts: &Vec<Address>) -> InsertOutcome {
    if accounts.len() > MAX_ALLOW_LIST_BATCH {
        soroban_sdk::panic_with_error!(env, Error::BatchTooLarge);
    }

    let issuer = storage::get_issuer(env);
    let mut size = storage::get_allow_list_size(env);
    let mut added = 0u32;
    for account in accounts.iter() {
        if account == issuer || storage::is_allow_listed(env, &account) {
            continue;
        }
        // Marking before the next iteration makes in-batch repeats hit the
        // `is_allow_listed` branch above.
        storage::mark_allow_listed(env, &account);
        added += 1;
        size += 1;
    }

    if added > 0 {
        storage::set_allow_list_size(env, size);
    }
    InsertOutcome { added, size }
}

pub fn contains(env: &Env, account: &Address) -> bool {
    storage::is_allow_listed(env, account)
}

pub fn size(env: &Env) -> u32 {
    storage::get_allow_list_size(env)
}

pub fn is_empty(env: &Env) -> bool {
    size(env) == 0
}
