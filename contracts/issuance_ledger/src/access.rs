//! # Access: single-issuer gate
//!
//! The ledger has exactly one privileged identity, the issuer, recorded by
//! the constructor under `DataKey::Issuer`. There is no role hierarchy and no
//! transfer path.
//!
//! | Guard            | Used by                                               |
//! |------------------|-------------------------------------------------------|
//! | `require_issuer` | `start_presale`, `start_sale`, `add_to_allow_list`,   |
//! |                  | `allow_list_size`, `is_allow_listed`                  |
//! | `is_issuer`      | `claim` (reserve path)                                |
//!
//! `require_issuer` first demands the caller's signature, then compares the
//! address against the stored issuer.

use soroban_sdk::{panic_with_error, Address, Env};

use crate::storage;
use crate::Error;

/// Returns `true` if `address` is the issuer. Performs no auth check.
pub fn is_issuer(env: &Env, address: &Address) -> bool {
    storage::get_issuer(env) == *address
}

/// Assert that `caller` signed the invocation and is the issuer.
/// Panics with `Error::Unauthorized` otherwise.
pub fn require_issuer(env: &Env, caller: &Address) {
    caller.require_auth();
    if !is_issuer(env, caller) {
        panic_with_error!(env, Error::Unauthorized);
    }
}
