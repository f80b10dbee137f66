//! # Issuance Ledger Contract
//!
//! A fixed-supply, ownership-tracked unit issuance. A single issuer fixes the
//! maximum supply at construction, moves the offering through its phases and
//! lets participants claim units against that supply.
//!
//! | Phase        | Entry Point(s)                                        |
//! |--------------|-------------------------------------------------------|
//! | Construction | `__constructor`                                       |
//! | Transitions  | [`IssuanceLedger::start_presale`], [`IssuanceLedger::start_sale`] |
//! | Allow-list   | `add_to_allow_list`, `is_allow_listed`, `allow_list_size`, `am_i_allow_listed` |
//! | Issuance     | [`IssuanceLedger::claim`]                             |
//! | Queries      | `total_supply`, `balance_of`, `owner_of`, `summary`, ... |
//!
//! ## Architecture
//!
//! Authorization is delegated to [`access`]. Allow-list set semantics live in
//! [`allow_list`]. Storage access is delegated to `storage`. Every mutating
//! entry point runs all of its checks before its first write.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, token, Address, Env, String, Vec,
};

pub mod access;
pub mod allow_list;
pub mod events;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

pub use allow_list::MAX_ALLOW_LIST_BATCH;
pub use types::{IssuanceConfig, LedgerSummary, Phase, SaleWindow};

/// Longest allow-list-only window `start_sale` accepts (7 days, exclusive).
pub const MAX_RESTRICTED_WINDOW_SECS: u64 = 7 * 24 * 60 * 60;

/// Most units a single `claim` may issue, issuer reserve claims included, and
/// the largest per-claim cap `start_sale` accepts. Every unit costs one
/// persistent ownership write, so a larger batch exhausts the host budget.
pub const MAX_UNITS_PER_CLAIM: u64 = 100;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    Unauthorized = 1,
    InvalidPhase = 2,
    InvalidClaimLimit = 3,
    InvalidWindow = 4,
    InvalidQuantity = 5,
    SaleNotOpen = 6,
    NotAllowListed = 7,
    ClaimLimitExceeded = 8,
    InsufficientPayment = 9,
    SupplyExceeded = 10,
    InvalidConfig = 11,
    BatchTooLarge = 12,
    InvalidPayment = 13,
    UnitNotFound = 14,
    Overflow = 15,
}

#[contract]
pub struct IssuanceLedger;

#[contractimpl]
impl IssuanceLedger {
    // ─────────────────────────────────────────────────────────
    // Construction
    // ─────────────────────────────────────────────────────────

    /// Create the ledger in `Init` with zero supply and an empty allow-list.
    ///
    /// - `issuer` becomes the single privileged identity.
    /// - `payment_token` is the SAC token claims are paid in.
    /// - Panics with `Error::InvalidConfig` if `unit_price < 0` or `max_supply == 0`.
    pub fn __constructor(
        env: Env,
        issuer: Address,
        name: String,
        symbol: String,
        payment_token: Address,
        unit_price: i128,
        max_supply: u64,
    ) {
        if unit_price < 0 || max_supply == 0 {
            panic_with_error!(&env, Error::InvalidConfig);
        }
        let config = IssuanceConfig {
            name,
            symbol,
            payment_token,
            unit_price,
            max_supply,
        };
        storage::init_ledger(&env, &issuer, &config);
    }

    // ─────────────────────────────────────────────────────────
    // Phase transitions
    // ─────────────────────────────────────────────────────────

    /// Open the allow-listed presale.
    ///
    /// - `caller` must be the issuer.
    /// - Legal only from `Init`.
    pub fn start_presale(env: Env, caller: Address) {
        access::require_issuer(&env, &caller);
        Self::require_can_advance(&env, Phase::Presale);

        storage::set_phase(&env, Phase::Presale);
        events::emit_presale_started(&env, caller);
    }

    /// Open the public sale.
    ///
    /// - `caller` must be the issuer.
    /// - Legal from `Init` or `Presale`.
    /// - `max_units_per_claim` must lie strictly between 0 and `max_supply`, and
    ///   may not exceed [`MAX_UNITS_PER_CLAIM`].
    /// - With an empty allow-list `restricted_window_secs` must be 0; otherwise it
    ///   must be positive and below [`MAX_RESTRICTED_WINDOW_SECS`].
    pub fn start_sale(env: Env, caller: Address, max_units_per_claim: u64, restricted_window_secs: u64) {
        access::require_issuer(&env, &caller);
        Self::require_can_advance(&env, Phase::Sale);

        let config = storage::get_config(&env);
        if max_units_per_claim == 0
            || max_units_per_claim >= config.max_supply
            || max_units_per_claim > MAX_UNITS_PER_CLAIM
        {
            panic_with_error!(&env, Error::InvalidClaimLimit);
        }

        let window_ok = if allow_list::is_empty(&env) {
            restricted_window_secs == 0
        } else {
            restricted_window_secs > 0 && restricted_window_secs < MAX_RESTRICTED_WINDOW_SECS
        };
        if !window_ok {
            panic_with_error!(&env, Error::InvalidWindow);
        }

        let allow_list_only_until = if restricted_window_secs == 0 {
            0
        } else {
            env.ledger().timestamp() + restricted_window_secs
        };
        let window = SaleWindow {
            max_units_per_claim,
            allow_list_only_until,
        };

        storage::set_sale_window(&env, &window);
        storage::set_phase(&env, Phase::Sale);
        events::emit_sale_started(&env, caller, max_units_per_claim, allow_list_only_until);
    }

    /// Return the current phase.
    pub fn current_period(env: Env) -> Phase {
        storage::get_phase(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Allow-list
    // ─────────────────────────────────────────────────────────

    /// Add `accounts` to the allow-list and return the resulting set size.
    ///
    /// - `caller` must be the issuer; phase must be `Presale`.
    /// - At most [`MAX_ALLOW_LIST_BATCH`] addresses per call.
    /// - Duplicates and the issuer's own address are skipped without error.
    pub fn add_to_allow_list(env: Env, caller: Address, accounts: Vec<Address>) -> u32 {
        access::require_issuer(&env, &caller);
        if storage::get_phase(&env) != Phase::Presale {
            panic_with_error!(&env, Error::InvalidPhase);
        }

        let outcome = allow_list::insert_batch(&env, &accounts);
        events::emit_allow_list_updated(&env, caller, outcome.added, outcome.size);
        outcome.size
    }

    /// Issuer-only: is `account` allow-listed?
    pub fn is_allow_listed(env: Env, caller: Address, account: Address) -> bool {
        access::require_issuer(&env, &caller);
        allow_list::contains(&env, &account)
    }

    /// Issuer-only: number of allow-listed accounts.
    pub fn allow_list_size(env: Env, caller: Address) -> u32 {
        access::require_issuer(&env, &caller);
        allow_list::size(&env)
    }

    /// Let any account learn whether it is allow-listed itself.
    pub fn am_i_allow_listed(env: Env, caller: Address) -> bool {
        caller.require_auth();
        allow_list::contains(&env, &caller)
    }

    // ─────────────────────────────────────────────────────────
    // Issuance
    // ─────────────────────────────────────────────────────────

    /// Issue `quantity` new units to `claimer` and return the first unit id.
    ///
    /// `payment` is the amount of the payment token the claimer attaches; it
    /// is moved into the contract's custody in full. Checks run in a fixed
    /// order and the first failure wins:
    ///
    /// 1. `SaleNotOpen` for a non-issuer before `Sale`.
    /// 2. `InvalidQuantity` for zero units.
    /// 3. `InvalidPayment` for a negative amount.
    /// 4. Non-issuer: `NotAllowListed` during the restricted window,
    ///    `ClaimLimitExceeded`, then `InsufficientPayment`. Issuer:
    ///    `ClaimLimitExceeded` above [`MAX_UNITS_PER_CLAIM`].
    /// 5. `SupplyExceeded` if the cap would be breached.
    ///
    /// The issuer skips step 1 and the payment check: it may mint its reserve
    /// in any phase, free of charge, in batches of at most
    /// [`MAX_UNITS_PER_CLAIM`].
    pub fn claim(env: Env, claimer: Address, quantity: u64, payment: i128) -> u64 {
        claimer.require_auth();

        let config = storage::get_config(&env);
        let is_issuer = access::is_issuer(&env, &claimer);
        let sale_window = if is_issuer {
            None
        } else {
            match storage::get_sale_window(&env) {
                Some(window) if storage::get_phase(&env) == Phase::Sale => Some(window),
                _ => panic_with_error!(&env, Error::SaleNotOpen),
            }
        };

        if quantity == 0 {
            panic_with_error!(&env, Error::InvalidQuantity);
        }
        if payment < 0 {
            panic_with_error!(&env, Error::InvalidPayment);
        }

        if is_issuer && quantity > MAX_UNITS_PER_CLAIM {
            panic_with_error!(&env, Error::ClaimLimitExceeded);
        }
        if let Some(window) = sale_window {
            if window.is_restricted_at(env.ledger().timestamp()) && !allow_list::contains(&env, &claimer) {
                panic_with_error!(&env, Error::NotAllowListed);
            }
            if quantity > window.max_units_per_claim {
                panic_with_error!(&env, Error::ClaimLimitExceeded);
            }
            let required = Self::required_payment(&env, config.unit_price, quantity);
            if payment < required {
                panic_with_error!(&env, Error::InsufficientPayment);
            }
        }

        let total = storage::get_total_issued(&env);
        match total.checked_add(quantity) {
            Some(next) if next <= config.max_supply => {}
            _ => panic_with_error!(&env, Error::SupplyExceeded),
        }

        // All checks passed: commit.
        if payment > 0 {
            let token_client = token::Client::new(&env, &config.payment_token);
            token_client.transfer(&claimer, &env.current_contract_address(), &payment);
        }
        let first_unit_id = storage::issue_units(&env, &claimer, quantity);

        events::emit_units_claimed(&env, claimer, first_unit_id, quantity, payment);
        first_unit_id
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn name(env: Env) -> String {
        storage::get_config(&env).name
    }

    pub fn symbol(env: Env) -> String {
        storage::get_config(&env).symbol
    }

    pub fn unit_price(env: Env) -> i128 {
        storage::get_config(&env).unit_price
    }

    pub fn max_supply(env: Env) -> u64 {
        storage::get_config(&env).max_supply
    }

    pub fn payment_token(env: Env) -> Address {
        storage::get_config(&env).payment_token
    }

    /// Return the issuer address.
    pub fn owner(env: Env) -> Address {
        storage::get_issuer(&env)
    }

    /// Number of units issued so far.
    pub fn total_supply(env: Env) -> u64 {
        storage::get_total_issued(&env)
    }

    pub fn balance_of(env: Env, holder: Address) -> u64 {
        storage::get_balance(&env, &holder)
    }

    /// Return the owner of `unit_id`.
    /// Panics with `Error::UnitNotFound` if the unit has not been issued.
    pub fn owner_of(env: Env, unit_id: u64) -> Address {
        match storage::get_unit_owner(&env, unit_id) {
            Some(owner) => owner,
            None => panic_with_error!(&env, Error::UnitNotFound),
        }
    }

    /// End of the allow-list-only window; 0 before `Sale` or when there is none.
    pub fn allow_list_only_until(env: Env) -> u64 {
        storage::get_sale_window(&env)
            .map(|w| w.allow_list_only_until)
            .unwrap_or(0)
    }

    /// Per-claim cap; 0 before `Sale`.
    pub fn max_units_per_claim(env: Env) -> u64 {
        storage::get_sale_window(&env)
            .map(|w| w.max_units_per_claim)
            .unwrap_or(0)
    }

    /// Payment-token balance held by the contract.
    pub fn custody_balance(env: Env) -> i128 {
        let config = storage::get_config(&env);
        token::Client::new(&env, &config.payment_token).balance(&env.current_contract_address())
    }

    /// Snapshot of phase, supply and sale parameters.
    pub fn summary(env: Env) -> LedgerSummary {
        let config = storage::get_config(&env);
        let window = storage::get_sale_window(&env);
        LedgerSummary {
            phase: storage::get_phase(&env),
            total_issued: storage::get_total_issued(&env),
            max_supply: config.max_supply,
            unit_price: config.unit_price,
            max_units_per_claim: window.as_ref().map(|w| w.max_units_per_claim).unwrap_or(0),
            allow_list_only_until: window.map(|w| w.allow_list_only_until).unwrap_or(0),
        }
    }

    // ─────────────────────────────────────────────────────────
    // Internal Helpers
    // ─────────────────────────────────────────────────────────

    fn require_can_advance(env: &Env, next: Phase) {
        if !storage::get_phase(env).can_advance_to(next) {
            panic_with_error!(env, Error::InvalidPhase);
        }
    }

    fn required_payment(env: &Env, unit_price: i128, quantity: u64) -> i128 {
        match unit_price.checked_mul(quantity as i128) {
            Some(required) => required,
            None => panic_with_error!(env, Error::Overflow),
        }
    }
}
