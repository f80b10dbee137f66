//! # Types
//!
//! Shared data structures used across all modules of the issuance ledger.
//!
//! ## Phase as a Finite-State Machine
//!
//! [`Phase`] enforces a strict forward-only lifecycle:
//!
//! ```text
//! Init ──► Presale ──► Sale
//!   └─────────────────►┘
//! ```
//!
//! `Sale` is terminal. Backward and repeated transitions are rejected by
//! `start_presale` / `start_sale` with `Error::InvalidPhase`.
//!
//! ## Config / Window split
//!
//! [`IssuanceConfig`] is written once by the constructor. [`SaleWindow`] is
//! written once by `start_sale`. Neither is mutated afterwards; the only
//! high-frequency writes are the supply counters and per-unit owners.

use soroban_sdk::{contracttype, Address, String};

/// Current lifecycle phase of the offering.
///
/// Integer-valued so `current_period` reports `0`, `1`, `2`.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Phase {
    /// Set-up. Only the issuer may claim (reserve mint).
    Init = 0,
    /// Allow-list is open for additions. Public claims still closed.
    Presale = 1,
    /// Public claims open, optionally restricted to the allow-list for a window.
    Sale = 2,
}

impl Phase {
    /// Whether moving from `self` to `next` is a legal forward transition.
    pub fn can_advance_to(self, next: Phase) -> bool {
        matches!(
            (self, next),
            (Phase::Init, Phase::Presale) | (Phase::Init, Phase::Sale) | (Phase::Presale, Phase::Sale)
        )
    }
}

/// Immutable offering configuration, written once at construction.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IssuanceConfig {
    pub name: String,
    pub symbol: String,
    /// SAC token in which claims are paid.
    pub payment_token: Address,
    /// Price of one unit in the payment token's smallest denomination.
    pub unit_price: i128,
    /// Hard cap on units ever issued.
    pub max_supply: u64,
}

/// Sale parameters, written exactly once by `start_sale`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleWindow {
    /// Upper bound on units a single non-issuer claim may request.
    pub max_units_per_claim: u64,
    /// Ledger timestamp until which only allow-listed accounts may claim.
    /// `0` means there is no restricted window.
    pub allow_list_only_until: u64,
}

impl SaleWindow {
    /// True while the allow-list-only window is still running at `now`.
    pub fn is_restricted_at(&self, now: u64) -> bool {
        now < self.allow_list_only_until
    }
}

/// Read-only snapshot of the ledger, returned by `summary`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerSummary {
    pub phase: Phase,
    pub total_issued: u64,
    pub max_supply: u64,
    pub unit_price: i128,
    /// `0` until `start_sale` has run.
    pub max_units_per_claim: u64,
    /// `0` until `start_sale` has run, or when the sale has no restricted window.
    pub allow_list_only_until: u64,
}
