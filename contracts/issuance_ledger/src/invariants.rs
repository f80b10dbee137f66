#![allow(dead_code)]

extern crate std;

use soroban_sdk::Address;

use crate::types::Phase;
use crate::{Error, IssuanceLedgerClient};

/// Host-level form of a contract error, as reported by the generated
/// `try_*` client methods when an entry point panics with `panic_with_error!`.
pub fn contract_error(err: Error) -> soroban_sdk::Error {
    soroban_sdk::Error::from_contract_error(err as u32)
}

/// INV-1: Issued supply never exceeds the cap, and the balances of every
/// known holder add up to it. `holders` must list every account that has
/// ever claimed.
pub fn assert_supply_invariant(client: &IssuanceLedgerClient, holders: &[Address]) {
    let total = client.total_supply();
    let max = client.max_supply();
    assert!(
        total <= max,
        "INV-1 violated: total supply {} exceeds max supply {}",
        total,
        max
    );

    let sum: u64 = holders.iter().map(|h| client.balance_of(h)).sum();
    assert_eq!(
        sum, total,
        "INV-1 violated: balances sum to {} but total supply is {}",
        sum, total
    );
}

/// INV-2: Unit ids form the contiguous range `[0, total_supply)`, every id
/// has an owner, and each holder owns exactly `balance_of` of them.
pub fn assert_contiguous_ownership(client: &IssuanceLedgerClient, holders: &[Address]) {
    let total = client.total_supply();
    let mut owned = std::vec![0u64; holders.len()];
    for unit_id in 0..total {
        let owner = client.owner_of(&unit_id);
        let idx = holders
            .iter()
            .position(|h| *h == owner)
            .unwrap_or_else(|| panic!("INV-2 violated: unit {} owned by unknown holder", unit_id));
        owned[idx] += 1;
    }
    assert!(
        client.try_owner_of(&total).is_err(),
        "INV-2 violated: unit {} exists beyond total supply",
        total
    );
    for (holder, count) in holders.iter().zip(owned.iter()) {
        assert_eq!(
            client.balance_of(holder),
            *count,
            "INV-2 violated: balance does not match owned unit count"
        );
    }
}

/// INV-3: Phase only moves forward.
///   Init    -> Init | Presale | Sale
///   Presale -> Presale | Sale
///   Sale    -> Sale
pub fn assert_phase_monotonic(before: Phase, after: Phase) {
    assert!(
        before == after || before.can_advance_to(after),
        "INV-3 violated: phase moved from {:?} to {:?}",
        before,
        after
    );
}

/// INV-4: A sale window exists exactly when the phase is `Sale`, and a
/// restricted window implies a non-empty allow-list.
pub fn assert_window_consistent(client: &IssuanceLedgerClient, issuer: &Address) {
    let summary = client.summary();
    if summary.phase == Phase::Sale {
        assert!(summary.max_units_per_claim > 0, "INV-4 violated: Sale without window");
        assert!(summary.max_units_per_claim < summary.max_supply);
        if summary.allow_list_only_until != 0 {
            assert!(
                client.allow_list_size(issuer) > 0,
                "INV-4 violated: restricted window over an empty allow-list"
            );
        }
    } else {
        assert_eq!(summary.max_units_per_claim, 0, "INV-4 violated: window outside Sale");
        assert_eq!(summary.allow_list_only_until, 0, "INV-4 violated: window outside Sale");
    }
}
