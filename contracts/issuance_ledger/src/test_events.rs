extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events, Ledger},
    token, vec, Address, Env, IntoVal, String, TryIntoVal,
};

use crate::events::{AllowListUpdated, PresaleStarted, SaleStarted, UnitsClaimed};
use crate::{IssuanceLedger, IssuanceLedgerClient};

const UNIT_PRICE: i128 = 1_000;

fn setup() -> (Env, IssuanceLedgerClient<'static>, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().with_mut(|l| l.timestamp = 12_345);
    let issuer = Address::generate(&env);
    let payment_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let contract_id = env.register(
        IssuanceLedger,
        (
            issuer.clone(),
            String::from_str(&env, "Events"),
            String::from_str(&env, "EVT"),
            payment_token.clone(),
            UNIT_PRICE,
            10u64,
        ),
    );
    let client = IssuanceLedgerClient::new(&env, &contract_id);
    (env, client, issuer, payment_token)
}

#[test]
fn test_presale_started_event() {
    let (env, client, issuer, _) = setup();
    client.start_presale(&issuer);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![&env, symbol_short!("presale").into_val(&env), issuer.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: PresaleStarted = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, PresaleStarted { issuer: issuer.clone(), timestamp: 12_345 });
}

#[test]
fn test_sale_started_event() {
    let (env, client, issuer, _) = setup();
    client.start_presale(&issuer);
    client.add_to_allow_list(&issuer, &vec![&env, Address::generate(&env)]);
    client.start_sale(&issuer, &3, &600);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    let expected_topics = vec![&env, symbol_short!("sale").into_val(&env), issuer.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: SaleStarted = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, SaleStarted {
        issuer: issuer.clone(),
        max_units_per_claim: 3,
        allow_list_only_until: 12_345 + 600,
    });
}

#[test]
fn test_allow_list_updated_event() {
    let (env, client, issuer, _) = setup();
    let a = Address::generate(&env);
    let b = Address::generate(&env);
    client.start_presale(&issuer);
    client.add_to_allow_list(&issuer, &vec![&env, a.clone()]);
    client.add_to_allow_list(&issuer, &vec![&env, a.clone(), b.clone(), b.clone()]);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    let expected_topics = vec![&env, symbol_short!("allow_add").into_val(&env), issuer.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: AllowListUpdated = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, AllowListUpdated { added: 1, size: 2 });
}

#[test]
fn test_issuer_claim_event_carries_first_unit_id() {
    let (env, client, issuer, _) = setup();
    client.claim(&issuer, &1, &0);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("claimed"), claimer)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![&env, symbol_short!("claimed").into_val(&env), issuer.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: UnitsClaimed = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, UnitsClaimed {
        claimer: issuer.clone(),
        first_unit_id: 0,
        quantity: 1,
        payment: 0,
    });
}

#[test]
fn test_paid_claim_event_after_prior_batch() {
    let (env, client, issuer, payment_token) = setup();
    let buyer = Address::generate(&env);
    token::StellarAssetClient::new(&env, &payment_token).mint(&buyer, &(UNIT_PRICE * 2));

    client.claim(&issuer, &2, &0);
    client.start_sale(&issuer, &3, &0);
    client.claim(&buyer, &2, &(UNIT_PRICE * 2));

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let event_data: UnitsClaimed = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, UnitsClaimed {
        claimer: buyer.clone(),
        first_unit_id: 2,
        quantity: 2,
        payment: UNIT_PRICE * 2,
    });
}
