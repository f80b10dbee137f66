use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PresaleStarted {
    pub issuer: Address,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleStarted {
    pub issuer: Address,
    pub max_units_per_claim: u64,
    pub allow_list_only_until: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowListUpdated {
    pub added: u32,
    pub size: u32,
}

/// One event per claim batch. Units `first_unit_id..first_unit_id + quantity`
/// belong to `claimer`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnitsClaimed {
    pub claimer: Address,
    pub first_unit_id: u64,
    pub quantity: u64,
    pub payment: i128,
}

pub fn emit_presale_started(env: &Env, issuer: Address) {
    let topics = (symbol_short!("presale"), issuer.clone());
    let data = PresaleStarted {
        issuer,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn emit_sale_started(env: &Env, issuer: Address, max_units_per_claim: u64, allow_list_only_until: u64) {
    let topics = (symbol_short!("sale"), issuer.clone());
    let data = SaleStarted {
        issuer,
        max_units_per_claim,
        allow_list_only_until,
    };
    env.events().publish(topics, data);
}

pub fn emit_allow_list_updated(env: &Env, issuer: Address, added: u32, size: u32) {
    let topics = (symbol_short!("allow_add"), issuer);
    let data = AllowListUpdated { added, size };
    env.events().publish(topics, data);
}

pub fn emit_units_claimed(env: &Env, claimer: Address, first_unit_id: u64, quantity: u64, payment: i128) {
    let topics = (symbol_short!("claimed"), claimer.clone());
    let data = UnitsClaimed {
        claimer,
        first_unit_id,
        quantity,
        payment,
    };
    env.events().publish(topics, data);
}
