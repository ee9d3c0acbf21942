use soroban_sdk::{Address, Env, Vec};
use crate::types::{DataKey, Date, StudioConfig, StudioError, TimeSlot};

pub const DAY_IN_LEDGERS: u32 = 17_280;
/// Persistent entries are bumped back to this TTL whenever they are written.
pub const PERSISTENT_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &StudioConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_config(env: &Env) -> Result<StudioConfig, StudioError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(StudioError::NotInitialized)
}

pub fn is_whitelisted(env: &Env, master: &Address) -> bool {
    env.storage().persistent().has(&DataKey::Whitelisted(master.clone()))
}

pub fn get_whitelist_size(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::WhitelistSize).unwrap_or(0)
}

pub fn add_to_whitelist(env: &Env, master: &Address) {
    let key = DataKey::Whitelisted(master.clone());
    env.storage().persistent().set(&key, &true);
    extend_persistent(env, &key);
    let size = get_whitelist_size(env) + 1;
    env.storage().instance().set(&DataKey::WhitelistSize, &size);
}

pub fn remove_from_whitelist(env: &Env, master: &Address) {
    env.storage().persistent().remove(&DataKey::Whitelisted(master.clone()));
    let size = get_whitelist_size(env).saturating_sub(1);
    env.storage().instance().set(&DataKey::WhitelistSize, &size);
}

/// Whether `master` has ever had a booking committed.
pub fn is_master(env: &Env, master: &Address) -> bool {
    env.storage().persistent().has(&DataKey::Master(master.clone()))
}

pub fn get_master_count(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::MasterCount).unwrap_or(0)
}

pub fn register_master(env: &Env, master: &Address) {
    let key = DataKey::Master(master.clone());
    env.storage().persistent().set(&key, &true);
    extend_persistent(env, &key);
    let count = get_master_count(env) + 1;
    env.storage().instance().set(&DataKey::MasterCount, &count);
}

pub fn get_schedule(env: &Env, date: &Date) -> Vec<TimeSlot> {
    env.storage()
        .persistent()
        .get(&DataKey::Schedule(date.clone()))
        .unwrap_or(Vec::new(env))
}

pub fn set_schedule(env: &Env, date: &Date, schedule: &Vec<TimeSlot>) {
    let key = DataKey::Schedule(date.clone());
    env.storage().persistent().set(&key, schedule);
    extend_persistent(env, &key);
}
