use crate::types::{FeedConfig, FeedError, RoundData};
use soroban_sdk::{symbol_short, BytesN, Env, Map};

pub struct Storage;

impl Storage {
    pub fn has_config(env: &Env) -> bool {
        env.storage().instance().has(&symbol_short!("config"))
    }

    pub fn set_config(env: &Env, config: &FeedConfig) {
        env.storage()
            .instance()
            .set(&symbol_short!("config"), config);
    }

    pub fn get_config(env: &Env) -> Result<FeedConfig, FeedError> {
        env.storage()
            .instance()
            .get(&symbol_short!("config"))
            .ok_or(FeedError::NotInitialized)
    }

    pub fn set_signers(env: &Env, signers: &Map<BytesN<32>, bool>) {
        env.storage()
            .instance()
            .set(&symbol_short!("signers"), signers);
    }

    pub fn get_signers(env: &Env) -> Result<Map<BytesN<32>, bool>, FeedError> {
        env.storage()
            .instance()
            .get(&symbol_short!("signers"))
            .ok_or(FeedError::NotInitialized)
    }

    pub fn set_round(env: &Env, round: &RoundData) {
        env.storage()
            .persistent()
            .set(&symbol_short!("round"), round);
    }

    pub fn get_round(env: &Env) -> Option<RoundData> {
        env.storage().persistent().get(&symbol_short!("round"))
    }
}
