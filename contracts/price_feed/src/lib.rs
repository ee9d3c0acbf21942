#![no_std]
//! Signed fiat/native price aggregator.
//!
//! A fixed set of ed25519 signers co-signs every round; the contract accepts a
//! round once `threshold` distinct registered signers have signed it. Readers
//! consume the latest round through `latest_quote`, which refuses rounds older
//! than `max_age`.

use soroban_sdk::{contract, contractimpl, xdr::ToXdr, Address, BytesN, Env, Map, Vec};

mod storage;
pub mod types;

use storage::Storage;
use types::{FeedConfig, FeedError, Quote, RoundData};

/// How far ahead of the ledger clock a round may be stamped, in seconds.
pub const MAX_TIMESTAMP_DRIFT: u64 = 60;

#[contract]
pub struct PriceFeedContract;

#[contractimpl]
impl PriceFeedContract {
    pub fn initialize(
        env: Env,
        admin: Address,
        signers: Vec<BytesN<32>>,
        threshold: u32,
        decimals: u32,
        max_age: u64,
    ) -> Result<(), FeedError> {
        if Storage::has_config(&env) {
            return Err(FeedError::AlreadyInitialized);
        }

        let mut signers_map: Map<BytesN<32>, bool> = Map::new(&env);
        for signer in signers.iter() {
            signers_map.set(signer, true);
        }
        if threshold == 0 || threshold > signers_map.len() {
            return Err(FeedError::InvalidThreshold);
        }

        let config = FeedConfig {
            admin,
            threshold,
            decimals,
            max_age,
            paused: false,
        };
        Storage::set_config(&env, &config);
        Storage::set_signers(&env, &signers_map);

        Ok(())
    }

    /// Accept a new round. Each signature covers
    /// `(answer, timestamp, round_id, feed address)` in XDR.
    pub fn submit_answer(
        env: Env,
        answer: i128,
        timestamp: u64,
        round_id: u64,
        signatures: Vec<(BytesN<32>, BytesN<64>)>, // (Public Key, Signature)
    ) -> Result<(), FeedError> {
        let config = Storage::get_config(&env)?;

        if config.paused {
            return Err(FeedError::Paused);
        }
        if answer <= 0 {
            return Err(FeedError::InvalidAnswer);
        }

        if timestamp > env.ledger().timestamp().saturating_add(MAX_TIMESTAMP_DRIFT) {
            return Err(FeedError::FutureTimestamp);
        }
        if let Some(last) = Storage::get_round(&env) {
            if timestamp <= last.updated_at {
                return Err(FeedError::StalePrice);
            }
        }

        let signers_map = Storage::get_signers(&env)?;

        let payload = (answer, timestamp, round_id, env.current_contract_address()).to_xdr(&env);

        let mut valid_signatures = 0;
        let mut used_signers: Map<BytesN<32>, bool> = Map::new(&env);

        for (pub_key, signature) in signatures.iter() {
            if !signers_map.contains_key(pub_key.clone()) {
                continue;
            }
            if used_signers.contains_key(pub_key.clone()) {
                continue;
            }

            // Traps on a bad signature, which aborts the whole submission.
            env.crypto().ed25519_verify(&pub_key, &payload, &signature);

            used_signers.set(pub_key, true);
            valid_signatures += 1;
        }

        if valid_signatures < config.threshold {
            return Err(FeedError::InsufficientSignatures);
        }

        Storage::set_round(
            &env,
            &RoundData {
                round_id,
                answer,
                updated_at: timestamp,
            },
        );

        Ok(())
    }

    pub fn latest_round_data(env: Env) -> Result<RoundData, FeedError> {
        Storage::get_round(&env).ok_or(FeedError::NotFound)
    }

    /// Latest answer together with its scale. Fails once the round is older
    /// than the configured `max_age`.
    pub fn latest_quote(env: Env) -> Result<Quote, FeedError> {
        let config = Storage::get_config(&env)?;
        let round = Storage::get_round(&env).ok_or(FeedError::NotFound)?;

        let current_time = env.ledger().timestamp();
        if current_time > round.updated_at.saturating_add(config.max_age) {
            return Err(FeedError::StalePrice);
        }

        Ok(Quote {
            value: round.answer,
            decimals: config.decimals,
            updated_at: round.updated_at,
        })
    }

    pub fn decimals(env: Env) -> Result<u32, FeedError> {
        Ok(Storage::get_config(&env)?.decimals)
    }

    pub fn add_signer(env: Env, signer: BytesN<32>) -> Result<(), FeedError> {
        let config = Storage::get_config(&env)?;
        config.admin.require_auth();

        let mut signers = Storage::get_signers(&env)?;
        signers.set(signer, true);
        Storage::set_signers(&env, &signers);
        Ok(())
    }

    pub fn remove_signer(env: Env, signer: BytesN<32>) -> Result<(), FeedError> {
        let config = Storage::get_config(&env)?;
        config.admin.require_auth();

        let mut signers = Storage::get_signers(&env)?;
        signers.remove(signer);
        if signers.len() < config.threshold {
            return Err(FeedError::InvalidThreshold);
        }
        Storage::set_signers(&env, &signers);
        Ok(())
    }

    pub fn set_threshold(env: Env, new_threshold: u32) -> Result<(), FeedError> {
        let mut config = Storage::get_config(&env)?;
        config.admin.require_auth();

        let signers = Storage::get_signers(&env)?;
        if new_threshold == 0 || new_threshold > signers.len() {
            return Err(FeedError::InvalidThreshold);
        }
        config.threshold = new_threshold;
        Storage::set_config(&env, &config);
        Ok(())
    }

    pub fn set_max_age(env: Env, max_age: u64) -> Result<(), FeedError> {
        let mut config = Storage::get_config(&env)?;
        config.admin.require_auth();
        config.max_age = max_age;
        Storage::set_config(&env, &config);
        Ok(())
    }

    pub fn pause(env: Env) -> Result<(), FeedError> {
        let mut config = Storage::get_config(&env)?;
        config.admin.require_auth();
        config.paused = true;
        Storage::set_config(&env, &config);
        Ok(())
    }

    pub fn unpause(env: Env) -> Result<(), FeedError> {
        let mut config = Storage::get_config(&env)?;
        config.admin.require_auth();
        config.paused = false;
        Storage::set_config(&env, &config);
        Ok(())
    }
}
