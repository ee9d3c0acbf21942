use soroban_sdk::{contracterror, contracttype, Address};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FeedError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    NotFound = 3,
    StalePrice = 4,
    InsufficientSignatures = 5,
    InvalidAnswer = 6,
    Paused = 7,
    InvalidThreshold = 8,
    FutureTimestamp = 9,
}

/// One accepted round, as submitted by the signer set.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundData {
    pub round_id: u64,
    pub answer: i128,
    pub updated_at: u64,
}

/// Fiat value of one native unit, scaled by `10^decimals`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Quote {
    pub value: i128,
    pub decimals: u32,
    pub updated_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeedConfig {
    pub admin: Address,
    pub threshold: u32,
    pub decimals: u32,
    pub max_age: u64, // seconds
    pub paused: bool,
}
