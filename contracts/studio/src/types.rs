use soroban_sdk::{contracterror, contracttype, Address};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum StudioError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    ConfigurationError = 4,
    InvalidTimestamps = 5,
    InvalidTime = 6,
    InsufficientFunding = 7,
    NotInWhitelist = 8,
    TooManyMasters = 9,
    SlotUnavailable = 10,
    CapacityExceeded = 11,
    PriceUnavailable = 12,
    ArithmeticOverflow = 13,
    InvalidAmount = 14,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SlotKind {
    Start = 0,
    End = 1,
}

/// One endpoint of a booking inside a day's schedule.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TimeSlot {
    pub timestamp: u64,
    pub master: Address,
    pub kind: SlotKind,
}

/// UTC calendar date.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Date {
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StudioConfig {
    pub owner: Address,
    pub price_feed: Address,
    pub payment_token: Address,
    pub price_per_hour: i128, // whole fiat units
    pub min_schedule_hour: u32,
    pub max_schedule_hour: u32,
    pub max_number_of_masters: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BookingReceipt {
    pub master: Address,
    pub date: Date,
    pub from: u64,
    pub to: u64,
    pub price: i128,
    pub paid: i128,
}

/// Fiat value of one native unit scaled by `10^decimals`, as served by the
/// price feed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Quote {
    pub value: i128,
    pub decimals: u32,
    pub updated_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Config,
    Whitelisted(Address),
    WhitelistSize,
    Master(Address),
    MasterCount,
    Schedule(Date),
}
