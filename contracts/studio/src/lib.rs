#![no_std]

mod calendar;
mod pricing;
mod storage;
pub mod types;

use soroban_sdk::{
    contract, contractimpl, contractmeta, log, token, Address, Env, Symbol, Vec,
};
use crate::storage::*;
use crate::types::*;

pub use crate::pricing::{PriceFeedClient, PriceFeedInterface};

contractmeta!(
    key = "Description",
    val = "Studio calendar: whitelisted masters book time slots priced from a fiat feed"
);

#[contract]
pub struct StudioContract;

#[contractimpl]
impl StudioContract {
    /// Initialize the studio with its owner and booking parameters
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        env: Env,
        owner: Address,
        price_feed: Address,
        payment_token: Address,
        price_per_hour: i128,
        min_schedule_hour: u32,
        max_schedule_hour: u32,
        max_number_of_masters: u32,
    ) -> Result<(), StudioError> {
        owner.require_auth();

        if has_config(&env) {
            return Err(StudioError::AlreadyInitialized);
        }

        Self::check_price_per_hour(price_per_hour)?;
        Self::check_schedule_hours(min_schedule_hour, max_schedule_hour)?;
        Self::check_max_number_of_masters(max_number_of_masters)?;

        let config = StudioConfig {
            owner,
            price_feed,
            payment_token,
            price_per_hour,
            min_schedule_hour,
            max_schedule_hour,
            max_number_of_masters,
        };
        set_config(&env, &config);

        Ok(())
    }

    // ───────────── BOOKING ─────────────

    /// Book `[from, to)` for `master`, paying `payment` in the payment token.
    ///
    /// Checks run in a fixed order and the first failure wins: timestamps,
    /// daily window, price, funding, whitelist, master capacity, overlap.
    /// Any payment above the computed price is kept by the studio.
    pub fn book_time_gap(
        env: Env,
        master: Address,
        from: u64,
        to: u64,
        payment: i128,
    ) -> Result<BookingReceipt, StudioError> {
        master.require_auth();

        let config = get_config(&env)?;
        let (date, price) = Self::price_interval(&env, &config, from, to)?;

        if payment < price {
            log!(&env, "insufficient funding", payment, price);
            return Err(StudioError::InsufficientFunding);
        }

        if !is_whitelisted(&env, &master) {
            return Err(StudioError::NotInWhitelist);
        }

        let returning = is_master(&env, &master);
        if !returning && get_master_count(&env) >= config.max_number_of_masters {
            log!(&env, "master cap reached", config.max_number_of_masters);
            return Err(StudioError::TooManyMasters);
        }

        let mut schedule = get_schedule(&env, &date);
        if calendar::overlaps(&schedule, from, to) {
            return Err(StudioError::SlotUnavailable);
        }

        if payment > 0 {
            let token_client = token::Client::new(&env, &config.payment_token);
            token_client.transfer(&master, &env.current_contract_address(), &payment);
        }

        calendar::insert_booking(&mut schedule, &master, from, to);
        set_schedule(&env, &date, &schedule);
        if !returning {
            register_master(&env, &master);
        }

        env.events().publish(
            (Symbol::new(&env, "time_slot_booked"), master.clone()),
            (from, to),
        );
        log!(&env, "time slot booked", master, from, to);

        Ok(BookingReceipt {
            master,
            date,
            from,
            to,
            price,
            paid: payment,
        })
    }

    /// Price of `[from, to)` at the current quote, without booking it
    pub fn get_booking_price(env: Env, from: u64, to: u64) -> Result<i128, StudioError> {
        let config = get_config(&env)?;
        let (_, price) = Self::price_interval(&env, &config, from, to)?;
        Ok(price)
    }

    /// Markers booked on the given UTC date, in timestamp order
    pub fn get_schedule_from_date(env: Env, year: u32, month: u32, day: u32) -> Vec<TimeSlot> {
        get_schedule(&env, &Date { year, month, day })
    }

    // ───────────── WHITELIST ─────────────

    pub fn add_master_to_whitelist(
        env: Env,
        caller: Address,
        master: Address,
    ) -> Result<(), StudioError> {
        let config = Self::require_owner(&env, &caller)?;

        if is_whitelisted(&env, &master) {
            return Ok(());
        }
        if get_whitelist_size(&env) >= config.max_number_of_masters {
            return Err(StudioError::CapacityExceeded);
        }

        add_to_whitelist(&env, &master);
        log!(&env, "master whitelisted", master);
        Ok(())
    }

    pub fn remove_master_from_whitelist(
        env: Env,
        caller: Address,
        master: Address,
    ) -> Result<(), StudioError> {
        Self::require_owner(&env, &caller)?;

        if is_whitelisted(&env, &master) {
            remove_from_whitelist(&env, &master);
            log!(&env, "master removed", master);
        }
        Ok(())
    }

    pub fn is_master_in_whitelist(env: Env, master: Address) -> bool {
        is_whitelisted(&env, &master)
    }

    pub fn get_whitelist_size(env: Env) -> u32 {
        storage::get_whitelist_size(&env)
    }

    /// Whether `master` has ever booked a slot
    pub fn is_master(env: Env, master: Address) -> bool {
        storage::is_master(&env, &master)
    }

    /// Number of distinct masters that have ever booked
    pub fn get_number_of_masters(env: Env) -> u32 {
        get_master_count(&env)
    }

    // ───────────── CONFIGURATION ─────────────

    pub fn set_price_feed_address(
        env: Env,
        caller: Address,
        price_feed: Address,
    ) -> Result<(), StudioError> {
        let mut config = Self::require_owner(&env, &caller)?;
        config.price_feed = price_feed;
        set_config(&env, &config);
        Ok(())
    }

    pub fn set_price_per_hour(
        env: Env,
        caller: Address,
        price_per_hour: i128,
    ) -> Result<(), StudioError> {
        let mut config = Self::require_owner(&env, &caller)?;
        Self::check_price_per_hour(price_per_hour)?;
        config.price_per_hour = price_per_hour;
        set_config(&env, &config);
        Ok(())
    }

    pub fn set_min_schedule_hour(env: Env, caller: Address, hour: u32) -> Result<(), StudioError> {
        let mut config = Self::require_owner(&env, &caller)?;
        Self::check_schedule_hours(hour, config.max_schedule_hour)?;
        config.min_schedule_hour = hour;
        set_config(&env, &config);
        Ok(())
    }

    pub fn set_max_schedule_hour(env: Env, caller: Address, hour: u32) -> Result<(), StudioError> {
        let mut config = Self::require_owner(&env, &caller)?;
        Self::check_schedule_hours(config.min_schedule_hour, hour)?;
        config.max_schedule_hour = hour;
        set_config(&env, &config);
        Ok(())
    }

    /// Lowering the cap below the current whitelist or master count only
    /// affects later admissions and first bookings.
    pub fn set_max_number_of_masters(
        env: Env,
        caller: Address,
        max_number_of_masters: u32,
    ) -> Result<(), StudioError> {
        let mut config = Self::require_owner(&env, &caller)?;
        Self::check_max_number_of_masters(max_number_of_masters)?;
        config.max_number_of_masters = max_number_of_masters;
        set_config(&env, &config);
        Ok(())
    }

    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), StudioError> {
        let mut config = Self::require_owner(&env, &caller)?;
        new_owner.require_auth();
        config.owner = new_owner;
        set_config(&env, &config);
        Ok(())
    }

    /// Pay collected booking fees out to `to`
    pub fn withdraw(env: Env, caller: Address, to: Address, amount: i128) -> Result<(), StudioError> {
        let config = Self::require_owner(&env, &caller)?;
        if amount <= 0 {
            return Err(StudioError::InvalidAmount);
        }

        let token_client = token::Client::new(&env, &config.payment_token);
        token_client.transfer(&env.current_contract_address(), &to, &amount);
        Ok(())
    }

    pub fn get_owner(env: Env) -> Result<Address, StudioError> {
        Ok(get_config(&env)?.owner)
    }

    pub fn get_price_feed_address(env: Env) -> Result<Address, StudioError> {
        Ok(get_config(&env)?.price_feed)
    }

    pub fn get_payment_token(env: Env) -> Result<Address, StudioError> {
        Ok(get_config(&env)?.payment_token)
    }

    pub fn get_price_per_hour(env: Env) -> Result<i128, StudioError> {
        Ok(get_config(&env)?.price_per_hour)
    }

    pub fn get_min_schedule_hour(env: Env) -> Result<u32, StudioError> {
        Ok(get_config(&env)?.min_schedule_hour)
    }

    pub fn get_max_schedule_hour(env: Env) -> Result<u32, StudioError> {
        Ok(get_config(&env)?.max_schedule_hour)
    }

    pub fn get_max_number_of_masters(env: Env) -> Result<u32, StudioError> {
        Ok(get_config(&env)?.max_number_of_masters)
    }

    // Helper functions
    fn require_owner(env: &Env, caller: &Address) -> Result<StudioConfig, StudioError> {
        caller.require_auth();

        let config = get_config(env)?;
        if config.owner != *caller {
            return Err(StudioError::Unauthorized);
        }
        Ok(config)
    }

    /// Timestamp and window checks followed by pricing; no writes. Returns
    /// the calendar date of the booking with its price.
    fn price_interval(
        env: &Env,
        config: &StudioConfig,
        from: u64,
        to: u64,
    ) -> Result<(Date, i128), StudioError> {
        if from >= to || from < env.ledger().timestamp() {
            return Err(StudioError::InvalidTimestamps);
        }

        let (window_start, window_end) =
            calendar::window(from, config.min_schedule_hour, config.max_schedule_hour)
                .ok_or(StudioError::InvalidTime)?;
        if from < window_start || to > window_end {
            return Err(StudioError::InvalidTime);
        }
        let date = calendar::date_of(from).ok_or(StudioError::InvalidTime)?;

        let per_hour = pricing::hourly_rate(env, config)?;
        let price = pricing::price_for(per_hour, to - from)?;
        Ok((date, price))
    }

    fn check_price_per_hour(price_per_hour: i128) -> Result<(), StudioError> {
        if price_per_hour <= 0 {
            return Err(StudioError::ConfigurationError);
        }
        Ok(())
    }

    fn check_schedule_hours(min_hour: u32, max_hour: u32) -> Result<(), StudioError> {
        if min_hour >= max_hour || max_hour >= 24 {
            return Err(StudioError::ConfigurationError);
        }
        Ok(())
    }

    fn check_max_number_of_masters(max_number_of_masters: u32) -> Result<(), StudioError> {
        if max_number_of_masters == 0 {
            return Err(StudioError::ConfigurationError);
        }
        Ok(())
    }
}
