use soroban_sdk::{contractclient, token, Env};
use crate::calendar::SECONDS_PER_HOUR;
use crate::types::{Quote, StudioConfig, StudioError};

/// Read side of the fiat/native price feed.
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeedInterface {
    fn latest_quote(env: Env) -> Quote;
}

/// Current hourly rate in the smallest unit of the payment token.
pub fn hourly_rate(env: &Env, config: &StudioConfig) -> Result<i128, StudioError> {
    let feed = PriceFeedClient::new(env, &config.price_feed);
    let quote = match feed.try_latest_quote() {
        Ok(Ok(quote)) => quote,
        _ => return Err(StudioError::PriceUnavailable),
    };
    let token_decimals = match token::Client::new(env, &config.payment_token).try_decimals() {
        Ok(Ok(decimals)) => decimals,
        _ => return Err(StudioError::PriceUnavailable),
    };

    native_per_hour(config.price_per_hour, &quote, token_decimals)
}

/// Convert a fiat hourly rate into native units at `quote`, truncating.
pub fn native_per_hour(
    price_per_hour: i128,
    quote: &Quote,
    token_decimals: u32,
) -> Result<i128, StudioError> {
    if quote.value <= 0 {
        return Err(StudioError::PriceUnavailable);
    }

    let exponent = token_decimals
        .checked_add(quote.decimals)
        .ok_or(StudioError::ArithmeticOverflow)?;
    let scale = 10i128
        .checked_pow(exponent)
        .ok_or(StudioError::ArithmeticOverflow)?;

    price_per_hour
        .checked_mul(scale)
        .map(|scaled| scaled / quote.value)
        .ok_or(StudioError::ArithmeticOverflow)
}

/// Price of `duration` seconds at `per_hour`, truncating fractional units.
pub fn price_for(per_hour: i128, duration: u64) -> Result<i128, StudioError> {
    per_hour
        .checked_mul(i128::from(duration))
        .map(|total| total / i128::from(SECONDS_PER_HOUR))
        .ok_or(StudioError::ArithmeticOverflow)
}
