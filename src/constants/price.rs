//! Spot-price source defaults.

/// Base URL of the public CoinGecko v3 API, used when `PRICE_API_URL` is not
/// set.
pub const DEFAULT_PRICE_API_URL: &str = "https://api.coingecko.com/api/v3";

/// The only quote currency this service requests.
pub const USD_CURRENCY: &str = "usd";
