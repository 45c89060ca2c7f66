use std::sync::Arc;

use crate::services::{BalanceService, CoinGeckoPriceClient, Erc20Reader};

/// Shared per-process state handed to request handlers. Everything inside is
/// read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub balance_service: Arc<BalanceService<Erc20Reader, CoinGeckoPriceClient>>,
}

impl AppState {
    pub fn new(balance_service: Arc<BalanceService<Erc20Reader, CoinGeckoPriceClient>>) -> Self {
        Self { balance_service }
    }

    pub fn balance_service(&self) -> Arc<BalanceService<Erc20Reader, CoinGeckoPriceClient>> {
        self.balance_service.clone()
    }
}
