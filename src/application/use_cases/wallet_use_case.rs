//! Wallet use case.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::errors::DataError;
use crate::domain::ports::{MarketDataPort, WalletSnapshot};

/// Reads the wallet and applies top-ups.
#[derive(Clone)]
pub struct WalletUseCase {
    data: Arc<dyn MarketDataPort>,
}

impl WalletUseCase {
    /// Creates new wallet use case.
    #[must_use]
    pub const fn new(data: Arc<dyn MarketDataPort>) -> Self {
        Self { data }
    }

    /// Current balance and ledger.
    ///
    /// # Errors
    /// Returns error if the data source fails.
    pub async fn snapshot(&self) -> Result<WalletSnapshot, DataError> {
        self.data.wallet().await
    }

    /// Credits the wallet.
    ///
    /// # Errors
    /// Returns error for a zero amount or a data source failure.
    pub async fn top_up(&self, amount: u32) -> Result<WalletSnapshot, DataError> {
        if amount == 0 {
            warn!("Rejected zero-amount top-up");
            return Err(DataError::invalid_amount("top-up must be positive"));
        }

        let snapshot = self.data.top_up(amount).await?;
        info!(amount, balance = snapshot.balance, "Wallet topped up");
        Ok(snapshot)
    }
}
