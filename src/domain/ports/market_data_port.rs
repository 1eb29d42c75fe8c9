//! Marketplace data port definition.

use async_trait::async_trait;

use crate::domain::entities::{Category, Job, Transaction, Worker};
use crate::domain::errors::DataError;

/// Point-in-time view of the wallet: current balance plus the ledger,
/// most recent entry first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletSnapshot {
    /// Balance in whole rupees.
    pub balance: u32,
    /// Ledger entries, newest first.
    pub transactions: Vec<Transaction>,
}

/// Port for the marketplace data source (mock today, live later).
///
/// Collections are read-only reference data; the wallet is the one
/// mutable surface, via [`MarketDataPort::top_up`].
#[async_trait]
pub trait MarketDataPort: Send + Sync {
    /// All listed workers.
    async fn workers(&self) -> Result<Vec<Worker>, DataError>;

    /// All bookable categories.
    async fn categories(&self) -> Result<Vec<Category>, DataError>;

    /// Jobs visible to the signed-in worker.
    async fn jobs(&self) -> Result<Vec<Job>, DataError>;

    /// Current wallet state.
    async fn wallet(&self) -> Result<WalletSnapshot, DataError>;

    /// Credits the wallet and returns the updated snapshot.
    async fn top_up(&self, amount: u32) -> Result<WalletSnapshot, DataError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use crate::domain::entities::TransactionKind;
    use parking_lot::RwLock;

    /// In-memory mock data source for testing.
    pub struct MockMarketData {
        workers: Vec<Worker>,
        categories: Vec<Category>,
        jobs: Vec<Job>,
        wallet: RwLock<WalletSnapshot>,
    }

    impl MockMarketData {
        /// Creates an empty mock with a zero-balance wallet.
        #[must_use]
        pub fn new() -> Self {
            Self {
                workers: Vec::new(),
                categories: Vec::new(),
                jobs: Vec::new(),
                wallet: RwLock::new(WalletSnapshot {
                    balance: 0,
                    transactions: Vec::new(),
                }),
            }
        }

        /// Seeds the mock with fixed collections.
        #[must_use]
        pub fn with_data(mut self, workers: Vec<Worker>, jobs: Vec<Job>) -> Self {
            self.workers = workers;
            self.jobs = jobs;
            self
        }
    }

    impl Default for MockMarketData {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl MarketDataPort for MockMarketData {
        async fn workers(&self) -> Result<Vec<Worker>, DataError> {
            Ok(self.workers.clone())
        }

        async fn categories(&self) -> Result<Vec<Category>, DataError> {
            Ok(self.categories.clone())
        }

        async fn jobs(&self) -> Result<Vec<Job>, DataError> {
            Ok(self.jobs.clone())
        }

        async fn wallet(&self) -> Result<WalletSnapshot, DataError> {
            Ok(self.wallet.read().clone())
        }

        async fn top_up(&self, amount: u32) -> Result<WalletSnapshot, DataError> {
            let mut wallet = self.wallet.write();
            wallet.balance += amount;
            wallet.transactions.insert(
                0,
                Transaction::new("t-mock", TransactionKind::Credit, amount, "today", "Top-up"),
            );
            Ok(wallet.clone())
        }
    }
}
