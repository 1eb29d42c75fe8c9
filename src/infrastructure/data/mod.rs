//! Embedded marketplace dataset.
//!
//! The prototype ships its data inside the binary; a live backend
//! replaces this adapter behind the same port without touching any
//! screen.

use async_trait::async_trait;
use parking_lot::RwLock;
use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::entities::{Category, Job, Transaction, TransactionKind, Worker};
use crate::domain::errors::DataError;
use crate::domain::ports::{MarketDataPort, WalletSnapshot};

const SEED: &str = include_str!("seed.json");

#[derive(Debug, Deserialize)]
struct SeedWallet {
    balance: u32,
    transactions: Vec<Transaction>,
}

#[derive(Debug, Deserialize)]
struct SeedFile {
    workers: Vec<Worker>,
    categories: Vec<Category>,
    jobs: Vec<Job>,
    wallet: SeedWallet,
}

/// Marketplace data source backed by the embedded seed file. The
/// wallet is the only mutable piece, guarded for the odd background
/// task that reads it off the main loop.
pub struct SeedMarketData {
    workers: Vec<Worker>,
    categories: Vec<Category>,
    jobs: Vec<Job>,
    wallet: RwLock<WalletSnapshot>,
    top_up_counter: RwLock<u32>,
}

impl SeedMarketData {
    /// Parses the embedded seed file.
    ///
    /// # Errors
    /// Returns error if the embedded JSON does not match the entity
    /// shapes.
    pub fn new() -> Result<Self, DataError> {
        let seed: SeedFile = serde_json::from_str(SEED)?;

        info!(
            workers = seed.workers.len(),
            categories = seed.categories.len(),
            jobs = seed.jobs.len(),
            "Seed dataset loaded"
        );

        Ok(Self {
            workers: seed.workers,
            categories: seed.categories,
            jobs: seed.jobs,
            wallet: RwLock::new(WalletSnapshot {
                balance: seed.wallet.balance,
                transactions: seed.wallet.transactions,
            }),
            top_up_counter: RwLock::new(0),
        })
    }
}

#[async_trait]
impl MarketDataPort for SeedMarketData {
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
        let id = {
            let mut counter = self.top_up_counter.write();
            *counter += 1;
            format!("tu{}", *counter)
        };
        let date = chrono::Local::now().format("%d %b, %Y").to_string();

        let mut wallet = self.wallet.write();
        wallet.balance += amount;
        wallet.transactions.insert(
            0,
            Transaction::new(id, TransactionKind::Credit, amount, date, "Wallet Top-up"),
        );

        debug!(amount, balance = wallet.balance, "Wallet credited");
        Ok(wallet.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_parses() {
        let data = SeedMarketData::new().unwrap();
        assert_eq!(data.workers.len(), 6);
        assert_eq!(data.categories.len(), 16);
        assert!(data.jobs.len() >= 2);
        assert_eq!(data.wallet.read().balance, 4250);
        assert_eq!(data.wallet.read().transactions.len(), 3);
    }

    #[tokio::test]
    async fn test_top_up_prepends_credit() {
        let data = SeedMarketData::new().unwrap();

        let snapshot = data.top_up(500).await.unwrap();
        assert_eq!(snapshot.balance, 4750);
        assert_eq!(snapshot.transactions.len(), 4);
        assert_eq!(snapshot.transactions[0].kind(), TransactionKind::Credit);
        assert_eq!(snapshot.transactions[0].amount(), 500);
    }

    #[tokio::test]
    async fn test_collections_are_stable() {
        let data = SeedMarketData::new().unwrap();
        let first = data.workers().await.unwrap();
        data.top_up(100).await.unwrap();
        let second = data.workers().await.unwrap();
        assert_eq!(first, second);
    }
}
