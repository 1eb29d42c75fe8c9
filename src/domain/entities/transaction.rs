//! Wallet transaction entity.

use serde::{Deserialize, Serialize};

/// Direction of money movement from the account holder's view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    Credit,
    Debit,
}

impl TransactionKind {
    /// Sign prefix used when rendering an amount.
    #[must_use]
    pub const fn sign(self) -> &'static str {
        match self {
            Self::Credit => "+",
            Self::Debit => "-",
        }
    }
}

/// A wallet ledger entry. Display-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    id: String,
    kind: TransactionKind,
    amount: u32,
    date: String,
    description: String,
}

impl Transaction {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        kind: TransactionKind,
        amount: u32,
        date: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            amount,
            date: date.into(),
            description: description.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub const fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// Amount in whole rupees.
    #[must_use]
    pub const fn amount(&self) -> u32 {
        self.amount
    }

    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}
