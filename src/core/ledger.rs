//! Per-account transaction ledger
//!
//! Each account owns an append-only list of transactions guarded by its own
//! mutex. The directory mapping account IDs to those lists is a `DashMap`;
//! it is only touched to find an account's list, or to create it on the
//! account's first transaction.
//!
//! # Locking
//!
//! ```text
//! TransactionLedger
//!     └── DashMap<AccountId, Arc<Mutex<Vec<Transaction>>>>   (directory)
//!                                 └── Mutex                   (per-account append lock)
//! ```
//!
//! - Lookup takes a shared directory lock; only a missing entry escalates to
//!   `entry().or_default()`, which re-checks under the exclusive lock, so two
//!   concurrent first transactions for one account share a single list.
//! - The directory guard is dropped before the account mutex is taken, so
//!   appends to different accounts never contend.
//!
//! # Ordering
//!
//! The transaction ID and timestamp are assigned while the account mutex is
//! held. An account's ledger is therefore ordered by transaction ID as well
//! as by append order.

use std::sync::Arc;

use chrono::Utc;
use dashmap::DashMap;
use parking_lot::Mutex;

use super::allocator::IdAllocator;
use crate::types::{AccountId, OperationType, Transaction};

type LedgerEntry = Arc<Mutex<Vec<Transaction>>>;

/// Append-only transaction history, one ordered list per account
#[derive(Debug, Default)]
pub struct TransactionLedger {
    entries: DashMap<AccountId, LedgerEntry>,
}

impl TransactionLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Record a transaction against an account
    ///
    /// The caller is responsible for having verified that the account exists.
    ///
    /// # Arguments
    ///
    /// * `account_id` - The account the transaction belongs to
    /// * `ids` - Allocator supplying the transaction ID
    /// * `operation` - The resolved operation type
    /// * `amount` - Unsigned magnitude submitted by the client
    ///
    /// # Returns
    ///
    /// The transaction exactly as it was appended.
    pub fn append(
        &self,
        account_id: AccountId,
        ids: &IdAllocator,
        operation: OperationType,
        amount: f64,
    ) -> Transaction {
        let entry = self.entry(account_id);
        let mut transactions = entry.lock();

        let transaction = Transaction {
            id: ids.next_transaction_id(),
            account_id,
            operation: operation.code,
            amount: operation.signed_amount(amount),
            occurred_at: Utc::now(),
        };
        transactions.push(transaction.clone());

        transaction
    }

    /// Snapshot of an account's transactions in append order
    ///
    /// Accounts without transactions yield an empty list.
    pub fn transactions(&self, account_id: AccountId) -> Vec<Transaction> {
        let entry = self
            .entries
            .get(&account_id)
            .map(|entry| Arc::clone(entry.value()));

        match entry {
            Some(entry) => entry.lock().clone(),
            None => Vec::new(),
        }
    }

    /// Number of accounts with at least one transaction
    pub fn account_count(&self) -> usize {
        self.entries.len()
    }

    fn entry(&self, account_id: AccountId) -> LedgerEntry {
        let existing = self
            .entries
            .get(&account_id)
            .map(|entry| Arc::clone(entry.value()));
        if let Some(entry) = existing {
            return entry;
        }

        let created = self.entries.entry(account_id).or_default();
        Arc::clone(created.value())
    }
}
