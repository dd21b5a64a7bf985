//! In-memory ledger store
//!
//! This module provides `InMemoryStore`, the facade that composes the
//! identifier allocator, operation registry, shard directory and transaction
//! ledger into the three store operations.
//!
//! # Architecture
//!
//! ```text
//! InMemoryStore
//!     ├── IdAllocator         (account / transaction ID counters)
//!     ├── OperationRegistry   (operation code -> signed multiplier)
//!     ├── ShardDirectory      (accounts, one RwLock per shard)
//!     └── TransactionLedger   (transactions, one Mutex per account)
//! ```
//!
//! The store is an ordinary value: build one at startup and share it behind
//! an `Arc`. All state lives in memory and is lost when the process exits.

use super::allocator::IdAllocator;
use super::ledger::TransactionLedger;
use super::operations::OperationRegistry;
use super::shard_directory::ShardDirectory;
use super::traits::LedgerStore;
use crate::types::{Account, AccountId, OperationCode, StoreError, Transaction};

/// Concurrency-safe in-memory implementation of [`LedgerStore`]
#[derive(Debug)]
pub struct InMemoryStore {
    ids: IdAllocator,
    operations: OperationRegistry,
    accounts: ShardDirectory,
    ledger: TransactionLedger,
}

impl InMemoryStore {
    /// Create an empty store
    ///
    /// # Arguments
    ///
    /// * `cluster_size` - Maximum accounts per shard. A store built with zero
    ///   rejects every account creation with `StoreNotInitialized`.
    pub fn new(cluster_size: u64) -> Self {
        Self {
            ids: IdAllocator::new(),
            operations: OperationRegistry::standard(),
            accounts: ShardDirectory::new(cluster_size),
            ledger: TransactionLedger::new(),
        }
    }

    /// Accounts per shard
    pub fn cluster_size(&self) -> u64 {
        self.accounts.cluster_size()
    }

    /// Number of accounts currently stored
    pub fn account_count(&self) -> usize {
        self.accounts.account_count()
    }

    /// Number of shards in the directory
    pub fn shard_count(&self) -> usize {
        self.accounts.shard_count()
    }

    /// Snapshot of an account's ledger in append order
    pub fn account_transactions(&self, account_id: AccountId) -> Vec<Transaction> {
        self.ledger.transactions(account_id)
    }

    /// The operation types this store accepts
    pub fn operations(&self) -> &OperationRegistry {
        &self.operations
    }
}

impl LedgerStore for InMemoryStore {
    fn create_account(&self, document_number: &str) -> Result<Account, StoreError> {
        if self.accounts.cluster_size() == 0 {
            return Err(StoreError::StoreNotInitialized);
        }

        let account = Account::new(self.ids.next_account_id(), document_number);
        self.accounts.insert(account.clone())?;

        tracing::debug!(account_id = account.id, "account created");
        Ok(account)
    }

    fn fetch_account(&self, account_id: AccountId) -> Result<Account, StoreError> {
        self.accounts.get(account_id)
    }

    fn transact(
        &self,
        account_id: AccountId,
        operation: OperationCode,
        amount: f64,
    ) -> Result<Transaction, StoreError> {
        if !self.accounts.contains(account_id) {
            return Err(StoreError::account_not_present(account_id));
        }

        let operation = self.operations.lookup(operation).ok_or_else(|| {
            tracing::debug!(account_id, operation, "unknown operation rejected");
            StoreError::operation_not_allowed(operation)
        })?;

        let transaction = self
            .ledger
            .append(account_id, &self.ids, operation, amount);

        tracing::debug!(
            transaction_id = transaction.id,
            account_id,
            operation = operation.description,
            "transaction recorded"
        );
        Ok(transaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_zero_cluster_size_rejects_account_creation() {
        let store = InMemoryStore::new(0);

        assert_eq!(
            store.create_account("1234"),
            Err(StoreError::StoreNotInitialized)
        );
        assert_eq!(store.account_count(), 0);
    }

    #[test]
    fn test_first_account_gets_id_one() {
        let store = InMemoryStore::new(2);

        let account = store.create_account("1234").unwrap();

        assert_eq!(account, Account::new(1, "1234"));
    }

    #[rstest]
    #[case::cluster_of_one(1)]
    #[case::cluster_of_two(2)]
    #[case::cluster_of_ten(10)]
    #[case::cluster_larger_than_run(1000)]
    fn test_sequential_creates_are_contiguous_and_fetchable(#[case] cluster_size: u64) {
        let store = InMemoryStore::new(cluster_size);

        for n in 1..=50u64 {
            let account = store.create_account(&format!("doc-{}", n)).unwrap();
            assert_eq!(account.id, n);
        }

        for n in 1..=50u64 {
            let account = store.fetch_account(n).unwrap();
            assert_eq!(account.document_number, format!("doc-{}", n));
        }
        assert_eq!(store.account_count(), 50);
    }

    #[test]
    fn test_cluster_size_two_layout() {
        let store = InMemoryStore::new(2);

        for doc in ["first", "second", "third", "fourth"] {
            store.create_account(doc).unwrap();
        }

        // ids 1 | 2,3 | 4
        assert_eq!(store.shard_count(), 3);
        assert_eq!(store.fetch_account(3).unwrap().document_number, "third");
    }

    #[test]
    fn test_document_numbers_need_not_be_unique() {
        let store = InMemoryStore::new(10);

        let a = store.create_account("same").unwrap();
        let b = store.create_account("same").unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(store.fetch_account(b.id).unwrap().document_number, "same");
    }

    #[rstest]
    #[case::zero_id(10, 0)]
    #[case::next_id(10, 4)]
    #[case::far_beyond(10, 1_000_000)]
    #[case::zero_cluster(0, 1)]
    #[case::cluster_of_one(1, 4)]
    fn test_fetch_missing_account(#[case] cluster_size: u64, #[case] id: AccountId) {
        let store = InMemoryStore::new(cluster_size);
        for _ in 0..3 {
            let _ = store.create_account("x");
        }

        assert_eq!(
            store.fetch_account(id),
            Err(StoreError::account_not_present(id))
        );
    }

    #[rstest]
    #[case::normal_purchase(1, 100.0, -100.0)]
    #[case::installment_purchase(2, 30.5, -30.5)]
    #[case::withdrawal(3, 12.0, -12.0)]
    #[case::credit_voucher(4, 50.0, 50.0)]
    fn test_transact_applies_operation_sign(
        #[case] operation: OperationCode,
        #[case] amount: f64,
        #[case] expected: f64,
    ) {
        let store = InMemoryStore::new(10);
        let account = store.create_account("1234").unwrap();

        let txn = store.transact(account.id, operation, amount).unwrap();

        assert_eq!(txn.id, 1);
        assert_eq!(txn.account_id, account.id);
        assert_eq!(txn.operation, operation);
        assert_eq!(txn.amount, expected);
        assert_eq!(store.account_transactions(account.id), vec![txn]);
    }

    #[rstest]
    #[case::zero(0)]
    #[case::five(5)]
    #[case::negative(-4)]
    fn test_transact_unknown_operation_appends_nothing(#[case] operation: OperationCode) {
        let store = InMemoryStore::new(10);
        let account = store.create_account("1234").unwrap();

        assert_eq!(
            store.transact(account.id, operation, 10.0),
            Err(StoreError::operation_not_allowed(operation))
        );
        assert!(store.account_transactions(account.id).is_empty());
    }

    #[rstest]
    #[case::unknown_id(10, 2)]
    #[case::beyond_directory(10, 500)]
    #[case::zero_cluster(0, 1)]
    fn test_transact_missing_account_appends_nothing(
        #[case] cluster_size: u64,
        #[case] id: AccountId,
    ) {
        let store = InMemoryStore::new(cluster_size);
        let _ = store.create_account("1234");

        assert_eq!(
            store.transact(id, 1, 10.0),
            Err(StoreError::account_not_present(id))
        );
        assert!(store.account_transactions(id).is_empty());
    }

    #[test]
    fn test_missing_account_checked_before_operation() {
        let store = InMemoryStore::new(10);

        assert_eq!(
            store.transact(1, 99, 10.0),
            Err(StoreError::account_not_present(1))
        );
    }

    #[test]
    fn test_transaction_ids_are_global_across_accounts() {
        let store = InMemoryStore::new(10);
        let a = store.create_account("a").unwrap();
        let b = store.create_account("b").unwrap();

        let t1 = store.transact(a.id, 1, 1.0).unwrap();
        let t2 = store.transact(b.id, 1, 1.0).unwrap();
        let t3 = store.transact(a.id, 4, 1.0).unwrap();

        assert_eq!((t1.id, t2.id, t3.id), (1, 2, 3));
    }

    #[rstest]
    #[case::cluster_of_one(1)]
    #[case::cluster_of_three(3)]
    #[case::cluster_of_hundred(100)]
    fn test_concurrent_creates_are_unique_and_gap_free(#[case] cluster_size: u64) {
        let store = Arc::new(InMemoryStore::new(cluster_size));
        let mut handles = vec![];

        for t in 0..8 {
            let store = Arc::clone(&store);
            handles.push(thread::spawn(move || {
                let mut ids = Vec::with_capacity(250);
                while ids.len() < 250 {
                    match store.create_account(&format!("thread-{}", t)) {
                        Ok(account) => ids.push(account.id),
                        Err(e) if e.is_retryable() => continue,
                        Err(e) => panic!("unexpected error: {}", e),
                    }
                }
                ids
            }));
        }

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "duplicate account id {}", id);
            }
        }

        assert_eq!(seen, (1..=2000).collect::<HashSet<_>>());
        assert_eq!(store.account_count(), 2000);
        for id in 1..=2000 {
            assert!(store.fetch_account(id).is_ok());
        }
    }

    #[test]
    fn test_contended_creates_with_cluster_of_one_never_ask_for_retry() {
        let store = Arc::new(InMemoryStore::new(1));
        let mut handles = vec![];

        for _ in 0..16 {
            let store = Arc::clone(&store);
            handles.push(thread::spawn(move || {
                (0..250)
                    .map(|_| store.create_account("doc").unwrap().id)
                    .collect::<Vec<_>>()
            }));
        }

        let mut seen = HashSet::new();
        for handle in handles {
            seen.extend(handle.join().unwrap());
        }

        assert_eq!(seen, (1..=4000).collect::<HashSet<_>>());
        assert_eq!(store.shard_count(), 4001);
    }

    #[rstest]
    #[case::cluster_of_one(1)]
    #[case::cluster_of_ten(10)]
    fn test_concurrent_transactions_on_one_account_lose_nothing(#[case] cluster_size: u64) {
        let store = Arc::new(InMemoryStore::new(cluster_size));
        let account = store.create_account("shared").unwrap();
        let mut handles = vec![];

        for t in 0..10 {
            let store = Arc::clone(&store);
            handles.push(thread::spawn(move || {
                for _ in 0..100 {
                    let operation = if t % 2 == 0 { 1 } else { 4 };
                    store.transact(account.id, operation, 1.0).unwrap();
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        let transactions = store.account_transactions(account.id);
        assert_eq!(transactions.len(), 1000);
        assert_eq!(transactions.iter().map(|t| t.amount).sum::<f64>(), 0.0);
    }

    #[test]
    fn test_concurrent_creates_and_transactions() {
        let store = Arc::new(InMemoryStore::new(4));
        let mut handles = vec![];

        for t in 0..8 {
            let store = Arc::clone(&store);
            handles.push(thread::spawn(move || {
                for i in 0..50 {
                    let account = store.create_account(&format!("{}-{}", t, i)).unwrap();
                    store.transact(account.id, 4, 10.0).unwrap();
                    store.transact(account.id, 3, 5.0).unwrap();
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.account_count(), 400);
        for id in 1..=400 {
            let amounts: Vec<f64> = store
                .account_transactions(id)
                .iter()
                .map(|t| t.amount)
                .collect();
            assert_eq!(amounts, vec![10.0, -5.0]);
        }
    }
}
