//! Core trait for the ledger store facade
//!
//! The HTTP boundary only depends on this trait, so the in-memory store can
//! be swapped for another backend (or a test double) without touching the
//! handlers.

use crate::types::{Account, AccountId, OperationCode, StoreError, Transaction};

/// Store facade consumed by the boundary layer
///
/// Implementations must be safe to call concurrently from many request
/// handlers.
pub trait LedgerStore: Send + Sync {
    /// Create an account for the given owner reference
    ///
    /// # Errors
    ///
    /// * `StoreError::StoreNotInitialized` - The store cannot hold accounts
    /// * `StoreError::AccountAdditionRetry` - Transient; retry the call
    fn create_account(&self, document_number: &str) -> Result<Account, StoreError>;

    /// Fetch an account by ID
    ///
    /// # Errors
    ///
    /// * `StoreError::AccountNotPresent` - No account has this ID
    fn fetch_account(&self, account_id: AccountId) -> Result<Account, StoreError>;

    /// Record a transaction against an existing account
    ///
    /// # Errors
    ///
    /// * `StoreError::AccountNotPresent` - No account has this ID
    /// * `StoreError::OperationNotAllowed` - The operation code is unknown
    fn transact(
        &self,
        account_id: AccountId,
        operation: OperationCode,
        amount: f64,
    ) -> Result<Transaction, StoreError>;
}
