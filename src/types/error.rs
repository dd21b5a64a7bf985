//! Error types for the ledger store
//!
//! Every store failure is local and typed; none of them is fatal to the
//! process.
//!
//! # Error Categories
//!
//! - **Configuration**: the store was built with a zero shard capacity
//! - **Lookup**: the referenced account does not exist
//! - **Validation**: the operation code is not registered
//! - **Transient**: a create-account call lost a race with shard growth

use thiserror::Error;

use super::account::AccountId;
use super::transaction::OperationCode;

/// Main error type for the ledger store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store cannot accept accounts (zero accounts per shard)
    #[error("store not initialized")]
    StoreNotInitialized,

    /// The referenced account is not present in the store
    #[error("account {account_id} not present in store")]
    AccountNotPresent {
        /// The account that was looked up
        account_id: AccountId,
    },

    /// The operation code is not in the operation registry
    ///
    /// Unknown codes are rejected; they are never recorded as zero-amount
    /// transactions.
    #[error("operation {operation} not allowed")]
    OperationNotAllowed {
        /// The rejected operation code
        operation: OperationCode,
    },

    /// The shard owning a freshly allocated account ID was not available
    ///
    /// The allocated ID is burned. Callers retry the whole create call and
    /// receive a fresh ID.
    #[error("retry adding account {account_id}")]
    AccountAdditionRetry {
        /// The burned account ID
        account_id: AccountId,
    },
}

impl StoreError {
    /// Create an AccountNotPresent error
    pub fn account_not_present(account_id: AccountId) -> Self {
        StoreError::AccountNotPresent { account_id }
    }

    /// Create an OperationNotAllowed error
    pub fn operation_not_allowed(operation: OperationCode) -> Self {
        StoreError::OperationNotAllowed { operation }
    }

    /// Create an AccountAdditionRetry error
    pub fn account_addition_retry(account_id: AccountId) -> Self {
        StoreError::AccountAdditionRetry { account_id }
    }

    /// Whether repeating the same call may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, StoreError::AccountAdditionRetry { .. })
    }

    /// Stable machine-readable name of the error kind
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::StoreNotInitialized => "store_not_initialized",
            StoreError::AccountNotPresent { .. } => "account_not_present",
            StoreError::OperationNotAllowed { .. } => "operation_not_allowed",
            StoreError::AccountAdditionRetry { .. } => "account_addition_retry",
        }
    }
}
