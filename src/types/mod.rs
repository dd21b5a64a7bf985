//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account record and identifier
//! - `transaction`: Transaction record, operation types and identifiers
//! - `error`: Error types for the ledger store

pub mod account;
pub mod error;
pub mod transaction;

pub use account::{Account, AccountId};
pub use error::StoreError;
pub use transaction::{OperationCode, OperationType, Transaction, TransactionId};
