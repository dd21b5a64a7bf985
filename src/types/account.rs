//! Account-related types for the ledger service
//!
//! This module defines the Account record stored in the shard directory.

use serde::{Deserialize, Serialize};

/// Account identifier
///
/// Assigned by the store, strictly increasing from 1 and never reused.
pub type AccountId = u64;

/// A ledger account
///
/// Accounts are immutable once created. The owner reference (the caller's
/// document number) is free-form and is not required to be unique: several
/// accounts may share the same document number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Store-assigned identifier
    #[serde(rename = "account_id")]
    pub id: AccountId,

    /// Caller-supplied owner reference
    pub document_number: String,
}

impl Account {
    /// Create an account record
    ///
    /// # Arguments
    ///
    /// * `id` - The identifier allocated for this account
    /// * `document_number` - The owner reference supplied by the caller
    pub fn new(id: AccountId, document_number: impl Into<String>) -> Self {
        Account {
            id,
            document_number: document_number.into(),
        }
    }
}
