//! Identifier allocation
//!
//! Account IDs and transaction IDs come from two independent atomic
//! counters. Allocation is wait-free: a single `fetch_add` per call, no locks.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::types::{AccountId, TransactionId};

/// Lock-free allocator for account and transaction identifiers
///
/// Both sequences start at 1, are strictly increasing and never hand out the
/// same value twice. The two ID spaces never interact.
#[derive(Debug, Default)]
pub struct IdAllocator {
    last_account_id: AtomicU64,
    last_transaction_id: AtomicU64,
}

impl IdAllocator {
    /// Create an allocator whose first IDs will be 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next account ID
    pub fn next_account_id(&self) -> AccountId {
        // Uniqueness only needs the atomicity of the RMW, not ordering.
        self.last_account_id.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Allocate the next transaction ID
    pub fn next_transaction_id(&self) -> TransactionId {
        self.last_transaction_id.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Number of account IDs handed out so far (including burned ones)
    pub fn allocated_accounts(&self) -> u64 {
        self.last_account_id.load(Ordering::Relaxed)
    }
}
