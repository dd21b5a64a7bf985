//! Sharded account table
//!
//! Accounts are partitioned into fixed-capacity shards. The shard owning an
//! account is found by integer division: `account_id / cluster_size`. Each
//! shard has its own reader/writer lock, so inserts and reads on different
//! shards never contend.
//!
//! # Directory growth
//!
//! The directory (the ordered list of shards) is itself behind a
//! reader/writer lock that is held only long enough to clone a shard handle
//! out of it, or to push new shards onto it. Shard locks are always taken
//! after the directory lock has been released, so a reader can never observe
//! a half-grown directory and routine reads and writes only ever hold the
//! lock of their own shard.
//!
//! ```text
//! ShardDirectory
//!     └── RwLock<Vec<Arc<Shard>>>
//!             ├── Shard 0: RwLock<HashMap<AccountId, Account>>  ids 1..c-1
//!             ├── Shard 1: RwLock<HashMap<AccountId, Account>>  ids c..2c-1
//!             └── ...
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::types::{Account, AccountId, StoreError};

/// Number of shard slots reserved up front in the directory
pub const SHARD_DIRECTORY_CAPACITY: usize = 1000;

/// Upper bound on the per-shard map capacity reserved at shard creation
const SHARD_RESERVE_LIMIT: u64 = 1024;

/// A bounded partition of the account space
#[derive(Debug)]
struct Shard {
    accounts: RwLock<HashMap<AccountId, Account>>,
}

impl Shard {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            accounts: RwLock::new(HashMap::with_capacity(capacity)),
        }
    }
}

/// Growable, ordered sequence of account shards
#[derive(Debug)]
pub struct ShardDirectory {
    /// Maximum number of accounts per shard; fixed for the directory's lifetime
    cluster_size: u64,

    /// Shard handles, indexed by shard number; append-only
    shards: RwLock<Vec<Arc<Shard>>>,
}

impl ShardDirectory {
    /// Create a directory holding a single empty shard
    ///
    /// # Arguments
    ///
    /// * `cluster_size` - Accounts per shard. Zero is accepted but leaves the
    ///   directory unable to resolve any account.
    pub fn new(cluster_size: u64) -> Self {
        let mut shards = Vec::with_capacity(SHARD_DIRECTORY_CAPACITY);
        shards.push(Arc::new(Shard::with_capacity(shard_reserve(cluster_size))));

        Self {
            cluster_size,
            shards: RwLock::new(shards),
        }
    }

    /// Accounts per shard
    pub fn cluster_size(&self) -> u64 {
        self.cluster_size
    }

    /// Index of the shard owning `account_id`
    ///
    /// Returns `None` when the cluster size is zero or the index does not fit
    /// in `usize`.
    pub fn shard_index(&self, account_id: AccountId) -> Option<usize> {
        account_id
            .checked_div(self.cluster_size)
            .and_then(|index| usize::try_from(index).ok())
    }

    /// Number of shards currently in the directory
    pub fn shard_count(&self) -> usize {
        self.shards.read().len()
    }

    /// Total number of accounts across all shards
    pub fn account_count(&self) -> usize {
        let shards: Vec<Arc<Shard>> = self.shards.read().clone();
        shards.iter().map(|shard| shard.accounts.read().len()).sum()
    }

    /// Insert a new account into its owning shard
    ///
    /// If the owning shard does not exist yet, the directory is extended
    /// until it covers the shard's index. On the standard path (accounts
    /// arriving in ID order) that is exactly one new shard; when a caller
    /// holding a higher ID overtakes one holding a lower ID, the shards in
    /// between are created empty and filled by their owners later.
    ///
    /// # Errors
    ///
    /// * `StoreError::AccountAdditionRetry` - If no shard index can be
    ///   computed for the account ID (cluster size 0, or an index that
    ///   overflows `usize`). Contention never produces it, and with a
    ///   non-zero cluster size it is unreachable on 64-bit targets.
    pub fn insert(&self, account: Account) -> Result<(), StoreError> {
        let shard = self
            .shard_index(account.id)
            .map(|index| self.shard_or_grow(index))
            .ok_or_else(|| StoreError::account_addition_retry(account.id))?;

        shard.accounts.write().insert(account.id, account);
        Ok(())
    }

    /// Fetch an account by ID
    ///
    /// # Errors
    ///
    /// * `StoreError::AccountNotPresent` - If the owning shard does not exist
    ///   or the account is not in it
    pub fn get(&self, account_id: AccountId) -> Result<Account, StoreError> {
        let shard = self
            .existing_shard(account_id)
            .ok_or_else(|| StoreError::account_not_present(account_id))?;
        let accounts = shard.accounts.read();
        accounts
            .get(&account_id)
            .cloned()
            .ok_or_else(|| StoreError::account_not_present(account_id))
    }

    /// Whether an account with this ID exists right now
    ///
    /// Accounts are never removed, so a `true` answer stays true.
    pub fn contains(&self, account_id: AccountId) -> bool {
        match self.existing_shard(account_id) {
            Some(shard) => {
                let accounts = shard.accounts.read();
                accounts.contains_key(&account_id)
            }
            None => false,
        }
    }

    fn existing_shard(&self, account_id: AccountId) -> Option<Arc<Shard>> {
        let index = self.shard_index(account_id)?;
        self.shards.read().get(index).cloned()
    }

    fn shard_or_grow(&self, index: usize) -> Arc<Shard> {
        let existing = self.shards.read().get(index).cloned();
        if let Some(shard) = existing {
            return shard;
        }

        // Recheck under the exclusive lock: another caller may have grown
        // the directory between the two acquisitions.
        let mut shards = self.shards.write();
        while shards.len() <= index {
            shards.push(Arc::new(Shard::with_capacity(shard_reserve(
                self.cluster_size,
            ))));
            tracing::debug!(shard = shards.len() - 1, "shard directory grown");
        }
        Arc::clone(&shards[index])
    }
}

fn shard_reserve(cluster_size: u64) -> usize {
    // Bounded by SHARD_RESERVE_LIMIT, so the cast cannot truncate.
    cluster_size.min(SHARD_RESERVE_LIMIT) as usize
}
