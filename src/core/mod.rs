//! Core storage engine
//!
//! This module contains the in-memory ledger components:
//! - `allocator` - Lock-free account and transaction ID counters
//! - `operations` - Operation code registry (signed multipliers)
//! - `shard_directory` - Accounts partitioned into fixed-capacity shards
//! - `ledger` - Per-account append-only transaction lists
//! - `store` - Facade composing the above
//! - `traits` - The `LedgerStore` facade trait

pub mod allocator;
pub mod ledger;
pub mod operations;
pub mod shard_directory;
pub mod store;
pub mod traits;

pub use allocator::IdAllocator;
pub use ledger::TransactionLedger;
pub use operations::OperationRegistry;
pub use shard_directory::ShardDirectory;
pub use store::InMemoryStore;
pub use traits::LedgerStore;
