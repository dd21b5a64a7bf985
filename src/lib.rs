//! Ledger Service Library
//! # Overview
//!
//! This library provides an in-memory, sharded account and transaction ledger
//! served over a small JSON HTTP API.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Transaction, OperationType, StoreError)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Storage engine components:
//!   - [`core::allocator`] - Monotonic account and transaction ID counters
//!   - [`core::shard_directory`] - Accounts partitioned into `cluster_size` shards
//!   - [`core::ledger`] - Per-account transaction lists
//!   - [`core::store`] - The [`InMemoryStore`] facade
//! - [`server`] - HTTP routes, handlers and error mapping
//!
//! # Operation Types
//!
//! Transactions carry one of four operation codes. The amount supplied by the
//! caller is multiplied by the operation's sign before it is stored:
//!
//! - **1 Normal Purchase**: debit (-1)
//! - **2 Purchase with installments**: debit (-1)
//! - **3 Withdrawal**: debit (-1)
//! - **4 Credit Voucher**: credit (+1)
//!
//! # Sharding
//!
//! Account IDs start at 1 and are handed out without gaps. Account `id` lives
//! in shard `id / cluster_size`: shard 0 holds IDs `1..cluster_size`, every
//! later shard holds `cluster_size` IDs, and new shards are created as IDs
//! cross a boundary.

// Module declarations
pub mod cli;
pub mod core;
pub mod server;
pub mod types;

pub use core::{InMemoryStore, LedgerStore};
pub use server::{create_router, serve, AppState, ServiceConfig};
pub use types::{
    Account, AccountId, OperationCode, OperationType, StoreError, Transaction, TransactionId,
};
