//! Transaction-related types for the ledger service
//!
//! This module defines the operation types a transaction can carry and the
//! immutable transaction record appended to an account's ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::account::AccountId;

/// Transaction identifier
///
/// Globally unique across all accounts, strictly increasing from 1.
pub type TransactionId = u64;

/// Operation type code as sent by clients (`operation_type_id`)
pub type OperationCode = i32;

/// A registered operation type
///
/// The multiplier turns the unsigned amount a client submits into the signed
/// amount recorded in the ledger: debits carry `-1`, credits `+1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationType {
    /// Code clients use to select this operation
    pub code: OperationCode,

    /// Sign applied to the submitted amount (`-1` or `+1`)
    pub multiplier: i8,

    /// Human-readable name
    pub description: &'static str,
}

impl OperationType {
    /// Apply this operation's sign to an amount
    pub fn signed_amount(&self, amount: f64) -> f64 {
        amount * f64::from(self.multiplier)
    }

    /// Whether this operation removes funds from the account
    pub fn is_debit(&self) -> bool {
        self.multiplier < 0
    }
}

/// A recorded ledger transaction
///
/// Transactions are immutable and never removed. Field names on the wire
/// follow the public API (`transaction_id`, `operation_type_id`, `event_date`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Globally unique transaction identifier
    #[serde(rename = "transaction_id")]
    pub id: TransactionId,

    /// Account this transaction was recorded against
    pub account_id: AccountId,

    /// Operation type code
    #[serde(rename = "operation_type_id")]
    pub operation: OperationCode,

    /// Signed amount: submitted magnitude times the operation multiplier
    pub amount: f64,

    /// Wall-clock time the ledger append executed
    #[serde(rename = "event_date")]
    pub occurred_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::debit(-1, 100.0, -100.0)]
    #[case::credit(1, 50.0, 50.0)]
    #[case::zero_amount(-1, 0.0, 0.0)]
    fn test_signed_amount(#[case] multiplier: i8, #[case] amount: f64, #[case] expected: f64) {
        let op = OperationType {
            code: 1,
            multiplier,
            description: "test",
        };
        assert_eq!(op.signed_amount(amount), expected);
    }

    #[test]
    fn test_transaction_serializes_with_wire_names() {
        let occurred_at = DateTime::parse_from_rfc3339("2024-05-01T10:20:30.123456789Z")
            .unwrap()
            .with_timezone(&Utc);
        let txn = Transaction {
            id: 7,
            account_id: 3,
            operation: 4,
            amount: 50.5,
            occurred_at,
        };

        let json = serde_json::to_value(&txn).unwrap();

        assert_eq!(json["transaction_id"], 7);
        assert_eq!(json["account_id"], 3);
        assert_eq!(json["operation_type_id"], 4);
        assert_eq!(json["amount"], 50.5);
        assert_eq!(json["event_date"], "2024-05-01T10:20:30.123456789Z");
    }
}
