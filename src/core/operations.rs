//! Operation registry
//!
//! Static table mapping an operation code to its signed multiplier and
//! description. The table is built once when the store is constructed and is
//! never mutated afterwards.

use crate::types::{OperationCode, OperationType};

/// The operation types every store accepts
pub const STANDARD_OPERATIONS: [OperationType; 4] = [
    OperationType {
        code: 1,
        multiplier: -1,
        description: "Normal Purchase",
    },
    OperationType {
        code: 2,
        multiplier: -1,
        description: "Purchase with installments",
    },
    OperationType {
        code: 3,
        multiplier: -1,
        description: "Withdrawal",
    },
    OperationType {
        code: 4,
        multiplier: 1,
        description: "Credit Voucher",
    },
];

/// Read-only lookup table of operation types
#[derive(Debug, Clone)]
pub struct OperationRegistry {
    operations: Vec<OperationType>,
}

impl OperationRegistry {
    /// Build the registry with the standard operation types
    pub fn standard() -> Self {
        Self {
            operations: STANDARD_OPERATIONS.to_vec(),
        }
    }

    /// Find the operation type registered under `code`
    ///
    /// # Returns
    ///
    /// * `Some(OperationType)` - If the code is registered
    /// * `None` - If the code is unknown
    pub fn lookup(&self, code: OperationCode) -> Option<OperationType> {
        self.operations.iter().find(|op| op.code == code).copied()
    }

    /// Iterate over all registered operation types in code order
    pub fn iter(&self) -> impl Iterator<Item = &OperationType> {
        self.operations.iter()
    }
}

impl Default for OperationRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::normal_purchase(1, -1, "Normal Purchase")]
    #[case::installment_purchase(2, -1, "Purchase with installments")]
    #[case::withdrawal(3, -1, "Withdrawal")]
    #[case::credit_voucher(4, 1, "Credit Voucher")]
    fn test_standard_operations(
        #[case] code: OperationCode,
        #[case] multiplier: i8,
        #[case] description: &str,
    ) {
        let registry = OperationRegistry::standard();

        let op = registry.lookup(code).unwrap();

        assert_eq!(op.code, code);
        assert_eq!(op.multiplier, multiplier);
        assert_eq!(op.description, description);
    }

    #[rstest]
    #[case::zero(0)]
    #[case::five(5)]
    #[case::negative(-1)]
    #[case::max(i32::MAX)]
    fn test_unknown_codes_are_absent(#[case] code: OperationCode) {
        assert!(OperationRegistry::standard().lookup(code).is_none());
    }

    #[test]
    fn test_only_credit_voucher_is_a_credit() {
        let credits: Vec<OperationCode> = OperationRegistry::standard()
            .iter()
            .filter(|op| !op.is_debit())
            .map(|op| op.code)
            .collect();

        assert_eq!(credits, vec![4]);
    }
}
