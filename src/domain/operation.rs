use serde::{Deserialize, Serialize};

use crate::domain::{Account, Transaction, Violation};

/// A decoded input line: `{"account": {...}}` or `{"transaction": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Account(Account),
    Transaction(Transaction),
}

/// One output record per processed operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationResult {
    pub account: Option<Account>,
    pub violations: Vec<Violation>,
    pub transactions: Vec<Transaction>,
}

impl OperationResult {
    pub fn new(
        account: Option<Account>,
        violations: Vec<Violation>,
        transactions: Vec<Transaction>,
    ) -> Self {
        Self {
            account,
            violations,
            transactions,
        }
    }

    pub fn rejected(violation: Violation) -> Self {
        Self::new(None, vec![violation], Vec::new())
    }

    pub fn is_accepted(&self) -> bool {
        self.violations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn decodes_externally_tagged_operations() {
        let account: Operation = serde_json::from_str(
            r#"{"account": {"id": "ACC_A", "activeCard": true, "availableLimit": 100}}"#,
        )
        .unwrap();
        assert_eq!(account, Operation::Account(Account::new("ACC_A", true, 100)));

        let transaction: Operation = serde_json::from_str(
            r#"{"transaction": {"accountId": "ACC_A", "merchant": "Habibs", "amount": 20, "time": "2019-02-13T10:00:00.000Z"}}"#,
        )
        .unwrap();
        let time = Utc.with_ymd_and_hms(2019, 2, 13, 10, 0, 0).unwrap();
        assert_eq!(
            transaction,
            Operation::Transaction(Transaction::new("ACC_A", "Habibs", 20, time))
        );
    }

    #[test]
    fn rejects_unknown_operation_kind() {
        let res = serde_json::from_str::<Operation>(r#"{"refund": {"amount": 1}}"#);
        assert!(res.is_err());
    }

    #[test]
    fn missing_account_serializes_as_null() {
        let result = OperationResult::rejected(Violation::AccountDoesNotExist);
        let json = serde_json::to_string(&result).unwrap();

        assert_eq!(
            json,
            r#"{"account":null,"violations":["account-does-not-exist"],"transactions":[]}"#
        );
    }
}
