use serde::{Deserialize, Serialize};

use crate::domain::Transaction;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub active_card: bool,
    pub available_limit: i64, // may go negative only in a rejected evaluation
}

impl Account {
    pub fn new(id: impl Into<String>, active_card: bool, available_limit: i64) -> Self {
        Self {
            id: id.into(),
            active_card,
            available_limit,
        }
    }

    /// Copy of this account with a different limit; accounts are replaced, never mutated.
    pub fn with_limit(&self, available_limit: i64) -> Self {
        Self {
            available_limit,
            ..self.clone()
        }
    }

    /// Copy of this account with `spent` taken off the limit, saturating at the `i64` bounds.
    pub fn after_spending(&self, spent: i128) -> Self {
        let remaining = i128::from(self.available_limit) - spent;
        let clamped = remaining.clamp(i128::from(i64::MIN), i128::from(i64::MAX));
        self.with_limit(clamped as i64)
    }
}

/// Committed registry entry: the account as initialised plus its accepted history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountState {
    pub account: Account,
    pub transactions: Vec<Transaction>,
}

impl AccountState {
    pub fn new(account: Account, transactions: Vec<Transaction>) -> Self {
        Self {
            account,
            transactions,
        }
    }

    /// Account with the limit left after every committed transaction.
    pub fn current_account(&self) -> Account {
        self.account.after_spending(Transaction::sum_amounts(&self.transactions))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn current_account_subtracts_committed_history() {
        let time = Utc.with_ymd_and_hms(2019, 10, 1, 9, 0, 0).unwrap();
        let state = AccountState::new(
            Account::new("ACC_A", true, 100),
            vec![
                Transaction::new("ACC_A", "Habibs", 10, time),
                Transaction::new("ACC_A", "Zara", 40, time),
            ],
        );

        assert_eq!(state.current_account().available_limit, 50);
        assert_eq!(state.account.available_limit, 100);
    }

    #[test]
    fn remaining_limit_saturates_instead_of_wrapping() {
        let account = Account::new("ACC_A", true, 100);

        assert_eq!(account.after_spending(30).available_limit, 70);
        assert_eq!(
            account.after_spending(i128::from(i64::MAX) * 2).available_limit,
            i64::MIN
        );
        assert_eq!(
            account.after_spending(i128::from(i64::MIN) * 2).available_limit,
            i64::MAX
        );
    }

    #[test]
    fn account_uses_camel_case_fields() {
        let account: Account =
            serde_json::from_str(r#"{"id":"ACC_A","activeCard":false,"availableLimit":80}"#)
                .unwrap();

        assert_eq!(account, Account::new("ACC_A", false, 80));
    }
}
