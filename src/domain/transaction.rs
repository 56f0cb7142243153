use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub account_id: String,
    pub merchant: String,
    pub amount: i64,
    pub time: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        account_id: impl Into<String>,
        merchant: impl Into<String>,
        amount: i64,
        time: DateTime<Utc>,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            merchant: merchant.into(),
            amount,
            time,
        }
    }

    /// Total of `transactions`, widened so that no sequence of `i64` amounts overflows.
    pub fn sum_amounts(transactions: &[Transaction]) -> i128 {
        transactions.iter().map(|tx| i128::from(tx.amount)).sum()
    }
}

impl core::fmt::Display for Transaction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "account={},merchant={},amount={},time={}",
            self.account_id,
            self.merchant,
            self.amount,
            self.time.to_rfc3339()
        )
    }
}
