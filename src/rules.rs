//! Business rules applied to a single transaction.
//!
//! Every rule looks at the committed history with the candidate transaction
//! appended, and every rule runs on every call, so one transaction can report
//! several violations at once. The caller passes the account as it was
//! initialised together with the accepted history; the remaining limit is
//! always recomputed from that history rather than carried as running state.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::domain::{Account, OperationResult, Transaction, Violation};
use crate::frequency;

/// Parameters of the velocity rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleLimits {
    /// Transactions of any kind allowed inside `transactions_window_minutes`.
    pub max_transactions: usize,
    /// Inclusive window, in whole minutes, for `max_transactions`.
    pub transactions_window_minutes: i64,
    /// Same merchant and amount transactions allowed inside `similar_window_minutes`.
    pub max_similar_transactions: usize,
    /// Inclusive window, in whole minutes, for `max_similar_transactions`.
    pub similar_window_minutes: i64,
}

impl Default for RuleLimits {
    fn default() -> Self {
        Self {
            max_transactions: 3,
            transactions_window_minutes: 2,
            max_similar_transactions: 2,
            similar_window_minutes: 2,
        }
    }
}

/// Tentative outcome of an evaluation. Nothing here has been committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub account: Account,
    pub violations: Vec<Violation>,
    pub transactions: Vec<Transaction>,
}

impl Evaluation {
    pub fn is_accepted(&self) -> bool {
        self.violations.is_empty()
    }
}

impl From<Evaluation> for OperationResult {
    fn from(evaluation: Evaluation) -> Self {
        OperationResult::new(
            Some(evaluation.account),
            evaluation.violations,
            evaluation.transactions,
        )
    }
}

#[derive(Debug, Default, Clone)]
pub struct Authoriser {
    limits: RuleLimits,
}

impl Authoriser {
    pub fn new(limits: RuleLimits) -> Self {
        Self { limits }
    }

    /// Runs every rule against `history` plus `transaction`.
    ///
    /// `history` must hold only previously accepted transactions for this
    /// account, in acceptance order. The returned history always has
    /// `transaction` appended, whatever the violations; the caller decides
    /// whether to commit it.
    pub fn evaluate(
        &self,
        account: &Account,
        transaction: &Transaction,
        history: &[Transaction],
    ) -> Evaluation {
        let mut transactions = Vec::with_capacity(history.len() + 1);
        transactions.extend_from_slice(history);
        transactions.push(transaction.clone());

        let spent = Transaction::sum_amounts(&transactions);

        let violations: Vec<Violation> = [
            self.check_card(account),
            self.check_limit(account, spent),
            self.check_doubled(&transactions),
            self.check_frequency(&transactions),
        ]
        .into_iter()
        .flatten()
        .collect();

        tracing::debug!(
            account = %account.id,
            transaction = %transaction,
            ?violations,
            "transaction evaluated"
        );

        Evaluation {
            account: account.after_spending(spent),
            violations,
            transactions,
        }
    }

    fn check_card(&self, account: &Account) -> Option<Violation> {
        (!account.active_card).then_some(Violation::CardNotActive)
    }

    fn check_limit(&self, account: &Account, spent: i128) -> Option<Violation> {
        (spent > i128::from(account.available_limit)).then_some(Violation::InsufficientLimit)
    }

    /// Groups by (merchant, amount) and runs the window over each group's
    /// timestamps in arrival order.
    fn check_doubled(&self, transactions: &[Transaction]) -> Option<Violation> {
        let mut similar: HashMap<(&str, i64), Vec<DateTime<Utc>>> = HashMap::new();
        for tx in transactions {
            similar
                .entry((tx.merchant.as_str(), tx.amount))
                .or_default()
                .push(tx.time);
        }

        similar
            .values()
            .any(|times| {
                frequency::exceeds(
                    times,
                    self.limits.max_similar_transactions,
                    self.limits.similar_window_minutes,
                )
            })
            .then_some(Violation::DoubledTransaction)
    }

    fn check_frequency(&self, transactions: &[Transaction]) -> Option<Violation> {
        let times: Vec<DateTime<Utc>> = transactions.iter().map(|tx| tx.time).collect();

        frequency::exceeds(
            &times,
            self.limits.max_transactions,
            self.limits.transactions_window_minutes,
        )
        .then_some(Violation::HighFrequencySmallInterval)
    }
}
