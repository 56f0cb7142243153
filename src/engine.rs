use crate::domain::{
    Account, AccountState, Error, Operation, OperationResult, Transaction, Violation,
    traits::{AccountRepository, DeadLetterQueue, OperationStream, OutputSink},
};
use crate::rules::Authoriser;

use futures::StreamExt;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub dead_lettered: usize,
}

/// Drives the operation stream: looks up committed state, authorises,
/// commits accepted results and emits every result in input order.
#[derive(Debug)]
pub struct Engine<I, S, O, D>
where
    I: OperationStream,
    S: AccountRepository,
    O: OutputSink,
    D: DeadLetterQueue,
{
    ingestion: I,
    store: S,
    output: O,
    dlq: D,
    authoriser: Authoriser,
}

impl<I, S, O, D> Engine<I, S, O, D>
where
    I: OperationStream,
    S: AccountRepository,
    O: OutputSink,
    D: DeadLetterQueue,
{
    pub fn new(ingestion: I, store: S, output: O, dlq: D, authoriser: Authoriser) -> Self {
        Self {
            ingestion,
            store,
            output,
            dlq,
            authoriser,
        }
    }

    pub async fn process(&mut self) -> Result<RunSummary, Error> {
        let mut summary = RunSummary::default();
        let mut res = self.ingestion.stream();

        while let Some(op) = res.next().await {
            match op {
                Ok(op) => {
                    let result = self.apply_operation(op);
                    summary.processed += 1;
                    if result.is_accepted() {
                        summary.accepted += 1;
                    } else {
                        summary.rejected += 1;
                    }
                    self.output.emit(&result)?;
                }
                Err(Error::IO(e)) => return Err(Error::IO(e)),
                Err(e) => {
                    summary.dead_lettered += 1;
                    self.dlq.report(&e);
                }
            }
        }

        self.output.flush()?;

        tracing::info!(
            processed = summary.processed,
            accepted = summary.accepted,
            rejected = summary.rejected,
            dead_lettered = summary.dead_lettered,
            "operation stream finished"
        );

        Ok(summary)
    }

    fn apply_operation(&mut self, op: Operation) -> OperationResult {
        match op {
            Operation::Account(account) => self.initialise(account),
            Operation::Transaction(tx) => self.authorise(tx),
        }
    }

    fn initialise(&mut self, account: Account) -> OperationResult {
        if let Some(state) = self.store.get(&account.id) {
            tracing::debug!(account = %account.id, "account already initialised");
            return OperationResult::new(
                Some(state.current_account()),
                vec![Violation::AccountAlreadyInitialized],
                state.transactions.clone(),
            );
        }

        tracing::debug!(
            account = %account.id,
            limit = account.available_limit,
            "account initialised"
        );
        self.store.put(AccountState::new(account.clone(), Vec::new()));
        OperationResult::new(Some(account), Vec::new(), Vec::new())
    }

    fn authorise(&mut self, tx: Transaction) -> OperationResult {
        let Some(state) = self.store.get(&tx.account_id) else {
            tracing::debug!(account = %tx.account_id, "transaction for unknown account");
            return OperationResult::rejected(Violation::AccountDoesNotExist);
        };

        let evaluation = self
            .authoriser
            .evaluate(&state.account, &tx, &state.transactions);

        // The registry keeps the account as initialised; the remaining limit is
        // always derived from the committed history.
        if evaluation.is_accepted() {
            let committed =
                AccountState::new(state.account.clone(), evaluation.transactions.clone());
            self.store.put(committed);
        }

        evaluation.into()
    }
}
