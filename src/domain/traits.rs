use futures::Stream;

use crate::domain::{AccountState, Error, Operation, OperationResult};

pub trait OperationStream {
    type OpStream: Stream<Item = Result<Operation, Error>> + Send + Unpin + 'static;
    fn stream(&mut self) -> Self::OpStream;
}

pub trait DeadLetterQueue {
    fn report(&self, error: &Error);
}

/// Registry of committed account state. Only the engine writes to it, and only
/// after an operation came back without violations.
pub trait AccountRepository {
    fn get(&self, account_id: &str) -> Option<&AccountState>;

    fn put(&mut self, state: AccountState);
}

pub trait OutputSink {
    fn emit(&mut self, result: &OperationResult) -> Result<(), Error>;

    fn flush(&mut self) -> Result<(), Error>;
}
