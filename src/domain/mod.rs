pub mod account;
pub mod error;
pub mod operation;
pub mod traits;
pub mod transaction;
pub mod violation;

pub use account::{Account, AccountState};
pub use error::Error;
pub use operation::{Operation, OperationResult};
pub use traits::{AccountRepository, DeadLetterQueue, OperationStream, OutputSink};
pub use transaction::Transaction;
pub use violation::Violation;
