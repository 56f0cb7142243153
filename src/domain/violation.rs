use serde::{Deserialize, Serialize};

/// Every outcome that flags an operation. The serialized codes are stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Violation {
    AccountAlreadyInitialized,
    InsufficientLimit,
    CardNotActive,
    HighFrequencySmallInterval,
    DoubledTransaction,
    AccountDoesNotExist,
}

impl Violation {
    pub fn code(&self) -> &'static str {
        match self {
            Violation::AccountAlreadyInitialized => "account-already-initialized",
            Violation::InsufficientLimit => "insufficient-limit",
            Violation::CardNotActive => "card-not-active",
            Violation::HighFrequencySmallInterval => "high-frequency-small-interval",
            Violation::DoubledTransaction => "doubled-transaction",
            Violation::AccountDoesNotExist => "account-does-not-exist",
        }
    }
}

impl core::fmt::Display for Violation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}
