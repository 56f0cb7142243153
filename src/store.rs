use std::collections::HashMap;

use crate::domain::{AccountRepository, AccountState};

#[derive(Default, Debug)]
pub struct InMemoryAccountStore {
    accounts: HashMap<String, AccountState>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
        }
    }
}

impl AccountRepository for InMemoryAccountStore {
    fn get(&self, account_id: &str) -> Option<&AccountState> {
        self.accounts.get(account_id)
    }

    fn put(&mut self, state: AccountState) {
        self.accounts.insert(state.account.id.clone(), state);
    }
}
