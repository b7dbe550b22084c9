use std::cell::{Cell, RefCell};
use std::io;
use std::path::PathBuf;

use super::{StoreError, TransactionStore};
use crate::models::Transaction;

/// In-memory store for tests. Counts saves and can be told to fail them.
#[derive(Default)]
pub(crate) struct MemoryStore {
    saved: RefCell<Vec<Transaction>>,
    saves: Cell<usize>,
    fail_saves: bool,
}

impl MemoryStore {
    pub(crate) fn with(transactions: Vec<Transaction>) -> Self {
        Self {
            saved: RefCell::new(transactions),
            ..Self::default()
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    pub(crate) fn saved(&self) -> Vec<Transaction> {
        self.saved.borrow().clone()
    }

    pub(crate) fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl TransactionStore for MemoryStore {
    fn load(&self) -> Result<Vec<Transaction>, StoreError> {
        Ok(self.saved.borrow().clone())
    }

    fn save(&self, transactions: &[Transaction]) -> Result<(), StoreError> {
        self.saves.set(self.saves.get() + 1);
        if self.fail_saves {
            return Err(StoreError::Write {
                path: PathBuf::from("<memory>"),
                source: io::Error::other("disk full"),
            });
        }
        *self.saved.borrow_mut() = transactions.to_vec();
        Ok(())
    }
}
