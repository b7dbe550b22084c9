//! Durable storage for the transaction history.
//!
//! The ledger only ever talks to a [`TransactionStore`]; the flat-file format
//! lives entirely in [`CsvFileStore`].

mod csv_file;
#[cfg(test)]
pub(crate) mod memory;

use std::path::PathBuf;

use thiserror::Error;

use crate::models::Transaction;

pub(crate) use csv_file::CsvFileStore;

#[derive(Debug, Error)]
pub(crate) enum StoreError {
    #[error("could not open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("transaction file error: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: expected 4 fields, found {found}")]
    MissingFields { line: u64, found: usize },
    #[error("line {line}: invalid amount '{value}'")]
    InvalidAmount { line: u64, value: String },
}

pub(crate) trait TransactionStore {
    /// Returns every persisted transaction in file order. No data yet is an
    /// empty list, not an error.
    fn load(&self) -> Result<Vec<Transaction>, StoreError>;

    /// Replaces the persisted history with `transactions`.
    fn save(&self, transactions: &[Transaction]) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests;
