mod budget;
mod report;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{BudgetStatus, Kind, ReportRow, Summary, Transaction};
use crate::store::{StoreError, TransactionStore};

use budget::BudgetTracker;

/// Amounts are never range-checked on input, so sums can leave the `Decimal`
/// range. Each overflow is reported instead of computed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub(crate) enum LedgerError {
    #[error("spending for '{category}' is too large to record")]
    SpendingOverflow { category: String },
    #[error("remaining budget for '{category}' is too large to show")]
    RemainingOverflow { category: String },
    #[error("income and expense totals are too large to show")]
    TotalsOverflow,
}

/// The outcome of an append. The transaction is in the ledger either way;
/// `save_error` is set when persisting the history failed.
#[derive(Debug)]
pub(crate) struct Appended {
    pub(crate) transaction: Transaction,
    pub(crate) save_error: Option<StoreError>,
}

/// The process-wide ledger: transactions, budgets and the store they are
/// saved to. Owned by the entry point and handed to whichever shell runs.
pub(crate) struct Ledger<S> {
    transactions: Vec<Transaction>,
    budgets: BudgetTracker,
    store: S,
}

impl<S: TransactionStore> Ledger<S> {
    /// Loads the persisted history. Spending totals start empty regardless of
    /// what was loaded.
    pub(crate) fn open(store: S) -> Result<Self, StoreError> {
        let transactions = store.load()?;
        tracing::info!(count = transactions.len(), "loaded transactions");
        let mut ledger = Self {
            transactions: Vec::new(),
            budgets: BudgetTracker::default(),
            store,
        };
        ledger.load(transactions);
        Ok(ledger)
    }

    /// Replaces the transaction list wholesale without touching budgets or
    /// spending.
    pub(crate) fn load(&mut self, transactions: Vec<Transaction>) {
        self.transactions = transactions;
    }

    pub(crate) fn append(
        &mut self,
        category: String,
        amount: Decimal,
        kind: Kind,
        date: String,
    ) -> Result<Appended, LedgerError> {
        let txn = Transaction::new(category, amount, kind, date);
        tracing::debug!(category = %txn.category, amount = %txn.amount, kind = %txn.kind, "append");

        // Rejected before anything is pushed or saved.
        if txn.is_expense() {
            self.budgets.record_expense(&txn.category, txn.amount)?;
        }
        self.transactions.push(txn.clone());

        let save_error = self.store.save(&self.transactions).err();
        if let Some(e) = &save_error {
            tracing::warn!(error = %e, "failed to save transactions");
        }
        Ok(Appended {
            transaction: txn,
            save_error,
        })
    }

    pub(crate) fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub(crate) fn set_limit(&mut self, category: &str, amount: Decimal) {
        tracing::debug!(category, %amount, "set budget");
        self.budgets.set_limit(category, amount);
    }

    pub(crate) fn remaining(&self, category: &str) -> Result<Option<Decimal>, LedgerError> {
        self.budgets.remaining(category)
    }

    pub(crate) fn budget_status(&self) -> Result<Vec<BudgetStatus>, LedgerError> {
        self.budgets.status()
    }

    pub(crate) fn summary(&self) -> Result<Summary, LedgerError> {
        report::summary(&self.transactions)
    }

    pub(crate) fn report_rows(&self) -> Vec<ReportRow> {
        report::report_rows(&self.transactions)
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }
}
