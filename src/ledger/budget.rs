use rust_decimal::Decimal;
use std::collections::BTreeMap;

use super::LedgerError;
use crate::models::BudgetStatus;

/// Per-category limits and the spending recorded against them this session.
///
/// Limits and spending are independent maps over the same category names: a
/// category can have spending without a limit and vice versa.
#[derive(Debug, Default)]
pub(crate) struct BudgetTracker {
    limits: BTreeMap<String, Decimal>,
    spending: BTreeMap<String, Decimal>,
}

impl BudgetTracker {
    /// Last write wins.
    pub(crate) fn set_limit(&mut self, category: &str, amount: Decimal) {
        self.limits.insert(category.to_string(), amount);
    }

    /// Leaves the tracker untouched when the new total would overflow.
    pub(crate) fn record_expense(&mut self, category: &str, amount: Decimal) -> Result<(), LedgerError> {
        let spent = self
            .spent(category)
            .checked_add(amount)
            .ok_or_else(|| LedgerError::SpendingOverflow {
                category: category.to_string(),
            })?;
        self.spending.insert(category.to_string(), spent);
        Ok(())
    }

    pub(crate) fn limit(&self, category: &str) -> Option<Decimal> {
        self.limits.get(category).copied()
    }

    pub(crate) fn spent(&self, category: &str) -> Decimal {
        self.spending.get(category).copied().unwrap_or_default()
    }

    /// `Ok(None)` when no limit is set for `category`.
    pub(crate) fn remaining(&self, category: &str) -> Result<Option<Decimal>, LedgerError> {
        let Some(limit) = self.limit(category) else {
            return Ok(None);
        };
        limit
            .checked_sub(self.spent(category))
            .map(Some)
            .ok_or_else(|| LedgerError::RemainingOverflow {
                category: category.to_string(),
            })
    }

    /// Budgeted categories only, ascending by name.
    pub(crate) fn status(&self) -> Result<Vec<BudgetStatus>, LedgerError> {
        self.limits
            .iter()
            .map(|(category, &limit)| {
                BudgetStatus::checked(category.clone(), limit, self.spent(category)).ok_or_else(|| {
                    LedgerError::RemainingOverflow {
                        category: category.clone(),
                    }
                })
            })
            .collect()
    }
}
