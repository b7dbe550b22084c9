use rust_decimal::Decimal;

use super::LedgerError;
use crate::models::{ReportRow, Summary, Transaction};

pub(crate) fn summary(transactions: &[Transaction]) -> Result<Summary, LedgerError> {
    let (income, expense) = transactions
        .iter()
        .try_fold((Decimal::ZERO, Decimal::ZERO), |(income, expense), txn| {
            if txn.is_income() {
                Some((income.checked_add(txn.amount)?, expense))
            } else {
                Some((income, expense.checked_add(txn.amount)?))
            }
        })
        .ok_or(LedgerError::TotalsOverflow)?;
    Summary::checked(income, expense).ok_or(LedgerError::TotalsOverflow)
}

pub(crate) fn report_rows(transactions: &[Transaction]) -> Vec<ReportRow> {
    transactions.iter().map(ReportRow::from).collect()
}
