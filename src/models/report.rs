use rust_decimal::Decimal;

use super::Transaction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub net_savings: Decimal,
}

impl Summary {
    /// `None` when the net savings are outside the `Decimal` range.
    pub fn checked(total_income: Decimal, total_expense: Decimal) -> Option<Self> {
        let net_savings = total_income.checked_sub(total_expense)?;
        Some(Self {
            total_income,
            total_expense,
            net_savings,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub category: String,
    pub amount: Decimal,
    pub kind_label: &'static str,
    pub date: String,
}

impl From<&Transaction> for ReportRow {
    fn from(txn: &Transaction) -> Self {
        Self {
            category: txn.category.clone(),
            amount: txn.amount,
            kind_label: txn.kind.as_str(),
            date: txn.date.clone(),
        }
    }
}

impl ReportRow {
    /// Fields in persisted/exported column order.
    pub fn fields(&self) -> [String; 4] {
        [
            self.category.clone(),
            self.amount.to_string(),
            self.kind_label.to_string(),
            self.date.clone(),
        ]
    }
}
