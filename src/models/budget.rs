use rust_decimal::Decimal;

/// One line of the budget status listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetStatus {
    pub category: String,
    pub limit: Decimal,
    pub spent: Decimal,
    pub remaining: Decimal,
}

impl BudgetStatus {
    /// `None` when `limit - spent` is outside the `Decimal` range.
    pub fn checked(category: String, limit: Decimal, spent: Decimal) -> Option<Self> {
        let remaining = limit.checked_sub(spent)?;
        Some(Self {
            category,
            limit,
            spent,
            remaining,
        })
    }

    pub fn is_over_budget(&self) -> bool {
        self.remaining < Decimal::ZERO
    }
}
