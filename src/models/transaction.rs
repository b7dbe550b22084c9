use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Income,
    Expense,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }

    /// Anything other than the exact `Income` literal is read back as an expense.
    pub fn parse(s: &str) -> Self {
        match s {
            "Income" => Self::Income,
            _ => Self::Expense,
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub category: String,
    pub amount: Decimal,
    pub kind: Kind,
    /// Format: "YYYY-MM-DD" by convention, never validated.
    pub date: String,
}

impl Transaction {
    pub fn new(category: String, amount: Decimal, kind: Kind, date: String) -> Self {
        Self {
            category,
            amount,
            kind,
            date,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == Kind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == Kind::Expense
    }
}
