mod budget;
mod report;
mod transaction;

pub use budget::BudgetStatus;
pub use report::{ReportRow, Summary};
pub use transaction::{Kind, Transaction};

#[cfg(test)]
mod tests;
