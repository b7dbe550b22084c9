#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

// ── Transaction ───────────────────────────────────────────────

fn make_txn(kind: Kind, amount: Decimal) -> Transaction {
    Transaction::new("Food".into(), amount, kind, "2024-01-15".into())
}

#[test]
fn test_income() {
    let txn = make_txn(Kind::Income, dec!(100.00));
    assert!(txn.is_income());
    assert!(!txn.is_expense());
}

#[test]
fn test_expense() {
    let txn = make_txn(Kind::Expense, dec!(50.00));
    assert!(!txn.is_income());
    assert!(txn.is_expense());
}

#[test]
fn test_kind_does_not_follow_sign() {
    // A negative income is still income; amounts are never validated.
    let txn = make_txn(Kind::Income, dec!(-20));
    assert!(txn.is_income());
    assert_eq!(txn.amount, dec!(-20));
}

// ── Kind ──────────────────────────────────────────────────────

#[test]
fn test_kind_as_str() {
    assert_eq!(Kind::Income.as_str(), "Income");
    assert_eq!(Kind::Expense.as_str(), "Expense");
}

#[test]
fn test_kind_parse() {
    assert_eq!(Kind::parse("Income"), Kind::Income);
    assert_eq!(Kind::parse("Expense"), Kind::Expense);
}

#[test]
fn test_kind_parse_is_case_sensitive() {
    assert_eq!(Kind::parse("income"), Kind::Expense);
    assert_eq!(Kind::parse(""), Kind::Expense);
}

#[test]
fn test_kind_display() {
    assert_eq!(format!("{}", Kind::Income), "Income");
    assert_eq!(format!("{}", Kind::Expense), "Expense");
}

// ── BudgetStatus ──────────────────────────────────────────────

#[test]
fn test_budget_status_remaining() {
    let status = BudgetStatus::checked("Food".into(), dec!(300), dec!(200)).unwrap();
    assert_eq!(status.remaining, dec!(100));
    assert!(!status.is_over_budget());
}

#[test]
fn test_budget_status_over_budget_not_clamped() {
    let status = BudgetStatus::checked("Food".into(), dec!(100), dec!(150.50)).unwrap();
    assert_eq!(status.remaining, dec!(-50.50));
    assert!(status.is_over_budget());
}

#[test]
fn test_budget_status_remaining_out_of_range() {
    assert!(BudgetStatus::checked("Food".into(), Decimal::MAX, dec!(-1)).is_none());
    assert!(BudgetStatus::checked("Food".into(), Decimal::MAX, Decimal::MAX).is_some());
}

// ── Summary ───────────────────────────────────────────────────

#[test]
fn test_summary_net_savings() {
    let summary = Summary::checked(dec!(1000), dec!(200)).unwrap();
    assert_eq!(summary.net_savings, dec!(800));
}

#[test]
fn test_summary_net_out_of_range() {
    assert!(Summary::checked(Decimal::MAX, dec!(-1)).is_none());
    assert!(Summary::checked(Decimal::MIN, dec!(1)).is_none());
}

#[test]
fn test_summary_default_is_zero() {
    let summary = Summary::default();
    assert_eq!(summary.total_income, Decimal::ZERO);
    assert_eq!(summary.total_expense, Decimal::ZERO);
    assert_eq!(summary.net_savings, Decimal::ZERO);
}

// ── ReportRow ─────────────────────────────────────────────────

#[test]
fn test_report_row_from_transaction() {
    let txn = make_txn(Kind::Expense, dec!(12.50));
    let row = ReportRow::from(&txn);
    assert_eq!(row.category, "Food");
    assert_eq!(row.amount, dec!(12.50));
    assert_eq!(row.kind_label, "Expense");
    assert_eq!(row.date, "2024-01-15");
}

#[test]
fn test_report_row_fields_order() {
    let txn = Transaction::new("Salary".into(), dec!(1000), Kind::Income, "2024-01-01".into());
    let row = ReportRow::from(&txn);
    assert_eq!(row.fields(), ["Salary", "1000", "Income", "2024-01-01"].map(String::from));
}
