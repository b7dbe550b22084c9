use anyhow::Result;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::Config;
use crate::ledger::Ledger;
use crate::store::TransactionStore;
use crate::ui::theme::Theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn as_cli<S: TransactionStore>(
    args: &[String],
    config: &Config,
    ledger: &Ledger<S>,
) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_command(args, config, ledger, &mut out)
}

fn run_command<S: TransactionStore>(
    args: &[String],
    config: &Config,
    ledger: &Ledger<S>,
    out: &mut impl Write,
) -> Result<()> {
    let theme = Theme::new(config.styled());
    match args[1].as_str() {
        "summary" | "s" => cli_summary(ledger, theme, out),
        "list" | "ls" => cli_list(ledger, out),
        "report" => cli_report(&args[2..], config, ledger, out),
        "config" => cli_config(config, out),
        "--help" | "-h" | "help" => print_usage(out),
        "--version" | "-V" | "version" => {
            writeln!(out, "finledger {}", env!("CARGO_PKG_VERSION"))?;
            Ok(())
        }
        other => {
            print_usage(out)?;
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage(out: &mut impl Write) -> Result<()> {
    writeln!(out, "finledger — personal finance ledger")?;
    writeln!(out)?;
    writeln!(out, "Usage: finledger [command]")?;
    writeln!(out)?;
    writeln!(out, "Commands:")?;
    writeln!(out, "  (none)                        Launch the interactive menu")?;
    writeln!(out, "  summary, s                    Print income, expense and net savings")?;
    writeln!(out, "  list, ls                      List all transactions")?;
    writeln!(out, "  report [path]                 Write the CSV report")?;
    writeln!(out, "  config                        Show data directory and files")?;
    writeln!(out, "  --help, -h                    Show this help")?;
    writeln!(out, "  --version, -V                 Show version")?;
    Ok(())
}

fn cli_summary<S: TransactionStore>(
    ledger: &Ledger<S>,
    theme: Theme,
    out: &mut impl Write,
) -> Result<()> {
    let summary = ledger.summary()?;
    let net = format_amount(summary.net_savings);

    writeln!(out, "{}", theme.heading("Financial Summary"))?;
    writeln!(out, "{}", "─".repeat(40))?;
    writeln!(
        out,
        "  Total Income:   {}",
        theme.income(&format_amount(summary.total_income))
    )?;
    writeln!(
        out,
        "  Total Expense:  {}",
        theme.expense(&format_amount(summary.total_expense))
    )?;
    writeln!(out, "  Net Savings:    {}", theme.signed(summary.net_savings, &net))?;
    writeln!(out, "  Transactions:   {}", ledger.all().len())?;
    Ok(())
}

fn cli_list<S: TransactionStore>(ledger: &Ledger<S>, out: &mut impl Write) -> Result<()> {
    let rows = ledger.report_rows();
    if rows.is_empty() {
        writeln!(out, "No transactions")?;
        return Ok(());
    }

    writeln!(out, "{:<12} {:<24} {:<8} {:>14}", "Date", "Category", "Type", "Amount")?;
    writeln!(out, "{}", "─".repeat(61))?;
    for row in &rows {
        writeln!(
            out,
            "{:<12} {:<24} {:<8} {:>14}",
            truncate(&row.date, 12),
            truncate(&row.category, 24),
            row.kind_label,
            format_amount(row.amount),
        )?;
    }
    Ok(())
}

fn cli_report<S: TransactionStore>(
    args: &[String],
    config: &Config,
    ledger: &Ledger<S>,
    out: &mut impl Write,
) -> Result<()> {
    let path = args
        .first()
        .filter(|a| !a.starts_with('-'))
        .map(|a| PathBuf::from(shellexpand(a)))
        .unwrap_or_else(|| config.report_path());

    let count = crate::export::write_report(&path, &ledger.report_rows())?;
    writeln!(out, "Wrote {count} transactions to {}", path.display())?;
    Ok(())
}

fn cli_config(config: &Config, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Data directory: {}", config.data_dir().display())?;
    writeln!(out, "Transactions:   {}", config.transactions_path().display())?;
    writeln!(out, "Users:          {}", config.users_path().display())?;
    writeln!(out, "Report:         {}", config.report_path().display())?;
    Ok(())
}

fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
