use anyhow::Result;
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;
use std::path::PathBuf;

use crate::config::Config;
use crate::ledger::Ledger;
use crate::models::Kind;
use crate::store::TransactionStore;
use crate::ui::theme::Theme;
use crate::ui::util::{format_amount, parse_amount};
use crate::users::{Registration, UserStore};

type Flow = ControlFlow<()>;

const NO_COMMAS: &str = "Commas are not allowed";

/// Unwraps a prompt answer, ending the session when input runs out.
macro_rules! or_quit {
    ($answer:expr) => {
        match $answer? {
            Some(value) => value,
            None => return Ok(ControlFlow::Break(())),
        }
    };
}

pub(crate) fn as_menu<S: TransactionStore>(config: &Config, ledger: &mut Ledger<S>) -> Result<()> {
    let mut users = UserStore::load(config.users_path())?;
    tracing::info!(count = users.len(), path = %users.path().display(), "loaded users");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(
        stdin.lock(),
        stdout.lock(),
        ledger,
        &mut users,
        config.report_path(),
        Theme::new(config.styled()),
    );
    menu.run()
}

pub(crate) struct Menu<'a, R, W, S> {
    input: R,
    out: W,
    ledger: &'a mut Ledger<S>,
    users: &'a mut UserStore,
    report_path: PathBuf,
    theme: Theme,
}

impl<'a, R: BufRead, W: Write, S: TransactionStore> Menu<'a, R, W, S> {
    pub(crate) fn new(
        input: R,
        out: W,
        ledger: &'a mut Ledger<S>,
        users: &'a mut UserStore,
        report_path: PathBuf,
        theme: Theme,
    ) -> Self {
        Self {
            input,
            out,
            ledger,
            users,
            report_path,
            theme,
        }
    }

    pub(crate) fn run(&mut self) -> Result<()> {
        writeln!(
            self.out,
            "{}",
            self.theme.heading("Welcome to the Personal Finance Manager!")
        )?;
        loop {
            writeln!(self.out)?;
            writeln!(self.out, "1. Login")?;
            writeln!(self.out, "2. Register")?;
            writeln!(self.out, "3. Exit")?;

            let flow = match self.choice(1, 3)? {
                Some(1) => self.login()?,
                Some(2) => self.register()?,
                _ => Flow::Break(()),
            };
            if flow.is_break() {
                break;
            }
        }
        writeln!(self.out, "Goodbye!")?;
        self.out.flush()?;
        Ok(())
    }

    // ── Accounts ──────────────────────────────────────────────

    fn login(&mut self) -> Result<Flow> {
        let username = or_quit!(self.prompt_text("Enter username: "));
        let password = or_quit!(self.prompt_text("Enter password: "));

        if self.users.verify(&username, &password) {
            writeln!(self.out, "Login successful!")?;
            tracing::info!(%username, "login");
            self.user_menu(&username)
        } else {
            writeln!(self.out, "Invalid credentials.")?;
            Ok(Flow::Continue(()))
        }
    }

    fn register(&mut self) -> Result<Flow> {
        let username = or_quit!(self.prompt_text("Enter username: "));
        let password = or_quit!(self.prompt_text("Enter password: "));

        match self.users.register(&username, &password) {
            Ok(Registration::Created) => writeln!(self.out, "Registration successful!")?,
            Ok(Registration::AlreadyExists) => writeln!(self.out, "Username already exists.")?,
            Err(e) => {
                tracing::warn!("failed to save users: {e:#}");
                writeln!(self.out, "Error saving user data.")?;
                writeln!(self.out, "Registration successful!")?;
            }
        }
        Ok(Flow::Continue(()))
    }

    fn user_menu(&mut self, username: &str) -> Result<Flow> {
        loop {
            writeln!(self.out)?;
            writeln!(self.out, "{}", self.theme.heading(&format!("Welcome, {username}!")))?;
            writeln!(self.out, "1. Add Income")?;
            writeln!(self.out, "2. Add Expense")?;
            writeln!(self.out, "3. Set Monthly Budget")?;
            writeln!(self.out, "4. Show Budget Status")?;
            writeln!(self.out, "5. Show Financial Summary")?;
            writeln!(self.out, "6. Generate Report (CSV)")?;
            writeln!(self.out, "7. Logout")?;

            let flow = match or_quit!(self.choice(1, 7)) {
                1 => self.add_transaction(Kind::Income)?,
                2 => self.add_transaction(Kind::Expense)?,
                3 => self.set_budget()?,
                4 => self.show_budget_status()?,
                5 => self.show_summary()?,
                6 => self.generate_report()?,
                _ => {
                    writeln!(self.out, "Logging out...")?;
                    return Ok(Flow::Continue(()));
                }
            };
            if flow.is_break() {
                return Ok(flow);
            }
        }
    }

    // ── Ledger actions ────────────────────────────────────────

    fn add_transaction(&mut self, kind: Kind) -> Result<Flow> {
        let noun = kind.as_str().to_lowercase();
        let category = or_quit!(self.prompt_text(&format!("Enter {noun} category: ")));
        let amount = or_quit!(self.prompt_amount(&format!("Enter {noun} amount: ")));
        let date = or_quit!(self.prompt_date());

        let appended = match self.ledger.append(category, amount, kind, date) {
            Ok(appended) => appended,
            Err(e) => {
                writeln!(self.out, "Error: {e}. {kind} not added.")?;
                return Ok(Flow::Continue(()));
            }
        };
        if appended.save_error.is_some() {
            writeln!(self.out, "Error saving transactions.")?;
        }
        writeln!(self.out, "{} added successfully!", appended.transaction.kind)?;
        Ok(Flow::Continue(()))
    }

    fn set_budget(&mut self) -> Result<Flow> {
        let category = or_quit!(self.prompt_text("Enter budget category: "));
        let amount = or_quit!(self.prompt_amount("Enter budget amount: "));
        self.ledger.set_limit(&category, amount);
        writeln!(self.out, "Budget set successfully!")?;
        Ok(Flow::Continue(()))
    }

    fn show_budget_status(&mut self) -> Result<Flow> {
        let status = match self.ledger.budget_status() {
            Ok(status) => status,
            Err(e) => {
                writeln!(self.out, "Error: {e}.")?;
                return Ok(Flow::Continue(()));
            }
        };
        if status.is_empty() {
            writeln!(self.out, "{}", self.theme.dim("No budgets set."))?;
        }
        for entry in &status {
            let remaining = if entry.is_over_budget() {
                format!("{} (over budget)", format_amount(entry.remaining))
            } else {
                format_amount(entry.remaining)
            };
            writeln!(self.out, "Category: {}", entry.category)?;
            writeln!(self.out, "Budget: {}", format_amount(entry.limit))?;
            writeln!(self.out, "Spent: {}", format_amount(entry.spent))?;
            writeln!(
                self.out,
                "Remaining: {}",
                self.theme.signed(entry.remaining, &remaining)
            )?;
            writeln!(self.out)?;
        }
        Ok(Flow::Continue(()))
    }

    fn show_summary(&mut self) -> Result<Flow> {
        let summary = match self.ledger.summary() {
            Ok(summary) => summary,
            Err(e) => {
                writeln!(self.out, "Error: {e}.")?;
                return Ok(Flow::Continue(()));
            }
        };
        let net = format_amount(summary.net_savings);
        writeln!(
            self.out,
            "Total Income: {}",
            self.theme.income(&format_amount(summary.total_income))
        )?;
        writeln!(
            self.out,
            "Total Expense: {}",
            self.theme.expense(&format_amount(summary.total_expense))
        )?;
        writeln!(
            self.out,
            "Net Savings: {}",
            self.theme.signed(summary.net_savings, &net)
        )?;
        Ok(Flow::Continue(()))
    }

    fn generate_report(&mut self) -> Result<Flow> {
        match crate::export::write_report(&self.report_path, &self.ledger.report_rows()) {
            Ok(_) => writeln!(self.out, "Report generated: {}", self.report_path.display())?,
            Err(e) => {
                tracing::warn!("failed to generate report: {e:#}");
                writeln!(self.out, "Error generating report.")?;
            }
        }
        Ok(Flow::Continue(()))
    }

    // ── Input ─────────────────────────────────────────────────

    /// `None` once input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>> {
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn choice(&mut self, min: usize, max: usize) -> Result<Option<usize>> {
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.parse::<usize>() {
                Ok(n) if (min..=max).contains(&n) => return Ok(Some(n)),
                _ => writeln!(self.out, "Please select a valid option")?,
            }
        }
    }

    /// Every text answer ends up as a field of an unquoted comma-separated
    /// record, so commas are refused along with blanks.
    fn prompt_text(&mut self, label: &str) -> Result<Option<String>> {
        loop {
            writeln!(self.out, "{label}")?;
            match self.read_line()? {
                Some(text) if text.is_empty() => continue,
                Some(text) if text.contains(',') => writeln!(self.out, "{NO_COMMAS}")?,
                answer => return Ok(answer),
            }
        }
    }

    fn prompt_amount(&mut self, label: &str) -> Result<Option<Decimal>> {
        loop {
            writeln!(self.out, "{label}")?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse_amount(&line) {
                Some(amount) => return Ok(Some(amount)),
                None => writeln!(self.out, "Please enter a valid amount")?,
            }
        }
    }

    /// A blank answer means today.
    fn prompt_date(&mut self) -> Result<Option<String>> {
        loop {
            writeln!(self.out, "Enter date (YYYY-MM-DD, blank for today): ")?;
            match self.read_line()? {
                Some(date) if date.is_empty() => {
                    return Ok(Some(chrono::Local::now().format("%Y-%m-%d").to_string()))
                }
                Some(date) if date.contains(',') => writeln!(self.out, "{NO_COMMAS}")?,
                answer => return Ok(answer),
            }
        }
    }
}

#[cfg(test)]
#[path = "menu_tests.rs"]
mod tests;
