mod config;
mod export;
mod ledger;
mod logging;
mod models;
mod run;
mod store;
mod ui;
mod users;

use anyhow::{Context, Result};

fn main() -> Result<()> {
    logging::init();

    let args: Vec<String> = std::env::args().collect();
    let config = config::Config::from_env()?;
    let store = store::CsvFileStore::new(config.transactions_path());
    let transactions_path = store.path().to_path_buf();
    let mut ledger = ledger::Ledger::open(store).with_context(|| {
        format!(
            "Failed to load transactions from {}",
            transactions_path.display()
        )
    })?;

    match run::Mode::from_args(&args) {
        run::Mode::Menu => run::as_menu(&config, &mut ledger),
        run::Mode::Cli => run::as_cli(&args, &config, &ledger),
    }
}
