use rust_decimal::Decimal;
use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::{StoreError, TransactionStore};
use crate::models::{Kind, ReportRow, Transaction};

/// Plain `category,amount,kind,date` lines with no header and no quoting.
/// A comma inside a field is not escaped, so such a record cannot be read back.
pub(crate) struct CsvFileStore {
    path: PathBuf,
}

impl CsvFileStore {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }
}

impl TransactionStore for CsvFileStore {
    fn load(&self) -> Result<Vec<Transaction>, StoreError> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StoreError::Open {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(file);

        let mut transactions = Vec::new();
        for result in rdr.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            if record.len() < 4 {
                return Err(StoreError::MissingFields {
                    line,
                    found: record.len(),
                });
            }
            let amount = parse_amount(&record[1]).ok_or_else(|| StoreError::InvalidAmount {
                line,
                value: record[1].to_string(),
            })?;
            transactions.push(Transaction::new(
                record[0].to_string(),
                amount,
                Kind::parse(&record[2]),
                record[3].to_string(),
            ));
        }
        Ok(transactions)
    }

    fn save(&self, transactions: &[Transaction]) -> Result<(), StoreError> {
        let file = File::create(&self.path).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .quote_style(csv::QuoteStyle::Never)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(file);

        for txn in transactions {
            wtr.write_record(ReportRow::from(txn).fields())?;
        }
        wtr.flush().map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// Accepts plain decimals ("200", "200.0") and exponent forms ("2E2").
fn parse_amount(s: &str) -> Option<Decimal> {
    let trimmed = s.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}
