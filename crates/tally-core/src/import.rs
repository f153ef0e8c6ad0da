//! Load transactions from CSV or JSON files
//!
//! JSON input is either an array of transactions or an object with a
//! `transactions` array (the request body shape of the optimize endpoint).
//!
//! CSV input needs a header row with `type`, `amount`, `category` and
//! `date` columns. `id` and `description` are optional; rows without an id
//! get `row-<n>`.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Transaction, TransactionType};

/// Read transactions from a file, picking the format from its extension
pub fn load_transactions(path: &Path) -> Result<Vec<Transaction>> {
    let file = std::fs::File::open(path)?;
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

    let transactions = if is_csv {
        parse_csv(file)?
    } else {
        parse_json(file)?
    };

    debug!(
        path = %path.display(),
        count = transactions.len(),
        "Loaded transactions"
    );
    Ok(transactions)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonInput {
    List(Vec<Transaction>),
    Wrapped { transactions: Vec<Transaction> },
}

/// Parse a JSON array or `{"transactions": [...]}` document
pub fn parse_json<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let input: JsonInput = serde_json::from_reader(reader)?;
    Ok(match input {
        JsonInput::List(transactions) => transactions,
        JsonInput::Wrapped { transactions } => transactions,
    })
}

/// Column positions resolved from the header row
struct Columns {
    id: Option<usize>,
    kind: usize,
    amount: usize,
    category: usize,
    description: Option<usize>,
    date: usize,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let index: HashMap<String, usize> = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.trim().to_lowercase(), i))
            .collect();

        let required = |name: &str| {
            index
                .get(name)
                .copied()
                .ok_or_else(|| Error::Import(format!("Missing column: {}", name)))
        };

        Ok(Self {
            id: index.get("id").copied(),
            kind: required("type")?,
            amount: required("amount")?,
            category: required("category")?,
            description: index.get("description").copied(),
            date: required("date")?,
        })
    }
}

/// Parse CSV with a header row into transactions
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns = Columns::from_headers(rdr.headers()?)?;
    let mut transactions = Vec::new();

    for (row, result) in rdr.records().enumerate() {
        let record = result?;
        let field = |i: usize, name: &str| {
            record
                .get(i)
                .ok_or_else(|| Error::Import(format!("Row {}: missing {}", row + 1, name)))
        };

        let transaction_type: TransactionType = field(columns.kind, "type")?
            .parse()
            .map_err(|e| Error::Import(format!("Row {}: {}", row + 1, e)))?;

        let amount = parse_amount(field(columns.amount, "amount")?)?;
        if amount < 0.0 {
            return Err(Error::Import(format!(
                "Row {}: amount must not be negative",
                row + 1
            )));
        }

        let id = columns
            .id
            .and_then(|i| record.get(i))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("row-{}", row + 1));

        transactions.push(Transaction {
            id,
            transaction_type,
            amount,
            category: field(columns.category, "category")?.trim().to_string(),
            description: columns
                .description
                .and_then(|i| record.get(i))
                .unwrap_or_default()
                .to_string(),
            date: parse_date(field(columns.date, "date")?)?,
        });
    }

    debug!("Parsed {} CSV transactions", transactions.len());
    Ok(transactions)
}

/// Parse a date string in various formats
fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();

    let formats = [
        "%Y-%m-%d", // 2024-06-01
        "%m/%d/%Y", // 06/01/2024
        "%m/%d/%y", // 06/01/24
        "%m-%d-%Y", // 06-01-2024
    ];

    for fmt in formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(date);
        }
    }

    Err(Error::Import(format!("Unable to parse date: {}", s)))
}

/// Parse an amount string, handling currency symbols and commas
fn parse_amount(s: &str) -> Result<f64> {
    let cleaned = s.trim().replace(['$', ',', ' '], "");

    cleaned
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| Error::Import(format!("Unable to parse amount: {}", s)))
}
