//! Transaction models for CSV parsing and internal representation.

use crate::date::MonthDay;
use crate::decimal::Decimal2;
use crate::error::{ParseError, Result, SummaryError};
use csv::{ReaderBuilder, Trim};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Read;
use std::str::FromStr;

/// Raw transaction record as read from CSV.
///
/// All three columns are kept as text; validation happens in [`TransactionRecord::parse`].
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionRecord {
    /// Opaque transaction identifier, unique within one file
    #[serde(rename = "Id")]
    pub id: String,

    /// Month and day, `MM/DD`
    #[serde(rename = "Date")]
    pub date: String,

    /// Signed decimal amount; negative for debits
    #[serde(rename = "Transaction")]
    pub amount: String,
}

impl TransactionRecord {
    /// Parses the raw CSV record into a typed transaction.
    pub fn parse(&self) -> std::result::Result<Transaction, ParseError> {
        Transaction::parse(&self.id, &self.date, &self.amount)
    }
}

/// Whether money came in or went out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TxType {
    /// Amount is zero or positive.
    Credit,

    /// Amount is negative.
    Debit,
}

impl TxType {
    /// Derives the type from a quantized amount. Zero is a credit.
    pub fn of(amount: Decimal2) -> Self {
        if amount.is_negative() {
            TxType::Debit
        } else {
            TxType::Credit
        }
    }

    /// Lowercase plural, e.g. `"credits"`.
    pub fn plural(&self) -> &'static str {
        match self {
            TxType::Credit => "credits",
            TxType::Debit => "debits",
        }
    }

    /// Label used when storing the transaction.
    pub fn label(&self) -> &'static str {
        match self {
            TxType::Credit => "CREDIT",
            TxType::Debit => "DEBIT",
        }
    }
}

impl fmt::Display for TxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A parsed and validated transaction. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    id: String,
    date: MonthDay,
    amount: Decimal2,
    tx_type: TxType,
}

impl Transaction {
    /// Builds a transaction from an already quantized amount.
    pub fn new(id: impl Into<String>, date: MonthDay, amount: Decimal2) -> Self {
        Transaction {
            id: id.into(),
            date,
            amount,
            tx_type: TxType::of(amount),
        }
    }

    /// Parses the three textual fields of a record.
    ///
    /// The amount is quantized before the type is derived, so `-0.001`
    /// becomes a `0.00` credit.
    pub fn parse(
        raw_id: &str,
        raw_date: &str,
        raw_amount: &str,
    ) -> std::result::Result<Self, ParseError> {
        let id = raw_id.trim();
        if id.is_empty() {
            return Err(ParseError::MissingField("Id"));
        }
        if raw_date.trim().is_empty() {
            return Err(ParseError::MissingField("Date"));
        }
        if raw_amount.trim().is_empty() {
            return Err(ParseError::MissingField("Transaction"));
        }

        let date = MonthDay::from_str(raw_date)?;
        let amount = Decimal2::from_str(raw_amount)?;
        Ok(Transaction::new(id, date, amount))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn date(&self) -> MonthDay {
        self.date
    }

    pub fn amount(&self) -> Decimal2 {
        self.amount
    }

    pub fn tx_type(&self) -> TxType {
        self.tx_type
    }
}

/// Reads every record of a transaction CSV.
///
/// The first malformed row aborts the read; no partial batch is returned.
pub fn read_transactions<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let mut transactions = Vec::new();
    for (row_idx, result) in csv_reader.deserialize::<TransactionRecord>().enumerate() {
        let row = row_idx + 2; // 1-indexed, accounting for header row

        let record = result?;
        let tx = record
            .parse()
            .map_err(|source| SummaryError::Parse { row, source })?;
        debug!("Row {}: {} {} {}", row, tx.id(), tx.date(), tx.amount());
        transactions.push(tx);
    }

    Ok(transactions)
}
