//! Persistence of individual transactions.

use crate::date::MonthDay;
use crate::decimal::Decimal2;
use crate::error::Result;
use crate::transaction::{Transaction, TxType};
use csv::WriterBuilder;
use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// The shape a transaction is stored in, keyed by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredTransaction {
    pub id: String,
    pub amount: Decimal2,
    pub date: MonthDay,
    #[serde(rename = "type")]
    pub tx_type: TxType,
}

impl From<&Transaction> for StoredTransaction {
    fn from(tx: &Transaction) -> Self {
        StoredTransaction {
            id: tx.id().to_string(),
            amount: tx.amount(),
            date: tx.date(),
            tx_type: tx.tx_type(),
        }
    }
}

/// Destination for stored transactions.
pub trait TransactionStore {
    /// Stores one record under its id.
    fn put(&mut self, record: &StoredTransaction) -> Result<()>;

    /// Flushes buffered records. No-op by default.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<T: TransactionStore + ?Sized> TransactionStore for Box<T> {
    fn put(&mut self, record: &StoredTransaction) -> Result<()> {
        (**self).put(record)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}

/// Stores every transaction of a batch, in order.
pub fn save_transactions(
    store: &mut dyn TransactionStore,
    transactions: &[Transaction],
) -> Result<()> {
    for tx in transactions {
        store.put(&StoredTransaction::from(tx))?;
    }
    store.flush()?;
    debug!("Stored {} transactions", transactions.len());
    Ok(())
}

/// In-memory store keyed by transaction id.
#[derive(Debug, Default)]
pub struct MemoryTransactionStore {
    records: BTreeMap<String, StoredTransaction>,
}

impl MemoryTransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&StoredTransaction> {
        self.records.get(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl TransactionStore for MemoryTransactionStore {
    fn put(&mut self, record: &StoredTransaction) -> Result<()> {
        self.records.insert(record.id.clone(), record.clone());
        Ok(())
    }
}

/// Appends stored transactions as CSV rows: `id,amount,date,type`.
///
/// CSV is append-only, so a repeated id shows up as a later row; readers
/// keep the last row per id.
pub struct CsvTransactionStore<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvTransactionStore<W> {
    /// Wraps a writer, emitting the header row first.
    pub fn from_writer(writer: W) -> Self {
        CsvTransactionStore {
            writer: csv::Writer::from_writer(writer),
        }
    }
}

impl CsvTransactionStore<File> {
    /// Opens `path` for appending. The header is written only for a new or empty file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let is_empty = file.metadata()?.len() == 0;
        let writer = WriterBuilder::new().has_headers(is_empty).from_writer(file);
        Ok(CsvTransactionStore { writer })
    }
}

impl<W: Write> TransactionStore for CsvTransactionStore<W> {
    fn put(&mut self, record: &StoredTransaction) -> Result<()> {
        self.writer.serialize(record)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::parse("0", "7/15", "+60.5").unwrap(),
            Transaction::parse("1", "7/28", "-10.3").unwrap(),
        ]
    }

    #[test]
    fn test_memory_store_keyed_by_id() {
        let mut store = MemoryTransactionStore::new();
        save_transactions(&mut store, &sample()).unwrap();

        assert_eq!(store.len(), 2);
        let stored = store.get("1").unwrap();
        assert_eq!(stored.amount, Decimal2::from_str("-10.30").unwrap());
        assert_eq!(stored.tx_type, TxType::Debit);
        assert_eq!(stored.date, MonthDay::new(7, 28).unwrap());
    }

    #[test]
    fn test_memory_store_last_write_wins() {
        let mut store = MemoryTransactionStore::new();
        save_transactions(
            &mut store,
            &[
                Transaction::parse("7", "1/1", "1").unwrap(),
                Transaction::parse("7", "1/2", "-2").unwrap(),
            ],
        )
        .unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("7").unwrap().tx_type, TxType::Debit);
    }

    #[test]
    fn test_csv_store_output() {
        let mut buffer = Vec::new();
        {
            let mut store = CsvTransactionStore::from_writer(&mut buffer);
            save_transactions(&mut store, &sample()).unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(
            output,
            "id,amount,date,type\n0,60.50,--07-15,CREDIT\n1,-10.30,--07-28,DEBIT\n"
        );
    }

    #[test]
    fn test_csv_store_appends_without_repeating_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transactions.csv");

        for _ in 0..2 {
            let mut store = CsvTransactionStore::open(&path).unwrap();
            save_transactions(&mut store, &sample()).unwrap();
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.matches("id,amount,date,type").count(), 1);
        assert_eq!(contents.lines().count(), 5);
    }
}
