//! # Account Summary
//!
//! Aggregates a per-account transaction file (`Id,Date,Transaction`) into a
//! summary: total balance, average credit and debit amounts, and the number
//! of transactions per month.
//!
//! ## Design Principles
//!
//! - **Truncating fixed-point arithmetic**: 2 decimal places via `rust_decimal`,
//!   always truncated toward zero, applied to every amount and running total
//! - **All-or-nothing batches**: one malformed record rejects the whole file
//! - **Year-less dates**: months are grouped without inferring a year
//! - **Pluggable collaborators**: storage and delivery sit behind traits
//!
//! ## Example
//!
//! ```
//! use account_summary::{read_transactions, Summary};
//! use std::io::Cursor;
//!
//! let csv = "Id,Date,Transaction\n0,7/15,+60.5\n1,7/28,-10.3\n";
//! let transactions = read_transactions(Cursor::new(csv)).unwrap();
//! let summary = Summary::build(&transactions).unwrap();
//! assert_eq!(summary.balance().to_string(), "50.20");
//! ```

pub mod aggregate;
pub mod config;
pub mod date;
pub mod decimal;
pub mod error;
pub mod notify;
pub mod pipeline;
pub mod report;
pub mod store;
pub mod summary;
pub mod transaction;

pub use aggregate::TypeAggregator;
pub use config::Config;
pub use date::MonthDay;
pub use decimal::Decimal2;
pub use error::{ParseError, Result, SummaryError};
pub use notify::{Message, Notifier, OutboxNotifier, WriterNotifier};
pub use pipeline::SummaryPipeline;
pub use report::{render_html, render_text};
pub use store::{
    CsvTransactionStore, MemoryTransactionStore, StoredTransaction, TransactionStore,
};
pub use summary::Summary;
pub use transaction::{read_transactions, Transaction, TransactionRecord, TxType};
