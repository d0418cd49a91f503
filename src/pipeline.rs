//! Per-file processing: read, store, summarize, notify.
//!
//! Each file is an independent batch. A malformed record or an overflowing
//! total aborts its batch before anything is stored or sent.

use crate::config::Config;
use crate::error::Result;
use crate::notify::{Message, Notifier, OutboxNotifier, WriterNotifier};
use crate::report::{render_html, render_text};
use crate::store::{
    save_transactions, CsvTransactionStore, MemoryTransactionStore, TransactionStore,
};
use crate::summary::Summary;
use crate::transaction::read_transactions;
use log::info;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Drives one batch at a time through a store and a notifier.
pub struct SummaryPipeline<S, N> {
    store: S,
    notifier: N,
    from_email: String,
    to_email: String,
    subject: String,
}

impl<S: TransactionStore, N: Notifier> SummaryPipeline<S, N> {
    pub fn new(config: &Config, store: S, notifier: N) -> Self {
        SummaryPipeline {
            store,
            notifier,
            from_email: config.from_email.clone(),
            to_email: config.to_email.clone(),
            subject: config.subject.clone(),
        }
    }

    /// Processes one batch read from `reader`. `source` names it in logs and messages.
    pub fn process<R: Read>(&mut self, source: &str, reader: R) -> Result<Summary> {
        info!("File to process: {}", source);

        let transactions = read_transactions(reader)?;
        info!("Total transactions: {}", transactions.len());

        let summary = Summary::build(&transactions)?;
        save_transactions(&mut self.store, &transactions)?;

        let message = Message {
            from: self.from_email.clone(),
            to: self.to_email.clone(),
            subject: self.subject.clone(),
            html_body: render_html(&summary),
            text_body: render_text(&summary),
        };
        self.notifier.send(source, &message)?;

        info!("{:?}", summary);
        info!("Success: {}", source);
        Ok(summary)
    }

    /// Processes the CSV file at `path`, named after its file stem.
    pub fn process_file<P: AsRef<Path>>(&mut self, path: P) -> Result<Summary> {
        let path = path.as_ref();
        let source = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        let file = File::open(path)?;
        self.process(&source, BufReader::new(file))
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl SummaryPipeline<Box<dyn TransactionStore>, Box<dyn Notifier>> {
    /// Builds the store and notifier selected by the configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let store: Box<dyn TransactionStore> = match &config.store_path {
            Some(path) => {
                info!("Storing transactions in {}", path.display());
                Box::new(CsvTransactionStore::open(path)?)
            }
            None => Box::new(MemoryTransactionStore::new()),
        };

        let notifier: Box<dyn Notifier> = match &config.outbox_dir {
            Some(dir) => Box::new(OutboxNotifier::new(dir.clone())),
            None => Box::new(WriterNotifier::new(io::stdout())),
        };

        Ok(SummaryPipeline::new(config, store, notifier))
    }
}
