//! Aggregation of one transaction batch into a [`Summary`].
//!
//! A single pass over the batch keeps a running balance, feeds each
//! transaction to the aggregator of its type, and counts transactions per
//! month. The pass owns all of its state, so building twice from the same
//! input gives identical results.

use crate::aggregate::TypeAggregator;
use crate::decimal::Decimal2;
use crate::error::{Result, SummaryError};
use crate::transaction::{Transaction, TxType};
use std::collections::BTreeMap;

/// Immutable result of one aggregation pass.
///
/// # Empty types
///
/// When a batch has no transactions of a type, that type's average is
/// reported as `0.00`. The same substitution applies to credits and debits;
/// [`Summary::credit_count`] and [`Summary::debit_count`] tell a substituted
/// zero apart from a real one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    balance: Decimal2,
    average_debit: Decimal2,
    average_credit: Decimal2,
    debit_count: usize,
    credit_count: usize,
    transactions_by_month: BTreeMap<u32, usize>,
}

impl Summary {
    /// Builds the summary of a batch. Visits every transaction exactly once.
    ///
    /// The only failure is [`SummaryError::Overflow`], when the balance or a
    /// per-type total grows past what a 2-decimal amount can hold.
    pub fn build(transactions: &[Transaction]) -> Result<Self> {
        let mut balance = Decimal2::ZERO;
        let mut credit = TypeAggregator::new(TxType::Credit);
        let mut debit = TypeAggregator::new(TxType::Debit);
        let mut transactions_by_month = BTreeMap::new();

        for tx in transactions {
            balance = balance
                .checked_add(tx.amount())
                .ok_or(SummaryError::Overflow("balance"))?;
            match tx.tx_type() {
                TxType::Credit => credit.add(tx.amount())?,
                TxType::Debit => debit.add(tx.amount())?,
            }
            *transactions_by_month.entry(tx.date().month()).or_insert(0) += 1;
        }

        Ok(Summary {
            balance,
            average_debit: average_or_zero(&debit),
            average_credit: average_or_zero(&credit),
            debit_count: debit.count(),
            credit_count: credit.count(),
            transactions_by_month,
        })
    }

    /// Signed sum of every amount in the batch.
    pub fn balance(&self) -> Decimal2 {
        self.balance
    }

    pub fn average_debit(&self) -> Decimal2 {
        self.average_debit
    }

    pub fn average_credit(&self) -> Decimal2 {
        self.average_credit
    }

    pub fn debit_count(&self) -> usize {
        self.debit_count
    }

    pub fn credit_count(&self) -> usize {
        self.credit_count
    }

    /// Transaction count per month number. Months without transactions are absent.
    pub fn transactions_by_month(&self) -> &BTreeMap<u32, usize> {
        &self.transactions_by_month
    }

    /// Total number of transactions in the batch.
    pub fn transaction_count(&self) -> usize {
        self.credit_count + self.debit_count
    }
}

fn average_or_zero(aggregator: &TypeAggregator) -> Decimal2 {
    aggregator.average().unwrap_or(Decimal2::ZERO)
}
