//! Per-type running count and total.

use crate::decimal::Decimal2;
use crate::error::{Result, SummaryError};
use crate::transaction::TxType;

/// Accumulates the transactions of one [`TxType`] within one summary pass.
///
/// Each instance is owned by a single pass; nothing is shared between
/// aggregators or carried over from a previous pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAggregator {
    tx_type: TxType,
    count: usize,
    total: Decimal2,
}

impl TypeAggregator {
    /// Creates an empty aggregator for the given type.
    pub fn new(tx_type: TxType) -> Self {
        TypeAggregator {
            tx_type,
            count: 0,
            total: Decimal2::ZERO,
        }
    }

    /// Adds one amount. The running total is re-quantized after every step.
    ///
    /// Fails with [`SummaryError::Overflow`] if the total no longer fits,
    /// leaving the aggregator unchanged.
    pub fn add(&mut self, amount: Decimal2) -> Result<()> {
        self.total = self
            .total
            .checked_add(amount)
            .ok_or(SummaryError::Overflow(self.tx_type.plural()))?;
        self.count += 1;
        Ok(())
    }

    pub fn tx_type(&self) -> TxType {
        self.tx_type
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn total(&self) -> Decimal2 {
        self.total
    }

    /// `total / count`, truncated to 2 decimal places.
    ///
    /// Fails with [`SummaryError::DivisionUndefined`] when nothing was added.
    pub fn average(&self) -> Result<Decimal2> {
        self.total
            .checked_div_count(self.count)
            .ok_or(SummaryError::DivisionUndefined(self.tx_type))
    }
}
