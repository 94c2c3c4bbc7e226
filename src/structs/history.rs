//! # History Module
//!
//! Bounded, newest-first record of completed operations with
//! running timing metrics.
//!
//! **This is an optional extra enabled by the `history` feature**.
//! The kernels and entry points keep no state; `History` is owned by the
//! caller and only sees operations run through [`History::run`].

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

use crate::Grid;
use crate::enums::error::GridError;
use crate::enums::operand::{Operand, OwnedOperand};
use crate::enums::operators::OperationKind;
use crate::kernels::routing::apply_kind;

/// Number of records kept by [`History::new`].
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// One completed operation, holding copies of both inputs and the result.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRecord {
    pub kind: OperationKind,
    pub lhs: Grid,
    pub rhs: OwnedOperand,
    pub result: Grid,
    pub elapsed: Duration,
    /// Local wall-clock time at completion.
    pub timestamp: DateTime<Local>,
}

impl OperationRecord {
    /// `(rows, cols)` of the left-hand grid.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        self.lhs.shape()
    }
}

/// Running totals over every successful operation, including records
/// since evicted from the bounded list.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Metrics {
    pub operations: u64,
    pub total_time: Duration,
}

impl Metrics {
    /// Mean time per operation, `None` before the first one.
    pub fn average(&self) -> Option<Duration> {
        if self.operations == 0 {
            return None;
        }
        let nanos = self.total_time.as_nanos() / u128::from(self.operations);
        Some(Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX)))
    }

    /// Throughput implied by [`Metrics::average`].
    ///
    /// Infinite when the recorded average rounds to zero.
    pub fn ops_per_sec(&self) -> Option<f64> {
        self.average().map(|avg| 1.0 / avg.as_secs_f64())
    }
}

/// # History
///
/// Caller-owned log of operations.
///
/// ### Example
/// ```rust
/// use gridwise::{History, grid};
///
/// let mut history = History::new();
/// let a = grid![[1, 2], [3, 4]].unwrap();
/// history.run("s_mult", &a, 2.0).unwrap();
/// history.run("m_add", &a, &a).unwrap();
///
/// let latest = history.latest().unwrap();
/// assert_eq!(latest.kind.to_string(), "m_add");
/// assert_eq!(history.metrics().operations, 2);
/// ```
#[derive(Debug, Clone)]
pub struct History {
    records: VecDeque<OperationRecord>,
    capacity: usize,
    metrics: Metrics,
}

impl History {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// History that keeps at most `capacity` records. A capacity of `0`
    /// keeps none but still accumulates metrics.
    pub fn with_capacity(capacity: usize) -> Self {
        History {
            records: VecDeque::with_capacity(capacity),
            capacity,
            metrics: Metrics::default(),
        }
    }

    /// Resolves `op` once and runs it through [`apply_kind`], timing and
    /// recording it on success.
    ///
    /// Failed operations are returned unchanged and leave the history untouched.
    pub fn run<'a>(
        &mut self,
        op: &str,
        lhs: &Grid,
        rhs: impl Into<Operand<'a>>,
    ) -> Result<Grid, GridError> {
        let kind: OperationKind = op.parse()?;
        let rhs = rhs.into();
        let start = Instant::now();
        let result = apply_kind(kind, lhs, rhs)?;
        let elapsed = start.elapsed();

        self.push(OperationRecord {
            kind,
            lhs: lhs.clone(),
            rhs: rhs.into(),
            result: result.clone(),
            elapsed,
            timestamp: Local::now(),
        });
        Ok(result)
    }

    /// Adds a record as the newest entry, evicting the oldest past capacity.
    pub fn push(&mut self, record: OperationRecord) {
        self.metrics.operations += 1;
        self.metrics.total_time += record.elapsed;

        if self.capacity == 0 {
            return;
        }
        if self.records.len() == self.capacity {
            if let Some(evicted) = self.records.pop_back() {
                log::debug!(
                    "history: evicting {} from {}",
                    evicted.kind,
                    evicted.timestamp.format("%H:%M:%S%.3f")
                );
            }
        }
        self.records.push_front(record);
    }

    /// Records, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &OperationRecord> {
        self.records.iter()
    }

    pub fn latest(&self) -> Option<&OperationRecord> {
        self.records.front()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    /// Drops all records and resets the metrics.
    pub fn clear(&mut self) {
        self.records.clear();
        self.metrics = Metrics::default();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
