//! Timed fill trials over any [`PushTarget`].

use std::time::{Duration, Instant};

use tracing::{debug, info};
use vectra_array::DynamicArray;

use crate::config::{BenchConfig, BenchError};

/// A growable sequence the harness can fill.
pub trait PushTarget<T> {
    /// Label used in logs and reports.
    const NAME: &'static str;

    /// An empty container.
    fn empty() -> Self;

    /// Make room for `total` elements without further reallocation.
    fn reserve_total(&mut self, total: usize);

    /// Append one element.
    fn push_value(&mut self, value: T);

    /// Number of elements held.
    fn len(&self) -> usize;

    /// Whether no elements are held.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> PushTarget<T> for Vec<T> {
    const NAME: &'static str = "Vec";

    fn empty() -> Self {
        Vec::new()
    }

    fn reserve_total(&mut self, total: usize) {
        self.reserve(total.saturating_sub(self.len()));
    }

    fn push_value(&mut self, value: T) {
        self.push(value);
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T> PushTarget<T> for DynamicArray<T> {
    const NAME: &'static str = "DynamicArray";

    fn empty() -> Self {
        DynamicArray::new()
    }

    fn reserve_total(&mut self, total: usize) {
        self.reserve(total);
    }

    fn push_value(&mut self, value: T) {
        self.push(value);
    }

    fn len(&self) -> usize {
        DynamicArray::len(self)
    }
}

/// Timings for one container across all trials.
#[derive(Clone, Debug, PartialEq)]
pub struct TrialReport {
    /// [`PushTarget::NAME`] of the container measured.
    pub target: &'static str,
    /// Wall time of each trial, in run order.
    pub trials: Vec<Duration>,
}

impl TrialReport {
    /// Mean trial time.
    pub fn mean(&self) -> Duration {
        match u32::try_from(self.trials.len()) {
            Ok(0) | Err(_) => Duration::ZERO,
            Ok(n) => self.trials.iter().sum::<Duration>() / n,
        }
    }

    /// Mean trial time in milliseconds.
    pub fn mean_ms(&self) -> f64 {
        self.mean().as_secs_f64() * 1e3
    }
}

/// Fill a fresh `C` with `config.count` clones of `config.value`, `config.trials` times.
pub fn run_push_trials<C>(config: &BenchConfig) -> Result<TrialReport, BenchError>
where
    C: PushTarget<String>,
{
    config.validate()?;

    let mut trials = Vec::with_capacity(config.trials);
    for trial in 0..config.trials {
        let start = Instant::now();
        let mut target = C::empty();
        if config.reserve {
            target.reserve_total(config.count);
        }
        for _ in 0..config.count {
            target.push_value(config.value.clone());
        }
        let elapsed = start.elapsed();
        debug_assert_eq!(target.len(), config.count);
        // Teardown stays outside the measured window.
        drop(target);

        debug!(target_name = C::NAME, trial, ?elapsed, "trial finished");
        trials.push(elapsed);
    }

    let report = TrialReport {
        target: C::NAME,
        trials,
    };
    info!(
        target_name = report.target,
        count = config.count,
        trials = config.trials,
        mean_ms = report.mean_ms(),
        "push trials complete"
    );
    Ok(report)
}

/// Run the same trials against `Vec` and then `DynamicArray`.
pub fn run_comparison(config: &BenchConfig) -> Result<[TrialReport; 2], BenchError> {
    let vec = run_push_trials::<Vec<String>>(config)?;
    let array = run_push_trials::<DynamicArray<String>>(config)?;
    Ok([vec, array])
}
