pub mod kalman;
pub mod stats;

pub use kalman::{FilterState, Kalman};
pub use stats::Stats;

use crate::config::FilterMode;

/// Samples further than this many standard deviations from the batch mean are not fed to the filter.
pub const OUTLIER_SIGMAS: f64 = 2.0;

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Filtered {
    pub value: f64,
    pub stats: Stats,
    pub accepted: usize,
    pub rejected: usize,
}

pub struct Pipeline {
    mode: FilterMode,
    kalman: Kalman,
    outlier_rejection: bool,
    reset_per_batch: bool,
}

impl Pipeline {
    pub fn new(
        mode: FilterMode,
        kalman: Kalman,
        outlier_rejection: bool,
        reset_per_batch: bool,
    ) -> Self {
        Self {
            mode,
            kalman,
            outlier_rejection,
            reset_per_batch,
        }
    }

    pub fn process(&mut self, batch: &[f64]) -> Option<Filtered> {
        let stats = Stats::compute(batch)?;

        if self.mode == FilterMode::Average {
            return Some(Filtered {
                value: stats.mean,
                stats,
                accepted: batch.len(),
                rejected: 0,
            });
        }

        if self.reset_per_batch {
            self.kalman.reset();
        }

        let mut accepted = 0;
        for &sample in batch {
            if self.outlier_rejection && !stats.within(sample, OUTLIER_SIGMAS) {
                log::trace!(
                    "Skipping outlier {:.4} (mean {:.4}, stddev {:.4})",
                    sample,
                    stats.mean,
                    stats.stddev
                );
                continue;
            }
            self.kalman.update(sample);
            accepted += 1;
        }

        log::debug!("Kalman state after batch: {:?}", self.kalman.state());

        Some(Filtered {
            value: self.kalman.state().estimate,
            stats,
            accepted,
            rejected: batch.len() - accepted,
        })
    }

    pub fn kalman(&self) -> &Kalman {
        &self.kalman
    }
}
