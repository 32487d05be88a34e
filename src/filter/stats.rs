#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Stats {
    pub mean: f64,
    pub stddev: f64,
}

impl Stats {
    /// Mean and population standard deviation (divides by N, not N - 1).
    pub fn compute(samples: &[f64]) -> Option<Stats> {
        if samples.is_empty() {
            return None;
        }

        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let variance = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;

        Some(Stats {
            mean,
            stddev: variance.sqrt(),
        })
    }

    pub fn within(&self, sample: f64, sigmas: f64) -> bool {
        (sample - self.mean).abs() <= sigmas * self.stddev
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_mean_and_population_stddev() {
        let stats = Stats::compute(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();

        assert_eq!(3.0, stats.mean);
        assert!((stats.stddev - 2_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_compute_constant_samples_have_zero_stddev() {
        let stats = Stats::compute(&[1.65; 50]).unwrap();

        assert!((stats.mean - 1.65).abs() < 1e-12);
        assert!(stats.stddev.abs() < 1e-12);
    }

    #[test]
    fn test_compute_single_sample() {
        assert_eq!(
            Some(Stats {
                mean: 7.0,
                stddev: 0.0
            }),
            Stats::compute(&[7.0])
        );
    }

    #[test]
    fn test_compute_empty() {
        assert_eq!(None, Stats::compute(&[]));
    }

    #[test]
    fn test_within() {
        let stats = Stats {
            mean: 10.0,
            stddev: 1.0,
        };

        assert_eq!(true, stats.within(10.0, 2.0));
        assert_eq!(true, stats.within(12.0, 2.0));
        assert_eq!(true, stats.within(8.0, 2.0));
        assert_eq!(false, stats.within(12.5, 2.0));
        assert_eq!(false, stats.within(7.0, 2.0));
    }
}
