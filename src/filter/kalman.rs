/// Estimate and error covariance carried between updates.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct FilterState {
    pub estimate: f64,
    pub covariance: f64,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            estimate: 0.0,
            covariance: 1.0,
        }
    }
}

/// Scalar Kalman filter with a random-walk process model and no control input.
#[derive(Debug, Clone)]
pub struct Kalman {
    q: f64,
    r: f64,
    initial: FilterState,
    state: FilterState,
    steps: u64,
}

impl Kalman {
    pub fn new(q: f64, r: f64, initial: FilterState) -> Kalman {
        Kalman {
            q,
            r,
            initial,
            state: initial,
            steps: 0,
        }
    }

    pub fn update(&mut self, measurement: f64) -> f64 {
        self.steps += 1;

        let p0 = self.state.covariance + self.q;
        let k = p0 / (p0 + self.r);
        self.state.estimate += k * (measurement - self.state.estimate);
        self.state.covariance = (1.0 - k) * p0;

        self.state.estimate
    }

    pub fn state(&self) -> FilterState {
        self.state
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn reset(&mut self) {
        self.state = self.initial;
        self.steps = 0;
    }
}

/// Fixed point of the covariance recurrence for the given noise parameters.
pub fn steady_state_covariance(q: f64, r: f64) -> f64 {
    (-q + (q * q + 4.0 * q * r).sqrt()) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn kalman() -> Kalman {
        Kalman::new(0.01, 1.0, FilterState::default())
    }

    #[test]
    fn test_update_single_step_from_unit_covariance() {
        let mut kalman = kalman();

        let estimate = kalman.update(1.0);

        let gain = 1.01 / 2.01;
        assert!((estimate - gain).abs() < EPSILON);
        assert!((estimate - 0.5025).abs() < 1e-4);
        assert!((kalman.state().covariance - (1.0 - gain) * 1.01).abs() < EPSILON);
        assert_eq!(1, kalman.steps());
    }

    #[test]
    fn test_update_converges_monotonically_towards_constant_input() {
        let mut kalman = kalman();
        let mut previous = kalman.state().estimate;

        for _ in 0..500 {
            let estimate = kalman.update(20.0);
            assert!(estimate >= previous);
            assert!(estimate <= 20.0);
            previous = estimate;
        }

        assert!((previous - 20.0).abs() < 1e-3);
    }

    #[test]
    fn test_covariance_approaches_fixed_point() {
        let mut kalman = kalman();

        for _ in 0..1000 {
            kalman.update(3.0);
            assert!(kalman.state().covariance >= 0.0);
        }

        let expected = steady_state_covariance(0.01, 1.0);
        assert!((kalman.state().covariance - expected).abs() < 1e-9);
    }

    #[test]
    fn test_covariance_decreases_from_large_initial_value() {
        let mut kalman = Kalman::new(
            0.5,
            4.0,
            FilterState {
                estimate: 10.0,
                covariance: 100.0,
            },
        );
        let mut previous = kalman.state().covariance;

        for _ in 0..50 {
            kalman.update(10.0);
            let covariance = kalman.state().covariance;
            assert!(covariance <= previous);
            previous = covariance;
        }

        assert!((previous - steady_state_covariance(0.5, 4.0)).abs() < 1e-6);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let initial = FilterState {
            estimate: 1.5,
            covariance: 2.0,
        };
        let mut kalman = Kalman::new(0.1, 0.5, initial);
        kalman.update(7.0);
        kalman.update(8.0);

        kalman.reset();

        assert_eq!(initial, kalman.state());
        assert_eq!(0, kalman.steps());
    }

    #[test]
    fn test_independent_instances_dont_share_state() {
        let mut first = kalman();
        let mut second = kalman();

        first.update(100.0);

        assert_eq!(FilterState::default(), second.state());
        second.update(-5.0);
        assert!(first.state().estimate > 0.0);
        assert!(second.state().estimate < 0.0);
    }
}
