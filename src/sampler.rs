use crate::adc::{self, Adc};
use std::thread;
use std::time::Duration;

#[derive(Debug, PartialEq, Clone, Default)]
pub struct Batch {
    pub voltages: Vec<f64>,
    pub last_raw: Option<u16>,
}

/// Spreads `batch_size` reads evenly over a fixed window.
pub struct Sampler {
    adc: Box<dyn Adc + Send>,
    batch_size: usize,
    spacing: Duration,
    vref: f64,
}

impl Sampler {
    pub fn new(adc: Box<dyn Adc + Send>, batch_size: usize, window: Duration, vref: f64) -> Self {
        Self {
            adc,
            batch_size,
            spacing: window.div_f64(batch_size.max(1) as f64),
            vref,
        }
    }

    pub fn collect(&mut self) -> Batch {
        let mut batch = Batch {
            voltages: Vec::with_capacity(self.batch_size),
            last_raw: None,
        };

        for _ in 0..self.batch_size {
            match self.adc.read() {
                Ok(raw) => {
                    batch.voltages.push(adc::to_voltage(raw, self.vref));
                    batch.last_raw = Some(raw);
                }
                Err(err) => log::error!("Unable to read ADC value: {:?}", err),
            }

            thread::sleep(self.spacing);
        }

        log::trace!(
            "Collected {}/{} samples",
            batch.voltages.len(),
            self.batch_size
        );
        batch
    }

    pub fn spacing(&self) -> Duration {
        self.spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adc::MockAdc;
    use std::error::Error;

    #[test]
    fn test_spacing_divides_window_by_batch_size() {
        let sampler = Sampler::new(
            Box::new(MockAdc::new()),
            50,
            Duration::from_millis(1000),
            3.3,
        );

        assert_eq!(Duration::from_millis(20), sampler.spacing());
    }

    #[test]
    fn test_spacing_for_batch_size_beyond_u32() {
        let sampler = Sampler::new(
            Box::new(MockAdc::new()),
            1 << 32,
            Duration::from_secs(1),
            3.3,
        );

        assert!(sampler.spacing() < Duration::from_micros(1));
    }

    #[test]
    fn test_collect_reads_batch_size_samples() {
        let mut adc_mock = MockAdc::new();
        adc_mock.expect_read().times(4).returning(|| Ok(1023));
        let mut sampler = Sampler::new(Box::new(adc_mock), 4, Duration::ZERO, 3.3);

        let batch = sampler.collect();

        assert_eq!(4, batch.voltages.len());
        assert!(batch.voltages.iter().all(|v| (v - 3.3).abs() < 1e-12));
        assert_eq!(Some(1023), batch.last_raw);
    }

    #[test]
    fn test_collect_skips_failed_reads() {
        let mut adc_mock = MockAdc::new();
        let mut calls = 0;
        adc_mock.expect_read().times(3).returning(move || {
            calls += 1;
            match calls {
                2 => Err(Box::<dyn Error>::from("sensor unplugged")),
                n => Ok(n * 100),
            }
        });
        let mut sampler = Sampler::new(Box::new(adc_mock), 3, Duration::ZERO, 1023.0);

        let batch = sampler.collect();

        assert_eq!(vec![100.0, 300.0], batch.voltages);
        assert_eq!(Some(300), batch.last_raw);
    }

    #[test]
    fn test_collect_all_reads_failed() {
        let mut adc_mock = MockAdc::new();
        adc_mock
            .expect_read()
            .times(2)
            .returning(|| Err("no device".into()));
        let mut sampler = Sampler::new(Box::new(adc_mock), 2, Duration::ZERO, 3.3);

        assert_eq!(Batch::default(), sampler.collect());
    }
}
