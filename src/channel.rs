use crate::adc;
use crate::calibration::{self, Calibration};
use crate::config;
use crate::display::{self, Display, Reading};
use crate::filter::{FilterState, Kalman, Pipeline};
use crate::sampler::Sampler;
use chrono::Local;
use std::error::Error;
use std::time::Duration;

pub struct Controller {
    name: String,
    sampler: Sampler,
    pipeline: Pipeline,
    calibration: Box<dyn Calibration + Send>,
    display: Box<dyn Display + Send>,
    vref: f64,
}

impl Controller {
    pub fn new(
        name: String,
        sampler: Sampler,
        pipeline: Pipeline,
        calibration: Box<dyn Calibration + Send>,
        display: Box<dyn Display + Send>,
        vref: f64,
    ) -> Self {
        Self {
            name,
            sampler,
            pipeline,
            calibration,
            display,
            vref,
        }
    }

    pub fn from_config(cfg: &config::Channel) -> Result<Self, Box<dyn Error>> {
        let sampler = Sampler::new(
            adc::from_config(&cfg.source)?,
            cfg.batch_size,
            Duration::from_millis(cfg.window_ms),
            cfg.vref,
        );

        let kalman = Kalman::new(
            cfg.filter.q,
            cfg.filter.r,
            FilterState {
                estimate: cfg.filter.initial_estimate,
                covariance: cfg.filter.initial_covariance,
            },
        );
        let pipeline = Pipeline::new(
            cfg.filter.mode,
            kalman,
            cfg.filter.outlier_rejection,
            cfg.filter.reset_per_batch,
        );

        Ok(Self::new(
            cfg.name.clone(),
            sampler,
            pipeline,
            calibration::from_config(&cfg.calibration, cfg.vref),
            display::from_config(&cfg.display),
            cfg.vref,
        ))
    }

    pub fn run(&mut self) {
        loop {
            self.step();
        }
    }

    fn step(&mut self) {
        let batch = self.sampler.collect();

        let filtered = match self.pipeline.process(&batch.voltages) {
            Some(filtered) => filtered,
            None => {
                log::error!("No samples collected for channel '{}'", self.name);
                return;
            }
        };

        let reading = Reading {
            channel: self.name.clone(),
            temperature: self.calibration.apply(filtered.value),
            voltage: filtered.value,
            raw: batch.last_raw,
            millivolts: batch
                .last_raw
                .map(|raw| adc::to_millivolts(raw, (self.vref * 1000.0).round() as u32)),
            percent: adc::to_percent(filtered.value, self.vref),
            accepted: filtered.accepted,
            rejected: filtered.rejected,
            taken_at: Local::now(),
        };

        if let Err(err) = self.display.show(&reading) {
            log::error!("Unable to display reading for '{}': {:?}", self.name, err);
        }
    }
}
