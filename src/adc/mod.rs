use crate::config;
use std::error::Error;

pub mod cmd;
pub mod file;
pub mod none;

/// Full-scale count of a 10-bit converter.
pub const ADC_MAX: u16 = 1023;

#[cfg_attr(test, mockall::automock)]
pub trait Adc {
    fn read(&self) -> Result<u16, Box<dyn Error>>;
}

pub fn from_config(source: &config::Source) -> Result<Box<dyn Adc + Send>, Box<dyn Error>> {
    let adc: Box<dyn Adc + Send> = match source {
        config::Source::Cmd { command } => Box::new(cmd::Adc::new(command.clone())),
        config::Source::File { path } => Box::new(file::Adc::new(path)?),
        config::Source::None => Box::<none::Adc>::default(),
    };
    Ok(adc)
}

/// Clamps a reading into the converter range, values above it come from misbehaving sources.
pub fn clamp_raw(raw: u64) -> u16 {
    if raw > ADC_MAX as u64 {
        log::warn!("Raw ADC value {} is out of range, clamping to {}", raw, ADC_MAX);
        ADC_MAX
    } else {
        raw as u16
    }
}

pub fn to_voltage(raw: u16, vref: f64) -> f64 {
    raw as f64 * vref / ADC_MAX as f64
}

pub fn to_percent(voltage: f64, vref: f64) -> i64 {
    (voltage / vref * 100.0).round() as i64
}

pub fn to_millivolts(raw: u16, full_scale_mv: u32) -> u32 {
    raw as u32 * full_scale_mv / ADC_MAX as u32
}
