use super::Reading;
use std::error::Error;

/// Emits every reading as an `info` log record.
#[derive(Default)]
pub struct Display {}

impl super::Display for Display {
    fn show(&mut self, reading: &Reading) -> Result<(), Box<dyn Error>> {
        log::info!("{}", format_reading(reading));
        Ok(())
    }
}

fn format_reading(reading: &Reading) -> String {
    let raw = match (reading.raw, reading.millivolts) {
        (Some(raw), Some(mv)) => format!("{raw} = {mv} mV"),
        (Some(raw), None) => raw.to_string(),
        _ => "-".to_string(),
    };

    format!(
        "[{}] {}: {:.1} C ({:.3} V, raw {}, {}%, {} samples, {} outliers)",
        reading.taken_at.format("%H:%M:%S"),
        reading.channel,
        reading.temperature,
        reading.voltage,
        raw,
        reading.percent,
        reading.accepted,
        reading.rejected
    )
}
