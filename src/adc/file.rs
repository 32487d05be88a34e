use crate::device_file::read;
use std::cell::RefCell;
use std::error::Error;
use std::fs::File;

/// Reads raw counts from a device file such as `in_voltage0_raw`.
pub struct Adc {
    file: RefCell<File>,
}

impl Adc {
    pub fn new(path: &str) -> Result<Self, Box<dyn Error>> {
        let file = File::open(path).map_err(|e| format!("Unable to open '{path}': {e}"))?;

        Ok(Self {
            file: RefCell::new(file),
        })
    }
}

impl super::Adc for Adc {
    fn read(&self) -> Result<u16, Box<dyn Error>> {
        let value = read(&mut self.file.borrow_mut())?;
        if !value.is_finite() {
            Err(format!("Non-finite raw ADC value: {value}"))?;
        }
        if value < 0.0 {
            Err(format!("Negative raw ADC value: {value}"))?;
        }
        Ok(super::clamp_raw(value.round() as u64))
    }
}
