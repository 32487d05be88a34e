use crate::config;
use chrono::{DateTime, Local};
use std::error::Error;

pub mod logger;
pub mod none;

/// Outcome of one processed batch, as handed to a display.
#[derive(Debug, PartialEq, Clone)]
pub struct Reading {
    pub channel: String,
    pub temperature: f64,
    pub voltage: f64,
    pub raw: Option<u16>,
    pub millivolts: Option<u32>,
    pub percent: i64,
    pub accepted: usize,
    pub rejected: usize,
    pub taken_at: DateTime<Local>,
}

#[cfg_attr(test, mockall::automock)]
pub trait Display {
    fn show(&mut self, reading: &Reading) -> Result<(), Box<dyn Error>>;
}

pub fn from_config(display: &config::Display) -> Box<dyn Display + Send> {
    match display {
        config::Display::Log => Box::<logger::Display>::default(),
        config::Display::None => Box::<none::Display>::default(),
    }
}
