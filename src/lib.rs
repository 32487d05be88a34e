pub mod adc;
pub mod calibration;
pub mod channel;
pub mod config;
pub mod dht22;
pub mod display;
pub mod filter;
pub mod sampler;

mod device_file;
