use super::Reading;
use std::error::Error;

#[derive(Default)]
pub struct Display {}

impl super::Display for Display {
    fn show(&mut self, _: &Reading) -> Result<(), Box<dyn Error>> {
        Ok(())
    }
}
