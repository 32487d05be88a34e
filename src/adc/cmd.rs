use std::error::Error;
use std::process::{Command, Output};

/// Reads raw counts from the stdout of a shell command.
pub struct Adc {
    command: String,
}

impl Adc {
    pub fn new(command: String) -> Self {
        Self { command }
    }
}

impl super::Adc for Adc {
    fn read(&self) -> Result<u16, Box<dyn Error>> {
        let Output { status, stdout, .. } =
            Command::new("sh").arg("-c").arg(&self.command).output()?;

        if !status.success() {
            let cmd = &self.command;
            Err(format!("Command {cmd:?} failed: {status}"))?;
        }

        let raw = String::from_utf8(stdout)?.trim().parse::<u64>()?;
        Ok(super::clamp_raw(raw))
    }
}
