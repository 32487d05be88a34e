use std::error::Error;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};

/// Reads a single number from a device file and rewinds it for the next read.
pub fn read(file: &mut File) -> Result<f64, Box<dyn Error>> {
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    file.seek(SeekFrom::Start(0))?;
    Ok(content.trim().parse()?)
}
