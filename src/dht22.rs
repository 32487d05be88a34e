//! Decoding of the 40-bit DHT22 frame: humidity (2 bytes), temperature (2 bytes), checksum.

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct Reading {
    pub humidity: u8,
    pub temperature: u8,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Frame(pub [u8; 5]);

impl Frame {
    /// The last byte must equal the low 8 bits of the sum of the first four.
    pub fn checksum_ok(&self) -> bool {
        let [b0, b1, b2, b3, checksum] = self.0;
        b0.wrapping_add(b1).wrapping_add(b2).wrapping_add(b3) == checksum
    }

    /// High bytes of humidity and temperature, or zeros when the checksum doesn't match.
    pub fn reading(&self) -> Reading {
        if !self.checksum_ok() {
            log::warn!("DHT22 checksum mismatch in frame {:02x?}", self.0);
            return Reading::default();
        }

        Reading {
            humidity: self.0[0],
            temperature: self.0[2],
        }
    }

    /// Relative humidity in percent and temperature in °C at 0.1 resolution.
    pub fn precise(&self) -> Option<(f64, f64)> {
        if !self.checksum_ok() {
            return None;
        }

        let humidity = u16::from_be_bytes([self.0[0], self.0[1]]) as f64 / 10.0;
        let magnitude = u16::from_be_bytes([self.0[2] & 0x7f, self.0[3]]) as f64 / 10.0;
        let temperature = if self.0[2] & 0x80 != 0 {
            -magnitude
        } else {
            magnitude
        };

        Some((humidity, temperature))
    }
}
