use crate::codec::signed;
use crate::domain::magnetic::AxisPair;
use crate::traits::i2c::I2cAddress;
use embedded_hal_async::i2c::*;

// Result registers 0xA4..=0xA9: X then Y, three bytes each, MSB first.
// One read at the base address returns every requested axis in turn; the
// device auto-increments its internal register pointer.
pub const MEASUREMENT: u8 = 0xA4;
pub const LEN: usize = 6;

pub struct Measurement;

impl Measurement {
    pub async fn read<I: I2c>(address: I2cAddress, i2c: &mut I) -> Result<AxisPair, I::Error> {
        let mut buf = [0; LEN];
        i2c.write_read(address.into(), &[MEASUREMENT], &mut buf)
            .await?;
        Ok(decode(buf))
    }
}

pub fn decode(buf: [u8; LEN]) -> AxisPair {
    AxisPair {
        x: signed::twos_complement_24([buf[0], buf[1], buf[2]]),
        y: signed::twos_complement_24([buf[3], buf[4], buf[5]]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_block_decode() {
        let axes = decode([0x00, 0x01, 0x00, 0xFF, 0xFF, 0xFF]);
        assert_eq!(axes, AxisPair { x: 256, y: -1 });
    }
}
