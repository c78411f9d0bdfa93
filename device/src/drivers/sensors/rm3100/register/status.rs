use crate::traits::i2c::I2cAddress;
use embedded_hal_async::i2c::*;

pub const STATUS: u8 = 0xB4;

/// Measurement status. Bit 7 is set once a requested measurement has
/// completed and the result registers hold valid data; while it is
/// clear the result registers are stale or undefined.
pub struct Status {
    data_ready: bool,
}

impl Status {
    pub async fn read<I: I2c>(address: I2cAddress, i2c: &mut I) -> Result<Status, I::Error> {
        let mut buf = [0; 1];
        i2c.write_read(address.into(), &[STATUS], &mut buf).await?;
        Ok(buf[0].into())
    }

    pub fn data_ready(&self) -> bool {
        self.data_ready
    }
}

impl From<u8> for Status {
    fn from(b: u8) -> Status {
        Status {
            data_ready: (b & 0x80) != 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_seven_is_the_ready_flag() {
        assert!(Status::from(0x80).data_ready());
        assert!(Status::from(0xFF).data_ready());
        assert!(!Status::from(0x7F).data_ready());
        assert!(!Status::from(0x00).data_ready());
    }
}
