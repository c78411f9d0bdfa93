use crate::codec::signed;
use crate::traits::i2c::I2cAddress;
use embedded_hal_async::i2c::*;

// MSB only; the fractional LSB register (0x12) is never consulted, so
// readings carry whole-degree precision.
const TEMP_MSB: u8 = 0x11;

pub struct TempMsb;

impl TempMsb {
    pub async fn read<I: I2c>(address: I2cAddress, i2c: &mut I) -> Result<i16, I::Error> {
        let mut buf = [0; 1];
        i2c.write_read(address.into(), &[TEMP_MSB], &mut buf).await?;
        Ok(signed::sign_magnitude(buf[0]))
    }
}
