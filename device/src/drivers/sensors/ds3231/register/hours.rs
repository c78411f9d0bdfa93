use crate::codec::bcd;
use crate::traits::i2c::I2cAddress;
use embedded_hal_async::i2c::*;

// 24-hour mode assumed; the mode-select bits decode with the digits.
const HOURS: u8 = 0x02;

pub struct Hours;

impl Hours {
    pub async fn read<I: I2c>(address: I2cAddress, i2c: &mut I) -> Result<u8, I::Error> {
        let mut buf = [0; 1];
        i2c.write_read(address.into(), &[HOURS], &mut buf).await?;
        Ok(bcd::decode(buf[0]))
    }
}
