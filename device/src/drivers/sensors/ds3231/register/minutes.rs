use crate::codec::bcd;
use crate::traits::i2c::I2cAddress;
use embedded_hal_async::i2c::*;

const MINUTES: u8 = 0x01;

pub struct Minutes;

impl Minutes {
    pub async fn read<I: I2c>(address: I2cAddress, i2c: &mut I) -> Result<u8, I::Error> {
        let mut buf = [0; 1];
        i2c.write_read(address.into(), &[MINUTES], &mut buf).await?;
        Ok(bcd::decode(buf[0]))
    }
}
