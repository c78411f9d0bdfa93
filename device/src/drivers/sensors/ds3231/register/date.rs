use crate::codec::bcd;
use crate::domain::time::DayOfMonth;
use crate::traits::i2c::I2cAddress;
use embedded_hal_async::i2c::*;

const DATE: u8 = 0x04;

pub struct Date;

impl Date {
    pub async fn read<I: I2c>(address: I2cAddress, i2c: &mut I) -> Result<DayOfMonth, I::Error> {
        let mut buf = [0; 1];
        i2c.write_read(address.into(), &[DATE], &mut buf).await?;
        Ok(DayOfMonth(bcd::decode(buf[0])))
    }
}
