//! Driver for a DS3231-class BCD clock/temperature sensor.
//!
//! The clock registers are free-running: there is no trigger or readiness
//! handshake, every read returns the current register contents. Time and
//! date fields are packed BCD; the temperature MSB is a sign-bit byte.

mod register;

use crate::domain::temperature::{Celsius, Temperature};
use crate::domain::time::{DayOfMonth, TimeOfDay};
use crate::domain::ClockReading;
use crate::drivers::sensors::MeasurementError;
use crate::traits::i2c::I2cAddress;
use embedded_hal_async::i2c::*;
use register::date::Date;
use register::hours::Hours;
use register::minutes::Minutes;
use register::seconds::Seconds;
use register::temperature::TempMsb;

pub const ADDR: u8 = 0x68;

pub struct Ds3231 {
    address: I2cAddress,
}

impl Ds3231 {
    pub fn new() -> Self {
        Self {
            address: I2cAddress::new(ADDR),
        }
    }

    /// Reads the day-of-month register.
    pub async fn date<I: I2c<SevenBitAddress>>(
        &mut self,
        i2c: &mut I,
    ) -> Result<DayOfMonth, MeasurementError<I::Error>> {
        Ok(Date::read(self.address, i2c).await?)
    }

    /// Reads the time of day. The registers are visited minutes, seconds,
    /// hours; each byte decodes independently, so the order does not
    /// affect the decoded fields.
    pub async fn time<I: I2c<SevenBitAddress>>(
        &mut self,
        i2c: &mut I,
    ) -> Result<TimeOfDay, MeasurementError<I::Error>> {
        let minute = Minutes::read(self.address, i2c).await?;
        let second = Seconds::read(self.address, i2c).await?;
        let hour = Hours::read(self.address, i2c).await?;
        Ok(TimeOfDay {
            hour,
            minute,
            second,
        })
    }

    /// Reads the temperature MSB register.
    pub async fn temperature<I: I2c<SevenBitAddress>>(
        &mut self,
        i2c: &mut I,
    ) -> Result<Temperature<Celsius>, MeasurementError<I::Error>> {
        let value = TempMsb::read(self.address, i2c).await?;
        Ok(value.into())
    }

    /// One full acquisition: date, time and temperature in a single pass.
    /// Any bus fault aborts the pass; no partial reading is returned.
    pub async fn sample<I: I2c<SevenBitAddress>>(
        &mut self,
        i2c: &mut I,
    ) -> Result<ClockReading, MeasurementError<I::Error>> {
        let day = self.date(i2c).await?;
        let time = self.time(i2c).await?;
        let temperature = self.temperature(i2c).await?;
        Ok(ClockReading {
            day,
            time,
            temperature,
        })
    }
}
