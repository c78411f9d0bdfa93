//! Per-byte variant of the measurement sequence, for blocking transports
//! without multi-byte register reads.
//!
//! Same trigger as the async driver, but readiness is checked exactly
//! once and the six result registers are read individually. A clear
//! ready flag is a sensor-state condition ([`MeasurementError::NotReady`]),
//! distinct from any bus fault.

use super::register::{measurement, poll, status};
use crate::domain::magnetic::AxisPair;
use crate::drivers::sensors::MeasurementError;
use crate::traits::i2c::I2cAddress;
use embedded_hal::i2c::{I2c, SevenBitAddress};

pub struct Rm3100 {
    address: I2cAddress,
}

impl Rm3100 {
    pub fn new(address: u8) -> Self {
        Self {
            address: I2cAddress::new(address),
        }
    }

    /// One X/Y measurement with individual byte reads.
    pub fn measure<I: I2c<SevenBitAddress>>(
        &mut self,
        i2c: &mut I,
    ) -> Result<AxisPair, MeasurementError<I::Error>> {
        let mut request = poll::SinglePoll::new();
        request.x().y();
        i2c.write(self.address.into(), &[poll::POLL, request.into()])?;

        let mut buf = [0; 1];
        i2c.write_read(self.address.into(), &[status::STATUS], &mut buf)?;
        if !status::Status::from(buf[0]).data_ready() {
            warn!("measurement not ready");
            return Err(MeasurementError::NotReady);
        }

        let mut raw = [0; measurement::LEN];
        for (offset, byte) in raw.iter_mut().enumerate() {
            let mut buf = [0; 1];
            i2c.write_read(
                self.address.into(),
                &[measurement::MEASUREMENT + offset as u8],
                &mut buf,
            )?;
            *byte = buf[0];
        }
        Ok(measurement::decode(raw))
    }
}
