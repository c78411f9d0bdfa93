//! Driver for the PNI RM3100 geomagnetic sensor.
//!
//! Single-measurement polling mode: request a one-shot measurement
//! through the POLL register, watch the status register for the
//! data-ready flag, then read the result block. Each axis is a 24-bit
//! two's-complement count. The result registers are only meaningful in
//! one contiguous read immediately after the ready flag for the same
//! trigger, so the whole sequence runs inside a single driver call.

pub mod blocking;
mod register;

use crate::domain::magnetic::AxisPair;
use crate::drivers::sensors::MeasurementError;
use crate::traits::i2c::I2cAddress;
use embassy_time::{Duration, Timer};
use embedded_hal_async::i2c::*;
use register::measurement::Measurement;
use register::poll::SinglePoll;
use register::status::Status;

/// Base 7-bit address, both strap pins low.
pub const ADDR: u8 = 0x20;

/// Slave address for the given SA1/SA0 strap pin levels; the upper five
/// bits are fixed at 0b01000.
pub const fn address(sa1: bool, sa0: bool) -> u8 {
    ADDR | (sa1 as u8) << 1 | sa0 as u8
}

/// Poll budget for one measurement: how many status reads to attempt
/// and how long to wait between them. A budget of 1 checks exactly once.
#[derive(Debug, Copy, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollConfig {
    pub attempts: u8,
    pub interval: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            attempts: 10,
            interval: Duration::from_millis(1),
        }
    }
}

pub struct Rm3100 {
    address: I2cAddress,
    poll: PollConfig,
}

impl Rm3100 {
    pub fn new(address: u8) -> Self {
        Self {
            address: I2cAddress::new(address),
            poll: PollConfig::default(),
        }
    }

    pub fn with_poll_config(mut self, poll: PollConfig) -> Self {
        self.poll = poll;
        self
    }

    /// Runs one full X/Y measurement: trigger, poll until the data-ready
    /// flag is set, then read and decode the result block.
    ///
    /// A timeout performs zero result-register reads and leaves the
    /// sensor idle; the next call starts from a fresh trigger.
    pub async fn measure<I: I2c<SevenBitAddress>>(
        &mut self,
        i2c: &mut I,
    ) -> Result<AxisPair, MeasurementError<I::Error>> {
        if let Err(e) = SinglePoll::request(self.address, i2c, |reg| {
            reg.x().y();
        })
        .await
        {
            warn!("measurement trigger failed");
            return Err(MeasurementError::Bus(e));
        }

        let mut remaining = self.poll.attempts;
        loop {
            match Status::read(self.address, i2c).await {
                Ok(status) if status.data_ready() => break,
                Ok(_) => {}
                Err(e) => {
                    warn!("status poll failed");
                    return Err(MeasurementError::Bus(e));
                }
            }
            remaining = remaining.saturating_sub(1);
            if remaining == 0 {
                warn!("no measurement after {} status reads", self.poll.attempts);
                return Err(MeasurementError::Timeout);
            }
            Timer::after(self.poll.interval).await;
        }

        match Measurement::read(self.address, i2c).await {
            Ok(axes) => {
                trace!("measured X: {} Y: {}", axes.x, axes.y);
                Ok(axes)
            }
            Err(e) => {
                warn!("result read failed");
                Err(MeasurementError::Bus(e))
            }
        }
    }
}
