//! Serialized query access to the station's sensors.
//!
//! One command/response exchange per query. The bus is held for the full
//! trigger-poll-read sequence a command implies, so concurrent callers
//! observe whole measurements, never interleaved register traffic. A
//! timed-out or faulted sequence releases the bus ready for the next
//! full retrigger.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::Mutex;
use embedded_hal_async::i2c::{I2c, SevenBitAddress};

use crate::domain::magnetic::AxisPair;
use crate::domain::temperature::{Celsius, Temperature};
use crate::domain::time::{DayOfMonth, TimeOfDay};
use crate::drivers::sensors::ds3231::Ds3231;
use crate::drivers::sensors::rm3100::Rm3100;
use crate::drivers::sensors::MeasurementError;

/// Queries the station serves, one wire opcode each.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    ReadAxes,
    ReadDay,
    ReadTime,
    ReadTemperature,
}

impl Command {
    pub const fn opcode(self) -> u8 {
        match self {
            Command::ReadAxes => 1,
            Command::ReadDay => 2,
            Command::ReadTime => 3,
            Command::ReadTemperature => 4,
        }
    }

    /// Parses a wire opcode. Unknown opcodes name no command.
    pub const fn from_opcode(opcode: u8) -> Option<Command> {
        match opcode {
            1 => Some(Command::ReadAxes),
            2 => Some(Command::ReadDay),
            3 => Some(Command::ReadTime),
            4 => Some(Command::ReadTemperature),
            _ => None,
        }
    }
}

/// A completed query, tagged by the command that produced it.
#[derive(Debug, Copy, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Response {
    Axes(AxisPair),
    Day(DayOfMonth),
    Time(TimeOfDay),
    Temperature(Temperature<Celsius>),
}

#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ServiceError<E> {
    /// The opcode does not name a recognized command.
    NotSupported,
    Measurement(MeasurementError<E>),
}

impl<E> From<MeasurementError<E>> for ServiceError<E> {
    fn from(e: MeasurementError<E>) -> ServiceError<E> {
        ServiceError::Measurement(e)
    }
}

struct Inner<I> {
    i2c: I,
    clock: Ds3231,
    magnetometer: Rm3100,
}

pub struct Station<M: RawMutex, I: I2c<SevenBitAddress>> {
    inner: Mutex<M, Inner<I>>,
}

impl<M: RawMutex, I: I2c<SevenBitAddress>> Station<M, I> {
    /// Brings the service up on an already-bound bus handle. Binding the
    /// handle to the slave addresses is the caller's startup concern and
    /// fatal there; the service never rebinds.
    pub fn start(i2c: I, magnetometer_address: u8) -> Self {
        info!("station service starting");
        Self {
            inner: Mutex::new(Inner {
                i2c,
                clock: Ds3231::new(),
                magnetometer: Rm3100::new(magnetometer_address),
            }),
        }
    }

    /// Tears the service down, handing the bus back to the caller.
    pub fn stop(self) -> I {
        info!("station service stopping");
        self.inner.into_inner().i2c
    }

    /// Serves one wire-level query. Unknown opcodes are rejected without
    /// touching the bus.
    pub async fn query(&self, opcode: u8) -> Result<Response, ServiceError<I::Error>> {
        match Command::from_opcode(opcode) {
            Some(command) => self.handle(command).await,
            None => {
                warn!("rejecting unknown opcode {}", opcode);
                Err(ServiceError::NotSupported)
            }
        }
    }

    /// Serves one command, holding the bus for the full register
    /// sequence it implies.
    pub async fn handle(&self, command: Command) -> Result<Response, ServiceError<I::Error>> {
        let mut inner = self.inner.lock().await;
        let inner = &mut *inner;
        match command {
            Command::ReadAxes => {
                let axes = inner.magnetometer.measure(&mut inner.i2c).await?;
                Ok(Response::Axes(axes))
            }
            Command::ReadDay => {
                let day = inner.clock.date(&mut inner.i2c).await?;
                Ok(Response::Day(day))
            }
            Command::ReadTime => {
                let time = inner.clock.time(&mut inner.i2c).await?;
                Ok(Response::Time(time))
            }
            Command::ReadTemperature => {
                let temperature = inner.clock.temperature(&mut inner.i2c).await?;
                Ok(Response::Temperature(temperature))
            }
        }
    }
}
