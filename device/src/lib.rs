#![cfg_attr(not(feature = "std"), no_std)]
//! Register-protocol drivers for the MagStation sensor pair: a BCD
//! clock/temperature device (DS3231-class register map) and the PNI RM3100
//! geomagnetic sensor.
//!
//! The crate is transport-generic. Drivers run against any
//! [`embedded_hal_async::i2c::I2c`] bus handle that is already bound to the
//! slave address (the per-byte magnetometer variant against the blocking
//! trait), decode raw register bytes into sign-resolved domain values, and
//! surface bus faults and sensor-state conditions as distinct errors. The
//! [`service`] module wraps the drivers behind a serialized command/response
//! surface.

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod codec;
pub mod domain;
pub mod drivers;
pub mod service;
pub mod traits;

#[cfg(feature = "std")]
pub mod testutil;
