pub mod magnetic;
pub mod temperature;
pub mod time;

use core::fmt::{Debug, Formatter};

use temperature::{Celsius, Temperature};
use time::{DayOfMonth, TimeOfDay};

/// One complete clock acquisition: date, time and temperature read in a
/// single pass over the sensor's registers.
#[derive(Copy, Clone)]
pub struct ClockReading {
    pub day: DayOfMonth,
    pub time: TimeOfDay,
    pub temperature: Temperature<Celsius>,
}

impl Debug for ClockReading {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ClockReading")
            .field("day", &self.day)
            .field("time", &self.time)
            .field("temperature", &self.temperature)
            .finish()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ClockReading {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(
            f,
            "ClockReading(day: {}, time: {}, temperature: {})",
            &self.day,
            &self.time,
            &self.temperature
        );
    }
}
