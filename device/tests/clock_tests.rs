#[cfg(feature = "std")]
mod tests {
    use futures::executor::block_on;
    use magstation_device::domain::time::{DayOfMonth, TimeOfDay};
    use magstation_device::drivers::sensors::ds3231::{self, Ds3231};
    use magstation_device::drivers::sensors::MeasurementError;
    use magstation_device::testutil::{TestBus, TestBusError};

    #[test]
    fn decodes_a_full_clock_sample() {
        let mut bus = TestBus::new();
        bus.expect_write_read(ds3231::ADDR, &[0x04], &[0x25]);
        bus.expect_write_read(ds3231::ADDR, &[0x01], &[0x30]);
        bus.expect_write_read(ds3231::ADDR, &[0x00], &[0x15]);
        bus.expect_write_read(ds3231::ADDR, &[0x02], &[0x09]);
        bus.expect_write_read(ds3231::ADDR, &[0x11], &[0x19]);

        let mut clock = Ds3231::new();
        let reading = block_on(clock.sample(&mut bus)).unwrap();

        assert_eq!(reading.day, DayOfMonth(25));
        assert_eq!(
            reading.time,
            TimeOfDay {
                hour: 9,
                minute: 30,
                second: 15
            }
        );
        assert_eq!(reading.temperature.raw_value(), 19);
        bus.finish();
    }

    #[test]
    fn time_visits_minutes_seconds_hours_in_that_order() {
        let mut bus = TestBus::new();
        bus.expect_write_read(ds3231::ADDR, &[0x01], &[0x59]);
        bus.expect_write_read(ds3231::ADDR, &[0x00], &[0x00]);
        bus.expect_write_read(ds3231::ADDR, &[0x02], &[0x23]);

        let mut clock = Ds3231::new();
        let time = block_on(clock.time(&mut bus)).unwrap();

        assert_eq!(
            time,
            TimeOfDay {
                hour: 23,
                minute: 59,
                second: 0
            }
        );
        bus.finish();
    }

    #[test]
    fn temperature_sign_bit_negates_the_magnitude() {
        let mut bus = TestBus::new();
        bus.expect_write_read(ds3231::ADDR, &[0x11], &[0x99]);

        let mut clock = Ds3231::new();
        let temperature = block_on(clock.temperature(&mut bus)).unwrap();

        assert_eq!(temperature.raw_value(), -19);
        bus.finish();
    }

    #[test]
    fn bus_fault_mid_sequence_drops_the_sample() {
        let mut bus = TestBus::new();
        bus.expect_write_read(ds3231::ADDR, &[0x01], &[0x30]);
        bus.expect_write_read_error(ds3231::ADDR, &[0x00], TestBusError::Incomplete);

        let mut clock = Ds3231::new();
        let result = block_on(clock.time(&mut bus));

        assert!(matches!(
            result,
            Err(MeasurementError::Bus(TestBusError::Incomplete))
        ));
        bus.finish();
    }
}
