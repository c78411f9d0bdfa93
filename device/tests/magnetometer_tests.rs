#[cfg(feature = "std")]
mod tests {
    use embassy_time::Duration;
    use futures::executor::block_on;
    use magstation_device::domain::magnetic::AxisPair;
    use magstation_device::drivers::sensors::rm3100::{self, blocking, PollConfig, Rm3100};
    use magstation_device::drivers::sensors::MeasurementError;
    use magstation_device::testutil::{TestBus, TestBusError};

    // Both strap pins high.
    const MAG: u8 = rm3100::address(true, true);

    #[test]
    fn strap_pins_select_the_address() {
        assert_eq!(rm3100::address(false, false), 0x20);
        assert_eq!(rm3100::address(false, true), 0x21);
        assert_eq!(rm3100::address(true, false), 0x22);
        assert_eq!(MAG, 0x23);
    }

    #[test]
    fn measures_after_first_ready_poll() {
        let mut bus = TestBus::new();
        bus.expect_write(MAG, &[0x00, 0x30]);
        bus.expect_write_read(MAG, &[0xB4], &[0x80]);
        bus.expect_write_read(MAG, &[0xA4], &[0x00, 0x01, 0x00, 0xFF, 0xFF, 0xFF]);

        let mut sensor = Rm3100::new(MAG);
        let axes = block_on(sensor.measure(&mut bus)).unwrap();

        assert_eq!(axes, AxisPair { x: 256, y: -1 });
        bus.finish();
    }

    #[test]
    fn polls_until_the_ready_flag_appears() {
        let mut bus = TestBus::new();
        bus.expect_write(MAG, &[0x00, 0x30]);
        bus.expect_write_read(MAG, &[0xB4], &[0x00]);
        bus.expect_write_read(MAG, &[0xB4], &[0x00]);
        bus.expect_write_read(MAG, &[0xB4], &[0x80]);
        bus.expect_write_read(MAG, &[0xA4], &[0x00, 0x00, 0x05, 0x80, 0x00, 0x00]);

        let mut sensor = Rm3100::new(MAG).with_poll_config(PollConfig {
            attempts: 5,
            interval: Duration::from_micros(100),
        });
        let axes = block_on(sensor.measure(&mut bus)).unwrap();

        assert_eq!(
            axes,
            AxisPair {
                x: 5,
                y: -8_388_608
            }
        );
        bus.finish();
    }

    #[test]
    fn timeout_performs_zero_result_reads() {
        let mut bus = TestBus::new();
        bus.expect_write(MAG, &[0x00, 0x30]);
        bus.expect_write_read(MAG, &[0xB4], &[0x00]);
        bus.expect_write_read(MAG, &[0xB4], &[0x00]);
        bus.expect_write_read(MAG, &[0xB4], &[0x00]);

        let mut sensor = Rm3100::new(MAG).with_poll_config(PollConfig {
            attempts: 3,
            interval: Duration::from_micros(100),
        });
        let result = block_on(sensor.measure(&mut bus));

        assert!(matches!(result, Err(MeasurementError::Timeout)));
        // A result-register read past this point would have tripped the
        // script; an empty script proves none happened.
        bus.finish();
    }

    #[test]
    fn trigger_fault_loses_the_sample() {
        let mut bus = TestBus::new();
        bus.expect_write_error(MAG, &[0x00, 0x30], TestBusError::Nack);

        let mut sensor = Rm3100::new(MAG);
        let result = block_on(sensor.measure(&mut bus));

        assert!(matches!(
            result,
            Err(MeasurementError::Bus(TestBusError::Nack))
        ));
        bus.finish();
    }

    #[test]
    fn short_result_read_is_a_bus_fault() {
        let mut bus = TestBus::new();
        bus.expect_write(MAG, &[0x00, 0x30]);
        bus.expect_write_read(MAG, &[0xB4], &[0x80]);
        bus.expect_write_read_error(MAG, &[0xA4], TestBusError::Incomplete);

        let mut sensor = Rm3100::new(MAG);
        let result = block_on(sensor.measure(&mut bus));

        assert!(matches!(
            result,
            Err(MeasurementError::Bus(TestBusError::Incomplete))
        ));
        bus.finish();
    }

    #[test]
    fn per_byte_variant_reads_each_result_register() {
        let data: [u8; 6] = [0x00, 0x01, 0x00, 0xFF, 0xFF, 0xFF];
        let mut bus = TestBus::new();
        bus.expect_write(MAG, &[0x00, 0x30]);
        bus.expect_write_read(MAG, &[0xB4], &[0x80]);
        for (offset, byte) in data.iter().enumerate() {
            bus.expect_write_read(MAG, &[0xA4 + offset as u8], &[*byte]);
        }

        let mut sensor = blocking::Rm3100::new(MAG);
        let axes = sensor.measure(&mut bus).unwrap();

        assert_eq!(axes, AxisPair { x: 256, y: -1 });
        bus.finish();
    }

    #[test]
    fn per_byte_variant_checks_readiness_exactly_once() {
        let mut bus = TestBus::new();
        bus.expect_write(MAG, &[0x00, 0x30]);
        bus.expect_write_read(MAG, &[0xB4], &[0x7F]);

        let mut sensor = blocking::Rm3100::new(MAG);
        let result = sensor.measure(&mut bus);

        assert!(matches!(result, Err(MeasurementError::NotReady)));
        bus.finish();
    }
}
