//! Sampling-station demo: date, time, temperature and an X/Y magnetic
//! measurement every ten seconds, one hundred readings total.
//!
//! Runs against the crate's scripted bus double, so it needs no
//! hardware; swap `TestBus` for a real `embedded-hal-async` I2C handle
//! bound to the two slave addresses to run against live sensors. One
//! tick in ten scripts a magnetometer that misses its poll window, to
//! show a skipped sample leaving the loop running.

use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_time::{Duration, Timer};
use futures::executor::block_on;
use magstation_device::drivers::sensors::{ds3231, rm3100};
use magstation_device::service::{Command, Response, Station};
use magstation_device::testutil::TestBus;

const MAG_ADDR: u8 = rm3100::address(true, true);
const SAMPLE_PERIOD: Duration = Duration::from_secs(10);
const SAMPLES: u32 = 100;

fn bcd(value: u8) -> u8 {
    (value / 10) << 4 | (value % 10)
}

fn scripted_bus() -> TestBus {
    let mut bus = TestBus::new();
    for tick in 0..SAMPLES {
        let second = (tick % 60) as u8;
        let minute = (30 + tick / 60) as u8;

        bus.expect_write_read(ds3231::ADDR, &[0x04], &[0x25]);
        bus.expect_write_read(ds3231::ADDR, &[0x01], &[bcd(minute)]);
        bus.expect_write_read(ds3231::ADDR, &[0x00], &[bcd(second)]);
        bus.expect_write_read(ds3231::ADDR, &[0x02], &[0x09]);
        bus.expect_write_read(ds3231::ADDR, &[0x11], &[0x19]);

        bus.expect_write(MAG_ADDR, &[0x00, 0x30]);
        if tick % 10 == 9 {
            for _ in 0..10 {
                bus.expect_write_read(MAG_ADDR, &[0xB4], &[0x00]);
            }
        } else {
            bus.expect_write_read(MAG_ADDR, &[0xB4], &[0x80]);
            bus.expect_write_read(MAG_ADDR, &[0xA4], &[0x00, 0x01, 0x00, 0xFF, 0xFF, 0xFF]);
        }
    }
    bus
}

fn main() {
    block_on(run());
}

async fn run() {
    println!(
        "MagStation: {SAMPLES} readings, one every {} seconds",
        SAMPLE_PERIOD.as_secs()
    );

    let station = Station::<NoopRawMutex, _>::start(scripted_bus(), MAG_ADDR);
    for _ in 0..SAMPLES {
        match station.handle(Command::ReadDay).await {
            Ok(Response::Day(day)) => print!("Date:{day}"),
            Ok(_) => {}
            Err(e) => print!("date read failed: {e:?}"),
        }
        match station.handle(Command::ReadTime).await {
            Ok(Response::Time(time)) => print!("\tTime: {time}"),
            Ok(_) => {}
            Err(e) => print!("\ttime read failed: {e:?}"),
        }
        match station.handle(Command::ReadTemperature).await {
            Ok(Response::Temperature(temperature)) => print!("\tTemp:{temperature}"),
            Ok(_) => {}
            Err(e) => print!("\ttemperature read failed: {e:?}"),
        }
        match station.handle(Command::ReadAxes).await {
            Ok(Response::Axes(axes)) => println!("\t{axes}"),
            Ok(_) => println!(),
            Err(e) => println!("\tmagnetometer sample skipped: {e:?}"),
        }
        Timer::after(SAMPLE_PERIOD).await;
    }

    station.stop().finish();
}
