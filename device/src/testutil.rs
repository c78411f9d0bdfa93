//! Test utilities: a scripted bus double for driving the drivers and the
//! service in host tests.

use std::collections::VecDeque;
use std::vec::Vec;

use embedded_hal::i2c::{ErrorKind, ErrorType, NoAcknowledgeSource, Operation};

/// Bus faults the scripted bus can inject.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TestBusError {
    /// Fewer bytes were transferred than requested. The transfer is an
    /// error as a whole; no partial data is handed back.
    Incomplete,
    /// The device did not acknowledge.
    Nack,
}

impl embedded_hal::i2c::Error for TestBusError {
    fn kind(&self) -> ErrorKind {
        match self {
            TestBusError::Incomplete => ErrorKind::Other,
            TestBusError::Nack => ErrorKind::NoAcknowledge(NoAcknowledgeSource::Unknown),
        }
    }
}

enum Expectation {
    Write {
        address: u8,
        bytes: Vec<u8>,
        result: Result<(), TestBusError>,
    },
    WriteRead {
        address: u8,
        write: Vec<u8>,
        read: Result<Vec<u8>, TestBusError>,
    },
}

/// A strict-sequence scripted bus: every transaction must match the next
/// scripted expectation exactly, and [`TestBus::finish`] asserts the
/// script ran dry. An out-of-order or unscripted register access — a
/// result read after a timeout, interleaved traffic from a second
/// caller — panics the test.
pub struct TestBus {
    script: VecDeque<Expectation>,
}

impl TestBus {
    pub fn new() -> Self {
        Self {
            script: VecDeque::new(),
        }
    }

    /// Scripts a plain register write.
    pub fn expect_write(&mut self, address: u8, bytes: &[u8]) {
        self.script.push_back(Expectation::Write {
            address,
            bytes: bytes.to_vec(),
            result: Ok(()),
        });
    }

    /// Scripts a register write that fails on the bus.
    pub fn expect_write_error(&mut self, address: u8, bytes: &[u8], error: TestBusError) {
        self.script.push_back(Expectation::Write {
            address,
            bytes: bytes.to_vec(),
            result: Err(error),
        });
    }

    /// Scripts an addressed read: the register-address write followed by
    /// the returned bytes.
    pub fn expect_write_read(&mut self, address: u8, write: &[u8], read: &[u8]) {
        self.script.push_back(Expectation::WriteRead {
            address,
            write: write.to_vec(),
            read: Ok(read.to_vec()),
        });
    }

    /// Scripts an addressed read that fails on the bus.
    pub fn expect_write_read_error(&mut self, address: u8, write: &[u8], error: TestBusError) {
        self.script.push_back(Expectation::WriteRead {
            address,
            write: write.to_vec(),
            read: Err(error),
        });
    }

    /// Asserts every scripted transaction was consumed.
    pub fn finish(&self) {
        assert!(
            self.script.is_empty(),
            "{} scripted transactions left unconsumed",
            self.script.len()
        );
    }

    fn transact(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), TestBusError> {
        let expectation = self
            .script
            .pop_front()
            .expect("bus transaction past the end of the script");
        match expectation {
            Expectation::Write {
                address: expected,
                bytes,
                result,
            } => {
                let [Operation::Write(written)] = operations else {
                    panic!("script expected a plain register write");
                };
                assert_eq!(address, expected, "write sent to the wrong address");
                assert_eq!(*written, bytes.as_slice(), "unexpected write payload");
                result
            }
            Expectation::WriteRead {
                address: expected,
                write,
                read,
            } => {
                let [Operation::Write(written), Operation::Read(buf)] = operations else {
                    panic!("script expected an addressed read");
                };
                assert_eq!(address, expected, "read sent to the wrong address");
                assert_eq!(*written, write.as_slice(), "unexpected register address");
                match read {
                    Ok(data) => {
                        assert_eq!(buf.len(), data.len(), "read length mismatch");
                        buf.copy_from_slice(&data);
                        Ok(())
                    }
                    Err(e) => Err(e),
                }
            }
        }
    }
}

impl ErrorType for TestBus {
    type Error = TestBusError;
}

impl embedded_hal::i2c::I2c for TestBus {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        self.transact(address, operations)
    }
}

impl embedded_hal_async::i2c::I2c for TestBus {
    async fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        self.transact(address, operations)
    }
}
