use crate::traits::i2c::I2cAddress;
use embedded_hal_async::i2c::*;

pub const POLL: u8 = 0x00;

/// Single-measurement request register. Each axis bit set here is
/// sampled once; the device clears the byte when the measurement
/// completes, so the register is write-only from the driver's side.
#[derive(Debug, Copy, Clone)]
pub struct SinglePoll {
    x: bool,
    y: bool,
    z: bool,
}

impl SinglePoll {
    pub fn new() -> Self {
        Self {
            x: false,
            y: false,
            z: false,
        }
    }

    pub async fn write<I: I2c>(
        address: I2cAddress,
        i2c: &mut I,
        reg: SinglePoll,
    ) -> Result<(), I::Error> {
        Ok(i2c.write(address.into(), &[POLL, reg.into()]).await?)
    }

    pub async fn request<I: I2c, F: FnOnce(&mut SinglePoll)>(
        address: I2cAddress,
        i2c: &mut I,
        select: F,
    ) -> Result<(), I::Error> {
        let mut reg = Self::new();
        select(&mut reg);
        Self::write(address, i2c, reg).await
    }

    pub fn x(&mut self) -> &mut Self {
        self.x = true;
        self
    }

    pub fn y(&mut self) -> &mut Self {
        self.y = true;
        self
    }

    pub fn z(&mut self) -> &mut Self {
        self.z = true;
        self
    }
}

impl From<SinglePoll> for u8 {
    fn from(reg: SinglePoll) -> u8 {
        let mut value = 0;
        if reg.x {
            value |= 0b0001_0000;
        }
        if reg.y {
            value |= 0b0010_0000;
        }
        if reg.z {
            value |= 0b0100_0000;
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_selection_bits() {
        let mut reg = SinglePoll::new();
        reg.x().y();
        assert_eq!(u8::from(reg), 0x30);

        let mut reg = SinglePoll::new();
        reg.z();
        assert_eq!(u8::from(reg), 0x40);

        assert_eq!(u8::from(SinglePoll::new()), 0x00);
    }
}
