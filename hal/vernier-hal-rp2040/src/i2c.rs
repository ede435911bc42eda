//! I2C master adapter
//!
//! Any blocking `embedded-hal` I2C master (such as embassy-rp's
//! `I2c<'_, _, Blocking>`) can drive the LCD backpack.

use embedded_hal::i2c::I2c;
use vernier_hal::i2c::I2cConfig;
use vernier_hal::I2cBus;

/// Blocking I2C bus
pub struct BlockingI2c<T> {
    bus: T,
}

impl<T: I2c> BlockingI2c<T> {
    /// Wrap a blocking I2C master
    pub fn new(bus: T) -> Self {
        Self { bus }
    }
}

impl<T: I2c> I2cBus for BlockingI2c<T> {
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), T::Error> {
        self.bus.write(address, data)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), T::Error> {
        self.bus.read(address, buf)
    }
}

/// Translate shared I2C settings to the embassy-rp config
pub fn embassy_config(config: &I2cConfig) -> embassy_rp::i2c::Config {
    let mut cfg = embassy_rp::i2c::Config::default();
    cfg.frequency = config.frequency;
    cfg
}
