//! Console UART adapter
//!
//! RP2040 has two UART peripherals (UART0 and UART1). The console runs on
//! a buffered UART so received bytes queue up between polls.

use embedded_io::{Read, ReadReady, Write};
use vernier_hal::uart::{DataBits, Parity, StopBits};
use vernier_hal::{UartConfig, UartRx, UartTx};

/// UART peripheral identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartId {
    Uart0,
    Uart1,
}

/// Determine which UART can use a given GPIO pin
///
/// RP2040 has specific pin mappings for each UART.
pub const fn gpio_to_uart(gpio: u8) -> Option<UartId> {
    // UART0: GPIO 0/1, 12/13, 16/17
    // UART1: GPIO 4/5, 8/9, 20/21, 24/25
    match gpio {
        0 | 1 | 12 | 13 | 16 | 17 => Some(UartId::Uart0),
        4 | 5 | 8 | 9 | 20 | 21 | 24 | 25 => Some(UartId::Uart1),
        _ => None,
    }
}

/// Translate shared UART framing to the embassy-rp config
pub fn embassy_config(config: &UartConfig) -> embassy_rp::uart::Config {
    let mut cfg = embassy_rp::uart::Config::default();
    cfg.baudrate = config.baudrate;
    cfg.data_bits = match config.data_bits {
        DataBits::Seven => embassy_rp::uart::DataBits::DataBits7,
        DataBits::Eight => embassy_rp::uart::DataBits::DataBits8,
    };
    cfg.parity = match config.parity {
        Parity::None => embassy_rp::uart::Parity::ParityNone,
        Parity::Even => embassy_rp::uart::Parity::ParityEven,
        Parity::Odd => embassy_rp::uart::Parity::ParityOdd,
    };
    cfg.stop_bits = match config.stop_bits {
        StopBits::One => embassy_rp::uart::StopBits::STOP1,
        StopBits::Two => embassy_rp::uart::StopBits::STOP2,
    };
    cfg
}

/// Operator console over any blocking `embedded-io` serial port
pub struct ConsoleUart<U> {
    uart: U,
}

impl<U> ConsoleUart<U> {
    /// Wrap a serial port
    pub fn new(uart: U) -> Self {
        Self { uart }
    }
}

impl<U: Write> UartTx for ConsoleUart<U> {
    type Error = U::Error;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), U::Error> {
        self.uart.write_all(data)
    }

    fn flush(&mut self) -> Result<(), U::Error> {
        self.uart.flush()
    }
}

impl<U: Read + ReadReady> UartRx for ConsoleUart<U> {
    type Error = U::Error;

    fn try_read_byte(&mut self) -> Result<Option<u8>, U::Error> {
        if !self.uart.read_ready()? {
            return Ok(None);
        }
        let mut byte = [0u8; 1];
        match self.uart.read(&mut byte)? {
            0 => Ok(None),
            _ => Ok(Some(byte[0])),
        }
    }

    fn data_ready(&mut self) -> Result<bool, U::Error> {
        self.uart.read_ready()
    }
}
