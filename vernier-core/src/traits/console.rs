//! Operator console trait

use vernier_hal::{UartRx, UartTx};
use vernier_protocol::ConsoleMessage;

/// Errors on the console link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConsoleError {
    /// UART transmit or receive failure
    Io,
    /// Message did not fit its line buffer
    Encode,
}

/// Duplex byte channel to the operator terminal
pub trait Console {
    /// Take one received byte without waiting
    fn poll_byte(&mut self) -> Result<Option<u8>, ConsoleError>;

    /// Write raw bytes
    fn write_bytes(&mut self, data: &[u8]) -> Result<(), ConsoleError>;

    /// Wait until written bytes have left the transmitter
    fn flush(&mut self) -> Result<(), ConsoleError> {
        Ok(())
    }

    /// Encode and write a protocol message
    ///
    /// Complete lines are flushed so a telemetry record never sits half
    /// sent in the transmit buffer.
    fn send(&mut self, message: &ConsoleMessage<'_>) -> Result<(), ConsoleError> {
        let line = message.encode().map_err(|_| ConsoleError::Encode)?;
        self.write_bytes(line.as_bytes())?;
        if message.is_complete_line() {
            self.flush()?;
        }
        Ok(())
    }
}

// Any full-duplex UART is a console
impl<T: UartTx + UartRx> Console for T {
    fn poll_byte(&mut self) -> Result<Option<u8>, ConsoleError> {
        self.try_read_byte().map_err(|_| ConsoleError::Io)
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<(), ConsoleError> {
        self.write_blocking(data).map_err(|_| ConsoleError::Io)
    }

    fn flush(&mut self) -> Result<(), ConsoleError> {
        UartTx::flush(self).map_err(|_| ConsoleError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockConsole;
    use vernier_protocol::Telemetry;

    #[test]
    fn test_partial_output_not_flushed() {
        let mut console = MockConsole::new();
        console.send(&ConsoleMessage::LoginPrompt).unwrap();
        console.send(&ConsoleMessage::DigitEcho).unwrap();
        assert_eq!(console.output(), "\r\nLogin with ID: *");
        assert_eq!(console.flushes(), 0);
    }

    #[test]
    fn test_telemetry_line_flushed() {
        let mut console = MockConsole::new();
        let record = Telemetry {
            operator: "RAMI",
            accepted: 3,
            rejected: 1,
        };
        console.send(&ConsoleMessage::Telemetry(record)).unwrap();
        assert_eq!(console.output(), "OP:RAMI OK:3 KO:1\r\n");
        assert_eq!(console.flushes(), 1);
    }

    #[test]
    fn test_failed_write_skips_flush() {
        let mut console = MockConsole::new();
        console.fail_writes(true);
        let result = console.send(&ConsoleMessage::LoginOk { operator: "RAMI" });
        assert_eq!(result, Err(ConsoleError::Io));
        assert_eq!(console.flushes(), 0);
    }
}
