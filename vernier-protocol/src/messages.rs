//! Outbound console lines
//!
//! Every message the station writes to the console, with its exact byte
//! text. Encoding never allocates; lines are built in a fixed buffer.

use core::fmt::Write;

use heapless::String;

/// Longest line the station ever writes
///
/// The telemetry line is the widest: `OP:` + 5-char name + two labelled
/// `u32` counts + CRLF = 38 bytes.
pub const MAX_LINE_LEN: usize = 48;

/// Encoded console line
pub type Line = String<MAX_LINE_LEN>;

/// Prompt written when the login gate opens
pub const LOGIN_PROMPT: &str = "\r\nLogin with ID: ";

/// Written after a rejected badge entry; doubles as the retry prompt
pub const LOGIN_ERROR: &str = "\r\nERROR\r\nCODE: ";

/// Error encoding a console line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncodeError {
    /// Line does not fit in `MAX_LINE_LEN` bytes
    Overflow,
}

/// Per-part telemetry record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Telemetry<'a> {
    /// Logged-in operator
    pub operator: &'a str,
    /// Parts within tolerance so far
    pub accepted: u32,
    /// Parts out of tolerance so far
    pub rejected: u32,
}

/// Messages from the station to the console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConsoleMessage<'a> {
    /// Login gate opened
    LoginPrompt,
    /// Mask echoed for one accepted badge digit
    DigitEcho,
    /// Badge entry did not match
    LoginError,
    /// Badge entry matched
    LoginOk { operator: &'a str },
    /// One part inspected
    Telemetry(Telemetry<'a>),
}

impl<'a> ConsoleMessage<'a> {
    /// Encode this message into its line text
    pub fn encode(&self) -> Result<Line, EncodeError> {
        let mut line = Line::new();
        self.write_into(&mut line).map_err(|_| EncodeError::Overflow)?;
        Ok(line)
    }

    fn write_into(&self, out: &mut Line) -> core::fmt::Result {
        match self {
            ConsoleMessage::LoginPrompt => out.write_str(LOGIN_PROMPT),
            ConsoleMessage::DigitEcho => out.write_char(crate::MASK_CHAR as char),
            ConsoleMessage::LoginError => out.write_str(LOGIN_ERROR),
            ConsoleMessage::LoginOk { operator } => {
                write!(out, "\r\nLOGIN OK: {}\r\n", operator)
            }
            ConsoleMessage::Telemetry(t) => {
                write!(
                    out,
                    "OP:{} OK:{} KO:{}\r\n",
                    t.operator, t.accepted, t.rejected
                )
            }
        }
    }

    /// Returns true if this message ends with a line break
    pub fn is_complete_line(&self) -> bool {
        matches!(
            self,
            ConsoleMessage::LoginOk { .. } | ConsoleMessage::Telemetry(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_login_texts() {
        assert_eq!(
            ConsoleMessage::LoginPrompt.encode().unwrap().as_str(),
            "\r\nLogin with ID: "
        );
        assert_eq!(
            ConsoleMessage::LoginError.encode().unwrap().as_str(),
            "\r\nERROR\r\nCODE: "
        );
        assert_eq!(ConsoleMessage::DigitEcho.encode().unwrap().as_str(), "*");
        assert_eq!(
            ConsoleMessage::LoginOk { operator: "RAMI" }
                .encode()
                .unwrap()
                .as_str(),
            "\r\nLOGIN OK: RAMI\r\n"
        );
    }

    #[test]
    fn test_telemetry_text() {
        let msg = ConsoleMessage::Telemetry(Telemetry {
            operator: "RAMI",
            accepted: 1,
            rejected: 0,
        });
        assert_eq!(msg.encode().unwrap().as_str(), "OP:RAMI OK:1 KO:0\r\n");
        assert!(msg.is_complete_line());
        assert!(!ConsoleMessage::DigitEcho.is_complete_line());
    }

    #[test]
    fn test_widest_telemetry_fits() {
        let msg = ConsoleMessage::Telemetry(Telemetry {
            operator: "ABCDE",
            accepted: u32::MAX,
            rejected: u32::MAX,
        });
        let line = msg.encode().unwrap();
        assert_eq!(line.len(), 38);
    }

    #[test]
    fn test_oversized_name_overflows() {
        let name = "X".repeat(MAX_LINE_LEN);
        let msg = ConsoleMessage::LoginOk { operator: &name };
        assert_eq!(msg.encode(), Err(EncodeError::Overflow));
    }

    proptest! {
        #[test]
        fn prop_telemetry_matches_fields(
            operator in "[A-Z]{1,5}",
            accepted in any::<u32>(),
            rejected in any::<u32>(),
        ) {
            let msg = ConsoleMessage::Telemetry(Telemetry {
                operator: &operator,
                accepted,
                rejected,
            });
            let line = msg.encode().unwrap();
            let expected = format!("OP:{} OK:{} KO:{}\r\n", operator, accepted, rejected);
            prop_assert_eq!(line.as_str(), expected.as_str());
        }
    }
}
