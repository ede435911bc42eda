//! Station board wiring
//!
//! GPIO numbers for everything the workstation connects to. The firmware
//! takes the matching `PIN_n` peripherals; the checks below keep the map
//! consistent with what each RP2040 peripheral can reach.

use crate::adc::AdcChannel;
use crate::gpio::GPIO_COUNT;
use crate::uart::{gpio_to_uart, UartId};

/// Console UART TX
pub const CONSOLE_TX: u8 = 0;
/// Console UART RX
pub const CONSOLE_RX: u8 = 1;
/// Proximity sensor input (high = part present)
pub const PROXIMITY: u8 = 2;
/// Emergency-stop input (high = pressed)
pub const EMERGENCY_STOP: u8 = 3;
/// Green lamp
pub const LED_GREEN: u8 = 6;
/// Red lamp
pub const LED_RED: u8 = 7;
/// Buzzer
pub const BUZZER: u8 = 8;
/// LCD backpack SDA (I2C0)
pub const LCD_SDA: u8 = 16;
/// LCD backpack SCL (I2C0)
pub const LCD_SCL: u8 = 17;
/// Measurement potentiometer
pub const MEASUREMENT: u8 = 26;

/// Every pin the station claims
pub const ALL: [u8; 10] = [
    CONSOLE_TX,
    CONSOLE_RX,
    PROXIMITY,
    EMERGENCY_STOP,
    LED_GREEN,
    LED_RED,
    BUZZER,
    LCD_SDA,
    LCD_SCL,
    MEASUREMENT,
];

/// UART the console pins belong to
pub const CONSOLE_UART: Option<UartId> = gpio_to_uart(CONSOLE_TX);

/// ADC channel the measurement pin belongs to
pub const MEASUREMENT_CHANNEL: Option<AdcChannel> = AdcChannel::from_gpio(MEASUREMENT);

/// Check if a GPIO can act as SDA for I2C0
pub const fn is_i2c0_sda(gpio: u8) -> bool {
    matches!(gpio, 0 | 4 | 8 | 12 | 16 | 20)
}

/// Check if a GPIO can act as SCL for I2C0
pub const fn is_i2c0_scl(gpio: u8) -> bool {
    matches!(gpio, 1 | 5 | 9 | 13 | 17 | 21)
}

/// Check that no pin is claimed twice and all exist
pub const fn map_is_valid() -> bool {
    let mut i = 0;
    while i < ALL.len() {
        if ALL[i] >= GPIO_COUNT {
            return false;
        }
        let mut j = i + 1;
        while j < ALL.len() {
            if ALL[i] == ALL[j] {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const _: () = assert!(map_is_valid());
const _: () = assert!(is_i2c0_sda(LCD_SDA) && is_i2c0_scl(LCD_SCL));
const _: () = assert!(matches!(CONSOLE_UART, Some(UartId::Uart0)));
const _: () = assert!(matches!(MEASUREMENT_CHANNEL, Some(AdcChannel::Adc0)));
