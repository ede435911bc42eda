//! Vernier - Part Inspection Workstation Firmware
//!
//! Main firmware binary for the RP2040-based inspection station. Brings
//! up the peripherals, wires them into the board-agnostic `Workstation`
//! and hands control to its loop.
//!
//! Named after the vernier scale - the sliding secondary scale that lets
//! a caliper read finer than its main graduations.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::I2c;
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Uart};
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use vernier_core::config::StationConfig;
use vernier_core::session::FixedCredential;
use vernier_core::state::Event;
use vernier_core::traits::Board;
use vernier_core::{Peripherals, Workstation};
use vernier_drivers::indicator::{GpioIndicator, Polarity};
use vernier_drivers::lcd::{Hd44780, DEFAULT_ADDRESS};
use vernier_drivers::sensor::Potentiometer;
use vernier_hal::i2c::I2cConfig;
use vernier_hal::UartConfig;
use vernier_hal_rp2040::{i2c, pins, uart};
use vernier_hal_rp2040::{AdcInput, BlockingI2c, ConsoleUart, GpioInput, GpioOutput};

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Vernier firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Console: UART0 on pins::CONSOLE_TX / pins::CONSOLE_RX
    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 64]);
    let uart = Uart::new_blocking(
        p.UART0,
        p.PIN_0,
        p.PIN_1,
        uart::embassy_config(&UartConfig::CONSOLE),
    );
    let console = ConsoleUart::new(uart.into_buffered(Irqs, tx_buf, rx_buf));
    info!(
        "Console UART initialized on GPIO{}/GPIO{}",
        pins::CONSOLE_TX,
        pins::CONSOLE_RX
    );

    // LCD: PCF8574 backpack on I2C0, pins::LCD_SCL / pins::LCD_SDA
    let bus = I2c::new_blocking(
        p.I2C0,
        p.PIN_17,
        p.PIN_16,
        i2c::embassy_config(&I2cConfig::STANDARD),
    );
    let mut lcd = Hd44780::new(BlockingI2c::new(bus), Delay, DEFAULT_ADDRESS);
    match lcd.init() {
        Ok(()) => info!("LCD initialized at {:#x}", DEFAULT_ADDRESS),
        Err(e) => warn!("LCD init failed: {}", e),
    }

    // Measurement channel: ADC0 on pins::MEASUREMENT
    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let channel = Channel::new_pin(p.PIN_26, Pull::None);
    let measurement = Potentiometer::new(AdcInput::new(adc, channel));

    // Station I/O
    let board = Board {
        proximity: GpioInput::new(Input::new(p.PIN_2, Pull::Down)),
        emergency_stop: GpioInput::new(Input::new(p.PIN_3, Pull::Down)),
        green: GpioIndicator::lamp(GpioOutput::new(Output::new(p.PIN_6, Level::Low))),
        red: GpioIndicator::lamp(GpioOutput::new(Output::new(p.PIN_7, Level::Low))),
        buzzer: GpioIndicator::buzzer(
            GpioOutput::new(Output::new(p.PIN_8, Level::Low)),
            Polarity::ActiveHigh,
        ),
        measurement,
    };
    info!("Station I/O initialized");

    let config = StationConfig::DEFAULT;
    info!(
        "Tolerance window {}..={}, poll period {} ms",
        config.tolerance.min, config.tolerance.max, config.timing.poll_period_ms
    );

    let mut station = Workstation::new(
        Peripherals {
            io: board,
            console,
            display: lcd,
            delay: Delay,
        },
        FixedCredential::DEFAULT,
        config,
    );

    info!("Waiting for operator badge");
    station.run(log_event)
}

/// Report one loop event over RTT
fn log_event(event: Event) {
    if event.is_fault() {
        error!("Station fault: {}", event);
        return;
    }
    if event.is_safety_event() {
        warn!("Interlock: {}", event);
        return;
    }
    match event {
        Event::LoginRejected => warn!("Badge rejected"),
        Event::LoginAccepted => info!("Operator logged in, station running"),
        Event::PartInspected(verdict) => debug!("Part inspected: {}", verdict),
        Event::SecondElapsed => trace!("Tick"),
        _ => {}
    }
}
