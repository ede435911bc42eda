//! Host-side hardware doubles for unit tests

use heapless::{Deque, String, Vec};
use vernier_display::{CharDisplay, DisplayError, Screen};
use vernier_hal::{UartRx, UartTx};

use crate::inspection::Measurement;
use crate::traits::{SensorError, StationIo};

/// Scripted station I/O
///
/// Each read of an input pops the next scripted level; once a script runs
/// out the input reads its idle level. Outputs are recorded.
pub struct MockIo {
    proximity: Deque<bool, 128>,
    emergency: Deque<bool, 128>,
    samples: Deque<Result<Measurement, SensorError>, 32>,
    proximity_idle: bool,
    green: bool,
    red: bool,
    buzzer: bool,
    green_pulses: u32,
    red_pulses: u32,
    red_toggles: u32,
    beeps: u32,
    samples_taken: u32,
}

impl MockIo {
    pub fn new() -> Self {
        Self {
            proximity: Deque::new(),
            emergency: Deque::new(),
            samples: Deque::new(),
            proximity_idle: false,
            green: false,
            red: false,
            buzzer: false,
            green_pulses: 0,
            red_pulses: 0,
            red_toggles: 0,
            beeps: 0,
            samples_taken: 0,
        }
    }

    pub fn script_proximity(&mut self, levels: &[bool]) {
        for &level in levels {
            self.proximity.push_back(level).unwrap();
        }
    }

    pub fn script_emergency(&mut self, levels: &[bool]) {
        for &level in levels {
            self.emergency.push_back(level).unwrap();
        }
    }

    /// Level reported once the proximity script is exhausted
    pub fn hold_proximity(&mut self, level: bool) {
        self.proximity_idle = level;
    }

    pub fn queue_sample(&mut self, raw: u16) {
        self.samples.push_back(Measurement::new(raw)).unwrap();
    }

    pub fn queue_sample_error(&mut self, error: SensorError) {
        self.samples.push_back(Err(error)).unwrap();
    }

    pub fn green(&self) -> bool {
        self.green
    }

    pub fn red(&self) -> bool {
        self.red
    }

    pub fn buzzer(&self) -> bool {
        self.buzzer
    }

    pub fn green_pulses(&self) -> u32 {
        self.green_pulses
    }

    pub fn red_pulses(&self) -> u32 {
        self.red_pulses
    }

    pub fn red_toggles(&self) -> u32 {
        self.red_toggles
    }

    /// Off-to-on transitions of the buzzer
    pub fn beeps(&self) -> u32 {
        self.beeps
    }

    pub fn samples_taken(&self) -> u32 {
        self.samples_taken
    }
}

impl StationIo for MockIo {
    fn part_present(&mut self) -> bool {
        self.proximity.pop_front().unwrap_or(self.proximity_idle)
    }

    fn emergency_stop_asserted(&mut self) -> bool {
        self.emergency.pop_front().unwrap_or(false)
    }

    fn set_green(&mut self, on: bool) {
        if on && !self.green {
            self.green_pulses += 1;
        }
        self.green = on;
    }

    fn set_red(&mut self, on: bool) {
        if on && !self.red {
            self.red_pulses += 1;
        }
        self.red = on;
    }

    fn toggle_red(&mut self) {
        self.red_toggles += 1;
        self.red = !self.red;
    }

    fn set_buzzer(&mut self, on: bool) {
        if on && !self.buzzer {
            self.beeps += 1;
        }
        self.buzzer = on;
    }

    fn sample(&mut self) -> Result<Measurement, SensorError> {
        self.samples_taken += 1;
        self.samples
            .pop_front()
            .unwrap_or_else(|| Measurement::new(512))
    }
}

/// Loopback console: scripted receive bytes, captured transmit bytes
pub struct MockConsole {
    rx: Deque<u8, 64>,
    tx: Vec<u8, 1024>,
    fail_writes: bool,
    flushes: u32,
}

impl MockConsole {
    pub fn new() -> Self {
        Self {
            rx: Deque::new(),
            tx: Vec::new(),
            fail_writes: false,
            flushes: 0,
        }
    }

    pub fn type_bytes(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.rx.push_back(b).unwrap();
        }
    }

    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn output(&self) -> &str {
        core::str::from_utf8(&self.tx).unwrap()
    }

    pub fn count(&self, needle: &str) -> usize {
        self.output().matches(needle).count()
    }

    pub fn clear_output(&mut self) {
        self.tx.clear();
    }

    pub fn flushes(&self) -> u32 {
        self.flushes
    }

    pub fn data_pending(&self) -> bool {
        !self.rx.is_empty()
    }
}

impl UartTx for MockConsole {
    type Error = ();

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), ()> {
        if self.fail_writes {
            return Err(());
        }
        self.tx.extend_from_slice(data)
    }

    fn flush(&mut self) -> Result<(), ()> {
        self.flushes += 1;
        Ok(())
    }
}

impl UartRx for MockConsole {
    type Error = ();

    fn try_read_byte(&mut self) -> Result<Option<u8>, ()> {
        Ok(self.rx.pop_front())
    }

    fn data_ready(&mut self) -> Result<bool, ()> {
        Ok(!self.rx.is_empty())
    }
}

/// Delay that only records how long it was asked to wait
#[derive(Default)]
pub struct MockDelay {
    total_ns: u64,
    calls: u32,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_ms(&self) -> u64 {
        self.total_ns / 1_000_000
    }

    pub fn calls(&self) -> u32 {
        self.calls
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
        self.calls += 1;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.total_ns += u64::from(ms) * 1_000_000;
        self.calls += 1;
    }
}

/// Screen that also keeps every text written to it
pub struct RecordingDisplay {
    pub screen: Screen,
    writes: Vec<String<16>, 256>,
    fail: bool,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self {
            screen: Screen::new(),
            writes: Vec::new(),
            fail: false,
        }
    }

    pub fn fail(&mut self, fail: bool) {
        self.fail = fail;
    }

    pub fn wrote(&self, text: &str) -> bool {
        self.writes.iter().any(|w| w.as_str() == text)
    }

    pub fn forget_writes(&mut self) {
        self.writes.clear();
    }
}

impl CharDisplay for RecordingDisplay {
    fn clear(&mut self) -> Result<(), DisplayError> {
        if self.fail {
            return Err(DisplayError::Communication);
        }
        self.screen.clear()
    }

    fn write_str(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
        if self.fail {
            return Err(DisplayError::Communication);
        }
        if let Ok(s) = String::try_from(text) {
            let _ = self.writes.push(s);
        }
        self.screen.write_str(row, col, text)
    }

    fn set_cursor_visible(&mut self, visible: bool) -> Result<(), DisplayError> {
        self.screen.set_cursor_visible(visible)
    }

    fn dimensions(&self) -> (u8, u8) {
        self.screen.dimensions()
    }
}
