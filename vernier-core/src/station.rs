//! Workstation control loop
//!
//! Owns every piece of station state and lends it to the component that
//! runs. The loop is strictly sequential: each iteration waits one poll
//! period, advances the clock, checks the interlock, then inspects a part
//! if one is in the sensing zone.

use embedded_hal::delay::DelayNs;
use heapless::Vec;
use vernier_display::{CharDisplay, DisplayError};
use vernier_protocol::{ConsoleMessage, Telemetry};

use crate::clock::ElapsedClock;
use crate::config::{StationConfig, PLACEHOLDER_OPERATOR};
use crate::inspection::{ProductionStats, Verdict};
use crate::panel;
use crate::safety::Interlock;
use crate::session::{CredentialVerifier, GateStep, OperatorSession, SessionGate};
use crate::state::{Event, State};
use crate::traits::{Console, ConsoleError, StationIo};

/// Most events one iteration can produce
pub const MAX_EVENTS: usize = 8;

/// Events produced by one loop iteration, in order of occurrence
pub type Events = Vec<Event, MAX_EVENTS>;

/// Hardware handed to the workstation
pub struct Peripherals<I, C, D, T> {
    /// Sensors, indicators and measurement channel
    pub io: I,
    /// Operator console
    pub console: C,
    /// 16x2 character display
    pub display: D,
    /// Blocking delay provider
    pub delay: T,
}

/// Failure counters for the console and display links
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkHealth {
    /// Console reads or writes that failed
    pub console_errors: u32,
    /// Display commands that failed
    pub display_errors: u32,
}

impl LinkHealth {
    /// Check if any link has ever failed
    pub fn is_degraded(&self) -> bool {
        self.console_errors > 0 || self.display_errors > 0
    }
}

/// The inspection workstation
pub struct Workstation<I, C, D, T, V> {
    io: I,
    console: C,
    display: D,
    delay: T,
    verifier: V,
    config: StationConfig,
    state: State,
    gate: SessionGate,
    session: Option<OperatorSession>,
    stats: ProductionStats,
    clock: ElapsedClock,
    interlock: Interlock,
    link: LinkHealth,
    link_fault: bool,
}

impl<I, C, D, T, V> Workstation<I, C, D, T, V>
where
    I: StationIo,
    C: Console,
    D: CharDisplay,
    T: DelayNs,
    V: CredentialVerifier,
{
    /// Assemble a station waiting for login
    pub fn new(peripherals: Peripherals<I, C, D, T>, verifier: V, config: StationConfig) -> Self {
        let Peripherals {
            io,
            console,
            display,
            delay,
        } = peripherals;

        Self {
            io,
            console,
            display,
            delay,
            verifier,
            config,
            state: State::Login,
            gate: SessionGate::new(),
            session: None,
            stats: ProductionStats::new(),
            clock: ElapsedClock::new(config.timing.ticks_per_second),
            interlock: Interlock::new(),
            link: LinkHealth::default(),
            link_fault: false,
        }
    }

    /// Show the login screen and prompt on the console
    pub fn begin_login(&mut self) {
        let result = self.display.set_cursor_visible(false);
        self.note_display(result);
        let result = panel::render_login(&mut self.display);
        self.note_display(result);
        let result = self.console.send(&ConsoleMessage::LoginPrompt);
        self.note_console(result);
    }

    /// Handle at most one console byte of badge entry
    ///
    /// Returns an event when the byte completed an attempt. Does nothing
    /// once an operator is logged in.
    pub fn poll_login(&mut self) -> Option<Event> {
        if self.state != State::Login {
            return None;
        }

        let byte = match self.console.poll_byte() {
            Ok(Some(byte)) => byte,
            Ok(None) => return None,
            Err(e) => {
                self.note_console(Err(e));
                return None;
            }
        };

        match self.gate.feed(byte, &self.verifier) {
            GateStep::Echo => {
                let result = self.console.send(&ConsoleMessage::DigitEcho);
                self.note_console(result);
                None
            }
            GateStep::Dropped | GateStep::Ignored => None,
            GateStep::Rejected => {
                let result = self.console.send(&ConsoleMessage::LoginError);
                self.note_console(result);
                Some(self.apply(Event::LoginRejected))
            }
            GateStep::Accepted(session) => {
                let result = self.console.send(&ConsoleMessage::LoginOk {
                    operator: session.operator(),
                });
                self.note_console(result);
                self.session = Some(session);

                self.beep();
                let result = self.display.clear();
                self.note_display(result);
                self.render_info();
                Some(self.apply(Event::LoginAccepted))
            }
        }
    }

    /// Run one iteration of the operating loop
    ///
    /// Returns no events while still waiting for login.
    pub fn poll(&mut self) -> Events {
        let mut events = Events::new();
        self.link_fault = false;

        if !self.state.has_operator() {
            return events;
        }

        self.delay.delay_ms(self.config.timing.poll_period_ms);

        if self.state.clock_running() && self.clock.tick() {
            self.render_info();
            self.push(&mut events, Event::SecondElapsed);
        }

        if self.interlock.check(&mut self.io).is_tripped() {
            self.trip(&mut events);
        }

        // Level-triggered: a part held in the zone is counted again after
        // every settle delay
        if self.state.inspection_allowed() && self.io.part_present() {
            self.inspect(&mut events);
        }

        if self.link_fault {
            self.push(&mut events, Event::LinkFault);
        }
        events
    }

    /// Log in, then loop forever, handing every event to `on_event`
    pub fn run<F: FnMut(Event)>(&mut self, mut on_event: F) -> ! {
        if self.state == State::Login {
            self.begin_login();
        }
        while self.state == State::Login {
            match self.poll_login() {
                Some(event) => on_event(event),
                None => core::hint::spin_loop(),
            }
        }
        loop {
            for event in self.poll() {
                on_event(event);
            }
        }
    }

    fn trip(&mut self, events: &mut Events) {
        self.push(events, Event::EmergencyAsserted);

        let result = panel::render_emergency(&mut self.display);
        self.note_display(result);
        self.interlock.engage(&mut self.io);
        self.interlock.hold(
            &mut self.io,
            &mut self.delay,
            self.config.timing.blink_half_period_ms,
        );
        self.interlock.release(&mut self.io);

        self.restore_panel();
        self.push(events, Event::EmergencyReleased);
    }

    fn inspect(&mut self, events: &mut Events) {
        let timing = self.config.timing;
        self.delay.delay_ms(timing.stabilization_ms);

        let verdict = match self.io.sample() {
            Ok(measurement) => measurement.classify(&self.config.tolerance),
            Err(_) => {
                // An unverified part never passes
                self.push(events, Event::SampleFailed);
                Verdict::Rejected
            }
        };

        match verdict {
            Verdict::Accepted => self.io.set_green(true),
            Verdict::Rejected => {
                self.io.set_red(true);
                self.beep();
            }
        }

        let snapshot = self.stats.record(verdict);

        let operator = match &self.session {
            Some(session) => session.operator(),
            None => PLACEHOLDER_OPERATOR,
        };
        let telemetry = Telemetry {
            operator,
            accepted: snapshot.accepted,
            rejected: snapshot.rejected,
        };
        let result = self.console.send(&ConsoleMessage::Telemetry(telemetry));
        self.note_console(result);

        let result = panel::render_stats(&mut self.display, &snapshot);
        self.note_display(result);

        self.io.set_green(false);
        self.io.set_red(false);
        self.delay.delay_ms(timing.settle_ms);

        self.push(events, Event::PartInspected(verdict));
    }

    fn beep(&mut self) {
        self.io.beep(&mut self.delay, self.config.timing.beep_ms);
    }

    fn render_info(&mut self) {
        let operator = match &self.session {
            Some(session) => session.operator(),
            None => PLACEHOLDER_OPERATOR,
        };
        let result = panel::render_info(&mut self.display, operator, &self.clock);
        self.note_display(result);
    }

    /// Redraw the panel as it stood before the screen was taken over
    fn restore_panel(&mut self) {
        let result = self.display.clear();
        self.note_display(result);
        self.render_info();
        if let Some(snapshot) = self.stats.snapshot() {
            let result = panel::render_stats(&mut self.display, &snapshot);
            self.note_display(result);
        }
    }

    fn apply(&mut self, event: Event) -> Event {
        self.state = self.state.transition(event);
        event
    }

    fn push(&mut self, events: &mut Events, event: Event) {
        self.state = self.state.transition(event);
        // Capacity covers every event one iteration can raise
        let _ = events.push(event);
    }

    fn note_console(&mut self, result: Result<(), ConsoleError>) {
        if result.is_err() {
            self.link.console_errors = self.link.console_errors.saturating_add(1);
            self.link_fault = true;
        }
    }

    fn note_display(&mut self, result: Result<(), DisplayError>) {
        if result.is_err() {
            self.link.display_errors = self.link.display_errors.saturating_add(1);
            self.link_fault = true;
        }
    }

    /// Current station state
    pub fn state(&self) -> State {
        self.state
    }

    /// The logged-in operator, if any
    pub fn session(&self) -> Option<&OperatorSession> {
        self.session.as_ref()
    }

    /// Operator name as displayed
    pub fn operator(&self) -> &str {
        self.session
            .as_ref()
            .map_or(PLACEHOLDER_OPERATOR, OperatorSession::operator)
    }

    pub fn stats(&self) -> &ProductionStats {
        &self.stats
    }

    pub fn clock(&self) -> &ElapsedClock {
        &self.clock
    }

    pub fn gate(&self) -> &SessionGate {
        &self.gate
    }

    pub fn interlock(&self) -> &Interlock {
        &self.interlock
    }

    pub fn link_health(&self) -> LinkHealth {
        self.link
    }

    pub fn config(&self) -> &StationConfig {
        &self.config
    }

    pub fn io(&self) -> &I {
        &self.io
    }

    pub fn io_mut(&mut self) -> &mut I {
        &mut self.io
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn delay(&self) -> &T {
        &self.delay
    }
}
