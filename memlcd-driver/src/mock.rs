//! Recording collaborators shared by the unit tests

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use memlcd_core::{DisplayConfig, Model};
use memlcd_hal::{Clock, OutputPin, PulseService, Transport};

use crate::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Begin,
    Write(u8),
    End,
    DelayUs(u32),
    Disp(bool),
    PulseStart(u8),
    PulseStop,
}

pub type Log = Rc<RefCell<Vec<Event>>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

pub struct MockTransport {
    log: Log,
    /// Fail the write after this many successful ones
    pub fail_after: Option<usize>,
    written: usize,
}

impl Transport for MockTransport {
    type Error = BusFault;

    fn begin_transaction(&mut self) -> Result<(), BusFault> {
        self.log.borrow_mut().push(Event::Begin);
        Ok(())
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), BusFault> {
        if self.fail_after == Some(self.written) {
            return Err(BusFault);
        }
        self.written += 1;
        self.log.borrow_mut().push(Event::Write(byte));
        Ok(())
    }

    fn end_transaction(&mut self) -> Result<(), BusFault> {
        self.log.borrow_mut().push(Event::End);
        Ok(())
    }
}

pub struct MockClock {
    log: Log,
    now: Cell<u32>,
    /// Added to the counter on every read
    pub step_ms: u32,
}

impl Clock for MockClock {
    fn delay_us(&mut self, us: u32) {
        self.log.borrow_mut().push(Event::DelayUs(us));
    }

    fn now_ms(&self) -> u32 {
        let now = self.now.get();
        self.now.set(now.wrapping_add(self.step_ms));
        now
    }
}

pub struct MockPin {
    log: Log,
    high: bool,
}

impl OutputPin for MockPin {
    fn set_high(&mut self) {
        self.high = true;
        self.log.borrow_mut().push(Event::Disp(true));
    }

    fn set_low(&mut self) {
        self.high = false;
        self.log.borrow_mut().push(Event::Disp(false));
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

pub struct MockPulse {
    log: Log,
    running: bool,
}

impl PulseService for MockPulse {
    fn start(&mut self, hz: u8) {
        self.running = true;
        self.log.borrow_mut().push(Event::PulseStart(hz));
    }

    fn stop(&mut self) {
        self.running = false;
        self.log.borrow_mut().push(Event::PulseStop);
    }

    fn is_running(&self) -> bool {
        self.running
    }
}

pub type TestDisplay = Display<MockTransport, MockPin, MockClock, MockPulse, Vec<u8>>;

pub fn transport(log: &Log) -> MockTransport {
    MockTransport {
        log: log.clone(),
        fail_after: None,
        written: 0,
    }
}

pub fn clock(log: &Log) -> MockClock {
    MockClock {
        log: log.clone(),
        now: Cell::new(1_000),
        step_ms: 0,
    }
}

pub fn pin(log: &Log) -> MockPin {
    MockPin {
        log: log.clone(),
        high: false,
    }
}

pub fn pulse(log: &Log) -> MockPulse {
    MockPulse {
        log: log.clone(),
        running: false,
    }
}

/// Display on a 64x64 panel with a white buffer and an empty log
pub fn display() -> (TestDisplay, Log) {
    display_with(DisplayConfig::for_model(Model::Ls006b7dh03))
}

pub fn display_with(config: DisplayConfig) -> (TestDisplay, Log) {
    build(config, None)
}

/// 64x64 display whose bus fails once `written` bytes went out
pub fn display_failing_after(written: usize) -> (TestDisplay, Log) {
    build(DisplayConfig::for_model(Model::Ls006b7dh03), Some(written))
}

fn build(config: DisplayConfig, fail_after: Option<usize>) -> (TestDisplay, Log) {
    let log: Log = Rc::default();
    let mut transport = transport(&log);
    transport.fail_after = fail_after;
    let storage = vec![0xFF; config.model.buffer_len()];
    let display = Display::new(
        transport,
        pin(&log),
        clock(&log),
        pulse(&log),
        storage,
        config,
    )
    .unwrap();
    (display, log)
}

pub fn take(log: &Log) -> Vec<Event> {
    log.borrow_mut().drain(..).collect()
}

/// Bytes written inside each transaction
pub fn transactions(events: &[Event]) -> Vec<Vec<u8>> {
    let mut out = Vec::new();
    let mut current = None;
    for event in events {
        match event {
            Event::Begin => current = Some(Vec::new()),
            Event::Write(byte) => current.as_mut().unwrap().push(*byte),
            Event::End => out.push(current.take().unwrap()),
            _ => {}
        }
    }
    out
}
